//! Order listings built straight from projection rows.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::order_query::OrderQueryRepository,
    error::AppError,
    model::{
        order::SimpleOrder,
        order_query::{attach_order_items, group_flat_rows, OrderQuery},
    },
};

pub struct OrderQueryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderQueryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Root rows in one statement, then the lines of each order separately (1 + N).
    pub async fn find_order_queries(&self) -> Result<Vec<OrderQuery>, AppError> {
        let repo = OrderQueryRepository::new(self.db);

        let roots = repo.find_order_rows().await?;

        let mut orders = Vec::with_capacity(roots.len());
        for root in roots {
            let lines = repo.find_order_item_rows(root.order_id).await?;
            orders.push(OrderQuery::from_rows(root, lines)?);
        }

        Ok(orders)
    }

    /// Root rows, then every line in one `IN` statement mapped by order id (2).
    pub async fn find_order_queries_optimized(&self) -> Result<Vec<OrderQuery>, AppError> {
        let repo = OrderQueryRepository::new(self.db);

        let roots = repo.find_order_rows().await?;
        if roots.is_empty() {
            return Ok(Vec::new());
        }

        let order_ids: Vec<i32> = roots.iter().map(|root| root.order_id).collect();
        let lines = repo.find_order_item_rows_in(&order_ids).await?;

        attach_order_items(roots, lines)
            .into_iter()
            .map(|(root, lines)| OrderQuery::from_rows(root, lines).map_err(Into::into))
            .collect()
    }

    /// One flat statement, grouped in memory by order id (1).
    pub async fn find_order_queries_flat(&self) -> Result<Vec<OrderQuery>, AppError> {
        let repo = OrderQueryRepository::new(self.db);

        let rows = repo.find_flat_rows().await?;
        let row_count = rows.len();
        let groups = group_flat_rows(rows);

        tracing::debug!(
            "Flat query returned {} rows for {} orders",
            row_count,
            groups.len()
        );

        groups
            .into_iter()
            .map(|(root, lines)| OrderQuery::from_rows(root, lines).map_err(Into::into))
            .collect()
    }

    /// Order summaries selected column by column in one statement.
    pub async fn find_simple_order_queries(&self) -> Result<Vec<SimpleOrder>, AppError> {
        let repo = OrderQueryRepository::new(self.db);

        repo.find_order_rows()
            .await?
            .into_iter()
            .map(|row| SimpleOrder::from_row(row).map_err(Into::into))
            .collect()
    }
}
