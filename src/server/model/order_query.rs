//! Query-side order models.
//!
//! Unlike [`super::order`], nothing here is built from entities. The rows are
//! projections selecting exactly the columns the API returns, and the domain values
//! are assembled from them directly.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::FromQueryResult;

use crate::{
    model::order::{OrderItemQueryDto, OrderQueryDto},
    server::{
        error::internal::InternalError,
        model::{
            address::Address,
            order::{OrderStatus, SimpleOrder},
        },
    },
};

/// Root columns of an order listing: the order with its member name and delivery address.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct OrderQueryRow {
    pub order_id: i32,
    pub name: String,
    pub order_date: DateTime<Utc>,
    pub order_status: String,
    pub city: Option<String>,
    pub street: Option<String>,
    pub zipcode: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct OrderItemQueryRow {
    pub order_id: i32,
    pub item_name: String,
    pub order_price: i32,
    pub count: i32,
}

/// Denormalized row of the single flat query: root columns repeated once per line.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct OrderFlatRow {
    pub order_id: i32,
    pub name: String,
    pub order_date: DateTime<Utc>,
    pub order_status: String,
    pub city: Option<String>,
    pub street: Option<String>,
    pub zipcode: Option<String>,
    pub item_name: String,
    pub order_price: i32,
    pub count: i32,
}

impl OrderFlatRow {
    fn split(self) -> (OrderQueryRow, OrderItemQueryRow) {
        (
            OrderQueryRow {
                order_id: self.order_id,
                name: self.name,
                order_date: self.order_date,
                order_status: self.order_status,
                city: self.city,
                street: self.street,
                zipcode: self.zipcode,
            },
            OrderItemQueryRow {
                order_id: self.order_id,
                item_name: self.item_name,
                order_price: self.order_price,
                count: self.count,
            },
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderItemQuery {
    pub order_id: i32,
    pub item_name: String,
    pub order_price: i32,
    pub count: i32,
}

impl OrderItemQuery {
    pub fn from_row(row: OrderItemQueryRow) -> Self {
        Self {
            order_id: row.order_id,
            item_name: row.item_name,
            order_price: row.order_price,
            count: row.count,
        }
    }

    pub fn into_dto(self) -> OrderItemQueryDto {
        OrderItemQueryDto {
            order_id: self.order_id,
            item_name: self.item_name,
            order_price: self.order_price,
            count: self.count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderQuery {
    pub order_id: i32,
    pub name: String,
    pub order_date: DateTime<Utc>,
    pub status: OrderStatus,
    pub address: Option<Address>,
    pub order_items: Vec<OrderItemQuery>,
}

impl OrderQuery {
    pub fn from_rows(
        row: OrderQueryRow,
        order_items: Vec<OrderItemQueryRow>,
    ) -> Result<Self, InternalError> {
        Ok(Self {
            order_id: row.order_id,
            name: row.name,
            order_date: row.order_date,
            status: OrderStatus::parse(&row.order_status)?,
            address: Address::from_columns(row.city, row.street, row.zipcode),
            order_items: order_items
                .into_iter()
                .map(OrderItemQuery::from_row)
                .collect(),
        })
    }

    pub fn into_dto(self) -> OrderQueryDto {
        OrderQueryDto {
            order_id: self.order_id,
            name: self.name,
            order_date: self.order_date,
            order_status: self.status.into_dto(),
            address: self.address.map(Address::into_dto),
            order_items: self
                .order_items
                .into_iter()
                .map(OrderItemQuery::into_dto)
                .collect(),
        }
    }
}

impl SimpleOrder {
    pub fn from_row(row: OrderQueryRow) -> Result<Self, InternalError> {
        Ok(Self {
            order_id: row.order_id,
            name: row.name,
            order_date: row.order_date,
            status: OrderStatus::parse(&row.order_status)?,
            address: Address::from_columns(row.city, row.street, row.zipcode),
        })
    }
}

/// Groups flat rows by order id.
///
/// Orders appear in the order their first row was encountered and each order's lines
/// keep their relative row order. The input does not need to be sorted.
pub fn group_flat_rows(rows: Vec<OrderFlatRow>) -> Vec<(OrderQueryRow, Vec<OrderItemQueryRow>)> {
    let mut groups: Vec<(OrderQueryRow, Vec<OrderItemQueryRow>)> = Vec::new();
    let mut index: HashMap<i32, usize> = HashMap::new();

    for row in rows {
        let (root, line) = row.split();
        match index.get(&root.order_id) {
            Some(&position) => groups[position].1.push(line),
            None => {
                index.insert(root.order_id, groups.len());
                groups.push((root, vec![line]));
            }
        }
    }

    groups
}

/// Distributes line rows onto their orders by `order_id`.
///
/// Orders without any line row receive an empty list.
pub fn attach_order_items(
    roots: Vec<OrderQueryRow>,
    lines: Vec<OrderItemQueryRow>,
) -> Vec<(OrderQueryRow, Vec<OrderItemQueryRow>)> {
    let mut by_order: HashMap<i32, Vec<OrderItemQueryRow>> = HashMap::new();
    for line in lines {
        by_order.entry(line.order_id).or_default().push(line);
    }

    roots
        .into_iter()
        .map(|root| {
            let lines = by_order.remove(&root.order_id).unwrap_or_default();
            (root, lines)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(order_id: i32, item_name: &str) -> OrderFlatRow {
        OrderFlatRow {
            order_id,
            name: format!("user{}", order_id),
            order_date: DateTime::<Utc>::from_timestamp(1_700_000_000 + order_id as i64, 0)
                .unwrap(),
            order_status: "ORDER".to_string(),
            city: Some("Seoul".to_string()),
            street: Some("1st".to_string()),
            zipcode: Some("11111".to_string()),
            item_name: item_name.to_string(),
            order_price: 10_000,
            count: 1,
        }
    }

    /// Every ordering of `rows`, generated with Heap's algorithm.
    fn permutations(rows: Vec<OrderFlatRow>) -> Vec<Vec<OrderFlatRow>> {
        fn heap(k: usize, rows: &mut Vec<OrderFlatRow>, out: &mut Vec<Vec<OrderFlatRow>>) {
            if k <= 1 {
                out.push(rows.clone());
                return;
            }
            heap(k - 1, rows, out);
            for i in 0..k - 1 {
                if k % 2 == 0 {
                    rows.swap(i, k - 1);
                } else {
                    rows.swap(0, k - 1);
                }
                heap(k - 1, rows, out);
            }
        }

        let mut rows = rows;
        let mut out = Vec::new();
        let len = rows.len();
        heap(len, &mut rows, &mut out);
        out
    }

    /// Order-insensitive view of a grouping result.
    fn normalized(
        groups: Vec<(OrderQueryRow, Vec<OrderItemQueryRow>)>,
    ) -> Vec<(OrderQueryRow, Vec<OrderItemQueryRow>)> {
        let mut groups: Vec<_> = groups
            .into_iter()
            .map(|(root, mut lines)| {
                lines.sort_by(|a, b| a.item_name.cmp(&b.item_name));
                (root, lines)
            })
            .collect();
        groups.sort_by_key(|(root, _)| root.order_id);
        groups
    }

    #[test]
    fn groups_lines_under_their_order() {
        let groups = group_flat_rows(vec![
            flat(1, "JPA1 BOOK"),
            flat(1, "JPA2 BOOK"),
            flat(2, "SPRING1 BOOK"),
            flat(2, "SPRING2 BOOK"),
        ]);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0.order_id, 1);
        assert_eq!(
            groups[0]
                .1
                .iter()
                .map(|l| l.item_name.as_str())
                .collect::<Vec<_>>(),
            vec!["JPA1 BOOK", "JPA2 BOOK"]
        );
        assert_eq!(groups[1].0.order_id, 2);
        assert_eq!(groups[1].1.len(), 2);
    }

    #[test]
    fn keeps_first_encounter_order() {
        let groups = group_flat_rows(vec![flat(7, "a"), flat(3, "b"), flat(7, "c")]);

        let ids: Vec<i32> = groups.iter().map(|(root, _)| root.order_id).collect();
        assert_eq!(ids, vec![7, 3]);
    }

    #[test]
    fn grouping_is_independent_of_row_order() {
        let rows = vec![
            flat(1, "JPA1 BOOK"),
            flat(1, "JPA2 BOOK"),
            flat(2, "SPRING1 BOOK"),
            flat(2, "SPRING2 BOOK"),
            flat(3, "ALBUM"),
        ];
        let expected = normalized(group_flat_rows(rows.clone()));

        let all = permutations(rows);
        assert_eq!(all.len(), 120);
        for permutation in all {
            assert_eq!(normalized(group_flat_rows(permutation)), expected);
        }
    }

    #[test]
    fn empty_input_yields_no_orders() {
        assert!(group_flat_rows(Vec::new()).is_empty());
    }

    #[test]
    fn attach_gives_lineless_orders_an_empty_list() {
        let (root_1, line_1) = flat(1, "a").split();
        let (root_2, _) = flat(2, "b").split();

        let attached = attach_order_items(vec![root_1, root_2], vec![line_1.clone()]);

        assert_eq!(attached[0].1, vec![line_1]);
        assert!(attached[1].1.is_empty());
    }
}
