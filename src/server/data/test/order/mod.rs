use crate::server::{
    data::order::OrderRepository,
    model::order::{OrderSearch, OrderStatus},
};
use sea_orm::{DatabaseConnection, DbErr};
use test_utils::{builder::TestBuilder, factory};

mod find_all_by_search;
mod find_all_with_items;
mod find_all_with_member_delivery;
mod find_graph_by_id;
mod find_graphs_lazily;
mod find_graphs_paged;
mod update_status;

/// Two members with one order of two books each.
///
/// Returns the orders in insertion order.
async fn seed_two_orders(db: &DatabaseConnection) -> Result<Vec<entity::order::Model>, DbErr> {
    let user_a = factory::member::MemberFactory::new(db)
        .name("userA")
        .address("Seoul", "1", "1111")
        .build()
        .await?;
    let user_b = factory::member::MemberFactory::new(db)
        .name("userB")
        .address("Busan", "2", "2222")
        .build()
        .await?;

    let jpa1 = factory::item::ItemFactory::book(db)
        .name("JPA1 BOOK")
        .price(10_000)
        .build()
        .await?;
    let jpa2 = factory::item::ItemFactory::book(db)
        .name("JPA2 BOOK")
        .price(20_000)
        .build()
        .await?;
    let spring1 = factory::item::ItemFactory::book(db)
        .name("SPRING1 BOOK")
        .price(20_000)
        .build()
        .await?;
    let spring2 = factory::item::ItemFactory::book(db)
        .name("SPRING2 BOOK")
        .price(40_000)
        .build()
        .await?;

    let (order_a, _, _) =
        factory::helpers::create_order_for_member(db, &user_a, &[(&jpa1, 1), (&jpa2, 2)]).await?;
    let (order_b, _, _) =
        factory::helpers::create_order_for_member(db, &user_b, &[(&spring1, 3), (&spring2, 4)])
            .await?;

    Ok(vec![order_a, order_b])
}
