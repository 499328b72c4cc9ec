use crate::server::data::order_query::OrderQueryRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_flat_rows;
mod find_order_item_rows;
mod find_order_rows;
