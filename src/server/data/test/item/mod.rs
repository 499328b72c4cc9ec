use crate::server::{
    data::item::ItemRepository,
    model::item::{CreateItemParams, ItemKind, UpdateItemParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod adjust_stock;
mod create;
mod update;
