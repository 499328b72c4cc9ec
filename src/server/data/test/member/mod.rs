use crate::server::{
    data::member::MemberRepository,
    model::{address::Address, member::CreateMemberParams},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod count_by_name;
mod create;
mod find_all;
mod update_name;
