mod item;
mod member;
mod order;
mod order_query;
