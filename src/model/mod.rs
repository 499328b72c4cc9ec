//! Request and response shapes of the REST API.
//!
//! These types are what crosses the wire. They carry no behaviour; the server's
//! domain models convert into and out of them at the controller boundary.

pub mod api;
pub mod item;
pub mod member;
pub mod order;
