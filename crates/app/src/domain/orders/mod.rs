//! Orders

pub mod errors;
pub mod service;

pub use errors::OrdersServiceError;
pub use service::*;
