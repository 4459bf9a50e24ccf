//! Server-side storefront services: the catalog, the order ledger and the store they share.

pub mod context;
pub mod domain;
pub mod seed;
pub mod store;

#[cfg(test)]
mod test;
