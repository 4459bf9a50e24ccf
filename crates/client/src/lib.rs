//! ShopEase storefront client: HTTP access to the catalog and ledger, the persisted cart
//! session and the checkout flow.

pub mod api;
pub mod checkout;
pub mod config;
pub mod session;
