//! `ShopEase`
//!
//! Storefront domain: the product catalog model, the client-held shopping cart with its
//! stock ceilings, and the order payloads the cart is reconciled into at checkout.

pub mod api;
pub mod cart;
pub mod checkout;
pub mod customer;
pub mod money;
pub mod orders;
pub mod products;
pub mod validation;
