//! Storefront Domain Services

pub mod catalog;
pub mod orders;
