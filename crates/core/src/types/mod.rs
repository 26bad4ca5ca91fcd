//! Shared domain types.

pub mod catalog;
pub mod price;

pub use catalog::{Category, Product, ProductColor, SiteConfig};
