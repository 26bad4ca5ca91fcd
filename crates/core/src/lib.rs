//! WakeHealth Core - Shared domain library.
//!
//! This crate provides the types and pure logic shared by the WakeHealth
//! storefront:
//! - `types` - Catalog reference data (products, categories, site config)
//!   and price formatting
//! - `cart` - The cart aggregate: line items, customer draft, and the
//!   operations over them
//! - `whatsapp` - Order message formatter and `wa.me` deep-link builder
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP,
//! no persistence. Hydration and write-through of the cart live in the
//! storefront crate; everything here is deterministic and synchronous.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod types;
pub mod whatsapp;

pub use types::*;
