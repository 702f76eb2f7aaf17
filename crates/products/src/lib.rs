//! Products domain module.
//!
//! This crate contains the product entity and its classification, implemented
//! purely as deterministic domain logic (no IO, no storage).

pub mod category;
pub mod product;

pub use category::Category;
pub use product::Product;
