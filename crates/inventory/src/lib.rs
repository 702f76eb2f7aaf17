//! Inventory module: product storage and the stock-mutation rules on top.
//!
//! The repository is a capability interface (`add`/`get`/`list`/`remove` plus
//! locked in-place mutation); the in-memory implementation is the only one
//! provided. The [`Inventory`] service owns one injected repository and a
//! per-instance id sequence, so independent inventories coexist in a process.

pub mod repository;
pub mod service;

pub use repository::{InMemoryProductRepository, ProductRepository};
pub use service::{DEFAULT_LOW_STOCK_THRESHOLD, Inventory};
