//! Read-only aggregation over inventory state.
//!
//! Nothing here caches: every call recomputes from the live repository, and
//! [`InventoryReport`] is an atomic snapshot taken at generation time.

pub mod report;

pub use report::{InventoryReport, ReportGenerator};
