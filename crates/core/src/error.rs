//! Domain error model.

use thiserror::Error;

use crate::id::ProductId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// missing products, stock rules). Presentation concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (empty name, negative price/quantity,
    /// invalid category selection).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An operation referenced a product id that is not in the repository.
    #[error("product {0} not found")]
    NotFound(ProductId),

    /// An insert collided with an existing product id. Defensive: unreachable
    /// while ids come from a monotonic sequence.
    #[error("product {0} already exists")]
    DuplicateId(ProductId),

    /// A stock decrease exceeded the quantity on hand.
    #[error("insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: i64, available: i64 },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(id: ProductId) -> Self {
        Self::NotFound(id)
    }

    pub fn duplicate_id(id: ProductId) -> Self {
        Self::DuplicateId(id)
    }

    pub fn insufficient_stock(requested: i64, available: i64) -> Self {
        Self::InsufficientStock {
            requested,
            available,
        }
    }
}
