//! Strongly-typed product identifiers and the sequence that issues them.

use core::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a product.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for ProductId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<ProductId> for u64 {
    fn from(value: ProductId) -> Self {
        value.0
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        raw.parse::<u64>()
            .map(Self)
            .map_err(|_| DomainError::validation(format!("'{raw}' is not a valid product id")))
    }
}

/// Issues monotonically increasing [`ProductId`]s, starting at 1001.
///
/// One sequence is owned per inventory instance — never process-global — so
/// independent inventories (and isolated tests) never leak ids into each other.
#[derive(Debug)]
pub struct ProductIdSequence {
    next: AtomicU64,
}

impl ProductIdSequence {
    /// First id the sequence hands out.
    pub const FIRST: u64 = 1001;

    pub fn new() -> Self {
        Self {
            next: AtomicU64::new(Self::FIRST),
        }
    }

    /// Returns the next id and advances the sequence.
    pub fn next_id(&self) -> ProductId {
        ProductId(self.next.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ProductIdSequence {
    fn default() -> Self {
        Self::new()
    }
}
