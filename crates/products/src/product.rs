use chrono::{DateTime, Utc};
use serde::Serialize;

use stockroom_core::{DomainError, DomainResult, Entity, Money, ProductId};

use crate::category::Category;

/// A single inventory entity: identity, price, quantity, classification.
///
/// Fields are private; state changes only go through the validating setters,
/// so a `Product` is never observable in an invalid state (price or quantity
/// below zero, blank name).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    id: ProductId,
    name: String,
    description: String,
    price: Money,
    quantity: i64,
    category: Category,
    created_at: DateTime<Utc>,
}

impl Product {
    /// Create a product with the given identity.
    ///
    /// Trims `name`/`description`, records the creation timestamp, and fails
    /// with [`DomainError::Validation`] on a blank name, a negative price, or
    /// a negative quantity. Ids are issued by the owning inventory's
    /// [`stockroom_core::ProductIdSequence`], never chosen here.
    pub fn new(
        id: ProductId,
        name: &str,
        description: &str,
        price: Money,
        quantity: i64,
        category: Category,
    ) -> DomainResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("product name cannot be empty"));
        }
        validate_price(price)?;
        validate_quantity(quantity)?;

        Ok(Self {
            id,
            name: name.to_string(),
            description: description.trim().to_string(),
            price,
            quantity,
            category,
            created_at: Utc::now(),
        })
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Replace the quantity wholesale. Rejects negative values and leaves the
    /// current quantity untouched on failure.
    pub fn set_quantity(&mut self, quantity: i64) -> DomainResult<()> {
        validate_quantity(quantity)?;
        self.quantity = quantity;
        Ok(())
    }

    /// Replace the price. Rejects negative values and leaves the current
    /// price untouched on failure.
    pub fn set_price(&mut self, price: Money) -> DomainResult<()> {
        validate_price(price)?;
        self.price = price;
        Ok(())
    }

    /// The value of the position: `price * quantity`. Pure.
    pub fn total_value(&self) -> Money {
        self.price.times(self.quantity)
    }
}

fn validate_price(price: Money) -> DomainResult<()> {
    if price.is_negative() {
        return Err(DomainError::validation(format!(
            "price cannot be negative (got {price})"
        )));
    }
    Ok(())
}

fn validate_quantity(quantity: i64) -> DomainResult<()> {
    if quantity < 0 {
        return Err(DomainError::validation(format!(
            "quantity cannot be negative (got {quantity})"
        )));
    }
    Ok(())
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl core::fmt::Display for Product {
    /// Canonical display form: `[1001] Pen - $1.50 (Stock: 100)`.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "[{}] {} - {} (Stock: {})",
            self.id, self.name, self.price, self.quantity
        )
    }
}
