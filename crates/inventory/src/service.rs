use stockroom_core::{DomainError, DomainResult, Money, ProductId, ProductIdSequence};
use stockroom_products::{Category, Product};

use crate::repository::{InMemoryProductRepository, ProductRepository};

/// Threshold used when a caller does not supply one.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 10;

/// Orchestration layer enforcing the stock-mutation business rules.
///
/// Holds one injected repository and its own id sequence; construct as many
/// independent inventories as needed (isolated tests, separate stockrooms).
pub struct Inventory {
    repository: Box<dyn ProductRepository>,
    ids: ProductIdSequence,
}

impl Inventory {
    pub fn new(repository: Box<dyn ProductRepository>) -> Self {
        Self {
            repository,
            ids: ProductIdSequence::new(),
        }
    }

    /// Convenience constructor backed by [`InMemoryProductRepository`].
    pub fn in_memory() -> Self {
        Self::new(Box::new(InMemoryProductRepository::new()))
    }

    /// Create a product and store it. Validation failures propagate from
    /// [`Product::new`] and leave the repository unchanged; the returned
    /// product is the caller's snapshot of what was stored.
    pub fn add_product(
        &self,
        name: &str,
        description: &str,
        price: Money,
        quantity: i64,
        category: Category,
    ) -> DomainResult<Product> {
        let product = Product::new(self.ids.next_id(), name, description, price, quantity, category)?;
        self.repository.add(product.clone())?;
        tracing::info!(id = %product.id(), name = product.name(), "product added");
        Ok(product)
    }

    /// Add `amount` units to the product's stock.
    ///
    /// Fails with [`DomainError::NotFound`] for an unknown id. A negative
    /// `amount` is not special-cased; if the sum would go below zero the
    /// quantity setter rejects it and the stock is unchanged. A sum that
    /// exceeds `i64` is rejected the same way.
    pub fn increase_stock(&self, id: ProductId, amount: i64) -> DomainResult<()> {
        self.repository.update(id, &mut |product| {
            let available = product.quantity();
            let updated = available.checked_add(amount).ok_or_else(|| {
                DomainError::validation(format!(
                    "stock adjustment out of range: {available} + {amount}"
                ))
            })?;
            product.set_quantity(updated)
        })?;
        tracing::debug!(%id, amount, "stock increased");
        Ok(())
    }

    /// Remove `amount` units from the product's stock (a sale).
    ///
    /// Fails with [`DomainError::NotFound`] for an unknown id and with
    /// [`DomainError::InsufficientStock`] when `amount` exceeds the quantity
    /// on hand; in that case the quantity is untouched.
    pub fn decrease_stock(&self, id: ProductId, amount: i64) -> DomainResult<()> {
        self.repository.update(id, &mut |product| {
            let available = product.quantity();
            if amount > available {
                return Err(DomainError::insufficient_stock(amount, available));
            }
            let updated = available.checked_sub(amount).ok_or_else(|| {
                DomainError::validation(format!(
                    "stock adjustment out of range: {available} - {amount}"
                ))
            })?;
            product.set_quantity(updated)
        })?;
        tracing::debug!(%id, amount, "stock decreased");
        Ok(())
    }

    /// Every product with `quantity <= threshold`, in no particular order.
    pub fn low_stock(&self, threshold: i64) -> Vec<Product> {
        self.repository
            .list_all()
            .into_iter()
            .filter(|p| p.quantity() <= threshold)
            .collect()
    }

    pub fn get(&self, id: ProductId) -> Option<Product> {
        self.repository.get(id)
    }

    pub fn list_all(&self) -> Vec<Product> {
        self.repository.list_all()
    }

    pub fn list_by_category(&self, category: Category) -> Vec<Product> {
        self.repository.list_by_category(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add_pen(inventory: &Inventory) -> Product {
        inventory
            .add_product("Pen", "Basic pen", Money::from_cents(150), 100, Category::Writing)
            .unwrap()
    }

    #[test]
    fn first_product_in_a_fresh_inventory_gets_id_1001() {
        let inventory = Inventory::in_memory();
        let pen = add_pen(&inventory);

        assert_eq!(pen.id(), ProductId::from(1001));
        assert_eq!(pen.total_value(), Money::from_cents(15_000));
    }

    #[test]
    fn ids_are_unique_and_increasing() {
        let inventory = Inventory::in_memory();
        let a = add_pen(&inventory);
        let b = inventory
            .add_product("Mouse", "", Money::from_cents(2550), 50, Category::Technology)
            .unwrap();
        let c = inventory
            .add_product("Doll", "", Money::from_cents(6000), 30, Category::Toys)
            .unwrap();

        assert!(a.id() < b.id());
        assert!(b.id() < c.id());
    }

    #[test]
    fn independent_inventories_issue_independent_ids() {
        let first = Inventory::in_memory();
        let second = Inventory::in_memory();
        add_pen(&first);
        add_pen(&first);

        assert_eq!(add_pen(&second).id(), ProductId::from(1001));
    }

    #[test]
    fn invalid_product_leaves_repository_unchanged() {
        let inventory = Inventory::in_memory();

        assert!(inventory
            .add_product("   ", "", Money::ZERO, 0, Category::Writing)
            .is_err());
        assert!(inventory
            .add_product("Pen", "", Money::from_cents(-150), 0, Category::Writing)
            .is_err());
        assert!(inventory
            .add_product("Pen", "", Money::ZERO, -1, Category::Writing)
            .is_err());

        assert!(inventory.list_all().is_empty());
    }

    #[test]
    fn decrease_stock_reduces_quantity() {
        let inventory = Inventory::in_memory();
        let pen = add_pen(&inventory);

        inventory.decrease_stock(pen.id(), 30).unwrap();
        assert_eq!(inventory.get(pen.id()).unwrap().quantity(), 70);
    }

    #[test]
    fn decrease_beyond_available_fails_and_keeps_quantity() {
        let inventory = Inventory::in_memory();
        let pen = add_pen(&inventory);
        inventory.decrease_stock(pen.id(), 30).unwrap();

        let err = inventory.decrease_stock(pen.id(), 1000).unwrap_err();
        assert_eq!(
            err,
            DomainError::InsufficientStock {
                requested: 1000,
                available: 70,
            }
        );
        assert_eq!(inventory.get(pen.id()).unwrap().quantity(), 70);
    }

    #[test]
    fn stock_operations_on_unknown_id_fail_with_not_found() {
        let inventory = Inventory::in_memory();
        let ghost = ProductId::from(4040);

        assert_eq!(
            inventory.increase_stock(ghost, 5).unwrap_err(),
            DomainError::NotFound(ghost)
        );
        assert_eq!(
            inventory.decrease_stock(ghost, 5).unwrap_err(),
            DomainError::NotFound(ghost)
        );
    }

    #[test]
    fn increase_overflowing_the_quantity_range_is_rejected() {
        let inventory = Inventory::in_memory();
        let pen = add_pen(&inventory);

        let err = inventory.increase_stock(pen.id(), i64::MAX).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(inventory.get(pen.id()).unwrap().quantity(), 100);
    }

    #[test]
    fn decrease_with_unrepresentable_amount_is_rejected() {
        let inventory = Inventory::in_memory();
        let pen = add_pen(&inventory);

        // Subtracting i64::MIN would overflow; it must fail cleanly instead.
        let err = inventory.decrease_stock(pen.id(), i64::MIN).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(inventory.get(pen.id()).unwrap().quantity(), 100);
    }

    #[test]
    fn increase_with_overly_negative_amount_is_rejected_by_the_setter() {
        let inventory = Inventory::in_memory();
        let pen = add_pen(&inventory);

        let err = inventory.increase_stock(pen.id(), -200).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(inventory.get(pen.id()).unwrap().quantity(), 100);
    }

    #[test]
    fn low_stock_returns_exactly_the_subset_at_or_below_threshold() {
        let inventory = Inventory::in_memory();
        inventory
            .add_product("Pen", "", Money::from_cents(150), 100, Category::Writing)
            .unwrap();
        let rattle = inventory
            .add_product("Rattle", "", Money::from_cents(2000), 10, Category::Toys)
            .unwrap();
        let bible = inventory
            .add_product("Bible", "", Money::from_cents(8999), 3, Category::Books)
            .unwrap();
        let empty = inventory
            .add_product("Radio", "", Money::from_cents(3500), 0, Category::Technology)
            .unwrap();

        let mut low: Vec<ProductId> = inventory
            .low_stock(DEFAULT_LOW_STOCK_THRESHOLD)
            .into_iter()
            .map(|p| p.id())
            .collect();
        low.sort();
        assert_eq!(low, vec![rattle.id(), bible.id(), empty.id()]);

        // Threshold 0 keeps only the empty shelf; a huge threshold keeps all.
        let zero = inventory.low_stock(0);
        assert_eq!(zero.len(), 1);
        assert_eq!(zero[0].id(), empty.id());
        assert_eq!(inventory.low_stock(i64::MAX).len(), 4);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: increase then decrease by the same amount returns
            /// the quantity to its original value.
            #[test]
            fn increase_then_decrease_round_trips(
                start in 0i64..10_000,
                amount in 0i64..10_000,
            ) {
                let inventory = Inventory::in_memory();
                let product = inventory
                    .add_product("Pen", "", Money::from_cents(150), start, Category::Writing)
                    .unwrap();

                inventory.increase_stock(product.id(), amount).unwrap();
                inventory.decrease_stock(product.id(), amount).unwrap();

                prop_assert_eq!(
                    inventory.get(product.id()).unwrap().quantity(),
                    start
                );
            }

            /// Property: a failed decrease never changes the quantity.
            #[test]
            fn failed_decrease_changes_nothing(
                start in 0i64..1_000,
                excess in 1i64..1_000,
            ) {
                let inventory = Inventory::in_memory();
                let product = inventory
                    .add_product("Pen", "", Money::from_cents(150), start, Category::Writing)
                    .unwrap();

                let result = inventory.decrease_stock(product.id(), start + excess);
                prop_assert!(result.is_err());
                prop_assert_eq!(
                    inventory.get(product.id()).unwrap().quantity(),
                    start
                );
            }
        }
    }
}
