use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use stockroom_core::{DomainError, DomainResult, ProductId};
use stockroom_products::{Category, Product};

/// Storage abstraction mapping product id to [`Product`].
///
/// The repository exclusively owns stored products; readers get owned
/// snapshots, and mutation happens in place through [`ProductRepository::update`]
/// so each logical operation is one atomic unit. Iteration order of the
/// listing operations is unspecified.
pub trait ProductRepository: Send + Sync {
    /// Store a product. Fails with [`DomainError::DuplicateId`] if the id is
    /// already present.
    fn add(&self, product: Product) -> DomainResult<()>;

    /// Snapshot of the product with this id, or `None`. Never an error.
    fn get(&self, id: ProductId) -> Option<Product>;

    /// Snapshots of every stored product, in no particular order.
    fn list_all(&self) -> Vec<Product>;

    /// Remove a product. `true` if it existed, `false` otherwise; never fails.
    fn remove(&self, id: ProductId) -> bool;

    /// Products whose category matches exactly.
    fn list_by_category(&self, category: Category) -> Vec<Product>;

    /// Run `apply` against the stored product under the write lock.
    ///
    /// Fails with [`DomainError::NotFound`] if the id is absent; otherwise
    /// propagates whatever `apply` returns. Because the closure runs inside
    /// the repository, a read-then-write such as a stock adjustment cannot
    /// interleave with another writer.
    fn update(
        &self,
        id: ProductId,
        apply: &mut dyn FnMut(&mut Product) -> DomainResult<()>,
    ) -> DomainResult<()>;
}

/// In-memory repository backed by a hash map.
///
/// Intended for a single process; a persistent implementation would live
/// behind the same trait. All operations are O(1) except the listings.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    products: RwLock<HashMap<ProductId, Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    // A poisoned lock only means another thread panicked mid-operation; the
    // map itself is still consistent (every mutation is a whole-value write),
    // so recover the guard instead of propagating the panic.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<ProductId, Product>> {
        self.products.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<ProductId, Product>> {
        self.products
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn add(&self, product: Product) -> DomainResult<()> {
        let mut products = self.write();
        if products.contains_key(&product.id()) {
            return Err(DomainError::duplicate_id(product.id()));
        }
        products.insert(product.id(), product);
        Ok(())
    }

    fn get(&self, id: ProductId) -> Option<Product> {
        self.read().get(&id).cloned()
    }

    fn list_all(&self) -> Vec<Product> {
        self.read().values().cloned().collect()
    }

    fn remove(&self, id: ProductId) -> bool {
        self.write().remove(&id).is_some()
    }

    fn list_by_category(&self, category: Category) -> Vec<Product> {
        self.read()
            .values()
            .filter(|p| p.category() == category)
            .cloned()
            .collect()
    }

    fn update(
        &self,
        id: ProductId,
        apply: &mut dyn FnMut(&mut Product) -> DomainResult<()>,
    ) -> DomainResult<()> {
        let mut products = self.write();
        let product = products.get_mut(&id).ok_or(DomainError::NotFound(id))?;
        apply(product)
    }
}
