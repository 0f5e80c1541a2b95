//! Ordered in-memory product registry.

use std::sync::Arc;
use thiserror::Error;

use crate::observability::metrics;
use crate::registry::types::{KeyPolicy, Product, ProductId};
use crate::registry::validation::{MinLengthValidator, ValidationError, Validator};

/// Errors returned by registry operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("product {0} not found")]
    NotFound(ProductId),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

pub type RegistryResult<T> = Result<T, RegistryError>;

/// Insertion-ordered collection of products.
///
/// Not synchronized. Callers sharing a registry between tasks must guard it
/// with a single lock (see `http::server::AppState`).
#[derive(Debug)]
pub struct Registry {
    entries: Vec<Product>,
    policy: KeyPolicy,
    /// Largest key ever issued, used by [`KeyPolicy::Monotonic`].
    high_water: ProductId,
    validator: Arc<dyn Validator>,
}

impl Registry {
    /// Create an empty registry with the default name validator.
    pub fn new(policy: KeyPolicy) -> Self {
        Self::with_validator(policy, Arc::new(MinLengthValidator::default()))
    }

    /// Create an empty registry that checks names with `validator`.
    pub fn with_validator(policy: KeyPolicy, validator: Arc<dyn Validator>) -> Self {
        Self {
            entries: Vec::new(),
            policy,
            high_water: 0,
            validator,
        }
    }

    /// Pre-populate the registry with `names`, keyed `1..=n` in order.
    ///
    /// Seed names are trusted and skip validation.
    pub fn seed<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            let id = self.next_id();
            self.push(Product::new(id, name));
        }
        self
    }

    pub fn policy(&self) -> KeyPolicy {
        self.policy
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All products in insertion order.
    pub fn list(&self) -> Vec<Product> {
        self.entries.clone()
    }

    pub fn get(&self, id: ProductId) -> RegistryResult<Product> {
        self.position(id)
            .map(|idx| self.entries[idx].clone())
            .ok_or(RegistryError::NotFound(id))
    }

    pub fn create(&mut self, name: &str) -> RegistryResult<Product> {
        self.validator.validate(name)?;

        let id = self.next_id();
        let product = Product::new(id, name);
        self.push(product.clone());

        tracing::info!(product_id = id, name = %name, "Product created");
        Ok(product)
    }

    /// Rename a product in place. Existence is checked before the name.
    pub fn update(&mut self, id: ProductId, name: &str) -> RegistryResult<Product> {
        let idx = self.position(id).ok_or(RegistryError::NotFound(id))?;
        self.validator.validate(name)?;

        let entry = &mut self.entries[idx];
        entry.name = name.to_string();

        tracing::info!(product_id = id, name = %name, "Product updated");
        Ok(entry.clone())
    }

    /// Remove a product, keeping the relative order of the rest.
    pub fn delete(&mut self, id: ProductId) -> RegistryResult<Product> {
        let idx = self.position(id).ok_or(RegistryError::NotFound(id))?;
        let removed = self.entries.remove(idx);
        metrics::record_registry_size(self.entries.len());

        tracing::info!(product_id = id, "Product deleted");
        Ok(removed)
    }

    /// Index of the last entry carrying `id`.
    ///
    /// Duplicate keys only arise under [`KeyPolicy::EntryCount`]; the most
    /// recent one wins.
    fn position(&self, id: ProductId) -> Option<usize> {
        let found = self.entries.iter().rposition(|p| p.id == id);
        if found.is_none() {
            tracing::debug!(product_id = id, "Product lookup missed");
        }
        found
    }

    fn next_id(&self) -> ProductId {
        match self.policy {
            KeyPolicy::EntryCount => self.entries.len() as ProductId + 1,
            KeyPolicy::Monotonic => self.high_water + 1,
        }
    }

    fn push(&mut self, product: Product) {
        self.high_water = self.high_water.max(product.id);
        self.entries.push(product);
        metrics::record_registry_size(self.entries.len());
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(KeyPolicy::default())
    }
}
