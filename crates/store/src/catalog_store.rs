//! The catalog store: an in-memory product list mirrored to persistence.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use thiserror::Error;
use tracing::{debug, info};

use fibertech_catalog::csv::{self, CsvError};
use fibertech_catalog::{Product, seed_products};
use fibertech_core::{IdGenerator, ProductId};

use crate::kv::{KeyValueStore, KvError};

/// Fixed key the whole catalog document lives under.
pub const CATALOG_KEY: &str = "adminProducts";

/// Catalog store failure.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The persisted catalog document exists but cannot be parsed.
    #[error("catalog document is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),

    /// The persistence backend rejected a read or write.
    #[error(transparent)]
    Persistence(#[from] KvError),

    /// CSV import failed before any row could be read.
    #[error(transparent)]
    Csv(#[from] CsvError),
}

/// Decide the initial catalog state.
///
/// A persisted document replaces the seed entirely; the seed only matters
/// on the very first run. Exposed as a pure function so hydration is
/// testable without a backend.
pub fn initial_catalog(
    seed: Vec<Product>,
    persisted: Option<&[u8]>,
) -> Result<Vec<Product>, StoreError> {
    match persisted {
        Some(bytes) => Ok(serde_json::from_slice(bytes)?),
        None => Ok(seed),
    }
}

/// Owns the in-memory product list and mirrors every mutation to the
/// backend as one whole JSON document under [`CATALOG_KEY`].
///
/// The model assumes one logical writer at a time; the interior lock only
/// exists so mutation works through `&self`.
#[derive(Debug)]
pub struct CatalogStore<S: KeyValueStore> {
    kv: S,
    products: RwLock<Vec<Product>>,
    ids: IdGenerator,
}

impl<S: KeyValueStore> CatalogStore<S> {
    /// Open the store: hydrate from the persisted document when present,
    /// otherwise seed with [`seed_products`] and write the first document.
    pub fn open(kv: S) -> Result<Self, StoreError> {
        Self::open_with_seed(kv, seed_products())
    }

    /// Like [`CatalogStore::open`], with an explicit seed list.
    pub fn open_with_seed(kv: S, seed: Vec<Product>) -> Result<Self, StoreError> {
        let persisted = kv.read(CATALOG_KEY)?;
        let first_run = persisted.is_none();
        let products = initial_catalog(seed, persisted.as_deref())?;
        info!(
            count = products.len(),
            source = if first_run { "seed" } else { "persisted" },
            "catalog hydrated"
        );

        let store = Self {
            kv,
            products: RwLock::new(products),
            ids: IdGenerator::new(),
        };
        if first_run {
            let products = store.read_lock();
            store.persist(&products)?;
        }
        Ok(store)
    }

    /// Snapshot of the full catalog. Mutating the returned list never
    /// affects the store.
    pub fn products(&self) -> Vec<Product> {
        self.read_lock().clone()
    }

    /// Products visible on the public listing.
    pub fn published(&self) -> Vec<Product> {
        self.read_lock()
            .iter()
            .filter(|p| p.published)
            .cloned()
            .collect()
    }

    pub fn get(&self, id: &ProductId) -> Option<Product> {
        self.read_lock().iter().find(|p| &p.id == id).cloned()
    }

    /// Append a product, generating an id when none was assigned.
    pub fn add(&self, mut product: Product) -> Result<Product, StoreError> {
        if product.id.is_unassigned() {
            product.id = self.ids.next();
        }
        let mut products = self.write_lock();
        products.push(product.clone());
        self.persist(&products)?;
        info!(id = %product.id, title = %product.title, "product added");
        Ok(product)
    }

    /// Replace the record whose id matches. A missing id is a silent
    /// no-op on the list; the document is re-persisted either way.
    pub fn update(&self, product: Product) -> Result<Product, StoreError> {
        let mut products = self.write_lock();
        if let Some(slot) = products.iter_mut().find(|p| p.id == product.id) {
            *slot = product.clone();
        }
        self.persist(&products)?;
        debug!(id = %product.id, "product updated");
        Ok(product)
    }

    /// Flip the published flag of the matching record and return the full
    /// snapshot.
    pub fn toggle_status(&self, id: &ProductId) -> Result<Vec<Product>, StoreError> {
        let mut products = self.write_lock();
        if let Some(product) = products.iter_mut().find(|p| &p.id == id) {
            product.published = !product.published;
            debug!(%id, published = product.published, "product status toggled");
        }
        self.persist(&products)?;
        Ok(products.clone())
    }

    /// Remove the matching record and return the full snapshot.
    pub fn remove(&self, id: &ProductId) -> Result<Vec<Product>, StoreError> {
        let mut products = self.write_lock();
        products.retain(|p| &p.id != id);
        self.persist(&products)?;
        info!(%id, "product removed");
        Ok(products.clone())
    }

    /// CSV text of the whole catalog.
    pub fn export_csv(&self) -> String {
        csv::encode(&self.read_lock())
    }

    /// CSV text of the selected products only, in catalog order.
    pub fn export_selected(&self, ids: &[ProductId]) -> String {
        let products = self.read_lock();
        let selected: Vec<Product> = products
            .iter()
            .filter(|p| ids.contains(&p.id))
            .cloned()
            .collect();
        csv::encode(&selected)
    }

    /// Parse CSV text and merge it into the catalog: a row whose id is
    /// already present updates that record in place, the rest append.
    /// Returns the full snapshot after the merge.
    pub fn import_csv(&self, text: &str) -> Result<Vec<Product>, StoreError> {
        let incoming = csv::decode(text)?;
        let mut products = self.write_lock();
        let mut updated = 0usize;
        let mut appended = 0usize;
        for product in incoming {
            match products.iter_mut().find(|p| p.id == product.id) {
                Some(slot) => {
                    *slot = product;
                    updated += 1;
                }
                None => {
                    products.push(product);
                    appended += 1;
                }
            }
        }
        self.persist(&products)?;
        info!(updated, appended, "csv import merged");
        Ok(products.clone())
    }

    fn persist(&self, products: &[Product]) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(products)?;
        self.kv.write(CATALOG_KEY, &bytes)?;
        Ok(())
    }

    fn read_lock(&self) -> RwLockReadGuard<'_, Vec<Product>> {
        match self.products.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write_lock(&self) -> RwLockWriteGuard<'_, Vec<Product>> {
        match self.products.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
