//! `fibertech-store` — the catalog store and its persistence seam.
//!
//! The store owns the in-memory product list and mirrors every mutation
//! to an injected [`kv::KeyValueStore`] as one whole JSON document. There
//! is no per-record storage and no partial write.

pub mod catalog_store;
pub mod kv;

pub use catalog_store::{CATALOG_KEY, CatalogStore, StoreError, initial_catalog};
pub use kv::{FileKvStore, InMemoryKvStore, KeyValueStore, KvError};
