//! # Storage Layer
//!
//! [`CatalogStore`] holds the authoritative in-memory [`Catalog`] and keeps the
//! persisted copy in sync through a [`StorageBackend`].
//!
//! ## Backends
//!
//! - [`fs_backend::FsBackend`]: production storage, a single JSON document
//!   (`inventory_data.json` by default). Writes go to a temp file in the same
//!   directory and are renamed over the target unless atomic writes are disabled.
//! - [`mem_backend::MemBackend`]: in-memory storage for tests. Counts saves and can
//!   simulate write failures.
//!
//! ## Persistence Model
//!
//! The catalog is loaded once in [`CatalogStore::open`]. Every mutating command
//! builds the next catalog on a copy and hands it to [`CatalogStore::commit`],
//! which rewrites the whole document and only then swaps the copy in. A failed
//! write leaves the in-memory catalog as it was. There is no incremental
//! persistence and no file locking (last writer wins).
//!
//! ## Storage Format
//!
//! ```text
//! {
//!   "Widget": { "stock_count": 5 },
//!   "Gadget": { "stock_count": -2 }
//! }
//! ```

use crate::error::Result;
use crate::model::Catalog;

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;

pub use backend::StorageBackend;

pub struct CatalogStore<B: StorageBackend> {
    backend: B,
    catalog: Catalog,
}

impl<B: StorageBackend> CatalogStore<B> {
    /// Loads the persisted catalog. Fails if the stored document is malformed.
    pub fn open(backend: B) -> Result<Self> {
        let catalog = backend.load_catalog()?;
        Ok(Self { backend, catalog })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Persists `next` in full, overwriting previous content, then makes it the
    /// current catalog. On error the current catalog is unchanged.
    pub fn commit(&mut self, next: Catalog) -> Result<()> {
        self.backend.save_catalog(&next)?;
        self.catalog = next;
        Ok(())
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::mem_backend::MemBackend;
    use super::*;
    use crate::model::Record;

    pub struct StoreFixture {
        catalog: Catalog,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                catalog: Catalog::new(),
            }
        }

        pub fn with_item(mut self, name: &str, stock_count: i64) -> Self {
            self.catalog.insert(name, Record::new(stock_count));
            self
        }

        pub fn with_items(mut self, count: usize) -> Self {
            for i in 0..count {
                self.catalog
                    .insert(format!("Item {}", i + 1), Record::new(i as i64 + 1));
            }
            self
        }

        /// A store over a MemBackend that already persisted the fixture catalog.
        /// The backend's save count starts at zero.
        pub fn build(self) -> CatalogStore<MemBackend> {
            let backend = MemBackend::with_catalog(&self.catalog);
            CatalogStore::open(backend).unwrap()
        }
    }
}
