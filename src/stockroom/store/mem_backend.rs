use super::backend::StorageBackend;
use crate::error::{Result, StockroomError};
use crate::model::Catalog;
use std::cell::{Cell, RefCell};

/// In-memory storage backend for testing.
///
/// Uses `RefCell`/`Cell` for interior mutability since stockroom is single-threaded,
/// so the `StorageBackend` trait can take `&self` everywhere.
#[derive(Default)]
pub struct MemBackend {
    document: RefCell<Option<String>>,
    save_count: Cell<usize>,
    simulate_write_error: Cell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend whose persisted document is `raw`, verbatim.
    /// Useful for feeding corrupt content to `CatalogStore::open`.
    pub fn with_document(raw: impl Into<String>) -> Self {
        let backend = Self::default();
        *backend.document.borrow_mut() = Some(raw.into());
        backend
    }

    /// A backend that already holds `catalog`.
    pub fn with_catalog(catalog: &Catalog) -> Self {
        let backend = Self::default();
        *backend.document.borrow_mut() =
            Some(serde_json::to_string_pretty(catalog).unwrap_or_default());
        backend
    }

    /// Number of successful saves since creation.
    pub fn save_count(&self) -> usize {
        self.save_count.get()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }
}

impl StorageBackend for MemBackend {
    fn load_catalog(&self) -> Result<Catalog> {
        match self.document.borrow().as_deref() {
            None => Ok(Catalog::new()),
            Some(raw) => serde_json::from_str(raw).map_err(StockroomError::Serialization),
        }
    }

    fn save_catalog(&self, catalog: &Catalog) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(StockroomError::Store("Simulated write error".to_string()));
        }
        let raw = serde_json::to_string_pretty(catalog).map_err(StockroomError::Serialization)?;
        *self.document.borrow_mut() = Some(raw);
        self.save_count.set(self.save_count.get() + 1);
        Ok(())
    }
}
