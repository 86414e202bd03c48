use crate::error::Result;
use crate::model::Catalog;

/// Raw persistence for the catalog document.
///
/// The backend only moves whole catalogs in and out of storage. `CatalogStore`
/// decides when to load and when to save.
pub trait StorageBackend {
    /// Read the persisted catalog. A missing document is an empty catalog;
    /// a document that exists but does not parse is an error.
    fn load_catalog(&self) -> Result<Catalog>;

    /// Replace the persisted catalog with `catalog`.
    fn save_catalog(&self, catalog: &Catalog) -> Result<()>;
}
