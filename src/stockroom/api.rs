//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for every stockroom operation, whatever the UI.
//!
//! The facade dispatches to `commands::*::run` and returns `Result<CmdResult>`. It
//! holds no business logic and does no terminal I/O.
//!
//! ## Generic Over StorageBackend
//!
//! `StockroomApi<B: StorageBackend>`:
//! - Production: `StockroomApi<FsBackend>`, built with [`StockroomApi::open`]
//! - Testing: `StockroomApi<MemBackend>`
//!
//! Configuration and init work on the data directory alone and never open the
//! catalog; call [`commands::config::run`] and [`commands::init::run`] directly.
//!
//! ## Input Contract
//!
//! Stock counts and deltas are `i64`. Callers holding user text convert it with
//! [`parse_stock`](crate::model::parse_stock) first, which fails with
//! `StockroomError::InvalidStock` instead of coercing. Item names must be non-empty;
//! that check belongs to the caller.

use crate::commands;
use crate::config::StockroomConfig;
use crate::error::Result;
use crate::model::{Catalog, ImportMode, Item};
use crate::store::fs_backend::FsBackend;
use crate::store::{CatalogStore, StorageBackend};
use crate::table::RawRow;
use std::path::Path;

pub use crate::commands::config::ConfigAction;
pub use commands::{
    CmdMessage, CmdResult, ImportReport, ItemOutcome, ListOrder, MessageLevel, SkipReason,
    SkippedRow, SortKey, StockroomPaths,
};

pub struct StockroomApi<B: StorageBackend> {
    store: CatalogStore<B>,
}

impl StockroomApi<FsBackend> {
    /// Opens the file-backed catalog configured for `paths`.
    ///
    /// Fails if the catalog file exists but is not a valid catalog document.
    pub fn open(paths: &StockroomPaths) -> Result<Self> {
        let config = StockroomConfig::load(paths.data_dir())?;
        Self::open_with_config(paths, &config)
    }

    /// Like [`open`](Self::open), with a config the caller already loaded.
    pub fn open_with_config(paths: &StockroomPaths, config: &StockroomConfig) -> Result<Self> {
        let backend =
            FsBackend::new(paths.data_file(config)).with_atomic_writes(config.atomic_writes);
        let store = CatalogStore::open(backend)?;
        Ok(Self::new(store))
    }
}

impl<B: StorageBackend> StockroomApi<B> {
    pub fn new(store: CatalogStore<B>) -> Self {
        Self { store }
    }

    pub fn add_item(&mut self, name: &str, stock_count: i64) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, name, stock_count)
    }

    pub fn update_stock(&mut self, name: &str, delta: i64) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, name, delta)
    }

    pub fn delete_item(&mut self, name: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, name)
    }

    pub fn search_items(
        &self,
        query: &str,
        order: Option<ListOrder>,
    ) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, query, order)
    }

    pub fn list_items(&self, order: Option<ListOrder>) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, order)
    }

    pub fn import_csv(&mut self, path: &Path, mode: ImportMode) -> Result<commands::CmdResult> {
        commands::import::run_file(&mut self.store, path, mode)
    }

    pub fn import_rows(
        &mut self,
        rows: &[RawRow],
        mode: ImportMode,
    ) -> Result<commands::CmdResult> {
        commands::import::run(&mut self.store, rows, mode)
    }

    pub fn export_csv(&self, path: &Path) -> Result<commands::CmdResult> {
        commands::export::run(&self.store, path)
    }

    pub fn export_rows(&self) -> Vec<Item> {
        commands::export::table_rows(&self.store)
    }

    pub fn catalog(&self) -> &Catalog {
        self.store.catalog()
    }

    pub fn store(&self) -> &CatalogStore<B> {
        &self.store
    }
}
