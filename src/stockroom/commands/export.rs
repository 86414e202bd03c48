use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StockroomError};
use crate::model::Item;
use crate::store::{CatalogStore, StorageBackend};
use crate::table;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes the catalog as CSV to `path`, replacing any existing file.
pub fn run<B: StorageBackend>(store: &CatalogStore<B>, path: &Path) -> Result<CmdResult> {
    let file = File::create(path).map_err(StockroomError::Io)?;
    let count = write_table(store, file)?;
    tracing::info!(path = %path.display(), count, "catalog exported");

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(CmdResult::default()
        .with_exported_count(count)
        .with_message(CmdMessage::success(format!(
            "Exported {} items to '{}'.",
            count, file_name
        ))))
}

/// Writes the catalog table to any sink, returning the number of items written.
pub fn write_table<B: StorageBackend, W: Write>(store: &CatalogStore<B>, writer: W) -> Result<usize> {
    let items = table_rows(store);
    table::write_rows(writer, &items)?;
    Ok(items.len())
}

/// The export rows, in catalog order.
pub fn table_rows<B: StorageBackend>(store: &CatalogStore<B>) -> Vec<Item> {
    store.catalog().to_items()
}
