use crate::commands::{update, CmdMessage, CmdResult};
use crate::error::{Result, StockroomError};
use crate::model::{parse_stock, Catalog, ImportMode, Record};
use crate::store::{CatalogStore, StorageBackend};
use crate::table::{self, RawRow};
use std::fmt;
use std::fs::File;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    MissingName,
    MissingStock,
    InvalidStock(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingName => write!(f, "missing name"),
            SkipReason::MissingStock => write!(f, "missing stock"),
            SkipReason::InvalidStock(raw) => write!(f, "stock '{}' is not a whole number", raw),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    pub line: u64,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportReport {
    /// Distinct names staged from the input, not the number of records that changed.
    pub imported: usize,
    pub mode: ImportMode,
    pub skipped: Vec<SkippedRow>,
}

/// Reads a CSV file and imports it. See [`run`].
pub fn run_file<B: StorageBackend>(
    store: &mut CatalogStore<B>,
    path: &Path,
    mode: ImportMode,
) -> Result<CmdResult> {
    let file = File::open(path).map_err(StockroomError::Io)?;
    let rows = table::read_rows(file)?;
    tracing::debug!(path = %path.display(), rows = rows.len(), "read import table");
    run(store, &rows, mode)
}

/// Applies a batch of table rows to the catalog.
///
/// Rows without a name, without a stock, or with a non-integer stock are skipped
/// and listed in the report. Among the accepted rows the last one per name wins.
/// The staged rows are then merged into the catalog (stock added for known names)
/// or replace it entirely, and the catalog is persisted.
pub fn run<B: StorageBackend>(
    store: &mut CatalogStore<B>,
    rows: &[RawRow],
    mode: ImportMode,
) -> Result<CmdResult> {
    let (staged, skipped) = stage_rows(rows);
    let imported = staged.len();

    let next = match mode {
        ImportMode::Merge => merge_into(store.catalog().clone(), &staged)?,
        ImportMode::Overwrite => staged,
    };

    store.commit(next)?;
    tracing::info!(imported, skipped = skipped.len(), %mode, "import applied");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(match mode {
        ImportMode::Merge => format!("Imported and merged {} items from CSV.", imported),
        ImportMode::Overwrite => format!("Imported {} items (inventory overwritten).", imported),
    }));
    if !skipped.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "Skipped {} malformed rows.",
            skipped.len()
        )));
        for row in &skipped {
            result.add_message(CmdMessage::info(format!("  line {}: {}", row.line, row.reason)));
        }
    }

    Ok(result.with_import_report(ImportReport {
        imported,
        mode,
        skipped,
    }))
}

fn merge_into(mut catalog: Catalog, staged: &Catalog) -> Result<Catalog> {
    for (name, record) in staged.iter() {
        match catalog.get_mut(name) {
            Some(existing) => {
                existing.stock_count =
                    update::add_stock(name, existing.stock_count, record.stock_count)?;
            }
            None => {
                catalog.insert(name.clone(), *record);
            }
        }
    }
    Ok(catalog)
}

fn stage_rows(rows: &[RawRow]) -> (Catalog, Vec<SkippedRow>) {
    let mut staged = Catalog::new();
    let mut skipped = Vec::new();

    for row in rows {
        match validate_row(row) {
            Ok((name, stock_count)) => {
                staged.insert(name, Record::new(stock_count));
            }
            Err(reason) => {
                tracing::debug!(line = row.line, %reason, "skipping row");
                skipped.push(SkippedRow {
                    line: row.line,
                    reason,
                });
            }
        }
    }

    (staged, skipped)
}

fn validate_row(row: &RawRow) -> std::result::Result<(&str, i64), SkipReason> {
    let name = match row.name.as_deref() {
        Some(name) if !name.is_empty() => name,
        _ => return Err(SkipReason::MissingName),
    };
    let raw_stock = match row.stock.as_deref() {
        Some(stock) if !stock.is_empty() => stock,
        _ => return Err(SkipReason::MissingStock),
    };
    let stock_count =
        parse_stock(raw_stock).map_err(|_| SkipReason::InvalidStock(raw_stock.to_string()))?;
    Ok((name, stock_count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::StoreFixture;

    fn row(line: u64, name: &str, stock: &str) -> RawRow {
        RawRow::new(line, Some(name), Some(stock))
    }

    fn stock_of<B: StorageBackend>(store: &CatalogStore<B>, name: &str) -> Option<i64> {
        store.catalog().get(name).map(|r| r.stock_count)
    }

    #[test]
    fn merge_adds_stock_to_existing_items() {
        let mut store = StoreFixture::new().with_item("Widget", 5).build();
        let result = run(&mut store, &[row(2, "Widget", "3")], ImportMode::Merge).unwrap();

        assert_eq!(stock_of(&store, "Widget"), Some(8));
        let report = result.import_report.unwrap();
        assert_eq!(report.imported, 1);
        assert_eq!(report.mode, ImportMode::Merge);
        assert_eq!(store.backend().save_count(), 1);
    }

    #[test]
    fn merge_inserts_new_items_after_existing_ones() {
        let mut store = StoreFixture::new().with_item("Widget", 5).build();
        run(&mut store, &[row(2, "Gadget", "4")], ImportMode::Merge).unwrap();

        let names: Vec<_> = store.catalog().iter().map(|(n, _)| n.clone()).collect();
        assert_eq!(names, vec!["Widget", "Gadget"]);
        assert_eq!(stock_of(&store, "Gadget"), Some(4));
    }

    #[test]
    fn overwrite_replaces_the_whole_catalog() {
        let mut store = StoreFixture::new()
            .with_item("A", 1)
            .with_item("B", 2)
            .build();
        let result = run(&mut store, &[row(2, "C", "9")], ImportMode::Overwrite).unwrap();

        assert_eq!(store.catalog().len(), 1);
        assert_eq!(stock_of(&store, "C"), Some(9));
        assert_eq!(
            result.messages[0].content,
            "Imported 1 items (inventory overwritten)."
        );
    }

    #[test]
    fn malformed_rows_are_skipped_and_reported() {
        let mut store = StoreFixture::new().build();
        let rows = vec![
            row(2, "Gadget", "abc"),
            row(3, "Widget", "7"),
            row(4, "", "3"),
            RawRow::new(5, Some("Bolt"), None),
            row(6, "Nut", "2.5"),
        ];

        let result = run(&mut store, &rows, ImportMode::Merge).unwrap();
        let report = result.import_report.unwrap();

        assert_eq!(report.imported, 1);
        assert_eq!(store.catalog().len(), 1);
        assert!(!store.catalog().contains("Gadget"));
        assert_eq!(
            report.skipped,
            vec![
                SkippedRow {
                    line: 2,
                    reason: SkipReason::InvalidStock("abc".into())
                },
                SkippedRow {
                    line: 4,
                    reason: SkipReason::MissingName
                },
                SkippedRow {
                    line: 5,
                    reason: SkipReason::MissingStock
                },
                SkippedRow {
                    line: 6,
                    reason: SkipReason::InvalidStock("2.5".into())
                },
            ]
        );
        assert!(result
            .messages
            .iter()
            .any(|m| m.content == "Skipped 4 malformed rows."));
    }

    #[test]
    fn last_duplicate_in_batch_wins() {
        let mut store = StoreFixture::new().with_item("Widget", 5).build();
        let rows = vec![row(2, "Widget", "100"), row(3, "Widget", "3")];

        let result = run(&mut store, &rows, ImportMode::Merge).unwrap();

        assert_eq!(result.import_report.unwrap().imported, 1);
        assert_eq!(stock_of(&store, "Widget"), Some(8));
    }

    #[test]
    fn padded_stock_values_are_accepted() {
        let mut store = StoreFixture::new().build();
        run(&mut store, &[row(2, "Widget", " 12 ")], ImportMode::Overwrite).unwrap();
        assert_eq!(stock_of(&store, "Widget"), Some(12));
    }

    #[test]
    fn merge_overflow_fails_the_whole_batch() {
        let mut store = StoreFixture::new()
            .with_item("Widget", i64::MAX)
            .with_item("Gadget", 1)
            .build();
        let before = store.catalog().clone();
        let rows = vec![row(2, "Gadget", "4"), row(3, "Widget", "1")];

        let result = run(&mut store, &rows, ImportMode::Merge);

        assert!(matches!(result, Err(StockroomError::StockOverflow { .. })));
        assert_eq!(store.catalog(), &before);
        assert_eq!(store.backend().save_count(), 0);
    }

    #[test]
    fn failed_write_keeps_the_catalog_on_overwrite() {
        let mut store = StoreFixture::new().with_item("Widget", 5).build();
        let before = store.catalog().clone();
        store.backend().set_simulate_write_error(true);

        let result = run(&mut store, &[row(2, "Gadget", "9")], ImportMode::Overwrite);

        assert!(matches!(result, Err(StockroomError::Store(_))));
        assert_eq!(store.catalog(), &before);
        assert_eq!(&store.backend().load_catalog().unwrap(), store.catalog());
    }

    #[test]
    fn undecodable_file_fails_before_touching_the_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.csv");
        std::fs::write(&path, b"Name,Stock\n\xff\xfe,5\n").unwrap();
        let mut store = StoreFixture::new().with_item("Widget", 5).build();
        let before = store.catalog().clone();

        let result = run_file(&mut store, &path, ImportMode::Overwrite);

        assert!(matches!(result, Err(StockroomError::Csv(_))));
        assert_eq!(store.catalog(), &before);
        assert_eq!(store.backend().save_count(), 0);
    }

    #[test]
    fn overwrite_with_nothing_valid_empties_the_catalog() {
        let mut store = StoreFixture::new().with_item("Widget", 5).build();
        let result = run(&mut store, &[row(2, "Gadget", "x")], ImportMode::Overwrite).unwrap();

        assert!(store.catalog().is_empty());
        assert_eq!(result.import_report.unwrap().imported, 0);
        assert_eq!(store.backend().save_count(), 1);
    }
}
