use crate::error::{Result, StockroomError};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The data tracked for one catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub stock_count: i64,
}

impl Record {
    pub fn new(stock_count: i64) -> Self {
        Self { stock_count }
    }
}

/// Item name to record, in insertion order.
///
/// Serialized as a plain JSON object (`{"Widget": {"stock_count": 5}}`), which is
/// also the on-disk format of the catalog file. Key order in the file is preserved
/// on load, so iteration order survives a reload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    items: IndexMap<String, Record>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Record> {
        self.items.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.items.get_mut(name)
    }

    /// Inserts or replaces a record. A replaced record keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, record: Record) -> Option<Record> {
        self.items.insert(name.into(), record)
    }

    /// Removes a record, keeping the relative order of the rest.
    pub fn remove(&mut self, name: &str) -> Option<Record> {
        self.items.shift_remove(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Record)> {
        self.items.iter()
    }

    /// Snapshot of the catalog as owned items, in catalog order.
    pub fn to_items(&self) -> Vec<Item> {
        self.iter()
            .map(|(name, record)| Item::new(name.clone(), record.stock_count))
            .collect()
    }
}

/// A named catalog entry, as handed to callers for display or export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub stock_count: i64,
}

impl Item {
    pub fn new(name: impl Into<String>, stock_count: i64) -> Self {
        Self {
            name: name.into(),
            stock_count,
        }
    }
}

/// How an import batch is applied to the existing catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportMode {
    /// Existing items have the imported stock added; new items are inserted.
    #[default]
    Merge,
    /// The catalog is replaced by the imported items.
    Overwrite,
}

impl std::fmt::Display for ImportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImportMode::Merge => write!(f, "merge"),
            ImportMode::Overwrite => write!(f, "overwrite"),
        }
    }
}

impl std::str::FromStr for ImportMode {
    type Err = StockroomError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "merge" => Ok(ImportMode::Merge),
            "overwrite" => Ok(ImportMode::Overwrite),
            other => Err(StockroomError::Config(format!(
                "Unknown import mode '{}' (expected 'merge' or 'overwrite')",
                other
            ))),
        }
    }
}

/// Parses user-entered text as a stock count or delta.
///
/// Surrounding whitespace and a leading `+` are accepted; anything else that is not
/// a whole number is rejected rather than coerced.
pub fn parse_stock(raw: &str) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| StockroomError::InvalidStock(raw.to_string()))
}
