//! # Command Layer
//!
//! One module per operation. Each `run` takes the [`CatalogStore`](crate::store::CatalogStore)
//! (or the paths, for setup commands), applies the business rule, persists when the
//! catalog changed, and returns a [`CmdResult`].
//!
//! Expected failures (duplicate add, unknown item, no matches, malformed CSV rows)
//! are reported through [`ItemOutcome`] and messages, never as `Err`. `Err` is
//! reserved for storage and input-decoding failures.

use crate::config::StockroomConfig;
use crate::model::Item;
use std::path::{Path, PathBuf};

pub mod add;
pub mod config;
pub mod delete;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod search;
pub mod update;

pub use import::{ImportReport, SkipReason, SkippedRow};
pub use list::{ListOrder, SortKey};

#[derive(Debug, Clone)]
pub struct StockroomPaths {
    pub data_dir: PathBuf,
}

impl StockroomPaths {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn data_file(&self, config: &StockroomConfig) -> PathBuf {
        config.data_path(&self.data_dir)
    }
}

/// What a single-item command did to the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemOutcome {
    Created,
    AlreadyExists,
    Updated { stock_count: i64 },
    Deleted,
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub outcome: Option<ItemOutcome>,
    pub listed_items: Vec<Item>,
    pub import_report: Option<ImportReport>,
    pub exported_count: Option<usize>,
    pub config: Option<StockroomConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_outcome(mut self, outcome: ItemOutcome) -> Self {
        self.outcome = Some(outcome);
        self
    }

    pub fn with_listed_items(mut self, items: Vec<Item>) -> Self {
        self.listed_items = items;
        self
    }

    pub fn with_import_report(mut self, report: ImportReport) -> Self {
        self.import_report = Some(report);
        self
    }

    pub fn with_exported_count(mut self, count: usize) -> Self {
        self.exported_count = Some(count);
        self
    }

    pub fn with_config(mut self, config: StockroomConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }
}
