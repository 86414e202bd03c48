use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::sync::OnceLock;
use stockroom::api::{ListOrder, SortKey};
use tracing_subscriber::EnvFilter;

static VERSION: OnceLock<String> = OnceLock::new();

fn version_string() -> &'static str {
    VERSION.get_or_init(|| {
        format_version(
            env!("CARGO_PKG_VERSION"),
            env!("GIT_HASH"),
            env!("GIT_COMMIT_DATE"),
            env!("IS_RELEASE") == "true",
        )
    })
}

/// `0.3.0` for tagged builds or when git was unavailable, `0.3.0 (abc1234, 2024-01-15 14:30)`
/// otherwise.
fn format_version(version: &str, hash: &str, commit_date: &str, is_release: bool) -> String {
    match (is_release, hash) {
        (true, _) | (false, "") => version.to_string(),
        (false, hash) if commit_date.is_empty() => format!("{} ({})", version, hash),
        (false, hash) => format!("{} ({}, {})", version, hash, commit_date),
    }
}

#[derive(Parser, Debug)]
#[command(name = "stockroom", bin_name = "stockroom", version = version_string())]
#[command(about = "Small inventory manager with CSV import and export", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the catalog and config [default: $STOCKROOM_HOME or the platform data dir]
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new item
    #[command(alias = "a")]
    Add {
        /// Item name (exact, case-sensitive)
        name: String,

        /// Initial stock count
        #[arg(allow_hyphen_values = true)]
        stock: String,
    },

    /// Change an item's stock by a delta (e.g. 5 or -3)
    #[command(alias = "u")]
    Update {
        name: String,

        /// Amount to add; negative to remove
        #[arg(allow_hyphen_values = true)]
        delta: String,
    },

    /// Delete an item
    #[command(alias = "rm")]
    Delete { name: String },

    /// Search items by name (case-insensitive substring)
    #[command(alias = "s")]
    Search {
        query: String,

        #[command(flatten)]
        sort: SortArgs,
    },

    /// List all items
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        sort: SortArgs,
    },

    /// Import items from a CSV file with Name and Stock columns
    Import {
        file: PathBuf,

        /// Add imported stock to existing items
        #[arg(long, conflicts_with = "overwrite")]
        merge: bool,

        /// Replace the whole inventory with the imported items
        #[arg(long)]
        overwrite: bool,
    },

    /// Export all items to a CSV file
    Export {
        /// Output file [default: stockroom-<timestamp>.csv]
        file: Option<PathBuf>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (data-file, atomic-writes, import-mode)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Create the data directory and an empty catalog
    Init,
}

#[derive(clap::Args, Debug, Default)]
pub struct SortArgs {
    /// Sort by column
    #[arg(long, value_enum)]
    pub sort: Option<SortColumn>,

    /// Reverse the sort order
    #[arg(short, long, requires = "sort")]
    pub reverse: bool,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum SortColumn {
    Name,
    Stock,
}

impl SortArgs {
    pub fn to_order(&self) -> Option<ListOrder> {
        self.sort.map(|column| {
            let key = match column {
                SortColumn::Name => SortKey::Name,
                SortColumn::Stock => SortKey::Stock,
            };
            ListOrder::new(key, self.reverse)
        })
    }
}

/// Installs the stderr log subscriber. `RUST_LOG` wins over `--verbose`.
pub fn init_logging(verbose: bool) {
    let default_filter = if verbose { "stockroom=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
