use crate::error::{Result, StockroomError};
use crate::model::ImportMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "inventory_data.json";

/// Configuration for stockroom, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StockroomConfig {
    /// File name (relative to the data dir) or absolute path of the catalog document
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Write the catalog to a temp file and rename it into place
    #[serde(default = "default_atomic_writes")]
    pub atomic_writes: bool,

    /// Import mode used when neither --merge nor --overwrite is given
    #[serde(default)]
    pub import_mode: ImportMode,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_atomic_writes() -> bool {
    true
}

impl Default for StockroomConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            atomic_writes: default_atomic_writes(),
            import_mode: ImportMode::default(),
        }
    }
}

impl StockroomConfig {
    pub const KEYS: &'static [&'static str] = &["data-file", "atomic-writes", "import-mode"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(StockroomError::Io)?;
        let config: StockroomConfig =
            serde_json::from_str(&content).map_err(StockroomError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(StockroomError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(StockroomError::Serialization)?;
        fs::write(config_path, content).map_err(StockroomError::Io)?;
        Ok(())
    }

    /// Resolves the catalog document path against the data dir.
    pub fn data_path(&self, data_dir: &Path) -> PathBuf {
        let file = Path::new(&self.data_file);
        if file.is_absolute() {
            file.to_path_buf()
        } else {
            data_dir.join(file)
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data-file" => Some(self.data_file.clone()),
            "atomic-writes" => Some(self.atomic_writes.to_string()),
            "import-mode" => Some(self.import_mode.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "data-file" => {
                let value = value.trim();
                if value.is_empty() {
                    return Err(StockroomError::Config("data-file cannot be empty".into()));
                }
                self.data_file = value.to_string();
            }
            "atomic-writes" => {
                self.atomic_writes = match value.trim().to_lowercase().as_str() {
                    "true" | "yes" | "on" | "1" => true,
                    "false" | "no" | "off" | "0" => false,
                    other => {
                        return Err(StockroomError::Config(format!(
                            "atomic-writes expects true or false, got '{}'",
                            other
                        )))
                    }
                };
            }
            "import-mode" => self.import_mode = value.parse()?,
            other => {
                return Err(StockroomError::Config(format!(
                    "Unknown config key: {}",
                    other
                )))
            }
        }
        Ok(())
    }
}
