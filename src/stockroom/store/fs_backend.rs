use super::backend::StorageBackend;
use crate::error::{Result, StockroomError};
use crate::model::Catalog;
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

/// File-backed catalog storage: one pretty-printed JSON document.
pub struct FsBackend {
    data_file: PathBuf,
    atomic_writes: bool,
}

impl FsBackend {
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
            atomic_writes: true,
        }
    }

    /// With atomic writes off, the data file is truncated and rewritten in place,
    /// so a crash mid-write can leave it truncated.
    pub fn with_atomic_writes(mut self, atomic: bool) -> Self {
        self.atomic_writes = atomic;
        self
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.data_file.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(StockroomError::Io)?;
            }
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let stem = self
            .data_file
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "catalog".to_string());
        self.data_file
            .with_file_name(format!(".{}-{}.tmp", stem, Uuid::new_v4()))
    }
}

impl StorageBackend for FsBackend {
    fn load_catalog(&self) -> Result<Catalog> {
        if !self.data_file.exists() {
            tracing::debug!(path = %self.data_file.display(), "no catalog file, starting empty");
            return Ok(Catalog::new());
        }
        let content = fs::read_to_string(&self.data_file).map_err(StockroomError::Io)?;
        let catalog: Catalog =
            serde_json::from_str(&content).map_err(StockroomError::Serialization)?;
        tracing::debug!(
            path = %self.data_file.display(),
            items = catalog.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    fn save_catalog(&self, catalog: &Catalog) -> Result<()> {
        self.ensure_parent_dir()?;
        let content =
            serde_json::to_string_pretty(catalog).map_err(StockroomError::Serialization)?;

        if self.atomic_writes {
            let tmp_file = self.tmp_path();
            fs::write(&tmp_file, content).map_err(StockroomError::Io)?;
            if let Err(e) = fs::rename(&tmp_file, &self.data_file) {
                let _ = fs::remove_file(&tmp_file);
                return Err(StockroomError::Io(e));
            }
        } else {
            fs::write(&self.data_file, content).map_err(StockroomError::Io)?;
        }

        tracing::debug!(
            path = %self.data_file.display(),
            items = catalog.len(),
            atomic = self.atomic_writes,
            "saved catalog"
        );
        Ok(())
    }
}
