use crate::commands::{CmdMessage, CmdResult, StockroomPaths};
use crate::config::StockroomConfig;
use crate::error::Result;
use crate::model::Catalog;
use crate::store::fs_backend::FsBackend;
use crate::store::StorageBackend;
use std::fs;

/// Creates the data directory and an empty catalog file if none exists yet.
pub fn run(paths: &StockroomPaths) -> Result<CmdResult> {
    fs::create_dir_all(paths.data_dir())?;
    let config = StockroomConfig::load(paths.data_dir())?;
    let data_file = paths.data_file(&config);

    let mut result = CmdResult::default();
    if data_file.exists() {
        result.add_message(CmdMessage::info(format!(
            "Catalog already present at {}",
            data_file.display()
        )));
        return Ok(result);
    }

    FsBackend::new(&data_file)
        .with_atomic_writes(config.atomic_writes)
        .save_catalog(&Catalog::new())?;
    result.add_message(CmdMessage::success(format!(
        "Initialized stockroom at {}",
        data_file.display()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_empty_catalog_once() {
        let dir = tempfile::tempdir().unwrap();
        let paths = StockroomPaths::new(dir.path().join("data"));

        run(&paths).unwrap();
        let file = paths.data_dir().join("inventory_data.json");
        assert_eq!(fs::read_to_string(&file).unwrap(), "{}");

        fs::write(&file, r#"{"Widget":{"stock_count":1}}"#).unwrap();
        let again = run(&paths).unwrap();
        assert!(again.messages[0].content.starts_with("Catalog already present"));
        assert!(fs::read_to_string(&file).unwrap().contains("Widget"));
    }
}
