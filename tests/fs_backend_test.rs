use std::fs;
use stockroom::error::StockroomError;
use stockroom::model::{Catalog, Record};
use stockroom::store::fs_backend::FsBackend;
use stockroom::store::{CatalogStore, StorageBackend};
use tempfile::TempDir;

fn sample_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.insert("Widget", Record::new(5));
    catalog.insert("Gadget", Record::new(-2));
    catalog
}

#[test]
fn test_missing_file_loads_empty() {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().join("inventory_data.json"));
    assert!(backend.load_catalog().unwrap().is_empty());
}

#[test]
fn test_save_and_load_roundtrip() {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().join("inventory_data.json"));

    backend.save_catalog(&sample_catalog()).unwrap();
    assert_eq!(backend.load_catalog().unwrap(), sample_catalog());
}

#[test]
fn test_file_format_is_pretty_json_with_stock_count_field() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inventory_data.json");
    FsBackend::new(&path).save_catalog(&sample_catalog()).unwrap();

    let on_disk = fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&on_disk).unwrap();
    assert_eq!(value["Widget"]["stock_count"], 5);
    assert_eq!(value["Gadget"]["stock_count"], -2);
    assert!(on_disk.contains('\n'), "expected indented output");
}

#[test]
fn test_reads_file_written_by_hand() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inventory_data.json");
    fs::write(
        &path,
        r#"{
    "Pens": {"stock_count": 40},
    "Paper": {"stock_count": 3}
}"#,
    )
    .unwrap();

    let catalog = FsBackend::new(&path).load_catalog().unwrap();
    let names: Vec<_> = catalog.iter().map(|(n, _)| n.clone()).collect();
    assert_eq!(names, vec!["Pens", "Paper"]);
}

#[test]
fn test_corrupt_file_fails_store_open() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inventory_data.json");
    fs::write(&path, "{\"Widget\": {\"stock_count\": \"many\"}}").unwrap();

    let result = CatalogStore::open(FsBackend::new(&path));
    assert!(matches!(result, Err(StockroomError::Serialization(_))));
    // The corrupt file is left as-is.
    assert!(fs::read_to_string(&path).unwrap().contains("many"));
}

#[test]
fn test_atomic_write_leaves_no_tmp_artifacts() {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().join("inventory_data.json"));

    backend.save_catalog(&sample_catalog()).unwrap();
    backend.save_catalog(&Catalog::new()).unwrap();

    for entry in fs::read_dir(dir.path()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap().to_string();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
    assert!(backend.load_catalog().unwrap().is_empty());
}

#[test]
fn test_plain_overwrite_mode_still_roundtrips() {
    let dir = TempDir::new().unwrap();
    let backend =
        FsBackend::new(dir.path().join("inventory_data.json")).with_atomic_writes(false);

    backend.save_catalog(&sample_catalog()).unwrap();
    assert_eq!(backend.load_catalog().unwrap(), sample_catalog());
}

#[test]
fn test_save_creates_missing_parent_dirs() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("a").join("b").join("stock.json");
    FsBackend::new(&path).save_catalog(&sample_catalog()).unwrap();
    assert!(path.exists());
}
