use crate::commands::{CmdMessage, CmdResult, ItemOutcome};
use crate::error::Result;
use crate::store::{CatalogStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &mut CatalogStore<B>, name: &str) -> Result<CmdResult> {
    let mut next = store.catalog().clone();
    if next.remove(name).is_none() {
        return Ok(CmdResult::default()
            .with_outcome(ItemOutcome::NotFound)
            .with_message(CmdMessage::error(format!("Item '{}' not found.", name))));
    }

    store.commit(next)?;
    tracing::info!(item = name, "item deleted");

    Ok(CmdResult::default()
        .with_outcome(ItemOutcome::Deleted)
        .with_message(CmdMessage::success(format!("Item '{}' deleted.", name))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::search;
    use crate::store::fixtures::StoreFixture;

    #[test]
    fn deleted_item_no_longer_found() {
        let mut store = StoreFixture::new()
            .with_item("Widget", 5)
            .with_item("Gadget", 1)
            .build();
        let result = run(&mut store, "Widget").unwrap();

        assert_eq!(result.outcome, Some(ItemOutcome::Deleted));
        assert!(search::run(&store, "Widget", None)
            .unwrap()
            .listed_items
            .is_empty());
        assert_eq!(store.backend().save_count(), 1);
    }

    #[test]
    fn failed_write_keeps_the_item() {
        let mut store = StoreFixture::new().with_item("Widget", 5).build();
        store.backend().set_simulate_write_error(true);

        assert!(run(&mut store, "Widget").is_err());
        assert!(store.catalog().contains("Widget"));
        assert_eq!(&store.backend().load_catalog().unwrap(), store.catalog());
    }

    #[test]
    fn deleting_absent_item_leaves_catalog_untouched() {
        let mut store = StoreFixture::new().with_item("Widget", 5).build();
        let before = store.catalog().clone();

        let result = run(&mut store, "widget").unwrap();

        assert_eq!(result.outcome, Some(ItemOutcome::NotFound));
        assert_eq!(store.catalog(), &before);
        assert_eq!(store.backend().save_count(), 0);
    }
}
