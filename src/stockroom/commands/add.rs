use crate::commands::{CmdMessage, CmdResult, ItemOutcome};
use crate::error::Result;
use crate::model::Record;
use crate::store::{CatalogStore, StorageBackend};

pub fn run<B: StorageBackend>(
    store: &mut CatalogStore<B>,
    name: &str,
    stock_count: i64,
) -> Result<CmdResult> {
    if store.catalog().contains(name) {
        return Ok(CmdResult::default()
            .with_outcome(ItemOutcome::AlreadyExists)
            .with_message(CmdMessage::warning(format!(
                "Item '{}' already exists.",
                name
            ))));
    }

    let mut next = store.catalog().clone();
    next.insert(name, Record::new(stock_count));
    store.commit(next)?;
    tracing::info!(item = name, stock_count, "item added");

    Ok(CmdResult::default()
        .with_outcome(ItemOutcome::Created)
        .with_message(CmdMessage::success(format!("Item '{}' added.", name))))
}
