use crate::commands::{CmdMessage, CmdResult, ItemOutcome};
use crate::error::{Result, StockroomError};
use crate::store::{CatalogStore, StorageBackend};

/// Applies `delta` to an item's stock. Stock may go negative. A result outside
/// the `i64` range is an error and nothing is changed.
pub fn run<B: StorageBackend>(
    store: &mut CatalogStore<B>,
    name: &str,
    delta: i64,
) -> Result<CmdResult> {
    let mut next = store.catalog().clone();
    let stock_count = match next.get_mut(name) {
        Some(record) => {
            record.stock_count = add_stock(name, record.stock_count, delta)?;
            record.stock_count
        }
        None => {
            return Ok(CmdResult::default()
                .with_outcome(ItemOutcome::NotFound)
                .with_message(CmdMessage::error(format!("Item '{}' not found.", name))));
        }
    };

    store.commit(next)?;
    tracing::info!(item = name, delta, stock_count, "stock updated");

    Ok(CmdResult::default()
        .with_outcome(ItemOutcome::Updated { stock_count })
        .with_message(CmdMessage::success(format!(
            "Stock updated: {} = {}",
            name, stock_count
        ))))
}

pub(crate) fn add_stock(name: &str, current: i64, delta: i64) -> Result<i64> {
    current
        .checked_add(delta)
        .ok_or_else(|| StockroomError::StockOverflow {
            name: name.to_string(),
            current,
            delta,
        })
}
