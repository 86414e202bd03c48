use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Item;
use crate::store::{CatalogStore, StorageBackend};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Case-insensitive lexical order of item names
    Name,
    /// Numeric order of stock counts
    Stock,
}

/// A view-time ordering. Without one, items come out in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListOrder {
    pub key: SortKey,
    pub reverse: bool,
}

impl ListOrder {
    pub fn new(key: SortKey, reverse: bool) -> Self {
        Self { key, reverse }
    }
}

pub fn run<B: StorageBackend>(
    store: &CatalogStore<B>,
    order: Option<ListOrder>,
) -> Result<CmdResult> {
    let mut items = store.catalog().to_items();
    if let Some(order) = order {
        sort_items(&mut items, order);
    }
    Ok(CmdResult::default().with_listed_items(items))
}

/// Stable sort, so equal keys keep their catalog order.
pub fn sort_items(items: &mut [Item], order: ListOrder) {
    match order.key {
        SortKey::Name => items.sort_by_cached_key(|item| item.name.to_lowercase()),
        SortKey::Stock => items.sort_by_key(|item| item.stock_count),
    }
    if order.reverse {
        items.reverse();
    }
}
