use crate::commands::list::{sort_items, ListOrder};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Item;
use crate::store::{CatalogStore, StorageBackend};

/// Items whose name contains `query`, compared case-insensitively.
/// An empty query matches everything.
pub fn run<B: StorageBackend>(
    store: &CatalogStore<B>,
    query: &str,
    order: Option<ListOrder>,
) -> Result<CmdResult> {
    let query_lower = query.to_lowercase();

    let mut matches: Vec<Item> = store
        .catalog()
        .iter()
        .filter(|(name, _)| name.to_lowercase().contains(&query_lower))
        .map(|(name, record)| Item::new(name.clone(), record.stock_count))
        .collect();

    if let Some(order) = order {
        sort_items(&mut matches, order);
    }

    let mut result = CmdResult::default();
    if !query.is_empty() {
        if matches.is_empty() {
            result.add_message(CmdMessage::warning(format!("No items match '{}'.", query)));
        } else {
            result.add_message(CmdMessage::info(format!(
                "Showing results for '{}'",
                query
            )));
        }
    }
    Ok(result.with_listed_items(matches))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::list::SortKey;
    use crate::store::fixtures::StoreFixture;

    #[test]
    fn matches_case_insensitive_substring() {
        let store = StoreFixture::new()
            .with_item("Widget", 5)
            .with_item("Gadget", 2)
            .with_item("Big WIDGET", 1)
            .build();

        let result = run(&store, "wid", None).unwrap();
        let names: Vec<_> = result.listed_items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Widget", "Big WIDGET"]);
    }

    #[test]
    fn uppercase_query_matches_lowercase_name() {
        let store = StoreFixture::new().with_item("sprocket", 5).build();
        let result = run(&store, "SPRO", None).unwrap();
        assert_eq!(result.listed_items.len(), 1);
    }

    #[test]
    fn empty_query_returns_whole_catalog() {
        let store = StoreFixture::new().with_items(4).build();
        let result = run(&store, "", None).unwrap();
        assert_eq!(result.listed_items.len(), 4);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn no_matches_is_a_warning_not_an_error() {
        let store = StoreFixture::new().with_item("Widget", 5).build();
        let result = run(&store, "bolt", None).unwrap();
        assert!(result.listed_items.is_empty());
        assert_eq!(result.messages[0].content, "No items match 'bolt'.");
    }

    #[test]
    fn results_can_be_sorted() {
        let store = StoreFixture::new()
            .with_item("Gear large", 9)
            .with_item("Gear small", 1)
            .build();
        let result = run(&store, "gear", Some(ListOrder::new(SortKey::Stock, false))).unwrap();
        assert_eq!(result.listed_items[0].name, "Gear small");
    }
}
