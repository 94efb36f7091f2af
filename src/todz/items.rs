//! Pure transforms over the item collection.
//!
//! Every operation here is a total function: collection in, collection out.
//! A mutation aimed at a key that is not present returns the collection
//! unchanged rather than erroring. No I/O, no assumptions about who calls
//! us — persistence and presentation live elsewhere.

use crate::filter::{apply_filter, Filter};
use crate::model::Item;
use uuid::Uuid;

/// Append a new incomplete item. Empty text is a no-op.
pub fn add(items: &[Item], text: &str) -> Vec<Item> {
    if text.is_empty() {
        return items.to_vec();
    }
    let mut next = items.to_vec();
    next.push(Item::new(text));
    next
}

/// Replace the text of the item matching `key`.
pub fn update_text(items: &[Item], key: Uuid, text: &str) -> Vec<Item> {
    map_item(items, key, |item| item.text = text.to_string())
}

/// Set the transient editing flag on the item matching `key`.
pub fn toggle_editing(items: &[Item], key: Uuid, editing: bool) -> Vec<Item> {
    map_item(items, key, |item| item.editing = editing)
}

/// Set the completion flag on the item matching `key`.
pub fn toggle_complete(items: &[Item], key: Uuid, complete: bool) -> Vec<Item> {
    map_item(items, key, |item| item.complete = complete)
}

/// Set the completion flag on every item.
pub fn toggle_all_complete(items: &[Item], complete: bool) -> Vec<Item> {
    items
        .iter()
        .cloned()
        .map(|mut item| {
            item.complete = complete;
            item
        })
        .collect()
}

/// Drop the item matching `key`.
pub fn remove(items: &[Item], key: Uuid) -> Vec<Item> {
    items
        .iter()
        .filter(|item| item.key != key)
        .cloned()
        .collect()
}

/// Keep only incomplete items. Defined as filtering by `Active`.
pub fn clear_completed(items: &[Item]) -> Vec<Item> {
    apply_filter(items, Filter::Active)
}

fn map_item<F: Fn(&mut Item)>(items: &[Item], key: Uuid, f: F) -> Vec<Item> {
    items
        .iter()
        .cloned()
        .map(|mut item| {
            if item.key == key {
                f(&mut item);
            }
            item
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_appends_incomplete_item() {
        let items = add(&[], "Buy milk");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].text, "Buy milk");
        assert!(!items[0].complete);
        assert!(!items[0].editing);

        let items = add(&items, "Walk dog");
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].text, "Walk dog");
    }

    #[test]
    fn add_empty_text_is_identity() {
        let items = add(&[], "a");
        assert_eq!(add(&items, ""), items);
    }

    #[test]
    fn add_preserves_insertion_order() {
        let mut items = Vec::new();
        for text in ["one", "two", "three"] {
            items = add(&items, text);
        }
        let texts: Vec<&str> = items.iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, vec!["one", "two", "three"]);
    }

    #[test]
    fn update_text_replaces_only_the_target() {
        let items = add(&add(&[], "a"), "b");
        let key = items[0].key;
        let updated = update_text(&items, key, "a2");
        assert_eq!(updated[0].text, "a2");
        assert_eq!(updated[1].text, "b");
        assert_eq!(updated[0].key, key);
    }

    #[test]
    fn update_text_missing_key_is_noop() {
        let items = add(&[], "a");
        assert_eq!(update_text(&items, Uuid::new_v4(), "x"), items);
    }

    #[test]
    fn toggle_complete_flags_the_target() {
        let items = add(&add(&[], "a"), "b");
        let toggled = toggle_complete(&items, items[1].key, true);
        assert!(!toggled[0].complete);
        assert!(toggled[1].complete);

        let back = toggle_complete(&toggled, items[1].key, false);
        assert!(!back[1].complete);
    }

    #[test]
    fn toggle_editing_flags_the_target() {
        let items = add(&[], "a");
        let editing = toggle_editing(&items, items[0].key, true);
        assert!(editing[0].editing);
        let done = toggle_editing(&editing, items[0].key, false);
        assert!(!done[0].editing);
    }

    #[test]
    fn toggle_all_complete_covers_every_item() {
        let items = add(&add(&add(&[], "a"), "b"), "c");
        let all_done = toggle_all_complete(&items, true);
        assert!(all_done.iter().all(|i| i.complete));
        assert!(apply_filter(&all_done, Filter::Active).is_empty());
        assert_eq!(apply_filter(&all_done, Filter::Completed).len(), 3);

        let none_done = toggle_all_complete(&all_done, false);
        assert!(none_done.iter().all(|i| !i.complete));
    }

    #[test]
    fn remove_drops_the_target() {
        let items = add(&add(&[], "a"), "b");
        let removed = remove(&items, items[0].key);
        assert_eq!(removed.len(), 1);
        assert_eq!(removed[0].text, "b");
    }

    #[test]
    fn remove_missing_key_is_noop() {
        let items = add(&[], "a");
        assert_eq!(remove(&items, Uuid::new_v4()), items);
    }

    #[test]
    fn clear_completed_keeps_active_items() {
        let items = add(&add(&[], "done"), "todo");
        let items = toggle_complete(&items, items[0].key, true);
        let cleared = clear_completed(&items);
        assert_eq!(cleared.len(), 1);
        assert_eq!(cleared[0].text, "todo");
    }

    // The end-to-end flow from the user's point of view: add, complete,
    // inspect the filtered views, clear.
    #[test]
    fn buy_milk_scenario() {
        let items = add(&[], "Buy milk");
        assert_eq!(items.len(), 1);
        assert!(!items[0].complete);

        let items = toggle_complete(&items, items[0].key, true);
        assert!(apply_filter(&items, Filter::Active).is_empty());
        assert_eq!(apply_filter(&items, Filter::Completed).len(), 1);

        let items = clear_completed(&items);
        assert!(items.is_empty());
    }
}
