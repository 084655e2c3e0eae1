//! Test-only helpers for constructing lists and on-disk fixtures.

use std::path::Path;

use crate::io::config::CorruptPolicy;
use crate::io::list_store::ListStore;
use crate::list::{Item, ShoppingList};

/// Create an item with explicit fields.
pub fn item(id: u64, text: &str, done: bool) -> Item {
    Item {
        id,
        text: text.to_string(),
        done,
    }
}

/// Build a list from items in the given order.
pub fn list_of(items: Vec<Item>) -> ShoppingList {
    ShoppingList::from_items(items)
}

/// Store at `dir/shopping_list.json` with the default (fail) corrupt policy.
pub fn store_in(dir: &Path) -> ListStore {
    ListStore::new(dir.join("shopping_list.json"), CorruptPolicy::Fail)
}

/// Store pre-populated with `items`.
pub fn seeded_store(dir: &Path, items: Vec<Item>) -> ListStore {
    let store = store_in(dir);
    store.save(&list_of(items)).expect("seed list");
    store
}
