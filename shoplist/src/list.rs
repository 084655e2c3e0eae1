use std::fmt;

use serde::{Deserialize, Serialize};

/// One shopping-list entry.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub id: u64,
    pub text: String,
    pub done: bool,
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.done { 'x' } else { ' ' };
        write!(f, "[{}] {} {}", mark, self.id, self.text)
    }
}

/// The whole list, in insertion order. Serialized as a bare JSON array.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ShoppingList {
    items: Vec<Item>,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_done(&self) -> bool {
        self.items.iter().any(|item| item.done)
    }

    /// Next id to assign: one past the largest id, or 1 for an empty list.
    ///
    /// `None` once the largest id is `u64::MAX`.
    pub fn next_id(&self) -> Option<u64> {
        match self.items.iter().map(|item| item.id).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        }
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    /// Append a new open item and return its id. `text` must already be trimmed.
    ///
    /// Returns `None` without touching the list when no id is left.
    pub fn push(&mut self, text: String) -> Option<u64> {
        let id = self.next_id()?;
        self.items.push(Item {
            id,
            text,
            done: false,
        });
        Some(id)
    }

    /// Remove the item with `id`, keeping the order of the rest.
    pub fn remove(&mut self, id: u64) -> Option<Item> {
        let pos = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(pos))
    }

    /// Drop every done item and return how many were removed.
    pub fn remove_done(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !item.done);
        before - self.items.len()
    }
}
