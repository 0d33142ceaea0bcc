use kondate_shared::id::new_id;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ShoppingItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub checked: bool,
}

impl ShoppingItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: new_id("item"),
            name: name.into(),
            checked: false,
        }
    }
}

/// The live shopping list. Persisted as `{"items": [...]}`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ShoppingList {
    items: Vec<ShoppingItem>,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a hand-entered item. A blank name is ignored, not an error.
    pub fn add(&mut self, name: &str) -> Option<&ShoppingItem> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        self.items.push(ShoppingItem::new(name));
        let last = self.items.len() - 1;
        Some(&self.items[last])
    }

    pub fn toggle(&mut self, id: &str) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.checked = !item.checked;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// Drop every checked item, keeping the rest in order. Returns how many
    /// were removed.
    pub fn remove_checked(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !item.checked);
        before - self.items.len()
    }

    /// Wholesale replacement by the generator. Old items are discarded,
    /// checked or not.
    pub fn replace(&mut self, items: Vec<ShoppingItem>) {
        self.items = items;
    }

    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
