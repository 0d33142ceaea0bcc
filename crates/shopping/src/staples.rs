use kondate_shared::id::new_id;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct StapleItem {
    pub id: String,
    pub name: String,
    #[serde(rename = "inStock", default)]
    pub in_stock: bool,
}

/// Recurring household items in a user-chosen order. Array position is the
/// ordering key; only `reorder` moves items. Persisted as `{"items": [...]}`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Staples {
    items: Vec<StapleItem>,
}

impl Staples {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a staple. New staples start out of stock, since they usually
    /// get added the moment one runs out. A blank name is ignored.
    pub fn add(&mut self, name: &str) -> Option<&StapleItem> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        self.items.push(StapleItem {
            id: new_id("staple"),
            name: name.to_owned(),
            in_stock: false,
        });
        let last = self.items.len() - 1;
        Some(&self.items[last])
    }

    pub fn toggle(&mut self, id: &str) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.in_stock = !item.in_stock;
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

    /// Move the item at `from` so it lands at `to` within the shortened
    /// sequence (splice-out, splice-in). `to` past the end lands the item
    /// last; `from` out of range is rejected.
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        if from >= self.items.len() {
            return false;
        }
        let item = self.items.remove(from);
        let to = to.min(self.items.len());
        self.items.insert(to, item);
        true
    }

    pub fn items(&self) -> &[StapleItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
