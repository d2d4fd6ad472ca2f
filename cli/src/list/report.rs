use crate::parser::models::ShoppingListItem;
use crate::pricing::total_price_cents;
use serde::Serialize;

/// A parsed item together with what it costs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricedItem {
    #[serde(flatten)]
    pub item: ShoppingListItem,
    pub total_price_cents: i64,
}

/// Every successfully parsed line of a list, in input order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ShoppingList {
    pub items: Vec<PricedItem>,
    pub total_price_cents: i64,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Price an item and add it to the list. Returns the item's total.
    pub fn push(&mut self, item: ShoppingListItem) -> i64 {
        let total = total_price_cents(&item);
        self.total_price_cents = self.total_price_cents.saturating_add(total);
        self.items.push(PricedItem {
            item,
            total_price_cents: total,
        });
        total
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PricedItem> {
        self.items.iter()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
