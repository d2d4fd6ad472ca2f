use crate::unit::{CountType, Unit};
use serde::Serialize;

/// One parsed line of a shopping list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShoppingListItem {
    pub name: String,

    // Price as written on the line, for `per_unit_count` of `per_unit_count_type`
    pub price_cents_per_unit: i64,

    // Quantity or weight being bought
    pub count: f64,
    pub count_type: CountType,

    // "5" in "5/$2.00", or the implicit 1 in "$4.99/lb."
    pub per_unit_count: i64,
    pub per_unit_count_type: CountType,
}

impl ShoppingListItem {
    /// The (bought, priced) weight units, when both sides are weights
    pub fn weight_units(&self) -> Option<(Unit, Unit)> {
        match (self.count_type.unit(), self.per_unit_count_type.unit()) {
            (Some(count_unit), Some(per_unit_unit)) => Some((count_unit, per_unit_unit)),
            _ => None,
        }
    }
}
