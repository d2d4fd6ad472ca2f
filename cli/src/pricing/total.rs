use crate::parser::models::ShoppingListItem;
use crate::unit::convert_weight;

/// Total price of an item in cents.
///
/// Quantity pricing is plain multiplication, with "5/$2.00" style bulk
/// prices charged per batch. Weight pricing first converts the bought
/// weight into the unit the price is quoted in.
pub fn total_price_cents(item: &ShoppingListItem) -> i64 {
    let price = item.price_cents_per_unit as f64;
    let per_unit_count = item.per_unit_count as f64;

    match item.weight_units() {
        Some((count_unit, per_unit_unit)) => {
            let weight = convert_weight(item.count, count_unit, per_unit_unit);
            (price * (weight / per_unit_count)) as i64
        }
        // `count` is used as written, never cut down to a whole number first
        None if item.per_unit_count_type.is_quantity() && item.per_unit_count != 1 => {
            (price * (item.count / per_unit_count)) as i64
        }
        None => (price * item.count) as i64,
    }
}
