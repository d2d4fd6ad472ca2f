use crate::display::money::format_price;
use crate::parser::models::ShoppingListItem;
use crate::pricing::convert_per_unit;
use crate::unit::{convert_weight, Unit};
use serde::{Deserialize, Serialize};

/// Widths of the padded columns in a rendered row. The per-unit
/// annotation comes last and is never padded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct ColumnWidths {
    #[serde(default = "default_name_width")]
    pub name: usize,
    #[serde(default = "default_count_width")]
    pub count: usize,
    #[serde(default = "default_total_width")]
    pub total: usize,
}

fn default_name_width() -> usize {
    20
}

fn default_count_width() -> usize {
    10
}

fn default_total_width() -> usize {
    10
}

impl Default for ColumnWidths {
    fn default() -> Self {
        Self {
            name: default_name_width(),
            count: default_count_width(),
            total: default_total_width(),
        }
    }
}

/// Round a weight to a precision that reads well for its unit.
/// Whole numbers are left alone.
pub fn display_weight(weight: f64, unit: Unit) -> f64 {
    if is_whole(weight) {
        return weight;
    }

    match unit {
        Unit::Ounce => round_to(weight, 1),
        Unit::Pound | Unit::Kilogram => round_to(weight, 2),
        Unit::Gram => weight.round(),
    }
}

fn is_whole(value: f64) -> bool {
    value.fract() == 0.0
}

fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

/// Formats shopping list rows with weights shown in a preferred unit
pub struct ItemFormatter {
    preferred_unit: Unit,
    columns: ColumnWidths,
}

impl ItemFormatter {
    pub fn new(preferred_unit: Unit) -> Self {
        Self {
            preferred_unit,
            columns: ColumnWidths::default(),
        }
    }

    pub fn with_columns(mut self, columns: ColumnWidths) -> Self {
        self.columns = columns;
        self
    }

    /// "2 lb." for weights (converted to the preferred unit), "10" for quantities
    pub fn count_column(&self, item: &ShoppingListItem) -> String {
        match item.count_type.unit() {
            Some(unit) => {
                let weight = convert_weight(item.count, unit, self.preferred_unit);
                format!(
                    "{} {}.",
                    display_weight(weight, self.preferred_unit),
                    self.preferred_unit.label()
                )
            }
            None => item.count.to_string(),
        }
    }

    /// "@ $4.99 / lb.", "@ 5 / $2.00" or "@ $2.79 / ea."
    pub fn per_unit_column(&self, item: &ShoppingListItem) -> String {
        match item.per_unit_count_type.unit() {
            Some(unit) => {
                let converted = convert_per_unit(
                    item.per_unit_count,
                    unit,
                    item.price_cents_per_unit,
                    self.preferred_unit,
                );

                let count = if !is_whole(converted.per_unit_count) {
                    format!("{} ", round_to(converted.per_unit_count, 2))
                } else if converted.per_unit_count > 1.0 {
                    format!("{} ", converted.per_unit_count as i64)
                } else {
                    String::new()
                };

                format!(
                    "@ {} / {}{}.",
                    format_price(converted.price_cents_per_unit),
                    count,
                    converted.unit.label()
                )
            }
            None if item.per_unit_count != 1 => format!(
                "@ {} / {}",
                item.per_unit_count,
                format_price(item.price_cents_per_unit)
            ),
            None => format!(
                "@ {} / {}.",
                format_price(item.price_cents_per_unit),
                item.per_unit_count_type.label()
            ),
        }
    }

    pub fn format_row(&self, item: &ShoppingListItem, total_price_cents: i64) -> String {
        format!(
            "{:<name$}{:<count$}{:<total$}{}",
            item.name,
            self.count_column(item),
            format_price(total_price_cents),
            self.per_unit_column(item),
            name = self.columns.name,
            count = self.columns.count,
            total = self.columns.total,
        )
    }

    pub fn format_total(&self, total_price_cents: i64) -> String {
        format!("Total: {}", format_price(total_price_cents))
    }
}
