pub mod formatter;
pub mod money;

pub use formatter::{display_weight, ColumnWidths, ItemFormatter};
pub use money::{format_cents, format_price};
