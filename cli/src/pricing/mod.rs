// Money arithmetic over parsed items. All amounts are whole cents and every
// float-to-cents step truncates.

pub mod per_unit;
pub mod total;

pub use per_unit::{convert_per_unit, ConvertedPerUnit};
pub use total::total_price_cents;
