// Weight units, the quantity pseudo-unit, and conversions between them.

pub mod convert;
pub mod detector;
pub mod error;
pub mod types;

pub use convert::{
    convert_weight, get_unit_system, GRAMS_PER_KILOGRAM, KILOGRAMS_PER_POUND, OUNCES_PER_POUND,
};
pub use detector::detect_unit;
pub use error::UnitError;
pub use types::{CountType, System, Unit};
