use crate::unit::error::UnitError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A unit of weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Ounce,
    Pound,
    Kilogram,
    Gram,
}

/// System of measurement a weight unit belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum System {
    Imperial,
    Metric,
}

/// What an item's count is measured in: a weight unit, or a plain quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CountType {
    Ounce,
    Pound,
    Kilogram,
    Gram,
    Quantity,
}

impl Unit {
    pub const ALL: [Unit; 4] = [Unit::Ounce, Unit::Pound, Unit::Kilogram, Unit::Gram];

    /// Short label used on shopping lists and in the rendered output
    pub fn label(self) -> &'static str {
        match self {
            Unit::Ounce => "oz",
            Unit::Pound => "lb",
            Unit::Kilogram => "kg",
            Unit::Gram => "g",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts exactly the short labels (`oz`, `lb`, `kg`, `g`).
/// See [`crate::unit::detect_unit`] for the looser alias matching.
impl FromStr for Unit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "oz" => Ok(Unit::Ounce),
            "lb" => Ok(Unit::Pound),
            "kg" => Ok(Unit::Kilogram),
            "g" => Ok(Unit::Gram),
            _ => Err(UnitError::InvalidUnit(s.to_string())),
        }
    }
}

impl CountType {
    /// The weight unit behind this count type, or `None` for a quantity
    pub fn unit(self) -> Option<Unit> {
        match self {
            CountType::Ounce => Some(Unit::Ounce),
            CountType::Pound => Some(Unit::Pound),
            CountType::Kilogram => Some(Unit::Kilogram),
            CountType::Gram => Some(Unit::Gram),
            CountType::Quantity => None,
        }
    }

    pub fn is_quantity(self) -> bool {
        self == CountType::Quantity
    }

    pub fn label(self) -> &'static str {
        match self.unit() {
            Some(unit) => unit.label(),
            None => "ea",
        }
    }
}

impl From<Unit> for CountType {
    fn from(unit: Unit) -> Self {
        match unit {
            Unit::Ounce => CountType::Ounce,
            Unit::Pound => CountType::Pound,
            Unit::Kilogram => CountType::Kilogram,
            Unit::Gram => CountType::Gram,
        }
    }
}

impl fmt::Display for CountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
