use crate::unit::types::Unit;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Spellings accepted for a preferred display unit, one pattern per unit
    /// Examples: "oz", "Ounces", "lbs", "pound", "KG", "kilos", "gram"
    static ref UNIT_ALIASES: [(Regex, Unit); 4] = [
        (Regex::new(r"(?i)^(oz|ounces?)$").unwrap(), Unit::Ounce),
        (Regex::new(r"(?i)^(lbs?|pounds?)$").unwrap(), Unit::Pound),
        (Regex::new(r"(?i)^(kg|kilos?|kilograms?)$").unwrap(), Unit::Kilogram),
        (Regex::new(r"(?i)^(g|grams?)$").unwrap(), Unit::Gram),
    ];
}

/// Recognise a unit name typed by a user, allowing plurals and long names
pub fn detect_unit(s: &str) -> Option<Unit> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }

    UNIT_ALIASES
        .iter()
        .find(|(pattern, _)| pattern.is_match(trimmed))
        .map(|(_, unit)| *unit)
}
