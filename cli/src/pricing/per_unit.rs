use crate::unit::{convert_weight, get_unit_system, System, Unit};

/// A weight price restated for display
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvertedPerUnit {
    pub per_unit_count: f64,
    pub unit: Unit,
    pub price_cents_per_unit: i64,
}

/// Restate a weight price ("$4.99 per 1 lb") in the preferred unit system.
///
/// A price already in the preferred system is returned as-is. Otherwise
/// imperial prices move to kilograms and metric prices to pounds. A price
/// quoted for a single unit is rescaled to one of the new unit; a price
/// quoted for several units keeps its amount and converts the count.
pub fn convert_per_unit(
    per_unit_count: i64,
    unit: Unit,
    price_cents_per_unit: i64,
    preferred: Unit,
) -> ConvertedPerUnit {
    let count = per_unit_count as f64;
    let system = get_unit_system(unit);

    if system == get_unit_system(preferred) {
        return ConvertedPerUnit {
            per_unit_count: count,
            unit,
            price_cents_per_unit,
        };
    }

    let target = match system {
        System::Imperial => Unit::Kilogram,
        System::Metric => Unit::Pound,
    };
    let converted_count = convert_weight(count, unit, target);

    if per_unit_count > 1 {
        ConvertedPerUnit {
            per_unit_count: converted_count,
            unit: target,
            price_cents_per_unit,
        }
    } else {
        let ratio = count / converted_count;
        ConvertedPerUnit {
            per_unit_count: count,
            unit: target,
            price_cents_per_unit: (price_cents_per_unit as f64 * ratio) as i64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_system_is_unchanged() {
        let converted = convert_per_unit(1, Unit::Pound, 499, Unit::Ounce);
        assert_eq!(
            converted,
            ConvertedPerUnit {
                per_unit_count: 1.0,
                unit: Unit::Pound,
                price_cents_per_unit: 499
            }
        );

        let converted = convert_per_unit(1, Unit::Gram, 3, Unit::Kilogram);
        assert_eq!(converted.unit, Unit::Gram);
        assert_eq!(converted.price_cents_per_unit, 3);
    }

    #[test]
    fn test_pound_price_becomes_kilogram_price() {
        let converted = convert_per_unit(1, Unit::Pound, 499, Unit::Kilogram);
        assert_eq!(converted.unit, Unit::Kilogram);
        assert_eq!(converted.per_unit_count, 1.0);
        assert_eq!(converted.price_cents_per_unit, 1100);
    }

    #[test]
    fn test_metric_price_always_moves_to_pounds() {
        // Even when ounces are preferred
        let converted = convert_per_unit(1, Unit::Kilogram, 1000, Unit::Ounce);
        assert_eq!(converted.unit, Unit::Pound);
        assert_eq!(converted.price_cents_per_unit, 453);
    }

    #[test]
    fn test_multi_unit_price_converts_count_only() {
        let converted = convert_per_unit(5, Unit::Pound, 600, Unit::Kilogram);
        assert_eq!(converted.unit, Unit::Kilogram);
        assert_eq!(converted.price_cents_per_unit, 600);
        assert!((converted.per_unit_count - 2.26796185).abs() < 1e-9);
    }
}
