use crate::unit::types::{System, Unit};

/// Ounces in one pound
pub const OUNCES_PER_POUND: f64 = 16.0;
/// Grams in one kilogram
pub const GRAMS_PER_KILOGRAM: f64 = 1000.0;
/// Kilograms in one pound (exact by definition)
pub const KILOGRAMS_PER_POUND: f64 = 0.45359237;

pub fn get_unit_system(unit: Unit) -> System {
    match unit {
        Unit::Ounce | Unit::Pound => System::Imperial,
        Unit::Kilogram | Unit::Gram => System::Metric,
    }
}

fn ounces_to_pounds(ounces: f64) -> f64 {
    ounces / OUNCES_PER_POUND
}

fn pounds_to_kilograms(pounds: f64) -> f64 {
    pounds * KILOGRAMS_PER_POUND
}

fn kilograms_to_pounds(kilograms: f64) -> f64 {
    kilograms / KILOGRAMS_PER_POUND
}

/// Convert a weight between any two units.
///
/// Imperial and metric units are bridged through pounds and kilograms, so
/// every pair is covered; converting a unit to itself returns the input.
pub fn convert_weight(weight: f64, from: Unit, to: Unit) -> f64 {
    match (from, to) {
        (Unit::Ounce, Unit::Ounce)
        | (Unit::Pound, Unit::Pound)
        | (Unit::Kilogram, Unit::Kilogram)
        | (Unit::Gram, Unit::Gram) => weight,

        (Unit::Ounce, Unit::Pound) => ounces_to_pounds(weight),
        (Unit::Ounce, Unit::Kilogram) => pounds_to_kilograms(ounces_to_pounds(weight)),
        (Unit::Ounce, Unit::Gram) => {
            pounds_to_kilograms(ounces_to_pounds(weight)) * GRAMS_PER_KILOGRAM
        }

        (Unit::Pound, Unit::Ounce) => weight * OUNCES_PER_POUND,
        (Unit::Pound, Unit::Kilogram) => pounds_to_kilograms(weight),
        (Unit::Pound, Unit::Gram) => pounds_to_kilograms(weight) * GRAMS_PER_KILOGRAM,

        (Unit::Kilogram, Unit::Ounce) => kilograms_to_pounds(weight) * OUNCES_PER_POUND,
        (Unit::Kilogram, Unit::Pound) => kilograms_to_pounds(weight),
        (Unit::Kilogram, Unit::Gram) => weight * GRAMS_PER_KILOGRAM,

        (Unit::Gram, Unit::Ounce) => {
            kilograms_to_pounds(weight / GRAMS_PER_KILOGRAM) * OUNCES_PER_POUND
        }
        (Unit::Gram, Unit::Pound) => kilograms_to_pounds(weight / GRAMS_PER_KILOGRAM),
        (Unit::Gram, Unit::Kilogram) => weight / GRAMS_PER_KILOGRAM,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= 1e-9 * expected.abs().max(1.0),
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_unit_systems() {
        assert_eq!(get_unit_system(Unit::Ounce), System::Imperial);
        assert_eq!(get_unit_system(Unit::Pound), System::Imperial);
        assert_eq!(get_unit_system(Unit::Kilogram), System::Metric);
        assert_eq!(get_unit_system(Unit::Gram), System::Metric);
    }

    #[test]
    fn test_known_conversions() {
        assert_close(convert_weight(32.0, Unit::Ounce, Unit::Pound), 2.0);
        assert_close(convert_weight(2.0, Unit::Pound, Unit::Ounce), 32.0);
        assert_close(convert_weight(1.0, Unit::Pound, Unit::Kilogram), 0.45359237);
        assert_close(convert_weight(1.0, Unit::Pound, Unit::Gram), 453.59237);
        assert_close(convert_weight(1.5, Unit::Kilogram, Unit::Gram), 1500.0);
        assert_close(convert_weight(250.0, Unit::Gram, Unit::Kilogram), 0.25);
        assert_close(convert_weight(0.45359237, Unit::Kilogram, Unit::Pound), 1.0);
        assert_close(convert_weight(453.59237, Unit::Gram, Unit::Ounce), 16.0);
        assert_close(convert_weight(16.0, Unit::Ounce, Unit::Gram), 453.59237);
    }

    #[test]
    fn test_same_unit_is_identity() {
        for unit in Unit::ALL {
            assert_eq!(convert_weight(3.25, unit, unit), 3.25);
        }
    }

    #[test]
    fn test_every_pair_round_trips() {
        for from in Unit::ALL {
            for to in Unit::ALL {
                let there = convert_weight(7.3, from, to);
                assert_close(convert_weight(there, to, from), 7.3);
            }
        }
    }
}
