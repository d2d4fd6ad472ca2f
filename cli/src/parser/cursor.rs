use crate::parser::error::ParseError;
use crate::unit::CountType;

/// Unit abbreviations recognised in front of an item name, longest first
pub const LEADING_UNITS: [(&str, CountType); 5] = [
    ("lbs", CountType::Pound),
    ("lb", CountType::Pound),
    ("oz", CountType::Ounce),
    ("kg", CountType::Kilogram),
    ("g", CountType::Gram),
];

/// Unit abbreviations recognised after a price, longest first
pub const TRAILING_UNITS: [(&str, CountType); 6] = [
    ("lbs", CountType::Pound),
    ("lb", CountType::Pound),
    ("oz", CountType::Ounce),
    ("kg", CountType::Kilogram),
    ("g", CountType::Gram),
    ("ea", CountType::Quantity),
];

/// A decimal written as `<whole>.<fractional>`, kept as its two digit runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalParts {
    pub whole: i64,
    pub fractional: i64,
    /// Number of digits in the fractional run
    pub fractional_digits: usize,
}

impl DecimalParts {
    /// `whole * 100 + fractional`, with the fractional run taken as-is.
    ///
    /// Only two-digit fractions give true cents: `1.5` yields 105 and
    /// `1.999` yields 1099. Returns `None` on overflow.
    pub fn literal_cents(&self) -> Option<i64> {
        self.whole.checked_mul(100)?.checked_add(self.fractional)
    }
}

/// A window over one line that shrinks from either end as tokens are
/// recognised. Every `take_*` method leaves the window untouched on failure.
#[derive(Debug, Clone, Copy)]
pub struct LineCursor<'a> {
    rest: &'a str,
}

impl<'a> LineCursor<'a> {
    pub fn new(line: &'a str) -> Self {
        Self { rest: line }
    }

    /// What has not been consumed yet
    pub fn rest(&self) -> &'a str {
        self.rest
    }

    pub fn is_empty(&self) -> bool {
        self.rest.is_empty()
    }

    pub fn strip_prefix_char(&mut self, c: char) -> bool {
        match self.rest.strip_prefix(c) {
            Some(rest) => {
                self.rest = rest;
                true
            }
            None => false,
        }
    }

    pub fn strip_suffix_char(&mut self, c: char) -> bool {
        match self.rest.strip_suffix(c) {
            Some(rest) => {
                self.rest = rest;
                true
            }
            None => false,
        }
    }

    /// Strip the first token of `units` the window starts with
    pub fn strip_prefix_unit(&mut self, units: &[(&str, CountType)]) -> Option<CountType> {
        for (token, count_type) in units {
            if let Some(rest) = self.rest.strip_prefix(token) {
                self.rest = rest;
                return Some(*count_type);
            }
        }
        None
    }

    /// Strip the first token of `units` the window ends with
    pub fn strip_suffix_unit(&mut self, units: &[(&str, CountType)]) -> Option<CountType> {
        for (token, count_type) in units {
            if let Some(rest) = self.rest.strip_suffix(token) {
                self.rest = rest;
                return Some(*count_type);
            }
        }
        None
    }

    /// Take a number like `2`, `2.5` or `2.` from the front of the window.
    ///
    /// Fails if the window does not start with a digit, if a second `.`
    /// appears, or if a non-ASCII character is met before the number ends.
    pub fn take_leading_decimal(&mut self) -> Result<f64, ParseError> {
        let mut len = 0;
        let mut seen_point = false;

        for c in self.rest.chars() {
            if !c.is_ascii() {
                return Err(ParseError::ExpectedLeadingNumber);
            }

            if c.is_ascii_digit() {
                len += 1;
            } else if c == '.' {
                if seen_point || len == 0 {
                    return Err(ParseError::ExpectedLeadingNumber);
                }
                seen_point = true;
                len += 1;
            } else if len == 0 {
                return Err(ParseError::ExpectedLeadingNumber);
            } else {
                break;
            }
        }

        if len == 0 {
            return Err(ParseError::ExpectedLeadingNumber);
        }

        // Everything counted is ASCII, so `len` is also a byte offset
        let digits = &self.rest[..len];
        let value = digits
            .parse::<f64>()
            .map_err(|_| ParseError::NumericConversionFailed(digits.to_string()))?;

        self.rest = &self.rest[len..];
        Ok(value)
    }

    /// Take a `<digits>.<digits>` decimal from the back of the window.
    ///
    /// Both digit runs must be non-empty and only one `.` may appear.
    pub fn take_trailing_decimal(&mut self) -> Result<DecimalParts, ParseError> {
        let mut fractional_len = 0;
        let mut whole_len = 0;
        let mut seen_point = false;

        for c in self.rest.chars().rev() {
            if c.is_ascii_digit() {
                if seen_point {
                    whole_len += 1;
                } else {
                    fractional_len += 1;
                }
            } else if c == '.' {
                if seen_point || fractional_len == 0 {
                    return Err(ParseError::ExpectedTrailingNumber);
                }
                seen_point = true;
            } else if fractional_len == 0 {
                return Err(ParseError::ExpectedTrailingNumber);
            } else {
                break;
            }
        }

        if fractional_len == 0 || whole_len == 0 {
            return Err(ParseError::ExpectedTrailingNumber);
        }

        let end = self.rest.len();
        let point = end - fractional_len - 1;
        let start = point - whole_len;

        let fractional_digits = &self.rest[point + 1..];
        let whole_digits = &self.rest[start..point];

        let fractional = parse_int(fractional_digits)?;
        let whole = parse_int(whole_digits)?;

        self.rest = &self.rest[..start];
        Ok(DecimalParts {
            whole,
            fractional,
            fractional_digits: fractional_len,
        })
    }

    /// Take a run of digits from the back of the window, if there is one
    pub fn take_trailing_int(&mut self) -> Result<Option<i64>, ParseError> {
        let len = self
            .rest
            .chars()
            .rev()
            .take_while(|c| c.is_ascii_digit())
            .count();

        if len == 0 {
            return Ok(None);
        }

        let start = self.rest.len() - len;
        let value = parse_int(&self.rest[start..])?;

        self.rest = &self.rest[..start];
        Ok(Some(value))
    }
}

fn parse_int(digits: &str) -> Result<i64, ParseError> {
    digits
        .parse::<i64>()
        .map_err(|_| ParseError::NumericConversionFailed(digits.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_decimal() {
        let mut cursor = LineCursor::new("2.5 lb. Apples");
        assert_eq!(cursor.take_leading_decimal(), Ok(2.5));
        assert_eq!(cursor.rest(), " lb. Apples");

        let mut cursor = LineCursor::new("10 Sweet Corn");
        assert_eq!(cursor.take_leading_decimal(), Ok(10.0));
        assert_eq!(cursor.rest(), " Sweet Corn");

        let mut cursor = LineCursor::new("3");
        assert_eq!(cursor.take_leading_decimal(), Ok(3.0));
        assert!(cursor.is_empty());
    }

    #[test]
    fn test_leading_decimal_failures_leave_window_alone() {
        for input in ["Corn Chex", ".5 lb", "1.2.3 lb", "", "½ lb", "2€ each"] {
            let mut cursor = LineCursor::new(input);
            assert_eq!(
                cursor.take_leading_decimal(),
                Err(ParseError::ExpectedLeadingNumber),
                "input {:?}",
                input
            );
            assert_eq!(cursor.rest(), input);
        }
    }

    #[test]
    fn test_trailing_decimal() {
        let mut cursor = LineCursor::new("Corn Chex, $2.79");
        let price = cursor.take_trailing_decimal().unwrap();
        assert_eq!(
            price,
            DecimalParts {
                whole: 2,
                fractional: 79,
                fractional_digits: 2
            }
        );
        assert_eq!(price.literal_cents(), Some(279));
        assert_eq!(cursor.rest(), "Corn Chex, $");
    }

    #[test]
    fn test_trailing_decimal_keeps_fraction_digits_literal() {
        let mut cursor = LineCursor::new("$1.5");
        let price = cursor.take_trailing_decimal().unwrap();
        assert_eq!(price.fractional_digits, 1);
        assert_eq!(price.literal_cents(), Some(105));

        let mut cursor = LineCursor::new("$1.999");
        assert_eq!(cursor.take_trailing_decimal().unwrap().literal_cents(), Some(1099));
    }

    #[test]
    fn test_trailing_decimal_failures_leave_window_alone() {
        for input in ["$5", "$.99", "$4.", "1.2.3", "", "price", "$4.99 ü"] {
            let mut cursor = LineCursor::new(input);
            assert_eq!(
                cursor.take_trailing_decimal(),
                Err(ParseError::ExpectedTrailingNumber),
                "input {:?}",
                input
            );
            assert_eq!(cursor.rest(), input);
        }
    }

    #[test]
    fn test_trailing_decimal_overflow() {
        let mut cursor = LineCursor::new("$99999999999999999999.00");
        assert!(matches!(
            cursor.take_trailing_decimal(),
            Err(ParseError::NumericConversionFailed(_))
        ));
    }

    #[test]
    fn test_trailing_int() {
        let mut cursor = LineCursor::new("Sweet Corn, 5");
        assert_eq!(cursor.take_trailing_int(), Ok(Some(5)));
        assert_eq!(cursor.rest(), "Sweet Corn, ");

        let mut cursor = LineCursor::new("Sweet Corn, ");
        assert_eq!(cursor.take_trailing_int(), Ok(None));
        assert_eq!(cursor.rest(), "Sweet Corn, ");

        let mut cursor = LineCursor::new("Käse");
        assert_eq!(cursor.take_trailing_int(), Ok(None));
    }

    #[test]
    fn test_unit_tokens_prefer_longer_matches() {
        let mut cursor = LineCursor::new("$4.99/lbs");
        assert_eq!(cursor.strip_suffix_unit(&TRAILING_UNITS), Some(CountType::Pound));
        assert_eq!(cursor.rest(), "$4.99/");

        let mut cursor = LineCursor::new("$9.99/kg");
        assert_eq!(cursor.strip_suffix_unit(&TRAILING_UNITS), Some(CountType::Kilogram));
        assert_eq!(cursor.rest(), "$9.99/");

        let mut cursor = LineCursor::new("$2.00/ea");
        assert_eq!(cursor.strip_suffix_unit(&TRAILING_UNITS), Some(CountType::Quantity));

        let mut cursor = LineCursor::new("oz. Cheddar");
        assert_eq!(cursor.strip_prefix_unit(&LEADING_UNITS), Some(CountType::Ounce));
        assert_eq!(cursor.rest(), ". Cheddar");

        let mut cursor = LineCursor::new("each");
        assert_eq!(cursor.strip_prefix_unit(&LEADING_UNITS), None);
        assert_eq!(cursor.rest(), "each");
    }
}
