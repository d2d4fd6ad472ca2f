use std::fmt;

/// Why a shopping list line could not be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    ExpectedLeadingNumber,
    ExpectedTrailingNumber,
    ExpectedPriceNumber,
    ExpectedSlashBeforePrice,
    ExpectedDollarSign,
    ExpectedUnitCount,
    ExpectedComma,
    ExpectedUnitAfterQuantity,
    ExpectedSpaceAfterUnit,
    NumericConversionFailed(String),
    EmptyName,
    InvalidEncoding,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::ExpectedLeadingNumber => write!(f, "Expected string to start with a number"),
            ParseError::ExpectedTrailingNumber => write!(f, "Expected string to end with a number"),
            ParseError::ExpectedPriceNumber => {
                write!(f, "Expected a price of the form <dollars>.<cents>")
            }
            ParseError::ExpectedSlashBeforePrice => write!(f, "Expected slash before price"),
            ParseError::ExpectedDollarSign => write!(f, "Expected dollar sign before price"),
            ParseError::ExpectedUnitCount => write!(f, "Expected unit count before price"),
            ParseError::ExpectedComma => write!(f, "Expected comma before price"),
            ParseError::ExpectedUnitAfterQuantity => {
                write!(f, "Expected a unit of measurement after the quantity")
            }
            ParseError::ExpectedSpaceAfterUnit => {
                write!(f, "Expected space after the unit of measurement")
            }
            ParseError::NumericConversionFailed(digits) => {
                write!(f, "Failed to convert \"{}\" to a number", digits)
            }
            ParseError::EmptyName => write!(f, "Expected an item name"),
            ParseError::InvalidEncoding => write!(f, "Line is not valid UTF-8"),
        }
    }
}

impl std::error::Error for ParseError {}
