use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitError {
    InvalidUnit(String),
}

impl fmt::Display for UnitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitError::InvalidUnit(unit) => write!(f, "Invalid unit \"{}\"", unit),
        }
    }
}

impl std::error::Error for UnitError {}
