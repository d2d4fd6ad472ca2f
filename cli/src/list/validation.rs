use crate::parser::error::ParseError;
use std::fmt;

/// Lines that were skipped while loading a shopping list
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub issues: Vec<LineIssue>,
}

/// A line that failed to parse
#[derive(Debug, Clone, PartialEq)]
pub struct LineIssue {
    /// 1-based line number in the input
    pub line_number: usize,
    pub line: String,
    pub error: ParseError,
}

impl LineIssue {
    pub fn message(&self) -> String {
        format!(
            "Failed to parse line \"{}\": {}; ignoring",
            self.line, self.error
        )
    }
}

impl LoadReport {
    pub fn new() -> Self {
        Self { issues: Vec::new() }
    }

    pub fn add_issue(&mut self, line_number: usize, line: &str, error: ParseError) {
        self.issues.push(LineIssue {
            line_number,
            line: line.to_string(),
            error,
        });
    }

    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}

impl fmt::Display for LoadReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for issue in &self.issues {
            writeln!(f, "{}", issue.message())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_message() {
        let mut report = LoadReport::new();
        assert!(!report.has_issues());

        report.add_issue(3, "2 lb. Chicken, 4.99/lb.", ParseError::ExpectedDollarSign);
        assert!(report.has_issues());
        assert_eq!(report.len(), 1);
        assert_eq!(
            report.issues[0].message(),
            "Failed to parse line \"2 lb. Chicken, 4.99/lb.\": Expected dollar sign before price; ignoring"
        );
        assert_eq!(report.to_string(), format!("{}\n", report.issues[0].message()));
    }
}
