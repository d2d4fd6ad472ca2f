use crate::display::ColumnWidths;
use crate::unit::{detect_unit, Unit, UnitError};
use serde::{Deserialize, Serialize};

/// Optional settings read from a TOML file
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    // Unit weights are shown in when none is given on the command line
    #[serde(default)]
    pub preferred_unit: Option<String>,

    #[serde(default)]
    pub columns: ColumnWidths,
}

impl Config {
    pub fn load_from_file<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Pick the display unit: the command-line value wins over the config
    /// file, and pounds are used when neither gives one.
    ///
    /// An unrecognised name is returned as an error so the caller can warn
    /// before falling back to pounds.
    pub fn resolve_preferred_unit(&self, cli_unit: Option<&str>) -> Result<Unit, UnitError> {
        match cli_unit.or(self.preferred_unit.as_deref()) {
            Some(name) => {
                detect_unit(name).ok_or_else(|| UnitError::InvalidUnit(name.to_string()))
            }
            None => Ok(Unit::Pound),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config: Config = toml::from_str(
            r#"
preferred_unit = "kg"

[columns]
name = 30
count = 12
total = 9
"#,
        )
        .unwrap();

        assert_eq!(config.preferred_unit.as_deref(), Some("kg"));
        assert_eq!(
            config.columns,
            ColumnWidths {
                name: 30,
                count: 12,
                total: 9
            }
        );
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let config: Config = toml::from_str("[columns]\nname = 25\n").unwrap();
        assert_eq!(config.preferred_unit, None);
        assert_eq!(config.columns.name, 25);
        assert_eq!(config.columns.count, 10);
        assert_eq!(config.columns.total, 10);

        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.columns, ColumnWidths::default());
    }

    #[test]
    fn test_resolve_preferred_unit() {
        let empty = Config::empty();
        assert_eq!(empty.resolve_preferred_unit(None), Ok(Unit::Pound));
        assert_eq!(empty.resolve_preferred_unit(Some("g")), Ok(Unit::Gram));
        assert_eq!(
            empty.resolve_preferred_unit(Some("stone")),
            Err(UnitError::InvalidUnit("stone".to_string()))
        );

        let config = Config {
            preferred_unit: Some("ounces".to_string()),
            ..Config::default()
        };
        assert_eq!(config.resolve_preferred_unit(None), Ok(Unit::Ounce));
        assert_eq!(config.resolve_preferred_unit(Some("kg")), Ok(Unit::Kilogram));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shoplist.toml");
        std::fs::write(&path, "preferred_unit = \"g\"\n").unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.resolve_preferred_unit(None), Ok(Unit::Gram));

        assert!(Config::load_from_file(dir.path().join("missing.toml")).is_err());
    }
}
