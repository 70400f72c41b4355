#![forbid(unsafe_code)]

//! Table options for column resizing.
//!
//! Options can be built in code or loaded from TOML/JSON (feature `config`):
//!
//! ```toml
//! disable_resizing = false
//! auto_reset_resize = true
//!
//! [default_column]
//! width = 150.0
//! min_width = 40.0
//! ```
//!
//! Every field has a default, so an empty document yields
//! `TableOptions::default()`.

#[cfg(feature = "config")]
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::column::ColumnDef;

/// Largest integer an `f64` represents exactly; the unbounded max width.
pub const UNBOUNDED_WIDTH: f64 = 9_007_199_254_740_991.0;

/// Fallbacks for columns that omit a setting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultColumn {
    pub can_resize: bool,
    pub width: f64,
    pub min_width: f64,
    pub max_width: f64,
}

impl Default for DefaultColumn {
    fn default() -> Self {
        Self {
            can_resize: true,
            width: 150.0,
            min_width: 0.0,
            max_width: UNBOUNDED_WIDTH,
        }
    }
}

/// Table-wide resize configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableOptions {
    /// Disable resizing for every column.
    pub disable_resizing: bool,
    /// Drop recorded widths whenever the column definitions change.
    pub auto_reset_resize: bool,
    pub default_column: DefaultColumn,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            disable_resizing: false,
            auto_reset_resize: true,
            default_column: DefaultColumn::default(),
        }
    }
}

impl TableOptions {
    /// Load from a TOML string.
    #[cfg(feature = "config")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let options: Self = toml::from_str(s).map_err(ConfigError::Toml)?;
        options.validate()?;
        Ok(options)
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "config")]
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let options: Self = serde_json::from_str(s).map_err(ConfigError::Json)?;
        options.validate()?;
        Ok(options)
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "config")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_json_str(&content)
    }

    /// Check that the default column bounds are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let column = &self.default_column;
        let mut errors = Vec::new();
        for (name, value) in [
            ("width", column.width),
            ("min_width", column.min_width),
            ("max_width", column.max_width),
        ] {
            if !value.is_finite() || value < 0.0 {
                errors.push(format!("default_column.{name} must be finite and >= 0 (got {value})"));
            }
        }
        if column.min_width > column.max_width {
            errors.push(format!(
                "default_column.min_width ({}) exceeds max_width ({})",
                column.min_width, column.max_width
            ));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

/// Options plus column definitions, as stored in a table definition file.
///
/// ```toml
/// auto_reset_resize = false
///
/// [[columns]]
/// id = "name"
/// width = 120.0
///
/// [[columns]]
/// id = "notes"
/// disable_resizing = true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableDefinition {
    #[serde(flatten)]
    pub options: TableOptions,
    #[serde(default)]
    pub columns: Vec<ColumnDef>,
}

impl TableDefinition {
    /// Load from a TOML string.
    #[cfg(feature = "config")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let definition: Self = toml::from_str(s).map_err(ConfigError::Toml)?;
        definition.options.validate()?;
        Ok(definition)
    }

    /// Load from a JSON string.
    #[cfg(feature = "config")]
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let definition: Self = serde_json::from_str(s).map_err(ConfigError::Json)?;
        definition.options.validate()?;
        Ok(definition)
    }
}

/// Errors raised while loading table options.
#[derive(Debug)]
pub enum ConfigError {
    /// I/O error reading a file.
    Io(std::io::Error),
    /// TOML parse error.
    #[cfg(feature = "config")]
    Toml(toml::de::Error),
    /// JSON parse error.
    #[cfg(feature = "config")]
    Json(serde_json::Error),
    /// Values parsed but are unusable.
    Validation(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            #[cfg(feature = "config")]
            Self::Toml(e) => write!(f, "TOML parse error: {e}"),
            #[cfg(feature = "config")]
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
            Self::Validation(errors) => write!(f, "validation errors: {}", errors.join("; ")),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            #[cfg(feature = "config")]
            Self::Toml(e) => Some(e),
            #[cfg(feature = "config")]
            Self::Json(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_enable_resizing_and_auto_reset() {
        let options = TableOptions::default();
        assert!(!options.disable_resizing);
        assert!(options.auto_reset_resize);
        assert!(options.default_column.can_resize);
        assert_eq!(options.default_column.width, 150.0);
        assert!(options.validate().is_ok());
    }

    #[cfg(feature = "config")]
    #[test]
    fn empty_toml_yields_defaults() {
        let options = TableOptions::from_toml_str("").expect("empty toml is valid");
        assert_eq!(options, TableOptions::default());
    }

    #[cfg(feature = "config")]
    #[test]
    fn toml_overrides_selected_fields() {
        let options = TableOptions::from_toml_str(
            "auto_reset_resize = false\n[default_column]\nmin_width = 40.0\n",
        )
        .expect("valid toml");
        assert!(!options.auto_reset_resize);
        assert_eq!(options.default_column.min_width, 40.0);
        assert_eq!(options.default_column.width, 150.0);
    }

    #[cfg(feature = "config")]
    #[test]
    fn json_loads_global_disable() {
        let options =
            TableOptions::from_json_str(r#"{"disable_resizing": true}"#).expect("valid json");
        assert!(options.disable_resizing);
    }

    #[cfg(feature = "config")]
    #[test]
    fn malformed_toml_reports_parse_error() {
        let err = TableOptions::from_toml_str("auto_reset_resize = [").expect_err("invalid toml");
        assert!(matches!(err, ConfigError::Toml(_)));
        assert!(err.to_string().starts_with("TOML parse error"));
    }

    #[test]
    fn inverted_default_bounds_fail_validation() {
        let mut options = TableOptions::default();
        options.default_column.min_width = 500.0;
        options.default_column.max_width = 100.0;
        let err = options.validate().expect_err("min above max");
        match err {
            ConfigError::Validation(errors) => assert_eq!(errors.len(), 1),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(feature = "config")]
    #[test]
    fn definition_loads_options_and_columns() {
        let definition = TableDefinition::from_toml_str(
            "auto_reset_resize = false\n\n[[columns]]\nid = \"name\"\nwidth = 120.0\n\n[[columns]]\nid = \"notes\"\ndisable_resizing = true\n",
        )
        .expect("valid definition");
        assert!(!definition.options.auto_reset_resize);
        assert_eq!(definition.columns.len(), 2);
        assert_eq!(definition.columns[0].width, Some(120.0));
        assert_eq!(definition.columns[1].disable_resizing, Some(true));
    }

    #[cfg(feature = "config")]
    #[test]
    fn missing_file_is_io_error() {
        let err = TableOptions::from_toml_file("/definitely/not/here.toml").expect_err("no file");
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
