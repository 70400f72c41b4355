#![forbid(unsafe_code)]

//! Unified error for the facade.

use std::fmt;

use colresize_table::{ConfigError, PluginError};

/// Top-level error type for colresize hosts.
#[derive(Debug)]
pub enum Error {
    /// Plugin installation or ordering failure.
    Plugin(PluginError),
    /// Options or table definition could not be loaded.
    Config(ConfigError),
    /// Raw I/O error (convenience variant for `?` on io::Result).
    Io(std::io::Error),
}

/// Standard result type for colresize APIs.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Short stable name for logs.
    #[must_use]
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::Plugin(_) => "plugin",
            Self::Config(_) => "config",
            Self::Io(_) => "io",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plugin(e) => write!(f, "plugin error: {e}"),
            Self::Config(e) => write!(f, "config error: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Plugin(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Io(e) => Some(e),
        }
    }
}

impl From<PluginError> for Error {
    fn from(err: PluginError) -> Self {
        Self::Plugin(err)
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn plugin_error_chains_source() {
        let err: Error = PluginError::PluginNotFound {
            plugin: "resize_columns".into(),
        }
        .into();
        assert_eq!(err.error_type(), "plugin");
        assert!(err.to_string().starts_with("plugin error: "));
        let source = err.source().expect("source");
        assert_eq!(
            source.to_string(),
            "plugin `resize_columns` is not installed on this table"
        );
    }

    #[test]
    fn io_error_converts() {
        fn read() -> Result<String> {
            Ok(std::fs::read_to_string("/definitely/not/here.toml")?)
        }
        let err = read().expect_err("missing file");
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.error_type(), "io");
    }

    #[test]
    fn validation_error_is_config() {
        let err: Error = ConfigError::Validation(vec!["bad".into()]).into();
        assert_eq!(err.error_type(), "config");
        assert_eq!(err.to_string(), "config error: validation errors: bad");
    }
}
