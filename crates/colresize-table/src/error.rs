#![forbid(unsafe_code)]

//! Plugin setup errors.

use std::fmt;

/// Misconfigured plugin installation, surfaced during instance setup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PluginError {
    /// The named plugin is not installed on the instance.
    PluginNotFound { plugin: String },
    /// `must_follow` is installed after `plugin` but has to precede it.
    PluginOrder { plugin: String, must_follow: String },
}

impl fmt::Display for PluginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PluginNotFound { plugin } => {
                write!(f, "plugin `{plugin}` is not installed on this table")
            }
            Self::PluginOrder {
                plugin,
                must_follow,
            } => write!(
                f,
                "plugin `{plugin}` must be installed after `{must_follow}`"
            ),
        }
    }
}

impl std::error::Error for PluginError {}
