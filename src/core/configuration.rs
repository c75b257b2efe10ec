//! Build configurations.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::generator::GenerateError;

/// A build configuration, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Configuration {
    /// Sentinel; never emitted.
    Unknown,
    Debug,
    DebugGame,
    /// The default configuration, covered by the per-target default rule.
    Development,
    Shipping,
    Test,
}

impl Configuration {
    /// Every configuration in declaration order.
    pub const ALL: [Configuration; 6] = [
        Configuration::Unknown,
        Configuration::Debug,
        Configuration::DebugGame,
        Configuration::Development,
        Configuration::Shipping,
        Configuration::Test,
    ];

    /// Get the configuration name as used in rule names and build arguments.
    pub fn as_str(&self) -> &'static str {
        match self {
            Configuration::Unknown => "Unknown",
            Configuration::Debug => "Debug",
            Configuration::DebugGame => "DebugGame",
            Configuration::Development => "Development",
            Configuration::Shipping => "Shipping",
            Configuration::Test => "Test",
        }
    }

    /// Whether this configuration gets its own named rule.
    ///
    /// `Unknown` is never emitted and `Development` is the default rule.
    pub fn has_dedicated_rule(&self) -> bool {
        !matches!(self, Configuration::Unknown | Configuration::Development)
    }

    /// Configurations valid on a host when nothing restricts them.
    pub fn defaults() -> Vec<Configuration> {
        Self::ALL
            .into_iter()
            .filter(|c| *c != Configuration::Unknown)
            .collect()
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Configuration {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .filter(|c| *c != Configuration::Unknown)
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| GenerateError::UnknownConfiguration(s.to_string()))
    }
}
