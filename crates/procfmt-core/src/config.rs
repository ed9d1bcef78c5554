//! # Validation Configuration
//!
//! Controls how the validation engine reports defects in entity lists.
//!
//! The default reproduces the long-standing behavior of every processing
//! service that consumes these formats: a list field reports only its first
//! invalid element. Operators who need the full picture (for example when
//! triaging a bulletin with many bad picks) can switch to
//! [`ListPolicy::ReportAll`] through YAML or the `PROCFMT_LIST_POLICY`
//! environment variable.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Environment variable consulted by [`ValidationConfig::from_env`].
pub const LIST_POLICY_ENV: &str = "PROCFMT_LIST_POLICY";

/// How many invalid elements of a list field produce a defect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListPolicy {
    /// Report the first invalid element and stop scanning.
    #[default]
    FirstInvalid,
    /// Report every invalid element, each tagged with its index.
    ReportAll,
}

impl ListPolicy {
    /// Wire name of the policy.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstInvalid => "first-invalid",
            Self::ReportAll => "report-all",
        }
    }
}

impl fmt::Display for ListPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "first-invalid" => Ok(Self::FirstInvalid),
            "report-all" => Ok(Self::ReportAll),
            other => Err(ConfigError::UnknownListPolicy(other.to_string())),
        }
    }
}

/// Settings applied by [`Validate::errors_with`](crate::validation::Validate::errors_with).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidationConfig {
    /// Reporting policy for list-valued fields.
    pub list_policy: ListPolicy,
}

impl ValidationConfig {
    /// Configuration that reports every invalid list element.
    pub fn report_all() -> Self {
        Self {
            list_policy: ListPolicy::ReportAll,
        }
    }

    /// Parse a YAML document such as `list_policy: report-all`.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Read [`LIST_POLICY_ENV`]. Unset or unrecognized values yield the
    /// default configuration.
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(LIST_POLICY_ENV).ok().as_deref())
    }

    fn from_env_value(value: Option<&str>) -> Self {
        let Some(raw) = value else {
            return Self::default();
        };
        match raw.parse::<ListPolicy>() {
            Ok(list_policy) => Self { list_policy },
            Err(e) => {
                tracing::warn!(
                    var = LIST_POLICY_ENV,
                    value = %raw,
                    error = %e,
                    "ignoring unrecognized list policy, using default"
                );
                Self::default()
            }
        }
    }
}
