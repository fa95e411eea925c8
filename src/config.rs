#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What to substitute for a placeholder whose name has no value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MissingPolicy {
    /// Substitute the empty string
    #[default]
    Empty,
    /// Substitute the text `undefined`
    Undefined,
    /// Leave the `{name}` token in the output
    Keep,
    /// Fail with [`crate::Error::MissingVar`]
    Error,
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Missing-key behaviour
    pub missing: MissingPolicy,
    /// Emit a warning event for every missing key
    pub warn_on_missing: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            missing: MissingPolicy::Empty,
            warn_on_missing: true,
        }
    }
}

impl Config {
    pub fn with_missing(missing: MissingPolicy) -> Self {
        Self {
            missing,
            ..Self::default()
        }
    }
}
