use crate::error::ParseModeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Selects which nodes of an axis are handed to the consumer.
///
/// Each mode keeps a subset of what the previous one keeps:
/// `Pipeline` ⊆ `Significant` ⊆ `All`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// Every node on the axis.
    #[default]
    All,
    /// Everything except comments, processing instructions and
    /// whitespace-only text.
    Significant,
    /// Significant nodes minus pipeline documentation and elements excluded
    /// by their use-when condition.
    Pipeline,
}

impl FilterMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterMode::All => "all",
            FilterMode::Significant => "significant",
            FilterMode::Pipeline => "pipeline",
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [FilterMode::All, FilterMode::Significant, FilterMode::Pipeline]
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseModeError(s.to_string()))
    }
}
