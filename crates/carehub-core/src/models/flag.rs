use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Clinical classification of an abnormal reading.
///
/// A reading within range has no flag; callers model that as
/// `Option<ThresholdFlag>::None`. Variants are declared in ascending
/// severity so the derived `Ord` ranks `Critical > High > Low`, and
/// `Option` ranks any flag above `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum ThresholdFlag {
    Low,
    High,
    Critical,
}

impl ThresholdFlag {
    pub fn as_str(self) -> &'static str {
        match self {
            ThresholdFlag::Low => "LOW",
            ThresholdFlag::High => "HIGH",
            ThresholdFlag::Critical => "CRITICAL",
        }
    }

    /// True for flags that need immediate escalation.
    pub fn is_critical(self) -> bool {
        self == ThresholdFlag::Critical
    }
}

impl fmt::Display for ThresholdFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThresholdFlag {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "LOW" => Ok(ThresholdFlag::Low),
            "HIGH" => Ok(ThresholdFlag::High),
            "CRITICAL" => Ok(ThresholdFlag::Critical),
            _ => Err(CoreError::UnknownFlag(s.to_string())),
        }
    }
}
