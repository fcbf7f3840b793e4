use std::fmt;

use carehub_core::ThresholdFlag;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One side of a reference range, with its open/closed convention.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "op", content = "value", rename_all = "snake_case")]
#[ts(export)]
pub enum Bound {
    /// `value <= limit`
    AtOrBelow(f64),
    /// `value >= limit`
    AtOrAbove(f64),
    /// `value > limit`
    Above(f64),
}

impl Bound {
    pub fn contains(&self, value: f64) -> bool {
        match *self {
            Bound::AtOrBelow(limit) => value <= limit,
            Bound::AtOrAbove(limit) => value >= limit,
            Bound::Above(limit) => value > limit,
        }
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::AtOrBelow(limit) => write!(f, "≤ {limit}"),
            Bound::AtOrAbove(limit) => write!(f, "≥ {limit}"),
            Bound::Above(limit) => write!(f, "> {limit}"),
        }
    }
}

/// A flag raised whenever a value falls inside `bound`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Band {
    pub flag: ThresholdFlag,
    pub bound: Bound,
}

/// A single measured component of a vital sign.
///
/// Most vitals have one channel; blood pressure has two (systolic first,
/// then diastolic).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Channel {
    pub id: String,
    pub name: String,
    pub bands: Vec<Band>,
}

impl Channel {
    /// Classify one value against this channel's bands.
    ///
    /// Several bands may match (SpO₂ 85 is both LOW and CRITICAL); the most
    /// severe wins. Non-finite values are never classified.
    pub fn classify(&self, value: f64) -> Option<ThresholdFlag> {
        if !value.is_finite() {
            return None;
        }
        self.bands
            .iter()
            .filter(|band| band.bound.contains(value))
            .map(|band| band.flag)
            .max()
    }
}

pub(crate) fn channel(id: &str, name: &str, bands: Vec<Band>) -> Channel {
    Channel {
        id: id.to_string(),
        name: name.to_string(),
        bands,
    }
}

pub(crate) fn band(flag: ThresholdFlag, bound: Bound) -> Band {
    Band { flag, bound }
}
