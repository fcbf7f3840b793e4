use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The recorded value of an observation.
///
/// Blood pressure is a systolic/diastolic pair of whole mmHg; every other
/// kind is a single decimal in the kind's unit. Serialized untagged: a bare
/// number or `{ "systolic": 120, "diastolic": 80 }`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum Magnitude {
    Scalar(f64),
    BloodPressure { systolic: u16, diastolic: u16 },
}

impl Magnitude {
    /// The value used for averages and trends: the scalar itself, or the
    /// systolic reading for blood pressure.
    pub fn primary(&self) -> f64 {
        match *self {
            Magnitude::Scalar(value) => value,
            Magnitude::BloodPressure { systolic, .. } => f64::from(systolic),
        }
    }

    pub fn is_blood_pressure(&self) -> bool {
        matches!(self, Magnitude::BloodPressure { .. })
    }
}

impl fmt::Display for Magnitude {
    /// Formats the reading the way staff enter it: `36.8`, `72`, `145/90`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Magnitude::Scalar(value) => write!(f, "{value}"),
            Magnitude::BloodPressure {
                systolic,
                diastolic,
            } => write!(f, "{systolic}/{diastolic}"),
        }
    }
}
