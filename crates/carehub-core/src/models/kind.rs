use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The vital-sign type of a single observation.
///
/// Serialized with the short codes the browser UI already uses
/// (`BP`, `HR`, `TEMP`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ObservationKind {
    #[serde(rename = "TEMP")]
    Temperature,
    #[serde(rename = "BP")]
    BloodPressure,
    #[serde(rename = "HR")]
    HeartRate,
    #[serde(rename = "RR")]
    RespiratoryRate,
    #[serde(rename = "SPO2")]
    OxygenSaturation,
    #[serde(rename = "WEIGHT")]
    Weight,
    #[serde(rename = "BSL")]
    BloodGlucose,
    #[serde(rename = "PAIN")]
    Pain,
    #[serde(rename = "CUSTOM")]
    Custom,
}

impl ObservationKind {
    /// The eight standard vital signs, in the order the vitals form lists them.
    pub const STANDARD: [ObservationKind; 8] = [
        ObservationKind::Temperature,
        ObservationKind::BloodPressure,
        ObservationKind::HeartRate,
        ObservationKind::RespiratoryRate,
        ObservationKind::OxygenSaturation,
        ObservationKind::Weight,
        ObservationKind::BloodGlucose,
        ObservationKind::Pain,
    ];

    pub fn code(self) -> &'static str {
        match self {
            ObservationKind::Temperature => "TEMP",
            ObservationKind::BloodPressure => "BP",
            ObservationKind::HeartRate => "HR",
            ObservationKind::RespiratoryRate => "RR",
            ObservationKind::OxygenSaturation => "SPO2",
            ObservationKind::Weight => "WEIGHT",
            ObservationKind::BloodGlucose => "BSL",
            ObservationKind::Pain => "PAIN",
            ObservationKind::Custom => "CUSTOM",
        }
    }

    /// Human-readable name shown next to a reading.
    pub fn display_name(self) -> &'static str {
        match self {
            ObservationKind::Temperature => "Temperature",
            ObservationKind::BloodPressure => "Blood Pressure",
            ObservationKind::HeartRate => "Heart Rate",
            ObservationKind::RespiratoryRate => "Respiratory Rate",
            ObservationKind::OxygenSaturation => "SpO₂",
            ObservationKind::Weight => "Weight",
            ObservationKind::BloodGlucose => "Blood Sugar",
            ObservationKind::Pain => "Pain Score",
            ObservationKind::Custom => "Custom",
        }
    }

    /// Fixed unit of measure. Custom observations carry their own unit.
    pub fn default_unit(self) -> Option<&'static str> {
        match self {
            ObservationKind::Temperature => Some("°C"),
            ObservationKind::BloodPressure => Some("mmHg"),
            ObservationKind::HeartRate => Some("bpm"),
            ObservationKind::RespiratoryRate => Some("/min"),
            ObservationKind::OxygenSaturation => Some("%"),
            ObservationKind::Weight => Some("kg"),
            ObservationKind::BloodGlucose => Some("mmol/L"),
            ObservationKind::Pain => Some("/10"),
            ObservationKind::Custom => None,
        }
    }

    pub fn is_blood_pressure(self) -> bool {
        self == ObservationKind::BloodPressure
    }
}

impl fmt::Display for ObservationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ObservationKind {
    type Err = CoreError;

    /// Accepts the wire codes as well as the long snake_case names,
    /// case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s.trim().to_ascii_lowercase().as_str() {
            "temp" | "temperature" => ObservationKind::Temperature,
            "bp" | "blood_pressure" => ObservationKind::BloodPressure,
            "hr" | "heart_rate" => ObservationKind::HeartRate,
            "rr" | "respiratory_rate" => ObservationKind::RespiratoryRate,
            "spo2" | "oxygen_saturation" => ObservationKind::OxygenSaturation,
            "weight" => ObservationKind::Weight,
            "bsl" | "blood_glucose" | "blood_sugar" => ObservationKind::BloodGlucose,
            "pain" => ObservationKind::Pain,
            "custom" => ObservationKind::Custom,
            _ => return Err(CoreError::UnknownKind(s.to_string())),
        };
        Ok(kind)
    }
}
