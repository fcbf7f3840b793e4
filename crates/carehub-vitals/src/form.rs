use carehub_core::ObservationKind;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::normalize::{RawVital, VitalsBatch};

/// The vital signs entry form, one optional text field per vital.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VitalsForm {
    #[serde(default)]
    pub temperature: Option<String>,
    #[serde(default)]
    pub systolic: Option<String>,
    #[serde(default)]
    pub diastolic: Option<String>,
    #[serde(default)]
    pub heart_rate: Option<String>,
    #[serde(default)]
    pub respiratory_rate: Option<String>,
    #[serde(default)]
    pub oxygen_saturation: Option<String>,
    #[serde(default)]
    pub weight: Option<String>,
    #[serde(default)]
    pub blood_sugar: Option<String>,
    #[serde(default)]
    pub pain_score: Option<String>,
    #[serde(default)]
    pub custom: Vec<CustomVital>,
}

/// A free-form observation the form has no dedicated field for.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CustomVital {
    pub label: String,
    pub value: String,
    pub unit: String,
}

impl VitalsForm {
    /// Convert the form into a batch in form order: temperature, blood
    /// pressure, heart rate, respiratory rate, SpO₂, weight, blood sugar,
    /// pain, then custom entries.
    ///
    /// Blood pressure is only submitted when both components were entered.
    pub fn to_batch(&self) -> VitalsBatch {
        let mut batch = VitalsBatch::new();
        let mut push = |kind: ObservationKind, value: &Option<String>| {
            if let Some(value) = filled(value) {
                batch.insert(RawVital::new(kind, value));
            }
        };

        push(ObservationKind::Temperature, &self.temperature);
        if let (Some(systolic), Some(diastolic)) = (filled(&self.systolic), filled(&self.diastolic)) {
            push(
                ObservationKind::BloodPressure,
                &Some(format!("{systolic}/{diastolic}")),
            );
        }
        push(ObservationKind::HeartRate, &self.heart_rate);
        push(ObservationKind::RespiratoryRate, &self.respiratory_rate);
        push(ObservationKind::OxygenSaturation, &self.oxygen_saturation);
        push(ObservationKind::Weight, &self.weight);
        push(ObservationKind::BloodGlucose, &self.blood_sugar);
        push(ObservationKind::Pain, &self.pain_score);

        for custom in &self.custom {
            if !custom.value.trim().is_empty() {
                batch.insert(RawVital::custom(&custom.label, &custom.value, &custom.unit));
            }
        }
        batch
    }
}

fn filled(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
