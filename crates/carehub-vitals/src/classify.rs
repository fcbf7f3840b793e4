//! The single entry point every caller classifies through.

use carehub_core::{Magnitude, ObservationKind, ThresholdFlag};

use crate::signs::blood_pressure::BloodPressure;
use crate::{VitalSign, get_vital_sign};

/// Classify a reading against the reference ranges for `kind`.
///
/// Returns `None` for in-range readings, for kinds without rules (weight,
/// blood glucose, custom), for non-finite values, and when the magnitude's
/// shape does not match the kind. It never panics.
pub fn classify(kind: ObservationKind, magnitude: &Magnitude) -> Option<ThresholdFlag> {
    match (kind.is_blood_pressure(), *magnitude) {
        (false, Magnitude::Scalar(value)) => classify_value(kind, value),
        (
            true,
            Magnitude::BloodPressure {
                systolic,
                diastolic,
            },
        ) => classify_blood_pressure(f64::from(systolic), f64::from(diastolic)),
        _ => {
            tracing::warn!(%kind, %magnitude, "magnitude shape does not match kind; not classified");
            None
        }
    }
}

/// Classify a single decimal reading. Blood pressure needs both components,
/// so it is never classified here.
pub fn classify_value(kind: ObservationKind, value: f64) -> Option<ThresholdFlag> {
    if kind.is_blood_pressure() {
        return None;
    }
    get_vital_sign(kind)?.classify(&[value])
}

/// Classify a blood pressure pair. The more severe component wins and
/// systolic decides ties.
pub fn classify_blood_pressure(systolic: f64, diastolic: f64) -> Option<ThresholdFlag> {
    BloodPressure.classify(&[systolic, diastolic])
}
