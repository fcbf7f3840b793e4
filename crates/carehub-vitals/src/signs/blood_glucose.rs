use carehub_core::ObservationKind;

use crate::VitalSign;
use crate::reference::{Channel, channel};

/// Blood sugar level in mmol/L.
///
/// The normal range is shown as guidance but readings are not flagged.
pub struct BloodGlucose;

impl VitalSign for BloodGlucose {
    fn kind(&self) -> ObservationKind {
        ObservationKind::BloodGlucose
    }

    fn normal_range(&self) -> Option<&str> {
        Some("4.0-7.8 mmol/L")
    }

    fn channels(&self) -> &[Channel] {
        static CHANNELS: std::sync::LazyLock<Vec<Channel>> = std::sync::LazyLock::new(|| {
            vec![channel("blood_glucose", "Blood Sugar", Vec::new())]
        });
        &CHANNELS
    }
}
