use carehub_core::{ObservationKind, ThresholdFlag};

use crate::VitalSign;
use crate::reference::{Bound, Channel, band, channel};

/// Blood pressure in mmHg, classified per component.
///
/// Systolic is listed first so that it decides ties between components
/// of equal severity. Only systolic has a critical tier.
pub struct BloodPressure;

impl VitalSign for BloodPressure {
    fn kind(&self) -> ObservationKind {
        ObservationKind::BloodPressure
    }

    fn normal_range(&self) -> Option<&str> {
        Some("<120/80 mmHg")
    }

    fn channels(&self) -> &[Channel] {
        static CHANNELS: std::sync::LazyLock<Vec<Channel>> = std::sync::LazyLock::new(|| {
            vec![
                channel(
                    "systolic",
                    "Systolic",
                    vec![
                        band(ThresholdFlag::Low, Bound::AtOrBelow(90.0)),
                        band(ThresholdFlag::High, Bound::AtOrAbove(140.0)),
                        band(ThresholdFlag::Critical, Bound::AtOrAbove(180.0)),
                    ],
                ),
                channel(
                    "diastolic",
                    "Diastolic",
                    vec![
                        band(ThresholdFlag::Low, Bound::AtOrBelow(60.0)),
                        band(ThresholdFlag::High, Bound::AtOrAbove(90.0)),
                    ],
                ),
            ]
        });
        &CHANNELS
    }
}
