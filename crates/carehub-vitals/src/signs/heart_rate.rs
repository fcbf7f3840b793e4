use carehub_core::{ObservationKind, ThresholdFlag};

use crate::VitalSign;
use crate::reference::{Bound, Channel, band, channel};

/// Heart rate in beats per minute.
///
/// Both limits are closed: exactly 60 bpm is LOW and exactly 100 bpm is HIGH.
/// There is no critical tier.
pub struct HeartRate;

impl VitalSign for HeartRate {
    fn kind(&self) -> ObservationKind {
        ObservationKind::HeartRate
    }

    fn normal_range(&self) -> Option<&str> {
        Some("60-100 bpm")
    }

    fn channels(&self) -> &[Channel] {
        static CHANNELS: std::sync::LazyLock<Vec<Channel>> = std::sync::LazyLock::new(|| {
            vec![channel(
                "heart_rate",
                "Heart Rate",
                vec![
                    band(ThresholdFlag::Low, Bound::AtOrBelow(60.0)),
                    band(ThresholdFlag::High, Bound::AtOrAbove(100.0)),
                ],
            )]
        });
        &CHANNELS
    }
}
