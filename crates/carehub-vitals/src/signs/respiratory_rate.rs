use carehub_core::{ObservationKind, ThresholdFlag};

use crate::VitalSign;
use crate::reference::{Bound, Channel, band, channel};

/// Breaths per minute.
pub struct RespiratoryRate;

impl VitalSign for RespiratoryRate {
    fn kind(&self) -> ObservationKind {
        ObservationKind::RespiratoryRate
    }

    fn normal_range(&self) -> Option<&str> {
        Some("12-20 /min")
    }

    fn channels(&self) -> &[Channel] {
        static CHANNELS: std::sync::LazyLock<Vec<Channel>> = std::sync::LazyLock::new(|| {
            vec![channel(
                "respiratory_rate",
                "Respiratory Rate",
                vec![
                    band(ThresholdFlag::Low, Bound::AtOrBelow(12.0)),
                    band(ThresholdFlag::High, Bound::AtOrAbove(20.0)),
                ],
            )]
        });
        &CHANNELS
    }
}
