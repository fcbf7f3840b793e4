use carehub_core::{ObservationKind, ThresholdFlag};

use crate::VitalSign;
use crate::reference::{Bound, Channel, band, channel};

/// Self-reported pain score out of 10. Only scores above 7 are flagged.
pub struct Pain;

impl VitalSign for Pain {
    fn kind(&self) -> ObservationKind {
        ObservationKind::Pain
    }

    fn normal_range(&self) -> Option<&str> {
        Some("0-3 /10")
    }

    fn channels(&self) -> &[Channel] {
        static CHANNELS: std::sync::LazyLock<Vec<Channel>> = std::sync::LazyLock::new(|| {
            vec![channel(
                "pain",
                "Pain Score",
                vec![band(ThresholdFlag::High, Bound::Above(7.0))],
            )]
        });
        &CHANNELS
    }
}
