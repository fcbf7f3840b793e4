use carehub_core::{ObservationKind, ThresholdFlag};

use crate::VitalSign;
use crate::reference::{Bound, Channel, band, channel};

/// Peripheral oxygen saturation (SpO₂) in percent.
/// The critical band sits inside the low band and outranks it.
pub struct OxygenSaturation;

impl VitalSign for OxygenSaturation {
    fn kind(&self) -> ObservationKind {
        ObservationKind::OxygenSaturation
    }

    fn normal_range(&self) -> Option<&str> {
        Some(">95%")
    }

    fn channels(&self) -> &[Channel] {
        static CHANNELS: std::sync::LazyLock<Vec<Channel>> = std::sync::LazyLock::new(|| {
            vec![channel(
                "oxygen_saturation",
                "SpO₂",
                vec![
                    band(ThresholdFlag::Low, Bound::AtOrBelow(95.0)),
                    band(ThresholdFlag::Critical, Bound::AtOrBelow(88.0)),
                ],
            )]
        });
        &CHANNELS
    }
}
