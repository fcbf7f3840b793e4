use carehub_core::{ObservationKind, ThresholdFlag};

use crate::VitalSign;
use crate::reference::{Bound, Channel, band, channel};

/// Body temperature in °C. Hypothermia at or below 35.5, fever at or above 38.5.
pub struct Temperature;

impl VitalSign for Temperature {
    fn kind(&self) -> ObservationKind {
        ObservationKind::Temperature
    }

    fn normal_range(&self) -> Option<&str> {
        Some("36.1-37.2°C")
    }

    fn channels(&self) -> &[Channel] {
        static CHANNELS: std::sync::LazyLock<Vec<Channel>> = std::sync::LazyLock::new(|| {
            vec![channel(
                "temperature",
                "Temperature",
                vec![
                    band(ThresholdFlag::Low, Bound::AtOrBelow(35.5)),
                    band(ThresholdFlag::High, Bound::AtOrAbove(38.5)),
                ],
            )]
        });
        &CHANNELS
    }
}
