use carehub_core::ObservationKind;

use crate::VitalSign;
use crate::reference::{Channel, channel};

/// Body weight in kg. Recorded for trend only; never flagged.
pub struct Weight;

impl VitalSign for Weight {
    fn kind(&self) -> ObservationKind {
        ObservationKind::Weight
    }

    fn normal_range(&self) -> Option<&str> {
        None
    }

    fn channels(&self) -> &[Channel] {
        static CHANNELS: std::sync::LazyLock<Vec<Channel>> =
            std::sync::LazyLock::new(|| vec![channel("weight", "Weight", Vec::new())]);
        &CHANNELS
    }
}
