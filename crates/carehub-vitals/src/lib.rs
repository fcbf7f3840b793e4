//! carehub-vitals
//!
//! Vital-sign threshold rules and observation recording. Pure functions,
//! no storage: the one rule table every call site classifies against, the
//! parse step from raw form text, and the normalizer that turns a submitted
//! vitals form into immutable [`Observation`] records.

pub mod classify;
pub mod error;
pub mod form;
pub mod normalize;
pub mod observation;
pub mod parse;
pub mod reference;
pub mod signs;

use carehub_core::{ObservationKind, ThresholdFlag};
use reference::Channel;

pub use classify::classify;
pub use error::{ParseError, VitalsError};
pub use form::{CustomVital, VitalsForm};
pub use normalize::{RawVital, RecordingContext, VitalsBatch, normalize};
pub use observation::Observation;

/// Trait implemented by each vital sign that carries reference ranges.
pub trait VitalSign: Send + Sync {
    /// The observation kind this rule set applies to.
    fn kind(&self) -> ObservationKind;

    /// Human-readable name (e.g., "Heart Rate", "SpO₂").
    fn name(&self) -> &str {
        self.kind().display_name()
    }

    /// The normal range shown to staff as guidance, if one is defined.
    fn normal_range(&self) -> Option<&str>;

    /// The measured components and their threshold bands.
    fn channels(&self) -> &[Channel];

    /// Classify one reading, given one value per channel in channel order.
    ///
    /// When several channels raise a flag the most severe one is returned;
    /// on equal severity the earlier channel wins.
    fn classify(&self, values: &[f64]) -> Option<ThresholdFlag> {
        let mut worst = None;
        for (channel, &value) in self.channels().iter().zip(values) {
            let flag = channel.classify(value);
            if flag > worst {
                worst = flag;
            }
        }
        worst
    }

    /// Format the threshold rules as plain text for the guidelines panel.
    fn describe_thresholds(&self) -> String {
        let unit = self.kind().default_unit().unwrap_or("");
        let mut output = self.name().to_string();
        if let Some(range) = self.normal_range() {
            output.push_str(&format!(" (normal {range})"));
        }
        output.push('\n');

        let multi = self.channels().len() > 1;
        for channel in self.channels() {
            for band in &channel.bands {
                if multi {
                    output.push_str(&format!(
                        "- {} {}: {} {}\n",
                        channel.name, band.flag, band.bound, unit
                    ));
                } else {
                    output.push_str(&format!("- {}: {} {}\n", band.flag, band.bound, unit));
                }
            }
        }
        if self.channels().iter().all(|c| c.bands.is_empty()) {
            output.push_str("- not flagged\n");
        }
        output
    }
}

/// Return every vital sign with a rule set, in form order.
pub fn all_vital_signs() -> Vec<&'static dyn VitalSign> {
    ObservationKind::STANDARD
        .into_iter()
        .filter_map(get_vital_sign)
        .collect()
}

/// Look up the rule set for a kind. Custom observations have none.
pub fn get_vital_sign(kind: ObservationKind) -> Option<&'static dyn VitalSign> {
    let sign: &'static dyn VitalSign = match kind {
        ObservationKind::Temperature => &signs::temperature::Temperature,
        ObservationKind::BloodPressure => &signs::blood_pressure::BloodPressure,
        ObservationKind::HeartRate => &signs::heart_rate::HeartRate,
        ObservationKind::RespiratoryRate => &signs::respiratory_rate::RespiratoryRate,
        ObservationKind::OxygenSaturation => &signs::oxygen_saturation::OxygenSaturation,
        ObservationKind::Weight => &signs::weight::Weight,
        ObservationKind::BloodGlucose => &signs::blood_glucose::BloodGlucose,
        ObservationKind::Pain => &signs::pain::Pain,
        ObservationKind::Custom => return None,
    };
    Some(sign)
}
