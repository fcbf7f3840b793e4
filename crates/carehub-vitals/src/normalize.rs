//! Batch normalizer: one vitals submission in, zero or more observations out.

use carehub_core::ObservationKind;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::observation::Observation;
use crate::parse::parse_magnitude;

/// Metadata shared by every observation in one submission.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RecordingContext {
    pub subject_id: String,
    pub recorded_at: jiff::Timestamp,
    pub recorded_by: String,
}

/// The raw text entered for one vital.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RawVital {
    pub kind: ObservationKind,
    pub value: String,
    /// Required for custom observations; ignored otherwise.
    #[serde(default)]
    pub label: Option<String>,
    /// Required for custom observations; standard kinds use their fixed unit.
    #[serde(default)]
    pub unit: Option<String>,
}

impl RawVital {
    pub fn new(kind: ObservationKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
            label: None,
            unit: None,
        }
    }

    pub fn custom(
        label: impl Into<String>,
        value: impl Into<String>,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            kind: ObservationKind::Custom,
            value: value.into(),
            label: Some(label.into()),
            unit: Some(unit.into()),
        }
    }

    /// Two entries address the same slot when they have the same kind and,
    /// for custom observations, the same label.
    fn same_slot(&self, other: &RawVital) -> bool {
        self.kind == other.kind
            && (self.kind != ObservationKind::Custom || self.label == other.label)
    }
}

/// An ordered mapping of vital kind to raw input.
///
/// Declaration order is preserved. Setting a kind that is already present
/// replaces its value in place.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VitalsBatch {
    entries: Vec<RawVital>,
}

impl VitalsBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`VitalsBatch::insert`].
    pub fn with(mut self, kind: ObservationKind, value: impl Into<String>) -> Self {
        self.insert(RawVital::new(kind, value));
        self
    }

    pub fn with_custom(
        mut self,
        label: impl Into<String>,
        value: impl Into<String>,
        unit: impl Into<String>,
    ) -> Self {
        self.insert(RawVital::custom(label, value, unit));
        self
    }

    pub fn insert(&mut self, vital: RawVital) {
        match self.entries.iter_mut().find(|e| e.same_slot(&vital)) {
            Some(existing) => *existing = vital,
            None => self.entries.push(vital),
        }
    }

    pub fn entries(&self) -> &[RawVital] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<RawVital> for VitalsBatch {
    fn from_iter<I: IntoIterator<Item = RawVital>>(iter: I) -> Self {
        let mut batch = VitalsBatch::new();
        for vital in iter {
            batch.insert(vital);
        }
        batch
    }
}

impl<S: Into<String>> FromIterator<(ObservationKind, S)> for VitalsBatch {
    fn from_iter<I: IntoIterator<Item = (ObservationKind, S)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(kind, value)| RawVital::new(kind, value))
            .collect()
    }
}

/// Build observations from every vital in `batch` that has a parseable value.
///
/// Empty and unparseable entries are skipped, never fatal. Output order
/// follows the batch's declaration order. An empty result is not an error
/// here; the caller decides whether "nothing recorded" is a validation
/// failure.
pub fn normalize(batch: &VitalsBatch, context: &RecordingContext) -> Vec<Observation> {
    let mut observations = Vec::with_capacity(batch.len());

    for vital in batch.entries() {
        let magnitude = match parse_magnitude(vital.kind, &vital.value) {
            Ok(magnitude) => magnitude,
            Err(e) => {
                tracing::debug!(kind = %vital.kind, error = %e, "vital not recorded");
                continue;
            }
        };

        let unit = match (vital.kind.default_unit(), vital.unit.as_deref()) {
            (Some(unit), _) => unit.to_string(),
            (None, Some(unit)) => unit.trim().to_string(),
            (None, None) => String::new(),
        };
        let label = match vital.kind {
            ObservationKind::Custom => vital
                .label
                .as_deref()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(str::to_string),
            _ => None,
        };

        let observation = Observation::new(vital.kind, magnitude, unit, label, context);
        if let Some(flag) = observation.flag() {
            tracing::info!(
                subject_id = %context.subject_id,
                kind = %vital.kind,
                value = %observation.magnitude(),
                %flag,
                "abnormal vital sign"
            );
        }
        observations.push(observation);
    }

    tracing::debug!(
        subject_id = %context.subject_id,
        submitted = batch.len(),
        recorded = observations.len(),
        "normalized vitals batch"
    );
    observations
}
