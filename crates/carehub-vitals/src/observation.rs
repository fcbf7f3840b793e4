use carehub_core::{Magnitude, ObservationKind, ThresholdFlag};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::classify::classify;
use crate::normalize::RecordingContext;

/// A single recorded vital sign. Immutable once created.
///
/// `flag` is always derived from `kind` and `magnitude`; there is no way to
/// set it directly. Deserializing recomputes it and ignores any stored flag,
/// so a record read back from disk can never disagree with the rule table.
/// The magnitude shape always matches the kind: a systolic/diastolic pair for
/// blood pressure, a single decimal for everything else.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct Observation {
    id: Uuid,
    subject_id: String,
    kind: ObservationKind,
    /// Name of a custom observation (e.g. "Neuro obs"). Unset for standard kinds.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    label: Option<String>,
    magnitude: Magnitude,
    unit: String,
    flag: Option<ThresholdFlag>,
    recorded_at: jiff::Timestamp,
    recorded_by: String,
}

impl Observation {
    /// Create a new observation with a fresh id and a computed flag.
    /// `magnitude` must already have the shape [`parse_magnitude`] gives `kind`.
    ///
    /// [`parse_magnitude`]: crate::parse::parse_magnitude
    pub(crate) fn new(
        kind: ObservationKind,
        magnitude: Magnitude,
        unit: impl Into<String>,
        label: Option<String>,
        context: &RecordingContext,
    ) -> Self {
        Self::assemble(
            Uuid::new_v4(),
            kind,
            magnitude,
            unit.into(),
            label,
            context.subject_id.clone(),
            context.recorded_at,
            context.recorded_by.clone(),
        )
    }

    #[allow(clippy::too_many_arguments)]
    fn assemble(
        id: Uuid,
        kind: ObservationKind,
        magnitude: Magnitude,
        unit: String,
        label: Option<String>,
        subject_id: String,
        recorded_at: jiff::Timestamp,
        recorded_by: String,
    ) -> Self {
        Self {
            id,
            subject_id,
            kind,
            label,
            flag: classify(kind, &magnitude),
            magnitude,
            unit,
            recorded_at,
            recorded_by,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn subject_id(&self) -> &str {
        &self.subject_id
    }

    pub fn kind(&self) -> ObservationKind {
        self.kind
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn magnitude(&self) -> &Magnitude {
        &self.magnitude
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn flag(&self) -> Option<ThresholdFlag> {
        self.flag
    }

    pub fn is_flagged(&self) -> bool {
        self.flag.is_some()
    }

    pub fn recorded_at(&self) -> jiff::Timestamp {
        self.recorded_at
    }

    pub fn recorded_by(&self) -> &str {
        &self.recorded_by
    }

    /// Display name: the custom label when present, otherwise the kind's name.
    pub fn name(&self) -> &str {
        self.label
            .as_deref()
            .unwrap_or_else(|| self.kind.display_name())
    }
}

/// Wire shape accepted when reading observations back. Any `flag` field in
/// the input is ignored.
#[derive(Deserialize)]
struct ObservationRecord {
    id: Uuid,
    subject_id: String,
    kind: ObservationKind,
    #[serde(default)]
    label: Option<String>,
    magnitude: Magnitude,
    unit: String,
    recorded_at: jiff::Timestamp,
    recorded_by: String,
}

impl<'de> Deserialize<'de> for Observation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let record = ObservationRecord::deserialize(deserializer)?;
        if record.kind.is_blood_pressure() != record.magnitude.is_blood_pressure() {
            return Err(D::Error::custom(format!(
                "magnitude {} does not fit observation kind {}",
                record.magnitude,
                record.kind.code()
            )));
        }
        Ok(Observation::assemble(
            record.id,
            record.kind,
            record.magnitude,
            record.unit,
            record.label,
            record.subject_id,
            record.recorded_at,
            record.recorded_by,
        ))
    }
}
