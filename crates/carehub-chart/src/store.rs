use std::io::Read;

use carehub_vitals::Observation;

use crate::error::ChartError;

/// Where recorded observations live. Append-only: corrections are new
/// observations, never edits.
pub trait ObservationStore {
    /// Append observations in the given order.
    fn append(&mut self, observations: &[Observation]);

    /// Every stored observation, in insertion order.
    fn all(&self) -> &[Observation];

    /// Observations for one resident, in insertion order.
    fn for_subject(&self, subject_id: &str) -> Vec<&Observation> {
        self.all()
            .iter()
            .filter(|o| o.subject_id() == subject_id)
            .collect()
    }

    fn len(&self) -> usize {
        self.all().len()
    }

    fn is_empty(&self) -> bool {
        self.all().is_empty()
    }
}

/// Process-local store backed by a `Vec`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    observations: Vec<Observation>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store from a JSON array of observations. Flags are recomputed
    /// on the way in.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, ChartError> {
        let observations: Vec<Observation> = serde_json::from_reader(reader)?;
        tracing::debug!(count = observations.len(), "loaded observations");
        Ok(Self { observations })
    }
}

impl From<Vec<Observation>> for InMemoryStore {
    fn from(observations: Vec<Observation>) -> Self {
        Self { observations }
    }
}

impl ObservationStore for InMemoryStore {
    fn append(&mut self, observations: &[Observation]) {
        self.observations.extend_from_slice(observations);
    }

    fn all(&self) -> &[Observation] {
        &self.observations
    }
}
