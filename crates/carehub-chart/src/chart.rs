use carehub_vitals::{Observation, RecordingContext, VitalsBatch, VitalsForm, normalize};

use crate::error::ChartError;
use crate::store::ObservationStore;

/// Records vitals submissions into a store.
pub struct Chart<S: ObservationStore> {
    store: S,
}

impl<S: ObservationStore> Chart<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Normalize `batch` and append the result.
    ///
    /// A submission with no parseable vital is rejected with
    /// [`ChartError::NothingRecorded`] and leaves the store untouched.
    pub fn record(
        &mut self,
        batch: &VitalsBatch,
        context: &RecordingContext,
    ) -> Result<Vec<Observation>, ChartError> {
        let observations = normalize(batch, context);
        if observations.is_empty() {
            tracing::warn!(subject_id = %context.subject_id, "vitals submission had no readings");
            return Err(ChartError::NothingRecorded);
        }

        self.store.append(&observations);
        tracing::info!(
            subject_id = %context.subject_id,
            recorded_by = %context.recorded_by,
            count = observations.len(),
            flagged = observations.iter().filter(|o| o.is_flagged()).count(),
            "vital signs recorded"
        );
        Ok(observations)
    }

    /// [`Chart::record`] for a filled-in vitals form.
    pub fn record_form(
        &mut self,
        form: &VitalsForm,
        context: &RecordingContext,
    ) -> Result<Vec<Observation>, ChartError> {
        self.record(&form.to_batch(), context)
    }
}
