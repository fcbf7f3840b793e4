use carehub_core::ObservationKind;
use thiserror::Error;

/// Why a raw form value could not be turned into a reading.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("no value entered")]
    Empty,

    #[error("'{raw}' is not a number")]
    NotNumeric { raw: String },

    #[error("'{raw}' is not a finite number")]
    NotFinite { raw: String },

    #[error("'{raw}' is not a blood pressure; expected systolic/diastolic, e.g. 120/80")]
    InvalidBloodPressure { raw: String },
}

#[derive(Debug, Error)]
pub enum VitalsError {
    #[error("invalid {kind} reading: {source}")]
    Parse {
        kind: ObservationKind,
        #[source]
        source: ParseError,
    },
}
