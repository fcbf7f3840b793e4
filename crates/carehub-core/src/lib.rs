//! carehub-core
//!
//! Pure domain vocabulary shared by the CareHub crates: the vital-sign
//! kinds, the shape of a recorded reading, and the threshold flags.
//! No I/O and no classification logic live here.

pub mod error;
pub mod models;

pub use error::CoreError;
pub use models::flag::ThresholdFlag;
pub use models::kind::ObservationKind;
pub use models::magnitude::Magnitude;
