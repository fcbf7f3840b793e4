//! Raw form text to typed readings.
//!
//! Every value a user types goes through here before classification. A
//! failure means "this vital was not recorded", never a guessed number.

use carehub_core::{Magnitude, ObservationKind};

use crate::error::{ParseError, VitalsError};

/// Parse the raw text entered for `kind`.
///
/// Blood pressure expects `systolic/diastolic` in whole mmHg; every other
/// kind expects one finite decimal. Surrounding whitespace is ignored.
pub fn parse_magnitude(kind: ObservationKind, raw: &str) -> Result<Magnitude, ParseError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(ParseError::Empty);
    }
    if kind.is_blood_pressure() {
        parse_blood_pressure(text)
    } else {
        parse_decimal(text).map(Magnitude::Scalar)
    }
}

/// Same as [`parse_magnitude`] but tags the error with the kind.
pub fn parse_reading(kind: ObservationKind, raw: &str) -> Result<Magnitude, VitalsError> {
    parse_magnitude(kind, raw).map_err(|source| VitalsError::Parse { kind, source })
}

pub fn parse_decimal(text: &str) -> Result<f64, ParseError> {
    let value: f64 = text.trim().parse().map_err(|_| ParseError::NotNumeric {
        raw: text.to_string(),
    })?;
    if !value.is_finite() {
        return Err(ParseError::NotFinite {
            raw: text.to_string(),
        });
    }
    Ok(value)
}

fn parse_blood_pressure(text: &str) -> Result<Magnitude, ParseError> {
    let invalid = || ParseError::InvalidBloodPressure {
        raw: text.to_string(),
    };

    let (systolic, diastolic) = text.split_once('/').ok_or_else(invalid)?;
    let systolic: u16 = systolic.trim().parse().map_err(|_| invalid())?;
    let diastolic: u16 = diastolic.trim().parse().map_err(|_| invalid())?;

    Ok(Magnitude::BloodPressure {
        systolic,
        diastolic,
    })
}
