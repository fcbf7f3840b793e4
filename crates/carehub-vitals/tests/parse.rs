use carehub_core::{Magnitude, ObservationKind};
use carehub_vitals::ParseError;
use carehub_vitals::parse::parse_magnitude;

#[test]
fn decimal_text_parses() {
    assert_eq!(
        parse_magnitude(ObservationKind::Temperature, " 36.8 "),
        Ok(Magnitude::Scalar(36.8))
    );
    assert_eq!(
        parse_magnitude(ObservationKind::HeartRate, "72"),
        Ok(Magnitude::Scalar(72.0))
    );
}

#[test]
fn blank_text_is_not_a_reading() {
    assert_eq!(parse_magnitude(ObservationKind::Weight, ""), Err(ParseError::Empty));
    assert_eq!(parse_magnitude(ObservationKind::Weight, "   "), Err(ParseError::Empty));
}

#[test]
fn non_numeric_text_is_rejected() {
    assert!(matches!(
        parse_magnitude(ObservationKind::Pain, "moderate"),
        Err(ParseError::NotNumeric { .. })
    ));
    assert!(matches!(
        parse_magnitude(ObservationKind::Temperature, "36,5"),
        Err(ParseError::NotNumeric { .. })
    ));
}

#[test]
fn non_finite_text_is_rejected() {
    assert!(matches!(
        parse_magnitude(ObservationKind::Temperature, "NaN"),
        Err(ParseError::NotFinite { .. })
    ));
    assert!(matches!(
        parse_magnitude(ObservationKind::HeartRate, "inf"),
        Err(ParseError::NotFinite { .. })
    ));
}

#[test]
fn blood_pressure_needs_both_components() {
    assert_eq!(
        parse_magnitude(ObservationKind::BloodPressure, "145 / 90"),
        Ok(Magnitude::BloodPressure {
            systolic: 145,
            diastolic: 90
        })
    );
    for raw in ["145", "145/", "/90", "145/90/60", "145.5/90", "-1/80", "abc/def"] {
        assert!(
            matches!(
                parse_magnitude(ObservationKind::BloodPressure, raw),
                Err(ParseError::InvalidBloodPressure { .. })
            ),
            "{raw} should be rejected"
        );
    }
}
