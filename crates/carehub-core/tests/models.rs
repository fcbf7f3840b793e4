use carehub_core::{Magnitude, ObservationKind, ThresholdFlag};

#[test]
fn kinds_serialize_as_ui_codes() {
    let json = serde_json::to_string(&ObservationKind::OxygenSaturation).unwrap();
    assert_eq!(json, "\"SPO2\"");

    let kind: ObservationKind = serde_json::from_str("\"BSL\"").unwrap();
    assert_eq!(kind, ObservationKind::BloodGlucose);
}

#[test]
fn kind_parses_codes_and_long_names() {
    assert_eq!("hr".parse::<ObservationKind>().unwrap(), ObservationKind::HeartRate);
    assert_eq!(
        "blood_pressure".parse::<ObservationKind>().unwrap(),
        ObservationKind::BloodPressure
    );
    assert_eq!(" TEMP ".parse::<ObservationKind>().unwrap(), ObservationKind::Temperature);
    assert!("pulse".parse::<ObservationKind>().is_err());
}

#[test]
fn custom_kind_has_no_fixed_unit() {
    assert_eq!(ObservationKind::Custom.default_unit(), None);
    for kind in ObservationKind::STANDARD {
        assert!(kind.default_unit().is_some(), "{kind} should have a unit");
    }
}

#[test]
fn flags_rank_by_severity() {
    assert!(ThresholdFlag::Critical > ThresholdFlag::High);
    assert!(ThresholdFlag::High > ThresholdFlag::Low);
    assert!(Some(ThresholdFlag::Low) > None);
    assert!(ThresholdFlag::Critical.is_critical());
    assert!(!ThresholdFlag::High.is_critical());
}

#[test]
fn flags_serialize_upper_case() {
    let json = serde_json::to_string(&ThresholdFlag::Critical).unwrap();
    assert_eq!(json, "\"CRITICAL\"");
    assert_eq!("high".parse::<ThresholdFlag>().unwrap(), ThresholdFlag::High);
}

#[test]
fn magnitude_displays_as_entered() {
    assert_eq!(Magnitude::Scalar(36.8).to_string(), "36.8");
    assert_eq!(Magnitude::Scalar(72.0).to_string(), "72");
    let bp = Magnitude::BloodPressure {
        systolic: 145,
        diastolic: 90,
    };
    assert_eq!(bp.to_string(), "145/90");
    assert_eq!(bp.primary(), 145.0);
}

#[test]
fn magnitude_is_untagged_on_the_wire() {
    let scalar: Magnitude = serde_json::from_str("97").unwrap();
    assert_eq!(scalar, Magnitude::Scalar(97.0));

    let bp: Magnitude = serde_json::from_str(r#"{"systolic":138,"diastolic":85}"#).unwrap();
    assert_eq!(
        bp,
        Magnitude::BloodPressure {
            systolic: 138,
            diastolic: 85
        }
    );
    assert!(bp.is_blood_pressure());
    assert!(!scalar.is_blood_pressure());
}
