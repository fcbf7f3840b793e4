use carehub_core::{ObservationKind, ThresholdFlag};
use carehub_chart::stats::{group_by_time, latest_by_kind, summarize, vital_stats};
use carehub_chart::{
    Chart, ChartError, FlagCounts, FlagFilter, InMemoryStore, ObservationFilter,
    ObservationStore, Period, Trend,
};
use carehub_vitals::{Observation, RecordingContext, VitalsBatch, VitalsForm, normalize};
use jiff::civil::date;
use jiff::tz::{TimeZone, offset};

fn context(subject_id: &str, recorded_at: &str) -> RecordingContext {
    RecordingContext {
        subject_id: subject_id.to_string(),
        recorded_at: recorded_at.parse().unwrap(),
        recorded_by: "Sarah Johnson, RN".to_string(),
    }
}

fn utc(year: i16, month: i8, day: i8, hour: i8) -> jiff::Zoned {
    date(year, month, day)
        .at(hour, 0, 0, 0)
        .to_zoned(TimeZone::UTC)
        .unwrap()
}

/// Two rounds for resident 1 and one for resident 2.
fn seeded() -> InMemoryStore {
    let mut chart = Chart::new(InMemoryStore::new());
    chart
        .record(
            &VitalsBatch::new()
                .with(ObservationKind::BloodPressure, "138/85")
                .with(ObservationKind::Temperature, "36.6")
                .with(ObservationKind::HeartRate, "74"),
            &context("1", "2024-01-15T08:00:00Z"),
        )
        .unwrap();
    chart
        .record(
            &VitalsBatch::new()
                .with(ObservationKind::BloodPressure, "145/90")
                .with(ObservationKind::Temperature, "36.8")
                .with(ObservationKind::HeartRate, "78")
                .with(ObservationKind::OxygenSaturation, "97"),
            &context("1", "2024-01-15T14:30:00Z"),
        )
        .unwrap();
    chart
        .record(
            &VitalsBatch::new()
                .with(ObservationKind::OxygenSaturation, "86")
                .with(ObservationKind::Pain, "8"),
            &context("2", "2024-01-14T09:00:00Z"),
        )
        .unwrap();
    chart.into_store()
}

#[test]
fn empty_submission_is_rejected_and_not_stored() {
    let mut chart = Chart::new(InMemoryStore::new());
    let result = chart.record_form(&VitalsForm::default(), &context("1", "2024-01-15T08:00:00Z"));

    assert!(matches!(result, Err(ChartError::NothingRecorded)));
    assert!(chart.store().is_empty());
}

#[test]
fn recorded_observations_are_appended_in_order() {
    let store = seeded();
    assert_eq!(store.len(), 9);
    assert_eq!(store.for_subject("1").len(), 7);
    assert_eq!(store.for_subject("2").len(), 2);
    assert_eq!(store.all()[0].kind(), ObservationKind::BloodPressure);
}

#[test]
fn stats_track_latest_average_and_trend() {
    let store = seeded();
    let resident = store.for_subject("1");

    let bp = vital_stats(ObservationKind::BloodPressure, resident.iter().copied());
    assert_eq!(bp.count, 2);
    assert_eq!(bp.average, Some(141.5));
    assert_eq!(bp.trend, Trend::Up);
    assert_eq!(bp.latest.as_ref().unwrap().flag(), Some(ThresholdFlag::High));

    let temp = vital_stats(ObservationKind::Temperature, resident.iter().copied());
    assert_eq!(temp.average, Some(36.7));
    assert_eq!(temp.trend, Trend::Up);

    let spo2 = vital_stats(ObservationKind::OxygenSaturation, resident.iter().copied());
    assert_eq!(spo2.count, 1);
    assert_eq!(spo2.trend, Trend::Stable);

    let weight = vital_stats(ObservationKind::Weight, resident.iter().copied());
    assert_eq!(weight.count, 0);
    assert!(weight.latest.is_none());
    assert_eq!(weight.average, None);
}

#[test]
fn trend_uses_recorded_time_not_insertion_order() {
    let later = normalize(
        &VitalsBatch::new().with(ObservationKind::HeartRate, "90"),
        &context("1", "2024-01-15T14:00:00Z"),
    );
    let earlier = normalize(
        &VitalsBatch::new().with(ObservationKind::HeartRate, "70"),
        &context("1", "2024-01-15T08:00:00Z"),
    );
    let store = InMemoryStore::from([later, earlier].concat());

    let stats = vital_stats(ObservationKind::HeartRate, store.all());
    assert_eq!(stats.trend, Trend::Up);
    assert_eq!(
        stats.latest.unwrap().recorded_at(),
        "2024-01-15T14:00:00Z".parse::<jiff::Timestamp>().unwrap()
    );
}

#[test]
fn equal_readings_are_stable() {
    let first = normalize(
        &VitalsBatch::new().with(ObservationKind::Weight, "68.5"),
        &context("1", "2024-01-08T08:00:00Z"),
    );
    let second = normalize(
        &VitalsBatch::new().with(ObservationKind::Weight, "68.5"),
        &context("1", "2024-01-15T08:00:00Z"),
    );
    let store = InMemoryStore::from([first, second].concat());
    assert_eq!(vital_stats(ObservationKind::Weight, store.all()).trend, Trend::Stable);
}

#[test]
fn summary_covers_every_standard_vital() {
    let store = seeded();
    let summary = summarize(store.all());
    let kinds: Vec<_> = summary.iter().map(|s| s.kind).collect();
    assert_eq!(kinds, ObservationKind::STANDARD.to_vec());
}

#[test]
fn flag_counts_split_critical_from_high_low() {
    let store = seeded();
    let counts = FlagCounts::tally(store.all());
    // SpO2 86 is critical; BP 145/90 and pain 8 are high.
    assert_eq!(
        counts,
        FlagCounts {
            critical: 1,
            high_low: 2,
            normal: 6,
        }
    );
    assert_eq!(counts.total(), store.len());
}

#[test]
fn latest_by_kind_picks_newest_reading() {
    let store = seeded();
    let latest = latest_by_kind(store.for_subject("1"));
    assert_eq!(latest.len(), 4);
    assert_eq!(
        latest[&ObservationKind::Temperature].magnitude().to_string(),
        "36.8"
    );
}

#[test]
fn rounds_are_grouped_newest_first() {
    let store = seeded();
    let groups = group_by_time(store.all());
    assert_eq!(groups.len(), 3);
    assert_eq!(groups[0].0.to_string(), "2024-01-15T14:30:00Z");
    assert_eq!(groups[0].1.len(), 4);
    assert_eq!(groups[2].1[0].subject_id(), "2");
}

#[test]
fn filter_by_subject_kind_and_flag() {
    let store = seeded();
    let now = utc(2024, 1, 16, 10);

    let flagged = ObservationFilter {
        flag: FlagFilter::Flagged,
        period: Period::All,
        ..Default::default()
    }
    .apply(store.all(), &now)
    .unwrap();
    assert_eq!(flagged.len(), 3);

    let normal_bp = ObservationFilter {
        subject_id: Some("1".into()),
        kind: Some(ObservationKind::BloodPressure),
        flag: FlagFilter::Normal,
        period: Period::All,
    }
    .apply(store.all(), &now)
    .unwrap();
    assert_eq!(normal_bp.len(), 1);
    assert_eq!(normal_bp[0].magnitude().to_string(), "138/85");
}

#[test]
fn week_period_starts_on_sunday() {
    let store = seeded();
    // 2024-01-16 is a Tuesday; the week runs Sun 14th to Sat 20th.
    let tuesday = utc(2024, 1, 16, 10);
    let this_week = ObservationFilter::default()
        .apply(store.all(), &tuesday)
        .unwrap();
    assert_eq!(this_week.len(), 9);

    // The following Sunday starts a new week.
    let next_sunday = utc(2024, 1, 21, 10);
    let next_week = ObservationFilter::default()
        .apply(store.all(), &next_sunday)
        .unwrap();
    assert!(next_week.is_empty());

    // Saturday 13th is the end of the previous week.
    let saturday = utc(2024, 1, 13, 10);
    let last_week = ObservationFilter::default()
        .apply(store.all(), &saturday)
        .unwrap();
    assert!(last_week.is_empty());
}

#[test]
fn month_period_covers_calendar_month() {
    let store = seeded();
    let end_of_month = utc(2024, 1, 31, 23);
    let filter = ObservationFilter {
        period: Period::Month,
        ..Default::default()
    };
    assert_eq!(filter.apply(store.all(), &end_of_month).unwrap().len(), 9);

    let february = utc(2024, 2, 1, 1);
    assert!(filter.apply(store.all(), &february).unwrap().is_empty());
}

#[test]
fn period_is_evaluated_in_the_chart_time_zone() {
    // Saturday evening in UTC, already Sunday morning at UTC+11.
    let reading = normalize(
        &VitalsBatch::new().with(ObservationKind::HeartRate, "80"),
        &context("3", "2024-01-13T20:00:00Z"),
    );
    let store = InMemoryStore::from(reading);
    let filter = ObservationFilter::default();
    let tuesday = date(2024, 1, 16).at(10, 0, 0, 0);

    let plus_eleven = tuesday.to_zoned(TimeZone::fixed(offset(11))).unwrap();
    assert_eq!(filter.apply(store.all(), &plus_eleven).unwrap().len(), 1);

    let utc = tuesday.to_zoned(TimeZone::UTC).unwrap();
    assert!(filter.apply(store.all(), &utc).unwrap().is_empty());
}

#[test]
fn store_loads_json_and_recomputes_flags() {
    let json = r#"[{
        "id": "0f0e0d0c-0b0a-4908-8706-050403020100",
        "subject_id": "1",
        "kind": "BP",
        "magnitude": {"systolic": 185, "diastolic": 95},
        "unit": "mmHg",
        "flag": "LOW",
        "recorded_at": "2024-01-15T14:30:00Z",
        "recorded_by": "Sarah Johnson, RN"
    }]"#;
    let store = InMemoryStore::from_json_reader(json.as_bytes()).unwrap();
    let observation: &Observation = &store.all()[0];
    assert_eq!(observation.flag(), Some(ThresholdFlag::Critical));
}

#[test]
fn store_refuses_blood_pressure_without_a_pair() {
    let json = r#"[{
        "id": "0f0e0d0c-0b0a-4908-8706-050403020101",
        "subject_id": "1",
        "kind": "BP",
        "magnitude": 200,
        "unit": "mmHg",
        "recorded_at": "2024-01-15T14:30:00Z",
        "recorded_by": "Sarah Johnson, RN"
    }]"#;
    let result = InMemoryStore::from_json_reader(json.as_bytes());
    assert!(matches!(result, Err(ChartError::Serialization(_))));
}

#[test]
fn filters_parse_from_text() {
    assert_eq!("flagged".parse::<FlagFilter>().unwrap(), FlagFilter::Flagged);
    assert_eq!("Month".parse::<Period>().unwrap(), Period::Month);
    assert!("fortnight".parse::<Period>().is_err());
}
