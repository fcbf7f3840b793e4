use std::collections::BTreeMap;

use carehub_core::ObservationKind;
use carehub_vitals::Observation;
use serde::Serialize;
use ts_rs::TS;

/// Direction of the two most recent readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Trend {
    Up,
    Down,
    Stable,
}

/// Summary of one vital sign over a set of observations.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct VitalStats {
    pub kind: ObservationKind,
    pub count: usize,
    pub latest: Option<Observation>,
    /// Mean of the primary value (systolic for blood pressure), to one decimal.
    pub average: Option<f64>,
    pub trend: Trend,
}

/// Alert tallies for the vitals dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct FlagCounts {
    pub critical: usize,
    /// HIGH and LOW together.
    pub high_low: usize,
    /// Unflagged readings.
    pub normal: usize,
}

impl FlagCounts {
    pub fn tally<'a, I>(observations: I) -> Self
    where
        I: IntoIterator<Item = &'a Observation>,
    {
        let mut counts = FlagCounts::default();
        for observation in observations {
            match observation.flag() {
                Some(flag) if flag.is_critical() => counts.critical += 1,
                Some(_) => counts.high_low += 1,
                None => counts.normal += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.critical + self.high_low + self.normal
    }
}

/// Statistics for `kind` over `observations`.
///
/// Readings are ordered by `recorded_at` (stable for ties, so insertion
/// order breaks them) before picking the latest and the trend.
pub fn vital_stats<'a, I>(kind: ObservationKind, observations: I) -> VitalStats
where
    I: IntoIterator<Item = &'a Observation>,
{
    let mut readings: Vec<&Observation> = observations
        .into_iter()
        .filter(|o| o.kind() == kind)
        .collect();
    readings.sort_by_key(|o| o.recorded_at());

    let values: Vec<f64> = readings.iter().map(|o| o.magnitude().primary()).collect();
    let average = if values.is_empty() {
        None
    } else {
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        Some(round_one_decimal(mean))
    };

    let trend = match values.as_slice() {
        [.., previous, last] if last > previous => Trend::Up,
        [.., previous, last] if last < previous => Trend::Down,
        _ => Trend::Stable,
    };

    VitalStats {
        kind,
        count: readings.len(),
        latest: readings.last().map(|o| (*o).clone()),
        average,
        trend,
    }
}

/// Statistics for each of the eight standard vital signs, in form order.
pub fn summarize<'a, I>(observations: I) -> Vec<VitalStats>
where
    I: IntoIterator<Item = &'a Observation>,
    I::IntoIter: Clone,
{
    let observations = observations.into_iter();
    ObservationKind::STANDARD
        .into_iter()
        .map(|kind| vital_stats(kind, observations.clone()))
        .collect()
}

/// The most recent observation of each kind.
pub fn latest_by_kind<'a, I>(observations: I) -> BTreeMap<ObservationKind, &'a Observation>
where
    I: IntoIterator<Item = &'a Observation>,
{
    let mut latest: BTreeMap<ObservationKind, &Observation> = BTreeMap::new();
    for observation in observations {
        latest
            .entry(observation.kind())
            .and_modify(|current| {
                if observation.recorded_at() > current.recorded_at() {
                    *current = observation;
                }
            })
            .or_insert(observation);
    }
    latest
}

/// Group observations taken at the same instant (one vitals round), newest
/// round first. Within a round, insertion order is kept.
pub fn group_by_time<'a, I>(observations: I) -> Vec<(jiff::Timestamp, Vec<&'a Observation>)>
where
    I: IntoIterator<Item = &'a Observation>,
{
    let mut groups: BTreeMap<jiff::Timestamp, Vec<&Observation>> = BTreeMap::new();
    for observation in observations {
        groups
            .entry(observation.recorded_at())
            .or_default()
            .push(observation);
    }
    groups.into_iter().rev().collect()
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
