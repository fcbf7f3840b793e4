use std::str::FromStr;

use carehub_core::ObservationKind;
use carehub_vitals::Observation;
use jiff::civil::Date;
use jiff::{ToSpan, Zoned};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ChartError;

/// Which readings to show by flag state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FlagFilter {
    #[default]
    All,
    /// Any of LOW, HIGH or CRITICAL.
    Flagged,
    /// Unflagged only.
    Normal,
}

impl FlagFilter {
    pub fn matches(self, observation: &Observation) -> bool {
        match self {
            FlagFilter::All => true,
            FlagFilter::Flagged => observation.is_flagged(),
            FlagFilter::Normal => !observation.is_flagged(),
        }
    }
}

impl FromStr for FlagFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(FlagFilter::All),
            "flagged" => Ok(FlagFilter::Flagged),
            "normal" => Ok(FlagFilter::Normal),
            other => Err(format!("unknown flag filter '{other}' (all, flagged, normal)")),
        }
    }
}

/// Calendar window relative to "now", evaluated in the chart's time zone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Period {
    /// Sunday through Saturday of the current week.
    #[default]
    Week,
    /// First through last day of the current month.
    Month,
    All,
}

impl Period {
    /// Inclusive civil-date bounds for this period, or `None` for `All`.
    pub fn bounds(self, today: Date) -> Result<Option<(Date, Date)>, ChartError> {
        match self {
            Period::All => Ok(None),
            Period::Month => Ok(Some((today.first_of_month(), today.last_of_month()))),
            Period::Week => {
                let offset = today.weekday().to_sunday_zero_offset();
                let start = today.checked_sub(i64::from(offset).days())?;
                let end = start.checked_add(6.days())?;
                Ok(Some((start, end)))
            }
        }
    }
}

impl FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "week" => Ok(Period::Week),
            "month" => Ok(Period::Month),
            "all" => Ok(Period::All),
            other => Err(format!("unknown period '{other}' (week, month, all)")),
        }
    }
}

/// Criteria for the observation list views. Empty fields match everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ObservationFilter {
    #[serde(default)]
    pub subject_id: Option<String>,
    #[serde(default)]
    pub kind: Option<ObservationKind>,
    #[serde(default)]
    pub flag: FlagFilter,
    #[serde(default)]
    pub period: Period,
}

impl ObservationFilter {
    /// Select matching observations, preserving input order. `now` fixes
    /// both the reference date and the time zone for the period window.
    pub fn apply<'a, I>(&self, observations: I, now: &Zoned) -> Result<Vec<&'a Observation>, ChartError>
    where
        I: IntoIterator<Item = &'a Observation>,
    {
        let bounds = self.period.bounds(now.date())?;
        let tz = now.time_zone().clone();

        let selected = observations
            .into_iter()
            .filter(|o| self.subject_id.as_deref().is_none_or(|id| o.subject_id() == id))
            .filter(|o| self.kind.is_none_or(|kind| o.kind() == kind))
            .filter(|o| self.flag.matches(o))
            .filter(|o| {
                bounds.is_none_or(|(start, end)| {
                    let date = o.recorded_at().to_zoned(tz.clone()).date();
                    start <= date && date <= end
                })
            })
            .collect();
        Ok(selected)
    }
}

/// The current instant in the named IANA time zone.
pub fn now_in(time_zone: &str) -> Result<Zoned, ChartError> {
    let tz = jiff::tz::TimeZone::get(time_zone).map_err(|source| ChartError::TimeZone {
        name: time_zone.to_string(),
        source,
    })?;
    Ok(Zoned::now().with_time_zone(tz))
}
