//! carehub-chart
//!
//! A resident's observation chart: where recorded vitals go after the
//! normalizer, and the read-side views staff work from (period and flag
//! filters, readings grouped by round, per-vital statistics, alert tallies).

pub mod chart;
pub mod error;
pub mod filter;
pub mod stats;
pub mod store;

pub use chart::Chart;
pub use error::ChartError;
pub use filter::{FlagFilter, ObservationFilter, Period};
pub use stats::{FlagCounts, Trend, VitalStats};
pub use store::{InMemoryStore, ObservationStore};
