use std::fs::File;
use std::io::{BufReader, Write};
use std::path::PathBuf;

use carehub_chart::filter::now_in;
use carehub_chart::stats::{summarize, vital_stats};
use carehub_chart::{
    FlagCounts, FlagFilter, InMemoryStore, ObservationFilter, ObservationStore, Period, Trend,
    VitalStats,
};
use carehub_core::ObservationKind;
use clap::Args;
use serde::Serialize;

use crate::config::CarehubConfig;

#[derive(Debug, Clone, Args)]
pub struct SummaryArgs {
    /// JSON file holding an array of observations
    pub input: PathBuf,
    /// Only this resident
    #[arg(long)]
    pub subject: Option<String>,
    /// Only this vital sign
    #[arg(long)]
    pub kind: Option<ObservationKind>,
    /// week, month or all
    #[arg(long, default_value = "all")]
    pub period: Period,
    /// all, flagged or normal
    #[arg(long, default_value = "all")]
    pub flag: FlagFilter,
    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct Summary {
    observations: usize,
    flags: FlagCounts,
    vitals: Vec<VitalStats>,
}

/// Per-vital statistics and flag tallies for the selected observations.
pub fn run(out: &mut impl Write, args: &SummaryArgs, config: &CarehubConfig) -> eyre::Result<()> {
    let file = File::open(&args.input)
        .map_err(|e| eyre::eyre!("failed to open {}: {e}", args.input.display()))?;
    let store = InMemoryStore::from_json_reader(BufReader::new(file))?;

    let filter = ObservationFilter {
        subject_id: args.subject.clone(),
        kind: args.kind,
        flag: args.flag,
        period: args.period,
    };
    let now = now_in(&config.time_zone)?;
    let selected = filter.apply(store.all(), &now)?;
    tracing::debug!(loaded = store.len(), selected = selected.len(), "filtered observations");

    let vitals = match args.kind {
        Some(kind) => vec![vital_stats(kind, selected.iter().copied())],
        None => summarize(selected.iter().copied()),
    };
    let summary = Summary {
        observations: selected.len(),
        flags: FlagCounts::tally(selected.iter().copied()),
        vitals,
    };

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &summary)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(
        out,
        "{} observations: {} critical, {} high/low, {} normal",
        summary.observations, summary.flags.critical, summary.flags.high_low, summary.flags.normal
    )?;
    for stats in &summary.vitals {
        write_stats_line(out, stats)?;
    }
    Ok(())
}

fn write_stats_line(out: &mut impl Write, stats: &VitalStats) -> eyre::Result<()> {
    let name = stats.kind.display_name();
    let unit = stats.kind.default_unit().unwrap_or("");
    let Some(latest) = &stats.latest else {
        writeln!(out, "{name:<18} no data")?;
        return Ok(());
    };

    let flag = latest
        .flag()
        .map(|f| format!(" [{f}]"))
        .unwrap_or_default();
    let average = stats
        .average
        .map(|a| format!("{a} {unit}"))
        .unwrap_or_else(|| "-".to_string());
    let trend = match stats.trend {
        Trend::Up => "up",
        Trend::Down => "down",
        Trend::Stable => "stable",
    };
    writeln!(
        out,
        "{name:<18} latest {} {unit}{flag}, average {average}, {} readings, trend {trend}",
        latest.magnitude(),
        stats.count,
    )?;
    Ok(())
}
