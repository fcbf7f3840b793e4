use std::io::Write;

use carehub_chart::{Chart, InMemoryStore};
use carehub_vitals::{CustomVital, RecordingContext, VitalsForm};
use clap::Args;

use crate::config::CarehubConfig;

#[derive(Debug, Clone, Default, Args)]
pub struct RecordArgs {
    /// Resident the readings belong to
    #[arg(long)]
    pub subject: String,
    /// Staff member recording (defaults to the configured name)
    #[arg(long = "by")]
    pub recorded_by: Option<String>,
    /// When the readings were taken, RFC 3339 (defaults to now)
    #[arg(long = "at")]
    pub recorded_at: Option<jiff::Timestamp>,
    /// Temperature (°C)
    #[arg(long)]
    pub temp: Option<String>,
    /// Systolic blood pressure (mmHg); needs --diastolic
    #[arg(long)]
    pub systolic: Option<String>,
    /// Diastolic blood pressure (mmHg); needs --systolic
    #[arg(long)]
    pub diastolic: Option<String>,
    /// Heart rate (bpm)
    #[arg(long)]
    pub heart_rate: Option<String>,
    /// Respiratory rate (/min)
    #[arg(long)]
    pub resp_rate: Option<String>,
    /// Oxygen saturation (%)
    #[arg(long)]
    pub spo2: Option<String>,
    /// Weight (kg)
    #[arg(long)]
    pub weight: Option<String>,
    /// Blood sugar level (mmol/L)
    #[arg(long)]
    pub glucose: Option<String>,
    /// Pain score (/10)
    #[arg(long)]
    pub pain: Option<String>,
    /// Custom observation as LABEL:VALUE[:UNIT], repeatable
    #[arg(long = "custom", value_parser = parse_custom)]
    pub custom: Vec<CustomVital>,
}

impl RecordArgs {
    pub fn to_form(&self) -> VitalsForm {
        VitalsForm {
            temperature: self.temp.clone(),
            systolic: self.systolic.clone(),
            diastolic: self.diastolic.clone(),
            heart_rate: self.heart_rate.clone(),
            respiratory_rate: self.resp_rate.clone(),
            oxygen_saturation: self.spo2.clone(),
            weight: self.weight.clone(),
            blood_sugar: self.glucose.clone(),
            pain_score: self.pain.clone(),
            custom: self.custom.clone(),
        }
    }

    pub fn to_context(&self, config: &CarehubConfig) -> RecordingContext {
        RecordingContext {
            subject_id: self.subject.clone(),
            recorded_at: self.recorded_at.unwrap_or_else(jiff::Timestamp::now),
            recorded_by: self
                .recorded_by
                .clone()
                .unwrap_or_else(|| config.recorded_by.clone()),
        }
    }
}

pub fn parse_custom(raw: &str) -> Result<CustomVital, String> {
    let mut parts = raw.splitn(3, ':');
    let label = parts.next().map(str::trim).unwrap_or_default();
    let value = parts.next().map(str::trim).unwrap_or_default();
    let unit = parts.next().map(str::trim).unwrap_or_default();
    if label.is_empty() || value.is_empty() {
        return Err(format!("expected LABEL:VALUE[:UNIT], got '{raw}'"));
    }
    Ok(CustomVital {
        label: label.to_string(),
        value: value.to_string(),
        unit: unit.to_string(),
    })
}

/// Normalize the readings given on the command line and print them as JSON.
pub fn run(out: &mut impl Write, args: &RecordArgs, config: &CarehubConfig) -> eyre::Result<()> {
    if args.systolic.is_some() != args.diastolic.is_some() {
        tracing::warn!("blood pressure needs both --systolic and --diastolic; skipping it");
    }

    let context = args.to_context(config);
    let mut chart = Chart::new(InMemoryStore::new());
    let observations = chart.record_form(&args.to_form(), &context)?;

    serde_json::to_writer_pretty(&mut *out, &observations)?;
    writeln!(out)?;
    Ok(())
}
