use std::io::Write;

use carehub_core::ObservationKind;
use carehub_vitals::classify;
use carehub_vitals::parse::parse_reading;

/// Classify one reading typed on the command line.
///
/// Unparseable input is reported as "not recorded" rather than guessed at.
pub fn run(out: &mut impl Write, kind: ObservationKind, value: &str) -> eyre::Result<()> {
    match parse_reading(kind, value) {
        Ok(magnitude) => {
            let unit = kind.default_unit().unwrap_or("");
            let verdict = classify(kind, &magnitude)
                .map(|flag| flag.to_string())
                .unwrap_or_else(|| "NORMAL".to_string());
            writeln!(out, "{} {magnitude} {unit}: {verdict}", kind.display_name())?;
        }
        Err(e) => {
            tracing::debug!(error = %e, "reading not classified");
            writeln!(out, "{}: not recorded ({e})", kind.display_name())?;
        }
    }
    Ok(())
}
