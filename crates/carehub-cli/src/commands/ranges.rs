use std::io::Write;

use carehub_core::ObservationKind;
use carehub_vitals::reference::Channel;
use carehub_vitals::{VitalSign, all_vital_signs};
use serde::Serialize;

#[derive(Serialize)]
struct RangeInfo<'a> {
    kind: ObservationKind,
    name: &'a str,
    unit: Option<&'static str>,
    normal_range: Option<&'a str>,
    channels: &'a [Channel],
}

/// Print the threshold guidelines for every vital sign.
pub fn run(out: &mut impl Write, json: bool) -> eyre::Result<()> {
    let signs = all_vital_signs();

    if json {
        let infos: Vec<RangeInfo<'_>> = signs.iter().map(|sign| range_info(*sign)).collect();
        serde_json::to_writer_pretty(&mut *out, &infos)?;
        writeln!(out)?;
        return Ok(());
    }

    for sign in signs {
        writeln!(out, "{}", sign.describe_thresholds())?;
    }
    Ok(())
}

fn range_info(sign: &'static dyn VitalSign) -> RangeInfo<'static> {
    RangeInfo {
        kind: sign.kind(),
        name: sign.name(),
        unit: sign.kind().default_unit(),
        normal_range: sign.normal_range(),
        channels: sign.channels(),
    }
}
