use std::io::Write;
use std::path::Path;

use crate::config::{CarehubConfig, load_config, save_config};

/// Print the effective config as JSON.
pub fn show(out: &mut impl Write, path: &Path) -> eyre::Result<()> {
    let config = load_config(path)?;
    writeln!(out, "# {}", path.display())?;
    serde_json::to_writer_pretty(&mut *out, &config)?;
    writeln!(out)?;
    Ok(())
}

/// Write a default config file unless one already exists.
pub fn init(out: &mut impl Write, path: &Path, force: bool) -> eyre::Result<()> {
    if path.exists() && !force {
        return Err(eyre::eyre!(
            "config already exists at {} (use --force to overwrite)",
            path.display()
        ));
    }
    save_config(path, &CarehubConfig::default())?;
    writeln!(out, "wrote {}", path.display())?;
    Ok(())
}
