use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use marquee_core::options::CropOptions;

#[derive(Args)]
pub struct ConfigArgs {
    /// Write config to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Print or save the default CropOptions as TOML.
pub fn run(args: &ConfigArgs) -> Result<()> {
    let toml_str = toml::to_string_pretty(&CropOptions::default())?;

    if let Some(ref path) = args.output {
        std::fs::write(path, &toml_str)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        println!("Default config saved to {}", path.display());
    } else {
        print!("{}", toml_str);
    }

    Ok(())
}

/// Read CropOptions from a TOML file. Missing keys take defaults.
pub fn load_options(path: &Path) -> Result<CropOptions> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let options = toml::from_str(&content)
        .with_context(|| format!("Invalid config {}", path.display()))?;
    Ok(options)
}
