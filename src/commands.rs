// src/commands.rs
//! Command handlers for the eqbands CLI

use crate::cli::{Cli, ConvertArgs};
use anyhow::{bail, Context, Result};
use clap::CommandFactory;
use clap_complete::Shell;
use eqbands::{ConvertConfig, ConvertMode, Converter, LineEnding};
use std::io::Write;
use tracing::{error, info};

/// Merge the config file (if any) with command-line overrides
pub fn resolve_config(args: &ConvertArgs) -> Result<ConvertConfig> {
    let mut config = match &args.config {
        Some(path) => {
            info!("Loading config from {}", path.display());
            ConvertConfig::from_file(path)?
        }
        None => ConvertConfig::default(),
    };

    if let Some(dir) = &args.input_dir {
        config.input_dir = dir.clone();
    }
    if let Some(output) = &args.output {
        config.output_path = output.clone();
    }
    if let Some(pattern) = &args.pattern {
        config.pattern = pattern.clone();
    }
    if args.legacy {
        config.mode = ConvertMode::Legacy;
    }
    if args.no_validate {
        config.validate = false;
    }
    if args.crlf {
        config.line_ending = LineEnding::Crlf;
    }
    if let Some(name) = &args.array_name {
        config.array_name = name.clone();
    }
    if let Some(ty) = &args.element_type {
        config.element_type = ty.clone();
    }

    Ok(config)
}

/// Convert band files into the header (or stdout)
pub fn cmd_convert(args: &ConvertArgs) -> Result<()> {
    let config = resolve_config(args)?;
    info!(
        "Converting '{}' in {} ({:?} mode)",
        config.pattern,
        config.input_dir.display(),
        config.mode
    );
    let converter = Converter::new(config);

    if args.stdout {
        let rendered = converter.render().context("Failed to render band header")?;
        std::io::stdout()
            .write_all(rendered.text.as_bytes())
            .context("Failed to write to stdout")?;
        return Ok(());
    }

    let result = converter.convert().context("Conversion failed")?;
    println!(
        "Wrote {} band(s) to {} ({} bytes)",
        result.band_count,
        result.output_path.display(),
        result.bytes_written
    );
    Ok(())
}

/// Parse and validate every band file, reporting all failures
pub fn cmd_check(args: &ConvertArgs) -> Result<()> {
    let mut config = resolve_config(args)?;
    config.validate = true;
    let converter = Converter::new(config);

    let inputs = converter.collect_inputs()?;
    let mut failures = 0;

    for path in &inputs {
        match converter.load_band(path) {
            Ok(band) => {
                let shape = band
                    .shape()
                    .map_or_else(|| "irregular".to_string(), |s| s.to_string());
                println!("{}: ok ({})", path.display(), shape);
            }
            Err(e) => {
                error!("{}", e);
                println!("{}: FAILED", path.display());
                failures += 1;
            }
        }
    }

    if failures > 0 {
        bail!("{} of {} band file(s) failed validation", failures, inputs.len());
    }

    println!("{} band file(s) ok", inputs.len());
    Ok(())
}

/// Print a completion script for `shell`
pub fn cmd_completions(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "eqbands", &mut std::io::stdout());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_resolve_defaults() {
        let config = resolve_config(&ConvertArgs::default()).unwrap();
        assert_eq!(config, ConvertConfig::default());
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("eqbands.toml");
        std::fs::write(
            &config_path,
            "input_dir = \"from-file\"\npattern = \"*.dump\"\narray_name = \"eq\"\n",
        )
        .unwrap();

        let args = ConvertArgs {
            config: Some(config_path),
            input_dir: Some(PathBuf::from("from-flag")),
            no_validate: true,
            crlf: true,
            ..Default::default()
        };
        let config = resolve_config(&args).unwrap();
        assert_eq!(config.input_dir, PathBuf::from("from-flag"));
        assert_eq!(config.pattern, "*.dump");
        assert_eq!(config.array_name, "eq");
        assert!(!config.validate);
        assert_eq!(config.line_ending, LineEnding::Crlf);
    }

    #[test]
    fn test_missing_config_file() {
        let args = ConvertArgs {
            config: Some(PathBuf::from("/nonexistent/eqbands.toml")),
            ..Default::default()
        };
        assert!(resolve_config(&args).is_err());
    }
}
