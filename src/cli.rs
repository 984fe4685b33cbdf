// src/cli.rs
//! CLI definitions for eqbands
//!
//! Flags and subcommands are parsed here; `commands` turns them into a
//! `ConvertConfig` and runs the converter.
//!
//! Running `eqbands` with no subcommand converts, so the historical
//! zero-argument invocation keeps working.

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "eqbands")]
#[command(author = "eqbands Contributors")]
#[command(version)]
#[command(about = "Convert .hz equalizer band dumps into a C array header", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub convert: ConvertArgs,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert band files into a C header (default)
    Convert(ConvertArgs),

    /// Parse and validate band files without writing anything
    Check(ConvertArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Options shared by `convert` and `check`; unset values fall back to the
/// config file, then to built-in defaults
#[derive(Args, Debug, Clone, Default)]
pub struct ConvertArgs {
    /// TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory holding the band files (default: current directory)
    #[arg(short, long)]
    pub input_dir: Option<PathBuf>,

    /// Header file to write (default: eq.h)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Glob matched against file names (default: *.hz)
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// Use the historical text-substitution conversion (no validation)
    #[arg(long)]
    pub legacy: bool,

    /// Warn about bands with the wrong shape instead of failing
    #[arg(long)]
    pub no_validate: bool,

    /// Write CRLF line endings
    #[arg(long)]
    pub crlf: bool,

    /// Name of the declared array
    #[arg(long)]
    pub array_name: Option<String>,

    /// C element type of the array
    #[arg(long)]
    pub element_type: Option<String>,

    /// Print the header to stdout instead of writing the output file
    #[arg(long)]
    pub stdout: bool,
}
