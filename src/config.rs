// src/config.rs

//! Converter configuration
//!
//! Every option has a default, so an empty file (or no file at all) gives
//! the historical behaviour: `./*.hz` in, `./eq.h` out, 21x5x4 bands.
//!
//! # Example eqbands.toml
//!
//! ```toml
//! input_dir = "../Server"
//! output_path = "include/eq.h"
//! pattern = "*.hz"
//! mode = "structured"     # or "legacy"
//! validate = true
//! line_ending = "crlf"
//! array_name = "bands"
//! element_type = "byte"
//!
//! [shape]
//! groups = 21
//! entries = 5
//! bytes = 4
//! ```

use crate::band::{BandShape, LineEnding, RenderOptions};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default glob for band files
pub const DEFAULT_PATTERN: &str = "*.hz";

/// Default header written when no output path is given
pub const DEFAULT_OUTPUT: &str = "eq.h";

/// How band text is turned into C literals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConvertMode {
    /// Parse into bytes, validate the shape, render a clean literal
    #[default]
    Structured,
    /// Historical text substitutions, no validation
    Legacy,
}

/// Options for a conversion run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertConfig {
    /// Directory holding the band files
    pub input_dir: PathBuf,
    /// Header file to create or overwrite
    pub output_path: PathBuf,
    /// Glob matched against file names in `input_dir`
    pub pattern: String,
    pub mode: ConvertMode,
    /// Reject bands whose shape differs from `shape` (structured mode only)
    pub validate: bool,
    pub shape: BandShape,
    pub line_ending: LineEnding,
    pub array_name: String,
    pub element_type: String,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            pattern: DEFAULT_PATTERN.to_string(),
            mode: ConvertMode::Structured,
            validate: true,
            shape: BandShape::default(),
            line_ending: LineEnding::Lf,
            array_name: "bands".to_string(),
            element_type: "byte".to_string(),
        }
    }
}

impl ConvertConfig {
    /// Config reading `input_dir` and writing `output_path`, defaults otherwise
    pub fn new(input_dir: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_path: output_path.into(),
            ..Self::default()
        }
    }

    /// Load a config from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        toml::from_str(&content).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Rendering options derived from this config
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            element_type: self.element_type.clone(),
            array_name: self.array_name.clone(),
            shape: self.shape,
            line_ending: self.line_ending,
        }
    }
}
