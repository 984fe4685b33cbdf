// src/convert.rs

//! Band directory to C header conversion
//!
//! Collects the band files of a directory, turns each into a nested brace
//! literal and writes them as one array declaration:
//!
//! ```text
//! byte bands[N][21][5][4] =
//! {
//!     <a.hz>,
//!     <b.hz>
//! };
//! ```

use crate::band::{self, legacy, Band};
use crate::config::{ConvertConfig, ConvertMode};
use crate::error::{Error, Result};
use glob::Pattern;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Outcome of a successful conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteResult {
    /// Header that was written
    pub output_path: PathBuf,
    /// Number of band files in the declaration
    pub band_count: usize,
    pub bytes_written: usize,
}

/// Declaration text and the files it was built from
#[derive(Debug, Clone)]
pub struct RenderedOutput {
    pub inputs: Vec<PathBuf>,
    pub text: String,
}

/// Converts a directory of band files into one C declaration
pub struct Converter {
    config: ConvertConfig,
}

impl Converter {
    pub fn new(config: ConvertConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConvertConfig {
        &self.config
    }

    /// Files in the input directory whose name matches the pattern, sorted
    /// by name so repeated runs produce identical output
    pub fn collect_inputs(&self) -> Result<Vec<PathBuf>> {
        let pattern = Pattern::new(&self.config.pattern).map_err(|source| Error::Pattern {
            pattern: self.config.pattern.clone(),
            source,
        })?;

        let dir = &self.config.input_dir;
        let entries = fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;
        let output = resolve_path(&self.config.output_path);

        let mut inputs = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| Error::io(dir, e))?.path();
            if !path.is_file() {
                continue;
            }

            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                debug!("Skipping non-UTF-8 file name: {}", path.display());
                continue;
            };

            if !pattern.matches(name) {
                continue;
            }

            // The header may live next to its inputs and match the pattern
            if output.is_some() && fs::canonicalize(&path).ok() == output {
                debug!("Skipping output file {}", path.display());
                continue;
            }

            inputs.push(path);
        }

        inputs.sort();
        debug!(
            "Found {} file(s) matching '{}' in {}",
            inputs.len(),
            self.config.pattern,
            dir.display()
        );
        Ok(inputs)
    }

    /// Read and parse one band file, checking its shape if validation is on
    pub fn load_band(&self, path: &Path) -> Result<Band> {
        let text = read_input(path)?;
        let band = band::parse_band(&text).map_err(|source| Error::Format {
            path: path.to_path_buf(),
            source,
        })?;

        if let Err(source) = band.validate(&self.config.shape) {
            if self.config.validate {
                return Err(Error::Format {
                    path: path.to_path_buf(),
                    source,
                });
            }
            warn!("{}: {} (validation disabled)", path.display(), source);
        }

        Ok(band)
    }

    /// The brace literal for one band file
    pub fn transform_file(&self, path: &Path) -> Result<String> {
        match self.config.mode {
            ConvertMode::Structured => {
                let band = self.load_band(path)?;
                Ok(band::render_band(&band, &self.config.render_options()))
            }
            ConvertMode::Legacy => Ok(legacy::transform(&read_input(path)?)),
        }
    }

    /// Build the full declaration without writing it
    pub fn render(&self) -> Result<RenderedOutput> {
        let inputs = self.collect_inputs()?;
        let options = self.config.render_options();

        let literals = inputs
            .iter()
            .map(|path| {
                debug!("Converting {}", path.display());
                self.transform_file(path)
            })
            .collect::<Result<Vec<_>>>()?;

        let text = match self.config.mode {
            ConvertMode::Structured => band::render_declaration(&literals, &options),
            ConvertMode::Legacy => legacy::render_declaration(&literals, &options),
        };

        Ok(RenderedOutput { inputs, text })
    }

    /// Convert every matching file and write the header
    pub fn convert(&self) -> Result<WriteResult> {
        let rendered = self.render()?;

        if rendered.inputs.is_empty() {
            warn!(
                "No files matching '{}' in {}",
                self.config.pattern,
                self.config.input_dir.display()
            );
        }

        let bytes_written = write_output(&self.config.output_path, &rendered.text)?;
        info!(
            "Wrote {} band(s) to {}",
            rendered.inputs.len(),
            self.config.output_path.display()
        );

        Ok(WriteResult {
            output_path: self.config.output_path.clone(),
            band_count: rendered.inputs.len(),
            bytes_written,
        })
    }
}

/// Convert `input_dir/pattern` into `output_path` with default settings
pub fn convert(input_dir: &Path, pattern: &str, output_path: &Path) -> Result<WriteResult> {
    let config = ConvertConfig {
        pattern: pattern.to_string(),
        ..ConvertConfig::new(input_dir, output_path)
    };
    Converter::new(config).convert()
}

/// File contents without a leading UTF-8 byte order mark
fn read_input(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    match text.strip_prefix('\u{FEFF}') {
        Some(stripped) => Ok(stripped.to_string()),
        None => Ok(text),
    }
}

/// Absolute form of `path`, also for a file that does not exist yet
fn resolve_path(path: &Path) -> Option<PathBuf> {
    if let Ok(resolved) = fs::canonicalize(path) {
        return Some(resolved);
    }
    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    Some(fs::canonicalize(parent).ok()?.join(path.file_name()?))
}

/// Write `text` to `path` atomically (write to temp, then rename)
pub fn write_output(path: &Path, text: &str) -> Result<usize> {
    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut temp = tempfile::NamedTempFile::new_in(parent).map_err(|e| Error::io(parent, e))?;
    temp.write_all(text.as_bytes())
        .map_err(|e| Error::io(temp.path(), e))?;
    temp.as_file()
        .sync_all()
        .map_err(|e| Error::io(temp.path(), e))?;

    temp.persist(path).map_err(|e| Error::io(path, e.error))?;
    Ok(text.len())
}
