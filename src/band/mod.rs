// src/band/mod.rs

//! Band entries - the byte tables held in `.hz` files
//!
//! A `.hz` file is a text dump of one equalizer band table. Each data line
//! holds the comma-separated bytes of one entry, entries are grouped into
//! blocks separated by blank lines:
//!
//! ```text
//! 0x00,0x1A,0x02,0x7F,<TAB>
//! 0x01,0x1A,0x02,0x7F,<TAB>
//! ...
//!
//! 0x00,0x2B,0x03,0x40,<TAB>
//! ...
//! ```
//!
//! Parsing produces a [`Band`] (groups → entries → bytes) which is checked
//! against a [`BandShape`] before it is rendered as a C initializer.

pub mod legacy;
mod parser;
pub mod render;

pub use parser::{parse_band, parse_byte_token};
pub use render::{render_band, render_declaration, LineEnding, RenderOptions};

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Groups per band in the upstream table format
pub const DEFAULT_GROUPS: usize = 21;

/// Entries per group in the upstream table format
pub const DEFAULT_ENTRIES: usize = 5;

/// Bytes per entry in the upstream table format
pub const DEFAULT_BYTES: usize = 4;

/// Errors raised while parsing or validating a single band
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BandError {
    #[error("line {line}: invalid byte token '{token}'")]
    InvalidToken { line: usize, token: String },

    #[error("expected {expected} groups, found {actual}")]
    GroupCount { expected: usize, actual: usize },

    #[error("group {group}: expected {expected} entries, found {actual}")]
    EntryCount {
        group: usize,
        expected: usize,
        actual: usize,
    },

    #[error("group {group}, entry {entry}: expected {expected} bytes, found {actual}")]
    ByteCount {
        group: usize,
        entry: usize,
        expected: usize,
        actual: usize,
    },
}

/// Fixed dimensions every band must have (`groups × entries × bytes`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BandShape {
    pub groups: usize,
    pub entries: usize,
    pub bytes: usize,
}

impl Default for BandShape {
    fn default() -> Self {
        Self {
            groups: DEFAULT_GROUPS,
            entries: DEFAULT_ENTRIES,
            bytes: DEFAULT_BYTES,
        }
    }
}

impl BandShape {
    pub fn new(groups: usize, entries: usize, bytes: usize) -> Self {
        Self {
            groups,
            entries,
            bytes,
        }
    }

    /// Total number of bytes in a band of this shape
    pub fn byte_len(&self) -> usize {
        self.groups * self.entries * self.bytes
    }

    /// C array dimensions, e.g. `[21][5][4]`
    pub fn dimensions(&self) -> String {
        format!("[{}][{}][{}]", self.groups, self.entries, self.bytes)
    }
}

impl fmt::Display for BandShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.groups, self.entries, self.bytes)
    }
}

/// One parsed band: groups of entries of bytes
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Band {
    groups: Vec<Vec<Vec<u8>>>,
}

impl Band {
    pub fn new(groups: Vec<Vec<Vec<u8>>>) -> Self {
        Self { groups }
    }

    pub fn groups(&self) -> &[Vec<Vec<u8>>] {
        &self.groups
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// All bytes in declaration order
    pub fn bytes(&self) -> impl Iterator<Item = u8> + '_ {
        self.groups.iter().flatten().flatten().copied()
    }

    /// The shape of this band, if every group and entry has the same length
    pub fn shape(&self) -> Option<BandShape> {
        let first_group = self.groups.first()?;
        let entries = first_group.len();
        let bytes = first_group.first().map_or(0, Vec::len);

        let uniform = self.groups.iter().all(|group| {
            group.len() == entries && group.iter().all(|entry| entry.len() == bytes)
        });
        uniform.then(|| BandShape::new(self.groups.len(), entries, bytes))
    }

    /// Check this band against the expected shape.
    ///
    /// Reports the outermost mismatch first: group count, then the first
    /// group with a wrong entry count, then the first entry with a wrong
    /// byte count.
    pub fn validate(&self, shape: &BandShape) -> Result<(), BandError> {
        if self.groups.len() != shape.groups {
            return Err(BandError::GroupCount {
                expected: shape.groups,
                actual: self.groups.len(),
            });
        }

        for (g, group) in self.groups.iter().enumerate() {
            if group.len() != shape.entries {
                return Err(BandError::EntryCount {
                    group: g,
                    expected: shape.entries,
                    actual: group.len(),
                });
            }
            for (e, entry) in group.iter().enumerate() {
                if entry.len() != shape.bytes {
                    return Err(BandError::ByteCount {
                        group: g,
                        entry: e,
                        expected: shape.bytes,
                        actual: entry.len(),
                    });
                }
            }
        }

        Ok(())
    }
}
