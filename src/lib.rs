// src/lib.rs

//! eqbands - equalizer band table converter
//!
//! Turns a directory of `.hz` band dumps (hex byte tokens, blank-line
//! separated groups) into a single C header holding
//! `byte bands[N][21][5][4]`.
//!
//! # Architecture
//!
//! - `band`: parse a dump into groups → entries → bytes, validate, render
//! - `band::legacy`: the historical text-substitution conversion
//! - `config`: input directory, glob, output path and rendering options
//! - `convert`: enumerate, transform, assemble, write atomically

pub mod band;
pub mod config;
pub mod convert;
mod error;

pub use band::{parse_band, Band, BandError, BandShape, LineEnding, RenderOptions};
pub use config::{ConvertConfig, ConvertMode, DEFAULT_OUTPUT, DEFAULT_PATTERN};
pub use convert::{convert, Converter, RenderedOutput, WriteResult};
pub use error::{Error, Result};
