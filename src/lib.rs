//! Deterministic flow-field line art with evenly spaced streamlines
//!
//! A seed drives a single pseudo-random stream that builds a simplex noise
//! field, picks a palette and draws the run's hyperparameters. Streamlines are
//! traced through the field in passes of decreasing width, and an occupancy
//! index keeps every new line a fixed distance from the ones already placed.

#![forbid(unsafe_code)]

/// Streamline tracing, frontier scheduling and pass orchestration
pub mod algorithm;
/// Configuration, CLI, rendering and error handling
pub mod io;
/// Deterministic random source, noise and rounding helpers
pub mod math;
/// Canvas geometry, occupancy index and vector field
pub mod spatial;
/// Palettes and styled output lines
pub mod style;

pub use algorithm::executor::{Artwork, GeneratorConfig, generate, generate_with};
pub use io::error::{FlowError, Result};
