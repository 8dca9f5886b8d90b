//! Spatial data structures for streamline placement
//!
//! This module contains spatial-related functionality including:
//! - Canvas geometry and the margin used for bounds checks
//! - The uniform-grid occupancy index used for spacing queries
//! - The noise-driven vector field that streamlines follow

/// Canvas dimensions, margins and the point type
pub mod canvas;
/// Direction field sampled from simplex noise
pub mod field;
/// Uniform-grid occupancy index for proximity queries
pub mod grid;

pub use canvas::{Canvas, Point};
pub use field::VectorField;
pub use grid::OccupancyGrid;
