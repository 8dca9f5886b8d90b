//! Colors and stroke styling for traced streamlines

/// Styled, immutable output polylines
pub mod line;
/// Color schemes and per-line color assignment
pub mod palette;

pub use line::StyledLine;
pub use palette::{Color, Palette, PaletteScheme};
