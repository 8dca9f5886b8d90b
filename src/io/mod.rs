//! Input/output: configuration, CLI, request parameters, rendering and errors

/// Command line interface and batch rendering
pub mod cli;
/// Reference hyperparameters and output defaults
pub mod configuration;
/// Error type and result alias
pub mod error;
/// PNG rasterization of generated lines
pub mod image;
/// Request query-string parameters
pub mod params;
/// Progress display for multi-seed runs
pub mod progress;
/// SVG document composition
pub mod svg;

use std::path::Path;

use crate::algorithm::executor::Artwork;
use crate::io::error::{FlowError, Result};
use crate::io::svg::Overlay;

/// Output encodings chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Vector document with the text overlay
    Svg,
    /// Raster image of the lines only
    Png,
}

impl OutputFormat {
    /// Detect the format from a path's extension, ignoring case
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "svg" => Some(Self::Svg),
            "png" => Some(Self::Png),
            _ => None,
        }
    }

    /// File extension without the leading dot
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Png => "png",
        }
    }
}

/// Write `artwork` to `path` in the format its extension names
///
/// # Errors
///
/// Returns an error if the extension is not `svg` or `png`, or if writing fails
pub fn export_artwork(artwork: &Artwork, overlay: &Overlay, path: &Path) -> Result<()> {
    match OutputFormat::from_path(path) {
        Some(OutputFormat::Svg) => svg::write_svg(artwork, overlay, path),
        Some(OutputFormat::Png) => image::export_artwork_as_png(artwork, path),
        None => Err(FlowError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}
