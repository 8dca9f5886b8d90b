//! SVG composition: background, styled lines and the text overlay
//!
//! The overlay is laid out as a stack of boxes anchored near the left edge of
//! the canvas: an author badge, the title, then the subtitle. Each box is
//! filled with the background color so the text stays readable over the lines.
//! Box widths are estimated from the character count since no font metrics are
//! available.

use std::fmt;
use std::path::Path;

use crate::algorithm::executor::Artwork;
use crate::io::configuration::AUTHOR_BADGE_COLOR;
use crate::io::error::{Result, io_error};
use crate::io::params::RequestParams;
use crate::style::Color;

const OVERLAY_LEFT: f64 = 80.0;
const OVERLAY_TOP: f64 = 300.0;
const OVERLAY_MAX_WIDTH: f64 = 1000.0;
const BOX_GAP: f64 = 20.0;
// Average Arial advance as a fraction of the font size
const CHAR_ADVANCE: f64 = 0.55;
const FONT_FAMILY: &str = "Arial, Helvetica, sans-serif";

/// Text drawn over the lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlay {
    /// Headline text
    pub title: String,
    /// Text below the headline
    pub subtitle: String,
    /// Author name shown next to the badge
    pub author: String,
    /// Draw reserved footprints as dots for debugging
    pub show_footprints: bool,
}

impl Default for Overlay {
    fn default() -> Self {
        Self::from(&RequestParams::default())
    }
}

impl From<&RequestParams> for Overlay {
    fn from(params: &RequestParams) -> Self {
        Self {
            title: params.title.clone(),
            subtitle: params.subtitle.clone(),
            author: params.author.clone(),
            show_footprints: false,
        }
    }
}

// One text box of the overlay stack
struct TextBox<'a> {
    text: &'a str,
    font_size: f64,
    line_height: f64,
    padding: [f64; 4],
    leading: f64,
}

impl TextBox<'_> {
    fn height(&self) -> f64 {
        let [top, _, bottom, _] = self.padding;
        self.font_size.mul_add(self.line_height, top + bottom)
    }

    fn width(&self) -> f64 {
        let [_, right, _, left] = self.padding;
        let text = self.text.chars().count() as f64 * self.font_size * CHAR_ADVANCE;
        (left + self.leading + text + right).min(OVERLAY_MAX_WIDTH)
    }
}

/// Compose the SVG document for `artwork`
pub fn render_svg(artwork: &Artwork, overlay: &Overlay) -> String {
    SvgDocument { artwork, overlay }.to_string()
}

// Formats the whole document in one pass over the artwork
struct SvgDocument<'a> {
    artwork: &'a Artwork,
    overlay: &'a Overlay,
}

impl fmt::Display for SvgDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let artwork = self.artwork;
        let width = artwork.canvas.width;
        let height = artwork.canvas.height;

        writeln!(
            f,
            r#"<svg width="{width}" height="{height}" viewBox="0 0 {width} {height}" xmlns="http://www.w3.org/2000/svg">"#
        )?;
        writeln!(
            f,
            r#"  <rect width="{width}" height="{height}" fill="{}" />"#,
            artwork.background
        )?;

        for line in &artwork.lines {
            writeln!(
                f,
                r#"  <path d="{}" stroke="{}" stroke-width="{}" fill="none" />"#,
                line.svg_path_data(),
                line.color(),
                line.width()
            )?;
        }

        if self.overlay.show_footprints {
            write_footprints(f, artwork)?;
        }
        write_overlay(f, self.overlay, artwork.background, artwork.foreground)?;

        writeln!(f, "</svg>")
    }
}

fn write_footprints(f: &mut fmt::Formatter<'_>, artwork: &Artwork) -> fmt::Result {
    writeln!(
        f,
        r#"  <g fill="{}" fill-opacity="0.6">"#,
        artwork.foreground
    )?;
    for point in artwork.footprints.iter().flatten() {
        writeln!(
            f,
            r#"    <circle cx="{:.2}" cy="{:.2}" r="0.5" />"#,
            point.x, point.y
        )?;
    }
    writeln!(f, "  </g>")
}

fn write_overlay(
    f: &mut fmt::Formatter<'_>,
    overlay: &Overlay,
    background: Color,
    foreground: Color,
) -> fmt::Result {
    let author = TextBox {
        text: &overlay.author,
        font_size: 30.0,
        line_height: 1.2,
        padding: [10.0, 20.0, 10.0, 20.0],
        leading: 40.0,
    };
    let title = TextBox {
        text: &overlay.title,
        font_size: 50.0,
        line_height: 1.2,
        padding: [0.0, 10.0, 20.0, 10.0],
        leading: 0.0,
    };
    let subtitle = TextBox {
        text: &overlay.subtitle,
        font_size: 40.0,
        line_height: 1.3,
        padding: [0.0, 10.0, 20.0, 10.0],
        leading: 0.0,
    };

    writeln!(
        f,
        r#"  <g font-family="{FONT_FAMILY}" fill="{foreground}">"#
    )?;

    let mut top = OVERLAY_TOP;
    for (index, text_box) in [author, title, subtitle].iter().enumerate() {
        let [pad_top, _, _, pad_left] = text_box.padding;
        writeln!(
            f,
            r#"    <rect x="{OVERLAY_LEFT}" y="{top}" width="{:.1}" height="{:.1}" fill="{background}" />"#,
            text_box.width(),
            text_box.height()
        )?;

        let line_box = text_box.font_size * text_box.line_height;
        if index == 0 {
            // Badge sits left of the author name, vertically centered
            let radius = 15.0;
            writeln!(
                f,
                r#"    <circle cx="{:.1}" cy="{:.1}" r="{radius}" fill="{AUTHOR_BADGE_COLOR}" />"#,
                OVERLAY_LEFT + pad_left + radius,
                top + pad_top + line_box / 2.0
            )?;
        }

        // Baseline at the center of the line box, shifted by a third of the font size
        let baseline = top + pad_top + line_box / 2.0 + text_box.font_size / 3.0;
        writeln!(
            f,
            r#"    <text x="{:.1}" y="{baseline:.1}" font-size="{}">{}</text>"#,
            OVERLAY_LEFT + pad_left + text_box.leading,
            text_box.font_size,
            escape_xml(text_box.text)
        )?;

        top += text_box.height() + BOX_GAP;
    }

    writeln!(f, "  </g>")
}

/// Escape the five XML special characters
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render and write the SVG document to `output_path`
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the file
/// cannot be written
pub fn write_svg(artwork: &Artwork, overlay: &Overlay, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| io_error(parent, "create directory", e))?;
    }

    std::fs::write(output_path, render_svg(artwork, overlay))
        .map_err(|e| io_error(output_path, "write svg", e))
}
