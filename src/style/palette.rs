//! Palette schemes and deterministic stroke color assignment

use std::f64::consts::TAU;
use std::fmt;

use crate::math::random::Alea;

/// Opaque sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Build a color from a `0xRRGGBB` literal
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: (hex >> 16) as u8,
            g: (hex >> 8) as u8,
            b: hex as u8,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Named, ordered color list: background, foreground, then stroke colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteScheme {
    /// Human readable name
    pub name: String,
    /// Background, foreground and stroke colors, in that order
    pub colors: Vec<Color>,
}

impl PaletteScheme {
    /// Create a scheme from its ordered colors
    pub fn new(name: impl Into<String>, colors: &[Color]) -> Self {
        Self {
            name: name.into(),
            colors: colors.to_vec(),
        }
    }
}

/// The scheme chosen for one run, split into its roles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    /// Name of the scheme the palette was taken from
    pub name: String,
    /// Canvas fill
    pub background: Color,
    /// Text and accent color
    pub foreground: Color,
    /// Colors available to streamlines
    pub strokes: Vec<Color>,
}

impl Palette {
    /// Split a scheme into background, foreground and strokes
    ///
    /// Missing entries fall back to the previous role so a short scheme still
    /// yields a usable palette; configuration validation rejects such schemes
    /// before a run starts.
    pub fn from_scheme(scheme: &PaletteScheme) -> Self {
        let mut colors = scheme.colors.iter().copied();
        let background = colors.next().unwrap_or(Color::from_hex(0x00_0000));
        let foreground = colors.next().unwrap_or(background);
        let strokes: Vec<Color> = colors.collect();

        Self {
            name: scheme.name.clone(),
            background,
            foreground,
            strokes: if strokes.is_empty() {
                vec![foreground]
            } else {
                strokes
            },
        }
    }

    /// Pick one scheme with a single unweighted draw
    pub fn choose(schemes: &[PaletteScheme], random: &mut Alea) -> Self {
        let index = random.next_index(schemes.len());
        schemes
            .get(index)
            .map_or_else(|| Self::from_scheme(&PaletteScheme::new("empty", &[])), Self::from_scheme)
    }

    /// Stroke color for a streamline whose first point has field angle `angle`
    ///
    /// The angle is bucketed over the stroke colors; the bucket one past the
    /// last color is the same direction as bucket zero and wraps onto it.
    pub fn stroke_for_angle(&self, angle: f64) -> Color {
        let count = self.strokes.len();
        let bucket = crate::math::round_half_up(angle / TAU * count as f64);
        let index = (bucket.max(0.0) as usize) % count.max(1);
        self.strokes.get(index).copied().unwrap_or(self.foreground)
    }
}
