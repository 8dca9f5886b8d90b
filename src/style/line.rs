//! Finished streamlines as immutable styled polylines

use crate::math::round_half_up;
use crate::spatial::canvas::Point;
use crate::style::palette::Color;

/// A streamline ready for rendering
///
/// Coordinates are rounded to whole canvas units. A styled line always has at
/// least two points; shorter traces never become styled lines.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledLine {
    path: Vec<[i32; 2]>,
    color: Color,
    width: f64,
}

impl StyledLine {
    /// Round a traced polyline and attach its style
    ///
    /// Returns `None` for polylines with fewer than two points, which cannot
    /// form a segment.
    pub fn from_points(points: &[Point], color: Color, width: f64) -> Option<Self> {
        if points.len() < 2 {
            return None;
        }

        let path = points
            .iter()
            .map(|point| [round_half_up(point.x) as i32, round_half_up(point.y) as i32])
            .collect();

        Some(Self { path, color, width })
    }

    /// Rounded path coordinates in drawing order
    pub fn path(&self) -> &[[i32; 2]] {
        &self.path
    }

    /// Stroke color
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Stroke width in canvas units
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Number of path points
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Check whether the path has no points
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// SVG path data: a move to the first point, then a line to each other point
    pub fn svg_path_data(&self) -> String {
        self.path
            .iter()
            .enumerate()
            .map(|(index, [x, y])| {
                let command = if index == 0 { 'M' } else { 'L' };
                format!("{command}{x} {y}")
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
