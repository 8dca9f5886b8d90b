//! Canvas geometry shared by the tracer, the renderers and the occupancy index

use crate::math::hypot;

/// Continuous canvas coordinate
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate, growing to the right
    pub x: f64,
    /// Vertical coordinate, growing downward
    pub y: f64,
}

impl Point {
    /// Create a point from its coordinates
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`
    pub fn distance(self, other: Self) -> f64 {
        hypot(self.x - other.x, self.y - other.y)
    }

    /// Translate by a displacement scaled by `factor`
    #[allow(clippy::suboptimal_flops)]
    pub fn offset(self, displacement: Self, factor: f64) -> Self {
        Self {
            x: self.x + displacement.x * factor,
            y: self.y + displacement.y * factor,
        }
    }

    /// Both coordinates are finite numbers
    pub const fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Fixed drawing surface with an inner margin that streamlines may not cross
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    /// Width in canvas units
    pub width: f64,
    /// Height in canvas units
    pub height: f64,
    /// Distance from each edge that growth must respect
    pub margin: f64,
}

impl Canvas {
    /// Create a canvas
    pub const fn new(width: f64, height: f64, margin: f64) -> Self {
        Self {
            width,
            height,
            margin,
        }
    }

    /// Check whether a point falls outside the margin-inset drawing area
    ///
    /// Points exactly on the inset boundary are still inside.
    pub fn is_outside(&self, point: Point) -> bool {
        point.x < self.margin
            || point.x > self.width - self.margin
            || point.y < self.margin
            || point.y > self.height - self.margin
    }

    /// Check whether a point lies on the canvas, ignoring the margin
    pub fn contains(&self, point: Point) -> bool {
        (0.0..=self.width).contains(&point.x) && (0.0..=self.height).contains(&point.y)
    }

    /// Map two unit draws to a point anywhere on the canvas
    pub fn point_from_unit(&self, u: f64, v: f64) -> Point {
        Point::new(u * self.width, v * self.height)
    }
}
