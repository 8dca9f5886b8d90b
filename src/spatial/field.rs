//! Direction field that streamlines follow

use std::f64::consts::{FRAC_PI_2, PI};

use crate::math::noise::SimplexNoise3;
use crate::spatial::canvas::Point;

/// Noise-derived vector field over the canvas
///
/// The field angle at a point is `(1 + noise(x·scale, y·scale, 0)) · π`, so the
/// noise range `[-1, 1]` covers a full turn. Every direction has the same
/// magnitude, the tracer's step length.
#[derive(Debug, Clone)]
pub struct VectorField {
    noise: SimplexNoise3,
    noise_scale: f64,
    step_length: f64,
}

impl VectorField {
    /// Create a field sampling `noise` at `noise_scale` with fixed step length
    pub const fn new(noise: SimplexNoise3, noise_scale: f64, step_length: f64) -> Self {
        Self {
            noise,
            noise_scale,
            step_length,
        }
    }

    /// Scale applied to canvas coordinates before sampling the noise
    pub const fn noise_scale(&self) -> f64 {
        self.noise_scale
    }

    /// Length of one integration step
    pub const fn step_length(&self) -> f64 {
        self.step_length
    }

    /// Field angle at `point` in radians, within `[0, 2π]`
    pub fn angle_at(&self, point: Point) -> f64 {
        let value = self.noise.value_at(
            point.x * self.noise_scale,
            point.y * self.noise_scale,
            0.0,
        );
        (1.0 + value) * PI
    }

    /// Step displacement along the field at `point`
    pub fn direction_at(&self, point: Point) -> Point {
        polar_to_cartesian(self.step_length, self.angle_at(point))
    }

    /// The two points `distance` away from `point` along the field normal
    ///
    /// Returns `(above, below)`, offset along the angle plus and minus a quarter
    /// turn respectively.
    pub fn perpendicular_offsets(&self, point: Point, distance: f64) -> (Point, Point) {
        let theta = self.angle_at(point);
        let normal = polar_to_cartesian(distance, theta + FRAC_PI_2);
        let anti_normal = polar_to_cartesian(distance, theta - FRAC_PI_2);
        (point.offset(normal, 1.0), point.offset(anti_normal, 1.0))
    }
}

fn polar_to_cartesian(magnitude: f64, angle: f64) -> Point {
    Point::new(angle.cos() * magnitude, angle.sin() * magnitude)
}
