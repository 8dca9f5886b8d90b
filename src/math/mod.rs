//! Mathematical utilities for the generator

/// 3D simplex noise driven by the deterministic random source
pub mod noise;
/// Seeded Alea pseudo-random stream
pub mod random;

/// Round to the nearest integer with ties going toward positive infinity
///
/// Path coordinates and the small stroke width are rounded this way so that a
/// given seed maps to the same integers on every platform.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Euclidean distance between two points given as coordinate deltas
pub fn hypot(dx: f64, dy: f64) -> f64 {
    dx.mul_add(dx, dy * dy).sqrt()
}
