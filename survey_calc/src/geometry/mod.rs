//! Basic geometry primitives for survey computations.

pub mod point3;
pub use point3::Point3D;

/// Calculates the horizontal (plan) distance between two points, ignoring
/// elevation.
pub fn horizontal_distance(a: &Point3D, b: &Point3D) -> f64 {
    (b.n - a.n).hypot(b.e - a.e)
}
