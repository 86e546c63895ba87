use nalgebra as na;

/// Euclidean length of a 2D vector.
pub fn magnitude(v: &na::Vector2<f64>) -> f64 {
    v.magnitude()
}
