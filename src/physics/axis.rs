use super::field::{accel_x, accel_y};
use crate::models::{BinarySystem, SearchAxis};
use nalgebra as na;

/// Net x acceleration along the axis through both masses.
pub fn collinear_accel(system: &BinarySystem, x: f64) -> f64 {
    accel_x(system, &na::Vector2::new(x, 0.0))
}

/// Net y acceleration along the vertical line through the mass midpoint.
pub fn triangular_accel(system: &BinarySystem, y: f64) -> f64 {
    accel_y(system, &na::Vector2::new(system.midpoint(), y))
}

impl SearchAxis {
    /// Evaluates the axis-restricted field at coordinate `s` along this axis.
    pub fn evaluate(&self, system: &BinarySystem, s: f64) -> f64 {
        match self {
            SearchAxis::Collinear => collinear_accel(system, s),
            SearchAxis::Triangular => triangular_accel(system, s),
        }
    }

    /// Maps a coordinate along this axis back into the plane.
    pub fn position(&self, system: &BinarySystem, s: f64) -> na::Vector2<f64> {
        match self {
            SearchAxis::Collinear => na::Vector2::new(s, 0.0),
            SearchAxis::Triangular => na::Vector2::new(system.midpoint(), s),
        }
    }
}
