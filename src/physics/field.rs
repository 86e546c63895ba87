use crate::models::BinarySystem;
use crate::numerics::vector::magnitude;
use nalgebra as na;

// Each function evaluates the field in the frame co-rotating with the masses.
// Evaluating exactly at a mass position divides by zero and yields +-inf/NaN.

/// Gravitational plus centrifugal potential at `r`.
pub fn potential(system: &BinarySystem, r: &na::Vector2<f64>) -> f64 {
    let r1 = magnitude(&(r - system.primary_position()));
    let r2 = magnitude(&(r - system.secondary_position()));
    let r_mag = magnitude(r);

    -system.m1 / r1 - system.m2 / r2 - 0.5 * system.omega_sq * r_mag * r_mag
}

/// x component of the net acceleration at `r`.
pub fn accel_x(system: &BinarySystem, r: &na::Vector2<f64>) -> f64 {
    let r1 = magnitude(&(r - system.primary_position()));
    let r2 = magnitude(&(r - system.secondary_position()));

    -system.m1 * (r.x - system.x1) / r1.powi(3) - system.m2 * (r.x - system.x2) / r2.powi(3)
        + system.omega_sq * r.x
}

/// y component of the net acceleration at `r`.
pub fn accel_y(system: &BinarySystem, r: &na::Vector2<f64>) -> f64 {
    let r1 = magnitude(&(r - system.primary_position()));
    let r2 = magnitude(&(r - system.secondary_position()));

    -system.m1 * r.y / r1.powi(3) - system.m2 * r.y / r2.powi(3) + system.omega_sq * r.y
}

pub fn acceleration(system: &BinarySystem, r: &na::Vector2<f64>) -> na::Vector2<f64> {
    na::Vector2::new(accel_x(system, r), accel_y(system, r))
}
