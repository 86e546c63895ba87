pub mod axis;
pub mod field;

pub use axis::{collinear_accel, triangular_accel};
pub use field::{accel_x, accel_y, acceleration, potential};
