pub mod lagrange_point;
pub mod system;

pub use lagrange_point::{LagrangeLabel, LagrangePoint, LagrangePoints, SearchAxis};
pub use system::{BinarySystem, Body, SystemParameters};
