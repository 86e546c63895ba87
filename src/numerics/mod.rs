pub mod bisection;
pub mod vector;
