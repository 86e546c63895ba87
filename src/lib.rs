//! Lagrange points of the restricted three-body problem.
//!
//! Two masses circle their common barycenter at the origin. The crate models
//! the combined gravitational and centrifugal field in the co-rotating frame,
//! locates the five equilibrium points with one-dimensional bisection searches,
//! and samples the field on a grid for plotting.

pub mod config;
pub mod constants;
pub mod equilibrium;
pub mod errors;
pub mod models;
pub mod numerics;
pub mod output;
pub mod physics;
