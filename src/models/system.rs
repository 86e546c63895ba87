use crate::errors::LagrangeError;
use nalgebra as na;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Body {
    Primary,
    Secondary,
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Body::Primary => write!(f, "m1"),
            Body::Secondary => write!(f, "m2"),
        }
    }
}

/// Masses and separation of the two-body system, as supplied by the user.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SystemParameters {
    pub m1: f64,
    pub m2: f64,
    pub d: f64,
}

impl SystemParameters {
    pub fn new(m1: f64, m2: f64, d: f64) -> Result<Self, LagrangeError> {
        if !(m1.is_finite() && m1 > 0.0) {
            return Err(LagrangeError::NonPositiveMass {
                body: Body::Primary,
                value: m1,
            });
        }
        if !(m2.is_finite() && m2 > 0.0) {
            return Err(LagrangeError::NonPositiveMass {
                body: Body::Secondary,
                value: m2,
            });
        }
        if !(d.is_finite() && d > 0.0) {
            return Err(LagrangeError::NonPositiveSeparation(d));
        }
        Ok(Self { m1, m2, d })
    }
}

/// Two point masses on circular orbits about their barycenter, which sits at
/// the origin. Both masses lie on the x axis with `x1 < 0 < x2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinarySystem {
    pub m1: f64,
    pub m2: f64,
    pub d: f64,
    pub total_mass: f64,
    pub omega_sq: f64, // Angular velocity squared
    pub x1: f64,
    pub x2: f64,
}

impl BinarySystem {
    pub fn new(params: &SystemParameters) -> Self {
        let SystemParameters { m1, m2, d } = *params;
        let total_mass = m1 + m2;

        Self {
            m1,
            m2,
            d,
            total_mass,
            omega_sq: total_mass / d.powi(3),
            x1: -(m2 / total_mass) * d,
            x2: (m1 / total_mass) * d,
        }
    }

    /// Validates the raw values and derives the system constants.
    pub fn from_masses(m1: f64, m2: f64, d: f64) -> Result<Self, LagrangeError> {
        SystemParameters::new(m1, m2, d).map(|params| Self::new(&params))
    }

    pub fn primary_position(&self) -> na::Vector2<f64> {
        na::Vector2::new(self.x1, 0.0)
    }

    pub fn secondary_position(&self) -> na::Vector2<f64> {
        na::Vector2::new(self.x2, 0.0)
    }

    /// x coordinate halfway between the two masses.
    pub fn midpoint(&self) -> f64 {
        (self.x1 + self.x2) / 2.0
    }

    /// Hill sphere radius of one body, `d * cbrt(m_i / 3m)`.
    pub fn hill_radius(&self, body: Body) -> f64 {
        let mass = match body {
            Body::Primary => self.m1,
            Body::Secondary => self.m2,
        };
        self.d * (mass / (3.0 * self.total_mass)).cbrt()
    }
}
