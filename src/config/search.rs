use crate::errors::LagrangeError;

/// Numerical settings for the Lagrange point searches. Lengths are in the
/// same units as the mass separation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchSettings {
    /// Distance kept from the masses and from the mass axis when bracketing.
    pub offset: f64,
    /// Bisection half-width at which a root is accepted.
    pub tolerance: f64,
    /// Outer search limit as a multiple of the separation.
    pub extent_factor: f64,
}

impl SearchSettings {
    pub const OFFSET: f64 = 0.01;
    pub const TOLERANCE: f64 = 1e-4;
    pub const EXTENT_FACTOR: f64 = 2.0;
    /// Largest share of a body's Hill radius kept clear on the mass axis.
    pub const HILL_FRACTION: f64 = 0.5;

    pub fn new(offset: f64, tolerance: f64, extent_factor: f64) -> Result<Self, LagrangeError> {
        if !(offset.is_finite() && offset > 0.0) {
            return Err(LagrangeError::InvalidOffset(offset));
        }
        if !(tolerance.is_finite() && tolerance > 0.0) {
            return Err(LagrangeError::InvalidTolerance(tolerance));
        }
        if !(extent_factor.is_finite() && extent_factor > 1.0) {
            return Err(LagrangeError::InvalidExtent(extent_factor));
        }
        Ok(Self {
            offset,
            tolerance,
            extent_factor,
        })
    }
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            offset: Self::OFFSET,
            tolerance: Self::TOLERANCE,
            extent_factor: Self::EXTENT_FACTOR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn default_uses_named_constants() {
        let settings = SearchSettings::default();
        assert_eq!(
            SearchSettings::new(0.01, 1e-4, 2.0).unwrap(),
            settings
        );
    }

    #[test_case(0.0, 1e-4, 2.0; "zero offset")]
    #[test_case(0.01, -1.0, 2.0; "negative tolerance")]
    #[test_case(0.01, 1e-4, 1.0; "extent inside separation")]
    #[test_case(f64::NAN, 1e-4, 2.0; "nan offset")]
    fn rejects_invalid_settings(offset: f64, tolerance: f64, extent_factor: f64) {
        assert!(SearchSettings::new(offset, tolerance, extent_factor).is_err());
    }
}
