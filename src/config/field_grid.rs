use crate::errors::LagrangeError;

/// Sampling settings for the potential/acceleration grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldGridSettings {
    /// Samples per axis.
    pub resolution: usize,
    /// Half-width of the square grid as a multiple of the separation.
    pub extent_factor: f64,
    /// Arrows are drawn as g / |g|^exponent so near-mass vectors stay readable.
    pub arrow_exponent: f64,
}

impl FieldGridSettings {
    pub const RESOLUTION: usize = 60;
    pub const EXTENT_FACTOR: f64 = 2.0;
    pub const ARROW_EXPONENT: f64 = 0.6;

    pub fn new(resolution: usize) -> Result<Self, LagrangeError> {
        if resolution < 2 {
            return Err(LagrangeError::InvalidResolution(resolution));
        }
        Ok(Self {
            resolution,
            ..Self::default()
        })
    }
}

impl Default for FieldGridSettings {
    fn default() -> Self {
        Self {
            resolution: Self::RESOLUTION,
            extent_factor: Self::EXTENT_FACTOR,
            arrow_exponent: Self::ARROW_EXPONENT,
        }
    }
}
