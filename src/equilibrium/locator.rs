use crate::config::SearchSettings;
use crate::errors::LagrangeError;
use crate::models::{BinarySystem, Body, LagrangeLabel, LagrangePoint, LagrangePoints};
use crate::numerics::bisection::bisection;
use nalgebra as na;

/// Search interval for one point, as a coordinate along the point's axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchBracket {
    pub label: LagrangeLabel,
    pub lower: f64,
    pub upper: f64,
}

/// Locates the five equilibrium points with one bisection search each.
#[derive(Debug, Clone, Copy, Default)]
pub struct LagrangeLocator {
    settings: SearchSettings,
}

impl LagrangeLocator {
    pub fn new(settings: SearchSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &SearchSettings {
        &self.settings
    }

    /// Gap left between a mass and the collinear brackets: the configured
    /// offset, shrunk to half the body's Hill radius for light bodies whose
    /// L1/L2 points sit closer than the offset.
    pub fn mass_clearance(&self, system: &BinarySystem, body: Body) -> f64 {
        self.settings
            .offset
            .min(SearchSettings::HILL_FRACTION * system.hill_radius(body))
    }

    /// Brackets for a given point.
    ///
    /// Collinear brackets stop short of each mass by its clearance so the
    /// singular points are never evaluated; the triangular brackets stay
    /// `offset` away from the mass axis where the vertical field is
    /// identically zero. The outer ends sit at `extent_factor * d`.
    pub fn bracket(&self, system: &BinarySystem, label: LagrangeLabel) -> SearchBracket {
        let eps = self.settings.offset;
        let eps1 = self.mass_clearance(system, Body::Primary);
        let eps2 = self.mass_clearance(system, Body::Secondary);
        let reach = self.settings.extent_factor * system.d;

        let (lower, upper) = match label {
            // Between the masses
            LagrangeLabel::L1 => (system.x1 + eps1, system.x2 - eps2),
            // Beyond the mass on the positive side
            LagrangeLabel::L2 => (system.x2 + eps2, reach),
            // Beyond the mass on the negative side
            LagrangeLabel::L3 => (-reach, system.x1 - eps1),
            // Above the midpoint
            LagrangeLabel::L4 => (eps, reach),
            // Below the midpoint
            LagrangeLabel::L5 => (-reach, -eps),
        };

        SearchBracket {
            label,
            lower,
            upper,
        }
    }

    pub fn brackets(&self, system: &BinarySystem) -> [SearchBracket; 5] {
        LagrangeLabel::ALL.map(|label| self.bracket(system, label))
    }

    pub fn locate_point(
        &self,
        system: &BinarySystem,
        label: LagrangeLabel,
    ) -> Result<LagrangePoint, LagrangeError> {
        let bracket = self.bracket(system, label);
        let axis = label.axis();
        tracing::debug!(
            "searching {} along {:?} axis in [{}, {}]",
            label,
            axis,
            bracket.lower,
            bracket.upper
        );

        let root = bisection(
            bracket.lower,
            bracket.upper,
            |s| axis.evaluate(system, s),
            self.settings.tolerance,
        )
        .map_err(|e| LagrangeError::PointNotFound {
            label,
            source: Box::new(e),
        })?;

        let position = axis.position(system, root);
        tracing::debug!("{} found at ({:.6}, {:.6})", label, position.x, position.y);

        Ok(LagrangePoint::new(label, position))
    }

    pub fn locate(&self, system: &BinarySystem) -> Result<LagrangePoints, LagrangeError> {
        let mut positions = [na::Vector2::zeros(); 5];
        for (slot, label) in positions.iter_mut().zip(LagrangeLabel::ALL) {
            *slot = self.locate_point(system, label)?.position;
        }
        Ok(LagrangePoints::from_positions(positions))
    }
}
