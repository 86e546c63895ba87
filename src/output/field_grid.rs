use crate::config::FieldGridSettings;
use crate::models::BinarySystem;
use crate::numerics::vector::magnitude;
use crate::physics::{acceleration, potential};
use nalgebra as na;

/// `n` evenly spaced values from `start` to `end`, both ends included.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut values: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            values[n - 1] = end;
            values
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSample {
    pub x: f64,
    pub y: f64,
    pub potential: f64,
    /// log10 of the potential depth, the quantity contoured on the chart.
    pub log_depth: f64,
    pub accel_x: f64,
    pub accel_y: f64,
    pub arrow_x: f64,
    pub arrow_y: f64,
}

impl FieldSample {
    pub fn evaluate(system: &BinarySystem, r: &na::Vector2<f64>, arrow_exponent: f64) -> Self {
        let phi = potential(system, r);
        let g = acceleration(system, r);
        let g_mag = magnitude(&g);

        let arrow = if g_mag > 0.0 {
            g / g_mag.powf(arrow_exponent)
        } else {
            na::Vector2::zeros()
        };

        Self {
            x: r.x,
            y: r.y,
            potential: phi,
            log_depth: (-phi).log10(),
            accel_x: g.x,
            accel_y: g.y,
            arrow_x: arrow.x,
            arrow_y: arrow.y,
        }
    }

    pub fn is_finite(&self) -> bool {
        [
            self.potential,
            self.log_depth,
            self.accel_x,
            self.accel_y,
            self.arrow_x,
            self.arrow_y,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

/// Square grid of field samples centered on the barycenter. Samples are
/// stored row by row: y outer, x inner.
#[derive(Debug, Clone)]
pub struct FieldGrid {
    pub resolution: usize,
    pub samples: Vec<FieldSample>,
}

impl FieldGrid {
    pub fn sample(system: &BinarySystem, settings: &FieldGridSettings) -> Self {
        let half_width = settings.extent_factor * system.d;
        let axis = linspace(-half_width, half_width, settings.resolution);

        let samples: Vec<FieldSample> = axis
            .iter()
            .flat_map(|&y| axis.iter().map(move |&x| na::Vector2::new(x, y)))
            .map(|r| FieldSample::evaluate(system, &r, settings.arrow_exponent))
            .collect();

        let grid = Self {
            resolution: settings.resolution,
            samples,
        };

        let singular = grid.non_finite_count();
        if singular > 0 {
            tracing::warn!("{} field samples coincide with a mass and are not finite", singular);
        }
        tracing::info!(
            "Sampled field on a {}x{} grid over [-{}, {}]",
            settings.resolution,
            settings.resolution,
            half_width,
            half_width
        );

        grid
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&FieldSample> {
        if row >= self.resolution || col >= self.resolution {
            return None;
        }
        self.samples.get(row * self.resolution + col)
    }

    pub fn non_finite_count(&self) -> usize {
        self.samples.iter().filter(|s| !s.is_finite()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn linspace_includes_both_ends() {
        let values = linspace(-2.0, 2.0, 5);
        assert_eq!(values, vec![-2.0, -1.0, 0.0, 1.0, 2.0]);
        assert_eq!(linspace(1.0, 3.0, 1), vec![1.0]);
        assert!(linspace(0.0, 1.0, 0).is_empty());
    }

    #[test]
    fn grid_covers_twice_the_separation() {
        let system = BinarySystem::from_masses(1.0, 0.001, 1.5).unwrap();
        let grid = FieldGrid::sample(&system, &FieldGridSettings::default());

        assert_eq!(grid.samples.len(), 60 * 60);
        let first = grid.get(0, 0).unwrap();
        let last = grid.get(59, 59).unwrap();
        assert_eq!((first.x, first.y), (-3.0, -3.0));
        assert_eq!((last.x, last.y), (3.0, 3.0));
        assert_eq!(grid.get(0, 1).unwrap().y, -3.0);
        assert!(grid.get(60, 0).is_none());
        assert_eq!(grid.non_finite_count(), 0);
    }

    #[test]
    fn arrows_are_compressed_acceleration() {
        let system = BinarySystem::from_masses(1.0, 0.1, 1.0).unwrap();
        let r = na::Vector2::new(0.3, 0.4);
        let sample = FieldSample::evaluate(&system, &r, 0.6);

        let g = acceleration(&system, &r);
        let g_mag = g.norm();
        assert_abs_diff_eq!(sample.arrow_x, g.x / g_mag.powf(0.6), epsilon = 1e-12);
        assert_abs_diff_eq!(sample.arrow_y, g.y / g_mag.powf(0.6), epsilon = 1e-12);
        assert_abs_diff_eq!(sample.log_depth, (-sample.potential).log10(), epsilon = 1e-12);
        // Arrow direction is unchanged
        assert_abs_diff_eq!(
            sample.arrow_y.atan2(sample.arrow_x),
            g.y.atan2(g.x),
            epsilon = 1e-12
        );
    }

    #[test]
    fn sample_on_a_mass_is_flagged() {
        let system = BinarySystem::from_masses(1.0, 1.0, 1.0).unwrap();
        let sample = FieldSample::evaluate(&system, &system.primary_position(), 0.6);
        assert!(!sample.is_finite());
    }

    #[test]
    fn zero_field_gives_zero_arrow() {
        // Equal masses balance exactly at the barycenter
        let system = BinarySystem::from_masses(1.0, 1.0, 1.0).unwrap();
        let sample = FieldSample::evaluate(&system, &na::Vector2::zeros(), 0.6);
        assert_eq!((sample.arrow_x, sample.arrow_y), (0.0, 0.0));
        assert!(sample.is_finite());
    }
}
