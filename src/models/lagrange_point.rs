use nalgebra as na;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LagrangeLabel {
    L1,
    L2,
    L3,
    L4,
    L5,
}

/// Which line a point is searched along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchAxis {
    /// The x axis joining the two masses.
    Collinear,
    /// The vertical line through the midpoint of the masses.
    Triangular,
}

impl LagrangeLabel {
    pub const ALL: [LagrangeLabel; 5] = [
        LagrangeLabel::L1,
        LagrangeLabel::L2,
        LagrangeLabel::L3,
        LagrangeLabel::L4,
        LagrangeLabel::L5,
    ];

    pub fn axis(&self) -> SearchAxis {
        match self {
            LagrangeLabel::L1 | LagrangeLabel::L2 | LagrangeLabel::L3 => SearchAxis::Collinear,
            LagrangeLabel::L4 | LagrangeLabel::L5 => SearchAxis::Triangular,
        }
    }

    fn index(&self) -> usize {
        match self {
            LagrangeLabel::L1 => 0,
            LagrangeLabel::L2 => 1,
            LagrangeLabel::L3 => 2,
            LagrangeLabel::L4 => 3,
            LagrangeLabel::L5 => 4,
        }
    }
}

impl fmt::Display for LagrangeLabel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LagrangeLabel::L1 => write!(f, "L1"),
            LagrangeLabel::L2 => write!(f, "L2"),
            LagrangeLabel::L3 => write!(f, "L3"),
            LagrangeLabel::L4 => write!(f, "L4"),
            LagrangeLabel::L5 => write!(f, "L5"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LagrangePoint {
    pub label: LagrangeLabel,
    pub position: na::Vector2<f64>,
}

impl LagrangePoint {
    pub fn new(label: LagrangeLabel, position: na::Vector2<f64>) -> Self {
        Self { label, position }
    }

    pub fn axis(&self) -> SearchAxis {
        self.label.axis()
    }
}

/// The five equilibrium points of one system, stored in label order.
#[derive(Debug, Clone, PartialEq)]
pub struct LagrangePoints {
    points: [LagrangePoint; 5],
}

impl LagrangePoints {
    /// Builds the set from per-label positions, ordered L1..L5.
    pub fn from_positions(positions: [na::Vector2<f64>; 5]) -> Self {
        let mut points = [LagrangePoint::new(LagrangeLabel::L1, na::Vector2::zeros()); 5];
        for (slot, (label, position)) in points
            .iter_mut()
            .zip(LagrangeLabel::ALL.iter().zip(positions))
        {
            *slot = LagrangePoint::new(*label, position);
        }
        Self { points }
    }

    pub fn get(&self, label: LagrangeLabel) -> &LagrangePoint {
        &self.points[label.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &LagrangePoint> {
        self.points.iter()
    }
}
