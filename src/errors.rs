use crate::models::lagrange_point::LagrangeLabel;
use crate::models::system::Body;
use std::{error::Error, fmt, io};

#[derive(Debug)]
pub enum LagrangeError {
    NonPositiveMass { body: Body, value: f64 },
    NonPositiveSeparation(f64),
    InvalidTolerance(f64),
    InvalidOffset(f64),
    InvalidExtent(f64),
    InvalidResolution(usize),
    InvalidBracket {
        lower: f64,
        upper: f64,
    },
    NoBracketedRoot {
        lower: f64,
        upper: f64,
        f_lower: f64,
        f_upper: f64,
    },
    PointNotFound {
        label: LagrangeLabel,
        source: Box<LagrangeError>,
    },
    IoError(io::Error),
    CsvError(csv::Error),
}

impl fmt::Display for LagrangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LagrangeError::NonPositiveMass { body, value } => {
                write!(f, "Masses must be greater than zero ({} = {})", body, value)
            }
            LagrangeError::NonPositiveSeparation(d) => {
                write!(f, "Distance must be greater than zero (d = {})", d)
            }
            LagrangeError::InvalidTolerance(t) => {
                write!(f, "Tolerance must be a positive finite number, got {}", t)
            }
            LagrangeError::InvalidOffset(e) => {
                write!(f, "Search offset must be a positive finite number, got {}", e)
            }
            LagrangeError::InvalidExtent(k) => {
                write!(f, "Extent factor must be finite and greater than one, got {}", k)
            }
            LagrangeError::InvalidResolution(n) => {
                write!(f, "Grid resolution must be at least 2, got {}", n)
            }
            LagrangeError::InvalidBracket { lower, upper } => {
                write!(f, "Invalid bracket [{}, {}]", lower, upper)
            }
            LagrangeError::NoBracketedRoot {
                lower,
                upper,
                f_lower,
                f_upper,
            } => write!(
                f,
                "No sign change in [{}, {}] (f(lower) = {}, f(upper) = {})",
                lower, upper, f_lower, f_upper
            ),
            LagrangeError::PointNotFound { label, source } => {
                write!(f, "Failed to locate {}: {}", label, source)
            }
            LagrangeError::IoError(e) => write!(f, "I/O error: {}", e),
            LagrangeError::CsvError(e) => write!(f, "CSV error: {}", e),
        }
    }
}

impl Error for LagrangeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LagrangeError::PointNotFound { source, .. } => Some(source.as_ref()),
            LagrangeError::IoError(e) => Some(e),
            LagrangeError::CsvError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for LagrangeError {
    fn from(err: io::Error) -> Self {
        LagrangeError::IoError(err)
    }
}

impl From<csv::Error> for LagrangeError {
    fn from(err: csv::Error) -> Self {
        LagrangeError::CsvError(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_messages_match_cli_wording() {
        let mass = LagrangeError::NonPositiveMass {
            body: Body::Secondary,
            value: -1.0,
        };
        assert_eq!(mass.to_string(), "Masses must be greater than zero (m2 = -1)");

        let distance = LagrangeError::NonPositiveSeparation(0.0);
        assert_eq!(distance.to_string(), "Distance must be greater than zero (d = 0)");
    }

    #[test]
    fn point_not_found_exposes_source() {
        let err = LagrangeError::PointNotFound {
            label: LagrangeLabel::L2,
            source: Box::new(LagrangeError::InvalidBracket {
                lower: 1.0,
                upper: 0.5,
            }),
        };
        assert!(err.to_string().starts_with("Failed to locate L2"));
        assert!(err.source().is_some());
    }
}
