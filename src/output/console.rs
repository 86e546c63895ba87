use crate::constants::{LENGTH_UNIT, MASS_UNIT};
use crate::models::{BinarySystem, LagrangePoints, SearchAxis};

/// Formats a value as `d.ddE±XX`, the printf `%.2E` layout.
pub fn format_scientific(value: f64) -> String {
    let formatted = format!("{:.2E}", value);
    match formatted.split_once('E') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exp) => format!(
                "{}E{}{:02}",
                mantissa,
                if exp < 0 { '-' } else { '+' },
                exp.abs()
            ),
            Err(_) => formatted,
        },
        None => formatted,
    }
}

/// Console summary of the system and its five Lagrange points.
pub fn format_report(system: &BinarySystem, points: &LagrangePoints) -> String {
    let mut lines = vec![format!(
        "Locations of Lagrange points for m1 = {} & m2 = {} {}, d = {:.2} {}:",
        format_scientific(system.m1),
        format_scientific(system.m2),
        MASS_UNIT,
        system.d,
        LENGTH_UNIT
    )];

    for point in points.iter() {
        let line = match point.axis() {
            SearchAxis::Collinear => format!("{}: ({:.4},0)", point.label, point.position.x),
            SearchAxis::Triangular => format!(
                "{}: ({:.4},{:.4})",
                point.label, point.position.x, point.position.y
            ),
        };
        lines.push(line);
    }

    lines.join("\n")
}
