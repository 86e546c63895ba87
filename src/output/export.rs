use super::field_grid::FieldGrid;
use crate::constants::{FIELD_GRID_FILE, MARKERS_FILE};
use crate::errors::LagrangeError;
use crate::models::{BinarySystem, LagrangePoints};
use csv::Writer;
use serde::Serialize;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerKind {
    Mass,
    Lagrange,
}

/// A point drawn on top of the field chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub label: String,
    pub kind: MarkerKind,
    pub x: f64,
    pub y: f64,
}

/// Both masses followed by L1..L5.
pub fn markers(system: &BinarySystem, points: &LagrangePoints) -> Vec<Marker> {
    let masses = [
        ("m1", system.primary_position()),
        ("m2", system.secondary_position()),
    ]
    .into_iter()
    .map(|(label, position)| Marker {
        label: label.to_string(),
        kind: MarkerKind::Mass,
        x: position.x,
        y: position.y,
    });

    let lagrange = points.iter().map(|point| Marker {
        label: point.label.to_string(),
        kind: MarkerKind::Lagrange,
        x: point.position.x,
        y: point.position.y,
    });

    masses.chain(lagrange).collect()
}

pub fn write_field_grid<W: io::Write>(writer: W, grid: &FieldGrid) -> Result<(), LagrangeError> {
    let mut writer = Writer::from_writer(writer);

    writer.write_record([
        "X (AU)",
        "Y (AU)",
        "Potential",
        "Log10 Potential Depth",
        "Accel X",
        "Accel Y",
        "Arrow X",
        "Arrow Y",
    ])?;

    for sample in &grid.samples {
        writer.write_record(&[
            sample.x.to_string(),
            sample.y.to_string(),
            sample.potential.to_string(),
            sample.log_depth.to_string(),
            sample.accel_x.to_string(),
            sample.accel_y.to_string(),
            sample.arrow_x.to_string(),
            sample.arrow_y.to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

pub fn write_markers<W: io::Write>(writer: W, markers: &[Marker]) -> Result<(), LagrangeError> {
    let mut writer = Writer::from_writer(writer);
    for marker in markers {
        writer.serialize(marker)?;
    }
    writer.flush()?;
    Ok(())
}

/// Files written by [`export`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFiles {
    pub field_grid: PathBuf,
    pub markers: PathBuf,
}

/// Writes the field grid and markers as CSV into `output_dir`, creating it
/// if it doesn't exist.
pub fn export(
    output_dir: &Path,
    grid: &FieldGrid,
    markers: &[Marker],
) -> Result<ExportedFiles, LagrangeError> {
    fs::create_dir_all(output_dir)?;

    let files = ExportedFiles {
        field_grid: output_dir.join(FIELD_GRID_FILE),
        markers: output_dir.join(MARKERS_FILE),
    };

    write_field_grid(File::create(&files.field_grid)?, grid)?;
    write_markers(File::create(&files.markers)?, markers)?;

    tracing::info!(
        "Wrote {} field samples and {} markers to {}",
        grid.samples.len(),
        markers.len(),
        output_dir.display()
    );

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FieldGridSettings;
    use nalgebra as na;

    fn fixture() -> (BinarySystem, LagrangePoints) {
        let system = BinarySystem::from_masses(3.0, 1.0, 2.0).unwrap();
        let points = LagrangePoints::from_positions([
            na::Vector2::new(0.5, 0.0),
            na::Vector2::new(2.5, 0.0),
            na::Vector2::new(-2.0, 0.0),
            na::Vector2::new(0.5, 1.5),
            na::Vector2::new(0.5, -1.5),
        ]);
        (system, points)
    }

    #[test]
    fn markers_list_masses_then_points() {
        let (system, points) = fixture();
        let markers = markers(&system, &points);

        assert_eq!(markers.len(), 7);
        assert_eq!(markers[0].label, "m1");
        assert_eq!((markers[0].x, markers[0].kind), (-0.5, MarkerKind::Mass));
        assert_eq!((markers[1].x, markers[1].kind), (1.5, MarkerKind::Mass));
        assert_eq!(markers[5].label, "L4");
        assert_eq!((markers[5].y, markers[5].kind), (1.5, MarkerKind::Lagrange));
    }

    #[test]
    fn markers_csv_layout() {
        let (system, points) = fixture();
        let mut buffer = Vec::new();
        write_markers(&mut buffer, &markers(&system, &points)).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "label,kind,x,y");
        assert_eq!(lines[1], "m1,mass,-0.5,0.0");
        assert_eq!(lines[3], "L1,lagrange,0.5,0.0");
        assert_eq!(lines.len(), 8);
    }

    #[test]
    fn field_grid_csv_has_one_row_per_sample() {
        let (system, _) = fixture();
        let grid = FieldGrid::sample(&system, &FieldGridSettings::new(4).unwrap());
        let mut buffer = Vec::new();
        write_field_grid(&mut buffer, &grid).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "X (AU),Y (AU),Potential,Log10 Potential Depth,Accel X,Accel Y,Arrow X,Arrow Y"
        );
        assert_eq!(lines.clone().count(), 16);
        assert!(lines.next().unwrap().starts_with("-4,-4,"));
    }

    #[test]
    fn export_creates_directory_and_files() {
        let (system, points) = fixture();
        let grid = FieldGrid::sample(&system, &FieldGridSettings::new(3).unwrap());
        let dir = std::env::temp_dir().join(format!("lagrange-export-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);

        let files = export(&dir, &grid, &markers(&system, &points)).unwrap();
        assert!(files.field_grid.exists());
        assert!(files.markers.exists());
        assert_eq!(files.markers, dir.join("markers.csv"));

        fs::remove_dir_all(&dir).unwrap();
    }
}
