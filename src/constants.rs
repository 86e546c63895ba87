// Units used in reports. Masses and separation are taken in consistent units
// with G = 1 (solar masses and AU in the console output).
pub const MASS_UNIT: &str = "solar masses";
pub const LENGTH_UNIT: &str = "AU";

// Height of an equilateral triangle with unit side
pub const EQUILATERAL_HEIGHT: f64 = 0.866_025_403_784_438_6; // sqrt(3) / 2

// Output
pub const OUTPUT_DIR: &str = "output";
pub const FIELD_GRID_FILE: &str = "field_grid.csv";
pub const MARKERS_FILE: &str = "markers.csv";
