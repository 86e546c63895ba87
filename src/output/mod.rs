pub mod console;
pub mod export;
pub mod field_grid;

pub use console::format_report;
pub use export::{export, markers, ExportedFiles, Marker, MarkerKind};
pub use field_grid::{FieldGrid, FieldSample};
