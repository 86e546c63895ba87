pub mod field_grid;
pub mod search;

pub use field_grid::FieldGridSettings;
pub use search::SearchSettings;
