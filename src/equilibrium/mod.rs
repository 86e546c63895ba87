pub mod locator;

pub use locator::{LagrangeLocator, SearchBracket};
