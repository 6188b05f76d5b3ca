pub mod calculator;
pub mod catalog;
pub mod configurator;
pub mod normalizer;
pub mod preferences;
pub mod resolver;
pub mod vocabulary;

pub use catalog::{Catalog, CatalogSet};
pub use resolver::{resolve, ResolutionInput, Selection};
