pub mod problem;
pub mod store;

pub use problem::{Complexity, ComplexityDetail, ListEntry, Problem};
pub use store::{Catalog, CatalogError};
