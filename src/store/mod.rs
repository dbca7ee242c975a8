//! Data access layer

mod catalog;

pub use catalog::ContestCatalog;
