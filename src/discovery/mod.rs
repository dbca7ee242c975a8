//! Contest discovery engine
//!
//! Pure, synchronous listing logic: filtering, sorting and pagination over an
//! already-materialized contest catalog, plus the query-string form of the
//! listing criteria and the windowed page markers consumed by pagination
//! controls. Nothing in this module performs I/O or holds state.

mod criteria;
mod engine;
mod pages;

pub use criteria::FilterCriteria;
pub use engine::{query, QueryResult};
pub use pages::{windowed_pages, PageMarker};
