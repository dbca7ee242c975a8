//! Domain models

mod contest;

pub use contest::{Contest, ContestStatus};
