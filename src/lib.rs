pub mod dynamic_cover;
pub mod indexed_set;
pub mod leveled;
pub use dynamic_cover::{CoverError, DynamicCoverSolver};
pub use leveled::LeveledCoverEngine;
