//! Type-safe wrappers and enums shared by the CLI and the pipeline.

pub mod position;
pub mod table;
pub mod time;

pub use position::Position;
pub use table::Table;
pub use time::{Season, Week};
