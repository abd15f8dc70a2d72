//! CLI argument definitions and parsing.

pub mod args;
pub mod types;

pub use args::{Backend, Commands, FantasyFootball, GlobalArgs, SeasonArgs, UpdateCmd};
