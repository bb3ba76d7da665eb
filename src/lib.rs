pub mod config;
pub mod error;
pub mod input;
pub mod logic;
pub mod models;

pub use error::{GroundwatchError, Result};
pub use logic::{analyze, Analyzer};
