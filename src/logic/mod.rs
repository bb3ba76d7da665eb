pub mod analyzer;
pub mod calculations;
pub mod depth;
pub mod ensemble;
pub mod features;
pub mod rules;
pub mod seasonality;
pub mod suitability;
pub mod sustainability;
pub mod trend;

pub use analyzer::{analyze, Analyzer};
pub use ensemble::EnsemblePredictor;
pub use rules::RulesEngine;
