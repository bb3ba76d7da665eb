pub mod analysis;
pub mod availability;
pub mod environment;
pub mod features;
pub mod reading;
pub mod recommendation;
pub mod suitability;
pub mod sustainability;
pub mod trend;

pub use analysis::*;
pub use availability::*;
pub use environment::*;
pub use features::*;
pub use reading::*;
pub use recommendation::*;
pub use suitability::*;
pub use sustainability::*;
pub use trend::*;
