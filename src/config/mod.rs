//! Configuration module for the finance tracker
//!
//! - Platform path resolution with an environment override
//! - User settings persistence (budget, currency, advice provider)

pub mod paths;
pub mod settings;

pub use paths::TrackerPaths;
pub use settings::{AdviceSettings, Settings};
