pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::CliConfig;
pub use crate::core::classifier::Classifier;
pub use crate::domain::model::{ClassificationResult, RouteSet};
pub use crate::utils::error::{PlumberError, Result};
