pub mod classifier;
pub mod fec_config;
pub mod manifest;
pub mod paths;

pub use crate::domain::model::{ClassificationResult, RouteSet};
pub use crate::utils::error::Result;
