use crate::core::fec_config::DEFAULT_FEC_CONFIG_PATH;
use crate::core::manifest::DEFAULT_FRONTEND_YAML_PATH;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "plumber")]
#[command(about = "Extract and classify frontend route declarations for proxy config generation")]
pub struct CliConfig {
    /// Name of the application (overridden by metadata.name when the
    /// manifest declares one)
    pub app_name: String,

    #[arg(long, default_value = DEFAULT_FRONTEND_YAML_PATH, help = "Path to the frontend manifest")]
    pub frontend_yaml: String,

    #[arg(long, default_value = DEFAULT_FEC_CONFIG_PATH, help = "Path to the fec.config.js file")]
    pub fec_config: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("app_name", &self.app_name)?;
        validation::validate_path("frontend_yaml", &self.frontend_yaml)?;
        validation::validate_path("fec_config", &self.fec_config)?;
        Ok(())
    }
}
