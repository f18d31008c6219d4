use clap::Parser;
use plumber::utils::{logger, validation::Validate};
use plumber::{Classifier, CliConfig};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting plumber route classification");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let classifier = Classifier::new(&config.frontend_yaml, &config.fec_config);

    match classifier.classify(Some(&config.app_name)) {
        Ok(result) => {
            tracing::info!(
                "✓ classified {} route(s): {} asset, {} chrome",
                result.all_routes.len(),
                result.asset_routes.len(),
                result.chrome_routes.len()
            );
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Err(e) => {
            tracing::error!("❌ Route classification failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
