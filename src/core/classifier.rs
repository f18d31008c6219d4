use crate::core::fec_config::{self, DEFAULT_FEC_CONFIG_PATH};
use crate::core::manifest::{FrontendManifest, DEFAULT_FRONTEND_YAML_PATH};
use crate::domain::model::{ClassificationResult, RouteSet, CHROME_DEFAULT_ROUTES};
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// Resolves the classification record from the two input sources.
///
/// The manifest has priority: its route collection is used whenever it is
/// non-empty (the gate is non-emptiness, not mere existence of the file).
/// Otherwise the fec config's `appUrl` list stands in, and failing that the
/// route set is empty, which is a valid result. Missing files degrade;
/// malformed files abort before anything is rendered downstream.
pub struct Classifier {
    manifest_path: PathBuf,
    fec_config_path: PathBuf,
}

impl Classifier {
    pub fn new<M: AsRef<Path>, F: AsRef<Path>>(manifest_path: M, fec_config_path: F) -> Self {
        Self {
            manifest_path: manifest_path.as_ref().to_path_buf(),
            fec_config_path: fec_config_path.as_ref().to_path_buf(),
        }
    }

    pub fn classify(&self, cli_app_name: Option<&str>) -> Result<ClassificationResult> {
        let manifest = match FrontendManifest::load(&self.manifest_path) {
            Ok(manifest) => Some(manifest),
            Err(e) if e.is_recoverable() => {
                tracing::debug!(
                    "no frontend manifest at {}: {}",
                    self.manifest_path.display(),
                    e
                );
                None
            }
            Err(e) => return Err(e),
        };

        let manifest_name = manifest.as_ref().and_then(FrontendManifest::module_name);
        if let (Some(name), Some(cli_name)) = (manifest_name.as_deref(), cli_app_name) {
            if name != cli_name {
                tracing::info!(
                    "✓ using module name '{}' from manifest instead of '{}'",
                    name,
                    cli_name
                );
            }
        }
        let module_name = manifest_name.or_else(|| cli_app_name.map(str::to_string));

        let is_federated = manifest
            .as_ref()
            .map(FrontendManifest::is_federated)
            .unwrap_or(false);
        if is_federated {
            tracing::info!("✓ detected federated module (has spec.module.manifestLocation)");
        } else {
            tracing::info!("✓ detected standalone app (no spec.module.manifestLocation)");
        }

        let result = match manifest.as_ref() {
            Some(manifest) => {
                let all_routes = manifest.all_routes();
                if all_routes.is_empty() {
                    self.classify_from_fec_config(is_federated, module_name)?
                } else {
                    tracing::info!(
                        "✓ found {} route(s) in {}",
                        all_routes.len(),
                        self.manifest_path.display()
                    );
                    ClassificationResult {
                        all_routes,
                        asset_routes: manifest.asset_routes(),
                        chrome_routes: manifest.chrome_routes(),
                        is_federated,
                        module_name,
                    }
                }
            }
            None => self.classify_from_fec_config(is_federated, module_name)?,
        };

        result.check_invariants()?;
        Ok(result)
    }

    /// Fallback leg: the appUrl routes are what the local app serves, so
    /// they stand in for the asset set, and Chrome keeps exactly its
    /// well-known defaults.
    fn classify_from_fec_config(
        &self,
        is_federated: bool,
        module_name: Option<String>,
    ) -> Result<ClassificationResult> {
        let app_urls = fec_config::app_url_or(&self.fec_config_path, Vec::new())?;
        if !app_urls.is_empty() {
            tracing::info!(
                "✓ found appUrl in {}: {:?}",
                self.fec_config_path.display(),
                app_urls
            );
        }

        let all_routes: RouteSet = app_urls.into_iter().collect();
        Ok(ClassificationResult {
            asset_routes: all_routes.clone(),
            chrome_routes: CHROME_DEFAULT_ROUTES.into_iter().collect(),
            all_routes,
            is_federated,
            module_name,
        })
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(DEFAULT_FRONTEND_YAML_PATH, DEFAULT_FEC_CONFIG_PATH)
    }
}
