use crate::core::paths::is_asset_path;
use crate::domain::model::{RouteSet, CHROME_DEFAULT_ROUTES};
use crate::utils::error::{PlumberError, Result};
use serde_yaml::Value;
use std::path::Path;

pub const DEFAULT_FRONTEND_YAML_PATH: &str = "deploy/frontend.yaml";

/// The parsed frontend manifest. The document is kept as a generic YAML tree
/// and read through a fixed set of recognized access paths; a manifest is
/// allowed to omit any optional section, which simply contributes zero
/// routes.
#[derive(Debug, Clone)]
pub struct FrontendManifest {
    doc: Value,
}

impl FrontendManifest {
    /// Loads and parses the manifest. An absent file is `ManifestNotFound`
    /// (recoverable, callers fall through to the fec config); a present but
    /// malformed file is `ManifestParseError` and aborts the run.
    pub fn load<P: AsRef<Path>>(manifest_path: P) -> Result<Self> {
        let path = manifest_path.as_ref();
        if !path.exists() {
            return Err(PlumberError::ManifestNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path)?;
        let doc: Value =
            serde_yaml::from_str(&content).map_err(|e| PlumberError::ManifestParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Ok(Self { doc })
    }

    /// Parses manifest text directly, without touching the filesystem.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let doc: Value =
            serde_yaml::from_str(content).map_err(|e| PlumberError::ManifestParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?;

        Ok(Self { doc })
    }

    /// The unioned "all routes" view, collected in a fixed source order and
    /// de-duplicated preserving first occurrence:
    ///   1. spec.frontend.paths[]
    ///   2. spec.module.modules[].routes[].pathname
    ///   3. spec.searchEntries[].href
    ///   4. spec.serviceTiles[].href
    ///   5. spec.bundleSegments[].navItems[].href
    ///   6. spec.bundleSegments[].navItems[].routes[].href
    pub fn all_routes(&self) -> RouteSet {
        self.frontend_paths()
            .chain(self.module_routes())
            .chain(self.navigation_hrefs())
            .collect()
    }

    /// Routes served by the local app container: frontend paths and module
    /// routes that carry an asset prefix. Navigation hrefs are never asset
    /// candidates. The well-known Chrome routes stay with the shell even
    /// when a manifest declares them itself.
    pub fn asset_routes(&self) -> RouteSet {
        self.frontend_paths()
            .chain(self.module_routes())
            .filter(|path| is_asset_path(path) && !CHROME_DEFAULT_ROUTES.contains(path))
            .collect()
    }

    /// Routes delegated to the Chrome shell: module-declared routes that are
    /// not asset paths, followed by the well-known defaults `/apps/chrome`,
    /// `/` and `/index.html`. A manifest that already declares one of the
    /// defaults does not duplicate it.
    pub fn chrome_routes(&self) -> RouteSet {
        self.module_routes()
            .filter(|path| !is_asset_path(path) || CHROME_DEFAULT_ROUTES.contains(path))
            .chain(CHROME_DEFAULT_ROUTES)
            .collect()
    }

    /// True iff `spec.module.manifestLocation` is present and non-empty.
    pub fn is_federated(&self) -> bool {
        self.spec()
            .and_then(|spec| spec.get("module"))
            .and_then(|module| module.get("manifestLocation"))
            .and_then(Value::as_str)
            .is_some_and(|location| !location.is_empty())
    }

    /// The canonical module name from `metadata.name`, if the manifest
    /// supplies one. `None` means the caller keeps its externally supplied
    /// name; `Some` overrides it unconditionally, since repository names
    /// frequently diverge from the logical module name used in routing.
    pub fn module_name(&self) -> Option<String> {
        self.doc
            .get("metadata")
            .and_then(|metadata| metadata.get("name"))
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
    }

    fn spec(&self) -> Option<&Value> {
        self.doc.get("spec")
    }

    fn frontend_paths(&self) -> impl Iterator<Item = &str> {
        seq(self
            .spec()
            .and_then(|spec| spec.get("frontend"))
            .and_then(|frontend| frontend.get("paths")))
        .filter_map(Value::as_str)
    }

    fn module_routes(&self) -> impl Iterator<Item = &str> {
        seq(self
            .spec()
            .and_then(|spec| spec.get("module"))
            .and_then(|module| module.get("modules")))
        .flat_map(|module| seq(module.get("routes")))
        .filter_map(|route| route.get("pathname").and_then(Value::as_str))
    }

    /// Navigation-only hrefs: part of the "all routes" view but never handed
    /// to the asset/chrome splitter.
    fn navigation_hrefs(&self) -> impl Iterator<Item = &str> {
        let search_entries = seq(self.spec().and_then(|spec| spec.get("searchEntries")));
        let service_tiles = seq(self.spec().and_then(|spec| spec.get("serviceTiles")));
        let nav_items =
            || seq(self.spec().and_then(|spec| spec.get("bundleSegments")))
                .flat_map(|segment| seq(segment.get("navItems")));

        search_entries
            .filter_map(href)
            .chain(service_tiles.filter_map(href))
            .chain(nav_items().filter_map(href))
            .chain(
                nav_items()
                    .flat_map(|item| seq(item.get("routes")))
                    .filter_map(href),
            )
    }
}

/// Convenience form of the deployment-mode check. Detection failure of any
/// kind (absent file, malformed YAML, missing key) degrades to "standalone",
/// keeping the SPA fallback in the rendered output.
pub fn is_federated_module<P: AsRef<Path>>(manifest_path: P) -> bool {
    FrontendManifest::load(manifest_path)
        .map(|manifest| manifest.is_federated())
        .unwrap_or(false)
}

/// Iterates a YAML sequence node; missing keys and non-sequence values
/// contribute nothing.
fn seq(value: Option<&Value>) -> impl Iterator<Item = &Value> {
    value
        .and_then(Value::as_sequence)
        .map(|entries| entries.iter())
        .into_iter()
        .flatten()
}

fn href(entry: &Value) -> Option<&str> {
    entry.get("href").and_then(Value::as_str)
}
