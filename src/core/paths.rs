/// Prefixes served by the local application's static-file container.
const ASSET_PREFIXES: [&str; 2] = ["/apps/", "/settings/"];

/// Returns true iff `path` denotes a locally-served static asset, i.e. it
/// begins with `/apps/` or `/settings/`. No normalization happens here;
/// callers must supply already-trimmed paths.
pub fn is_asset_path(path: &str) -> bool {
    ASSET_PREFIXES.iter().any(|prefix| path.starts_with(prefix))
}
