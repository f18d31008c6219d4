use crate::utils::error::{PlumberError, Result};
use serde::Serialize;

/// Routes the Chrome shell always owns, appended after the manifest-declared
/// chrome routes in this exact order.
pub const CHROME_DEFAULT_ROUTES: [&str; 3] = ["/apps/chrome", "/", "/index.html"];

/// An ordered route collection, de-duplicated on insert: the first occurrence
/// of a path wins and insertion order is preserved, so generated output is
/// deterministic without being sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RouteSet {
    routes: Vec<String>,
}

impl RouteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `route` unless an equal path was already inserted.
    pub fn push(&mut self, route: impl Into<String>) {
        let route = route.into();
        if !self.routes.iter().any(|r| *r == route) {
            self.routes.push(route);
        }
    }

    pub fn contains(&self, route: &str) -> bool {
        self.routes.iter().any(|r| r == route)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.routes
    }
}

impl<S: Into<String>> FromIterator<S> for RouteSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = RouteSet::new();
        for route in iter {
            set.push(route);
        }
        set
    }
}

impl<'a> IntoIterator for &'a RouteSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.iter()
    }
}

/// The record handed to the template-rendering side: the three route views
/// plus the deployment flags resolved from the input sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationResult {
    pub all_routes: RouteSet,
    pub asset_routes: RouteSet,
    pub chrome_routes: RouteSet,
    pub is_federated: bool,
    pub module_name: Option<String>,
}

impl ClassificationResult {
    /// A route served by both the local app container and the Chrome shell
    /// would match twice downstream; that is a logic defect in the splitter,
    /// not bad input, so it is fatal rather than silently corrected.
    pub fn check_invariants(&self) -> Result<()> {
        for route in &self.asset_routes {
            if self.chrome_routes.contains(route) {
                return Err(PlumberError::InvariantViolation {
                    message: format!(
                        "route '{}' appears in both asset and chrome route sets",
                        route
                    ),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_set_dedup_first_occurrence_wins() {
        let mut set = RouteSet::new();
        set.push("/apps/rbac");
        set.push("/iam");
        set.push("/apps/rbac");
        set.push("/settings/rbac");

        assert_eq!(set.as_slice(), &["/apps/rbac", "/iam", "/settings/rbac"]);
    }

    #[test]
    fn test_route_set_from_iterator() {
        let set: RouteSet = ["/a", "/b", "/a"].into_iter().collect();
        assert_eq!(set.as_slice(), &["/a", "/b"]);
    }

    #[test]
    fn test_route_set_serializes_as_plain_array() {
        let set: RouteSet = ["/a", "/b"].into_iter().collect();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["/a","/b"]"#);
    }

    #[test]
    fn test_check_invariants_detects_overlap() {
        let result = ClassificationResult {
            all_routes: ["/apps/rbac", "/iam"].into_iter().collect(),
            asset_routes: ["/apps/rbac"].into_iter().collect(),
            chrome_routes: ["/apps/rbac", "/"].into_iter().collect(),
            is_federated: false,
            module_name: None,
        };

        assert!(result.check_invariants().is_err());
    }

    #[test]
    fn test_check_invariants_passes_on_disjoint_sets() {
        let result = ClassificationResult {
            all_routes: ["/apps/rbac", "/iam"].into_iter().collect(),
            asset_routes: ["/apps/rbac"].into_iter().collect(),
            chrome_routes: ["/iam", "/apps/chrome", "/", "/index.html"]
                .into_iter()
                .collect(),
            is_federated: true,
            module_name: Some("rbac".to_string()),
        };

        assert!(result.check_invariants().is_ok());
    }
}
