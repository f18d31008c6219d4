use crate::utils::error::{PlumberError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// A route path is an opaque routing key downstream, but it must be non-empty
/// and rooted at `/` to be routable at all.
pub fn validate_route_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(PlumberError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Route path cannot be empty".to_string(),
        });
    }

    if !path.starts_with('/') {
        return Err(PlumberError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Route path must begin with '/'".to_string(),
        });
    }

    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(PlumberError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(PlumberError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PlumberError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_route_path() {
        assert!(validate_route_path("paths", "/apps/rbac").is_ok());
        assert!(validate_route_path("paths", "/").is_ok());
        assert!(validate_route_path("paths", "").is_err());
        assert!(validate_route_path("paths", "apps/rbac").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("frontend_yaml", "deploy/frontend.yaml").is_ok());
        assert!(validate_path("frontend_yaml", "").is_err());
        assert!(validate_path("frontend_yaml", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("app_name", "rbac").is_ok());
        assert!(validate_non_empty_string("app_name", "   ").is_err());
    }
}
