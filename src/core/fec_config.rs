use crate::utils::error::{PlumberError, Result};
use regex::Regex;
use std::path::Path;

pub const DEFAULT_FEC_CONFIG_PATH: &str = "fec.config.js";

/// Extracts the `appUrl` value from a fec.config.js file.
///
/// The file is JS-like and never valid JSON, so it is not parsed as a whole
/// and never evaluated; only the one key is located by pattern search and its
/// value tokenized. Duplicates are preserved as given, in source order;
/// de-duplication is the caller's concern.
///
/// Returns `ConfigNotFound` for a missing file (the caller degrades to its
/// default) and `ConfigParseError` when the key is absent or its value does
/// not tokenize.
pub fn app_url<P: AsRef<Path>>(config_path: P) -> Result<Vec<String>> {
    let path = config_path.as_ref();
    if !path.exists() {
        return Err(PlumberError::ConfigNotFound {
            path: path.display().to_string(),
        });
    }

    let content = std::fs::read_to_string(path)?;
    app_url_from_str(&content)
}

/// Like [`app_url`], but a missing config file degrades to `default`
/// instead of propagating: optional config that is simply not there is not
/// an error. A file that exists but fails to parse still propagates.
pub fn app_url_or<P: AsRef<Path>>(config_path: P, default: Vec<String>) -> Result<Vec<String>> {
    match app_url(&config_path) {
        Ok(routes) => Ok(routes),
        Err(PlumberError::ConfigNotFound { path }) => {
            tracing::warn!("could not read {}, using default routes", path);
            Ok(default)
        }
        Err(e) => Err(e),
    }
}

/// Extraction over already-read config text.
pub fn app_url_from_str(content: &str) -> Result<Vec<String>> {
    let key_re = Regex::new(r"appUrl\s*:").unwrap();
    let key = key_re
        .find(content)
        .ok_or_else(|| parse_error("no appUrl key found", content))?;

    let rest = content[key.end()..].trim_start();
    match rest.chars().next() {
        Some('[') => parse_list(rest),
        Some(quote @ ('\'' | '"')) => {
            let (value, _) = parse_string_literal(&rest[quote.len_utf8()..], quote)?;
            Ok(vec![value])
        }
        _ => Err(parse_error(
            "appUrl value is neither a string literal nor a list",
            rest,
        )),
    }
}

/// Tokenizes a bracketed list of string literals. Quotes are tracked
/// explicitly so brackets inside a literal do not terminate the scan, each
/// literal is re-emitted double-quoted, and a trailing comma before the
/// closing bracket is dropped; the normalized text then parses as a JSON
/// array of strings.
fn parse_list(rest: &str) -> Result<Vec<String>> {
    let mut normalized = String::from("[");
    let mut pos = '['.len_utf8();

    while pos < rest.len() {
        let Some(c) = rest[pos..].chars().next() else {
            break;
        };

        match c {
            '\'' | '"' => {
                let (value, consumed) = parse_string_literal(&rest[pos + c.len_utf8()..], c)?;
                normalized.push_str(&serde_json::to_string(&value)?);
                pos += c.len_utf8() + consumed;
            }
            ',' => {
                normalized.push(',');
                pos += 1;
            }
            ']' => {
                let body = normalized.trim_end();
                let mut json = body.strip_suffix(',').unwrap_or(body).to_string();
                json.push(']');

                return serde_json::from_str::<Vec<String>>(&json).map_err(|e| {
                    parse_error(&format!("appUrl list is not a JSON string array: {}", e), rest)
                });
            }
            c if c.is_whitespace() => {
                normalized.push(c);
                pos += c.len_utf8();
            }
            _ => {
                return Err(parse_error(
                    "unsupported token in appUrl list",
                    &rest[pos..],
                ))
            }
        }
    }

    Err(parse_error("unterminated appUrl list", rest))
}

/// Reads a quoted literal starting right after its opening quote. Returns the
/// unescaped value and the number of bytes consumed, including the closing
/// quote.
fn parse_string_literal(rest: &str, quote: char) -> Result<(String, usize)> {
    let mut value = String::new();
    let mut escaped = false;

    for (idx, c) in rest.char_indices() {
        if escaped {
            match c {
                '\\' | '\'' | '"' => value.push(c),
                other => {
                    // Unknown escape, kept verbatim.
                    value.push('\\');
                    value.push(other);
                }
            }
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == quote {
            return Ok((value, idx + quote.len_utf8()));
        } else {
            value.push(c);
        }
    }

    Err(parse_error("unterminated string literal", rest))
}

fn parse_error(message: &str, snippet: &str) -> PlumberError {
    PlumberError::ConfigParseError {
        message: message.to_string(),
        snippet: truncate_snippet(snippet),
    }
}

/// Diagnostics carry the offending region, clamped so a whole config file
/// never ends up inside an error message.
fn truncate_snippet(snippet: &str) -> String {
    const MAX_LEN: usize = 60;
    let trimmed = snippet.trim();
    match trimmed.char_indices().nth(MAX_LEN) {
        Some((idx, _)) => format!("{}...", &trimmed[..idx]),
        None => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_list_with_single_quotes_and_trailing_comma() {
        let content = r#"
module.exports = {
  appUrl: ['/a', '/b',],
  debug: true,
};
"#;
        let routes = app_url_from_str(content).unwrap();
        assert_eq!(routes, vec!["/a", "/b"]);
    }

    #[test]
    fn test_list_with_double_quotes() {
        let routes = app_url_from_str(r#"appUrl: ["/apps/rbac", "/iam"]"#).unwrap();
        assert_eq!(routes, vec!["/apps/rbac", "/iam"]);
    }

    #[test]
    fn test_scalar_single_and_double_quoted() {
        assert_eq!(app_url_from_str("appUrl: '/solo'").unwrap(), vec!["/solo"]);
        assert_eq!(
            app_url_from_str(r#"appUrl: "/solo""#).unwrap(),
            vec!["/solo"]
        );
    }

    #[test]
    fn test_duplicates_preserved_in_source_order() {
        let routes = app_url_from_str("appUrl: ['/a', '/b', '/a']").unwrap();
        assert_eq!(routes, vec!["/a", "/b", "/a"]);
    }

    #[test]
    fn test_empty_list() {
        let routes = app_url_from_str("appUrl: []").unwrap();
        assert!(routes.is_empty());
    }

    #[test]
    fn test_escaped_quote_inside_literal() {
        let routes = app_url_from_str(r"appUrl: ['/o\'brien']").unwrap();
        assert_eq!(routes, vec!["/o'brien"]);
    }

    #[test]
    fn test_bracket_inside_literal_does_not_close_list() {
        let routes = app_url_from_str("appUrl: ['/weird]path', '/b']").unwrap();
        assert_eq!(routes, vec!["/weird]path", "/b"]);
    }

    #[test]
    fn test_missing_key_is_parse_error() {
        let err = app_url_from_str("module.exports = { debug: true }").unwrap_err();
        assert!(matches!(err, PlumberError::ConfigParseError { .. }));
    }

    #[test]
    fn test_unquoted_value_is_parse_error() {
        let err = app_url_from_str("appUrl: 42").unwrap_err();
        assert!(matches!(err, PlumberError::ConfigParseError { .. }));
    }

    #[test]
    fn test_unterminated_list_is_parse_error() {
        let err = app_url_from_str("appUrl: ['/a', '/b'").unwrap_err();
        assert!(matches!(err, PlumberError::ConfigParseError { .. }));
    }

    #[test]
    fn test_unsupported_token_is_parse_error() {
        let err = app_url_from_str("appUrl: [foo]").unwrap_err();
        assert!(matches!(err, PlumberError::ConfigParseError { .. }));
    }

    #[test]
    fn test_missing_file_is_config_not_found() {
        let err = app_url("/definitely/not/here/fec.config.js").unwrap_err();
        assert!(matches!(err, PlumberError::ConfigNotFound { .. }));
    }

    #[test]
    fn test_app_url_or_degrades_on_missing_file_only() {
        let routes =
            app_url_or("/definitely/not/here/fec.config.js", vec!["/fallback".into()]).unwrap();
        assert_eq!(routes, vec!["/fallback"]);

        // Present but malformed still propagates.
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"module.exports = {};").unwrap();
        assert!(app_url_or(file.path(), Vec::new()).is_err());
    }

    #[test]
    fn test_reads_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"const config = { appUrl: ['/settings/rbac'] };")
            .unwrap();

        let routes = app_url(file.path()).unwrap();
        assert_eq!(routes, vec!["/settings/rbac"]);
    }
}
