//! Configuration utility functions.

use std::path::{Path, PathBuf};

use super::{ConfigDiagnostics, FieldPath};
use crate::config::section::Link;

/// Extract path component from a URL string
///
/// Uses `url` crate for proper parsing, handling edge cases like:
/// - Port numbers: `https://example.com:8080/path` -> `path`
/// - Query strings: `https://example.com/path?query` -> `path`
///
/// Returns `None` if the URL is invalid
///
/// # Examples
/// ```ignore
/// extract_url_path("https://example.github.io/my-project/") -> Some("my-project")
/// extract_url_path("https://example.com")                   -> Some("")
/// extract_url_path("invalid")                               -> None
/// ```
pub fn extract_url_path(url_str: &str) -> Option<String> {
    let parsed = url::Url::parse(url_str).ok()?;
    let path = parsed.path().trim_matches('/');
    Some(path.to_string())
}

/// Find config file by searching upward from `start`
///
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/docs/content/guides/  ← start
/// /home/user/docs/docsite.toml     ← found!
/// ```
pub fn find_config_file(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None,
        }
    }
}

/// Expand a leading `~` in a user-supplied path.
pub fn expand_tilde(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(s) => PathBuf::from(shellexpand::tilde(s).into_owned()),
        None => path.to_path_buf(),
    }
}

// ============================================================================
// link checks
// ============================================================================

/// Accepted shape of a link value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkShape {
    /// `/docs/intro`
    RootRelative,
    /// `https://example.com/docs`
    Absolute,
}

/// Classify a link as root-relative path or absolute http(s) URL.
///
/// Returns a human-readable reason when it is neither.
pub fn check_link(value: &str) -> Result<LinkShape, String> {
    if value.chars().any(char::is_whitespace) {
        return Err(format!("'{value}' contains whitespace"));
    }

    if let Some(rest) = value.strip_prefix('/') {
        if rest.starts_with('/') {
            return Err(format!("'{value}' is protocol-relative, spell out the scheme"));
        }
        return Ok(LinkShape::RootRelative);
    }

    match url::Url::parse(value) {
        Ok(parsed) => {
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(format!(
                    "scheme '{}' not supported, must be http or https",
                    parsed.scheme()
                ));
            }
            if parsed.host_str().is_none_or(str::is_empty) {
                return Err(format!("'{value}' has no host"));
            }
            Ok(LinkShape::Absolute)
        }
        Err(e) => Err(format!("invalid URL '{value}': {e}")),
    }
}

/// Check a single link field. Empty values pass only when `allow_empty`.
pub fn validate_link(diag: &mut ConfigDiagnostics, field: FieldPath, value: &str, allow_empty: bool) {
    if value.is_empty() {
        if !allow_empty {
            diag.error_with_hint(field, "link must not be empty", "use a path like /docs or a full URL");
        }
        return;
    }
    if let Err(reason) = check_link(value) {
        diag.error_with_hint(field, reason, "use a path like /docs or a full URL");
    }
}

/// Check a field that must be an absolute URL (no root-relative paths).
pub fn validate_absolute_url(diag: &mut ConfigDiagnostics, field: FieldPath, value: &str, allow_empty: bool) {
    if value.is_empty() {
        if !allow_empty {
            diag.error_with_hint(field, "URL must not be empty", "use format like https://example.com");
        }
        return;
    }
    match check_link(value) {
        Ok(LinkShape::Absolute) => {}
        Ok(LinkShape::RootRelative) => diag.error_with_hint(
            field,
            format!("'{value}' is a path, an absolute URL is required"),
            "use format like https://example.com",
        ),
        Err(reason) => diag.error_with_hint(field, reason, "use format like https://example.com"),
    }
}

/// Check every entry of an ordered link list.
pub fn validate_link_list(diag: &mut ConfigDiagnostics, field: FieldPath, links: &[Link]) {
    for (i, entry) in links.iter().enumerate() {
        if entry.name.trim().is_empty() {
            diag.error(field, format!("entry #{} has an empty name", i + 1));
        }
        if entry.link.is_empty() {
            diag.error(field, format!("entry #{} ('{}') has an empty link", i + 1, entry.name));
            continue;
        }
        if let Err(reason) = check_link(&entry.link) {
            diag.error_with_hint(
                field,
                format!("entry #{} ('{}'): {}", i + 1, entry.name, reason),
                "use a path like /docs or a full URL",
            );
        }
    }
}

/// Require a non-blank text value.
pub fn validate_required(diag: &mut ConfigDiagnostics, field: FieldPath, value: &str) {
    if value.trim().is_empty() {
        diag.error(field, format!("{field} must not be empty"));
    }
}

// ============================================================================
// tests
// ============================================================================
