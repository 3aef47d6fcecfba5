//! Type-safe config field path.

use owo_colors::OwoColorize;
use std::fmt;

/// A dotted path to a config key, spelled the way it appears in
/// `docsite.toml` and the exported JSON.
///
/// Generated by `#[derive(Config)]`:
///
/// ```ignore
/// #[derive(Config)]
/// #[serde(rename_all = "camelCase")]
/// #[config(section = "gatsby")]
/// pub struct GatsbyConfig {
///     pub site_url: String,
/// }
///
/// diag.error(GatsbyConfig::FIELDS.site_url, "invalid URL");
/// // reported as `gatsby.siteUrl`
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str_is_raw_path() {
        let path = FieldPath::new("footer.findus.gitLink");
        assert_eq!(path.as_str(), "footer.findus.gitLink");
        assert_eq!(path.as_ref(), "footer.findus.gitLink");
    }

    #[test]
    fn test_display_wraps_in_backticks() {
        let shown = FieldPath::new("gatsby.siteUrl").to_string();
        assert!(shown.contains("`gatsby.siteUrl`"));
    }
}
