//! `gatsby` section: deployment path prefix and base URL.
//!
//! # Example
//!
//! ```toml
//! [gatsby]
//! pathPrefix = "/docs"
//! siteUrl = "https://example.com/docs"
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;
use crate::config::util::{extract_url_path, validate_absolute_url};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default, rename_all = "camelCase")]
#[config(section = "gatsby")]
pub struct GatsbyConfig {
    /// Path the site is served under, empty for the domain root.
    pub path_prefix: String,

    /// Public base URL of the deployed site.
    pub site_url: String,
}

impl GatsbyConfig {
    /// Validate deployment settings.
    ///
    /// # Checks
    /// - `pathPrefix` is empty or starts with `/`
    /// - `siteUrl` is empty or an absolute http(s) URL
    /// - a `siteUrl` path that disagrees with `pathPrefix` is a warning
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.path_prefix.is_empty() && !self.path_prefix.starts_with('/') {
            diag.error_with_hint(
                Self::FIELDS.path_prefix,
                format!("'{}' must start with '/'", self.path_prefix),
                format!("set {} = \"/{}\"", Self::FIELDS.path_prefix, self.path_prefix),
            );
        }

        validate_absolute_url(diag, Self::FIELDS.site_url, &self.site_url, true);

        if let Some(url_path) = extract_url_path(&self.site_url)
            && !url_path.is_empty()
            && url_path != self.path_prefix.trim_matches('/')
        {
            diag.warn(
                Self::FIELDS.path_prefix,
                format!(
                    "{} is served under '/{}' but {} is '{}'",
                    Self::FIELDS.site_url.as_str(),
                    url_path,
                    Self::FIELDS.path_prefix.as_str(),
                    self.path_prefix
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diagnose(config: &GatsbyConfig) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);
        diag
    }

    #[test]
    fn test_default_is_empty_and_valid() {
        let config = GatsbyConfig::default();
        assert_eq!(config.path_prefix, "");
        assert_eq!(config.site_url, "");

        let diag = diagnose(&config);
        assert!(diag.is_empty());
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_path_prefix_needs_leading_slash() {
        let config = GatsbyConfig {
            path_prefix: "docs".into(),
            site_url: String::new(),
        };
        let diag = diagnose(&config);
        assert_eq!(diag.errors().len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "gatsby.pathPrefix");
    }

    #[test]
    fn test_site_url_must_be_absolute() {
        let config = GatsbyConfig {
            path_prefix: "/docs".into(),
            site_url: "/docs".into(),
        };
        let diag = diagnose(&config);
        assert_eq!(diag.errors().len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "gatsby.siteUrl");
        assert!(diag.errors()[0].message.contains("absolute URL is required"));
    }

    #[test]
    fn test_site_url_path_mismatch_warns() {
        let config = GatsbyConfig {
            path_prefix: String::new(),
            site_url: "https://example.github.io/docs".into(),
        };
        let diag = diagnose(&config);
        assert!(diag.is_empty());
        assert_eq!(diag.warnings().len(), 1);

        let config = GatsbyConfig {
            path_prefix: "/docs".into(),
            site_url: "https://example.github.io/docs/".into(),
        };
        assert!(diagnose(&config).warnings().is_empty());
    }

    #[test]
    fn test_field_paths_are_camel_case() {
        assert_eq!(GatsbyConfig::FIELDS.path_prefix.as_str(), "gatsby.pathPrefix");
        assert_eq!(GatsbyConfig::FIELDS.site_url.as_str(), "gatsby.siteUrl");
    }
}
