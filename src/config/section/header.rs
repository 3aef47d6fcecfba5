//! `header` section: logo, title, navigation links and search credentials.
//!
//! # Example
//!
//! ```toml
//! [header]
//! logoLink = "/"
//! title = "How To Data"
//! links = [{ name = "Docs", link = "/" }]
//!
//! [header.search]
//! indexName = "docs"
//! ```
//!
//! Search keys normally come from the environment (see `config::env`).

use macros::Config;
use serde::{Deserialize, Serialize};

use super::Link;
use crate::config::env::{self, EnvSource};
use crate::config::util::{validate_link, validate_link_list, validate_required};
use crate::config::{ConfigDiagnostics, Secret};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default, rename_all = "camelCase")]
#[config(section = "header")]
pub struct HeaderConfig {
    /// Target of the header logo, empty for none.
    pub logo_link: String,

    /// Site title shown next to the logo.
    pub title: String,

    /// Top navigation, in display order.
    pub links: Vec<Link>,

    pub search: SearchConfig,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            logo_link: String::new(),
            title: "How To Data".into(),
            links: Vec::new(),
            search: SearchConfig::default(),
        }
    }
}

impl HeaderConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        validate_link(diag, Self::FIELDS.logo_link, &self.logo_link, true);
        validate_required(diag, Self::FIELDS.title, &self.title);
        validate_link_list(diag, Self::FIELDS.links, &self.links);
        self.search.validate(diag);
    }
}

// ============================================================================
// Search
// ============================================================================

/// Search index name and service keys.
///
/// Keys are partitioned by privilege: the app id and search key are safe
/// for the browser, the admin key is for indexing jobs only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "header.search")]
pub struct SearchConfig {
    #[serde(rename = "indexName", skip_serializing_if = "Option::is_none")]
    pub index_name: Option<String>,

    #[serde(rename = "algoliaAppId", alias = "appId", skip_serializing_if = "Secret::is_unset")]
    pub app_id: Secret,

    #[serde(
        rename = "algoliaSearchKey",
        alias = "searchKey",
        skip_serializing_if = "Secret::is_unset"
    )]
    pub search_key: Secret,

    #[serde(
        rename = "algoliaAdminKey",
        alias = "adminKey",
        skip_serializing_if = "Secret::is_unset"
    )]
    pub admin_key: Secret,
}

impl SearchConfig {
    /// Overwrite fields whose environment variable is set.
    ///
    /// Unset variables leave the current value alone, so an overlay file
    /// can still provide e.g. the index name.
    pub fn apply_env(&mut self, source: &impl EnvSource) {
        if let Some(value) = source.var(env::INDEX_NAME) {
            self.index_name = Some(value);
        }
        if let Some(value) = source.var(env::APP_ID) {
            self.app_id = Secret::new(value);
        }
        if let Some(value) = source.var(env::SEARCH_KEY) {
            self.search_key = Secret::new(value);
        }
        if let Some(value) = source.var(env::ADMIN_KEY) {
            self.admin_key = Secret::new(value);
        }
    }

    /// True when nothing at all is configured.
    pub fn is_empty(&self) -> bool {
        self.index_name.as_deref().is_none_or(str::is_empty)
            && !self.app_id.is_configured()
            && !self.search_key.is_configured()
            && !self.admin_key.is_configured()
    }

    /// Whether the browser-side search widget has everything it needs.
    pub fn is_client_ready(&self) -> bool {
        self.index_name.as_deref().is_some_and(|s| !s.is_empty())
            && self.app_id.is_configured()
            && self.search_key.is_configured()
    }

    /// Warn on partially configured credentials. Never an error: a site
    /// without search is valid.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.is_empty() {
            return;
        }

        if !self.is_client_ready() {
            let missing: Vec<_> = [
                (self.index_name.as_deref().is_some_and(|s| !s.is_empty()), env::INDEX_NAME),
                (self.app_id.is_configured(), env::APP_ID),
                (self.search_key.is_configured(), env::SEARCH_KEY),
            ]
            .into_iter()
            .filter(|(set, _)| !set)
            .map(|(_, name)| name)
            .collect();

            diag.warn(
                SearchConfig::FIELDS.index_name,
                format!(
                    "search is partially configured, search widget disabled (missing {})",
                    missing.join(", ")
                ),
            );
        }

        if self.index_name.as_deref().is_some_and(|s| !s.is_empty()) && !self.admin_key.is_configured() {
            diag.warn(
                SearchConfig::FIELDS.admin_key,
                format!("index name set without {}, indexing will be skipped", env::ADMIN_KEY),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::env::env_from_pairs;

    #[test]
    fn test_default_header() {
        let header = HeaderConfig::default();
        assert_eq!(header.title, "How To Data");
        assert_eq!(header.logo_link, "");
        assert!(header.links.is_empty());
        assert!(header.search.is_empty());
    }

    #[test]
    fn test_apply_env_sets_all_fields() {
        let env = env_from_pairs([
            (env::INDEX_NAME, "docs"),
            (env::APP_ID, "APP"),
            (env::SEARCH_KEY, "search"),
            (env::ADMIN_KEY, "admin"),
        ]);
        let mut search = SearchConfig::default();
        search.apply_env(&env);

        assert_eq!(search.index_name.as_deref(), Some("docs"));
        assert_eq!(search.app_id.expose(), Some("APP"));
        assert_eq!(search.search_key.expose(), Some("search"));
        assert_eq!(search.admin_key.expose(), Some("admin"));
        assert!(search.is_client_ready());
    }

    #[test]
    fn test_apply_env_keeps_existing_when_unset() {
        let mut search = SearchConfig {
            index_name: Some("from-file".into()),
            ..Default::default()
        };
        search.apply_env(&env_from_pairs([(env::APP_ID, "APP")]));

        assert_eq!(search.index_name.as_deref(), Some("from-file"));
        assert_eq!(search.app_id.expose(), Some("APP"));
        assert!(search.admin_key.is_unset());
    }

    #[test]
    fn test_partial_search_warns() {
        let mut search = SearchConfig::default();
        search.apply_env(&env_from_pairs([(env::INDEX_NAME, "docs")]));

        let mut diag = ConfigDiagnostics::new();
        search.validate(&mut diag);

        assert!(diag.is_empty());
        let warnings = diag.warnings();
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].1.contains(env::APP_ID));
        assert!(warnings[0].1.contains(env::SEARCH_KEY));
        assert_eq!(warnings[1].0.as_str(), "header.search.algoliaAdminKey");
    }

    #[test]
    fn test_unconfigured_search_is_silent() {
        let mut diag = ConfigDiagnostics::new();
        SearchConfig::default().validate(&mut diag);
        assert!(diag.is_empty());
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_short_key_aliases_accepted() {
        let search: SearchConfig =
            toml::from_str("indexName = \"docs\"\nappId = \"APP\"\nsearchKey = \"s\"").unwrap();
        assert_eq!(search.app_id.expose(), Some("APP"));
        assert_eq!(search.search_key.expose(), Some("s"));
    }

    #[test]
    fn test_invalid_nav_link_reported() {
        let header = HeaderConfig {
            links: vec![Link::new("Docs", "docs")],
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        header.validate(&mut diag);
        assert_eq!(diag.errors().len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "header.links");
    }
}
