//! Site configuration: the typed record handed to the site generator.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Record groups (gatsby, header, siteMetadata, ...)
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   ├── field      # FieldPath
//! │   └── secret     # Secret
//! ├── env            # Environment variable lookups
//! ├── export         # JSON export (client / build views)
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Loading
//!
//! The record starts from the static defaults, then an optional
//! `docsite.toml` overlay replaces the keys it names, then the search
//! environment variables replace whatever they are set for. Missing
//! variables are not an error.

mod env;
mod export;
pub mod section;
pub mod types;
mod util;

pub use env::{EnvSource, EnvVar, ProcessEnv, env_from_pairs, search_vars};
pub use export::ExportScope;
pub use section::{
    FeedbackConfig, FooterConfig, GatsbyConfig, HeaderConfig, Link, SearchConfig,
    SiteMetadataConfig,
};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath, Secret};

use crate::log;
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use util::{expand_tilde, find_config_file};

/// Overlay file name searched for when none is given.
pub const DEFAULT_CONFIG_NAME: &str = "docsite.toml";

// ============================================================================
// root configuration
// ============================================================================

/// The complete site record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// Overlay file this record was read from (internal use only)
    #[serde(skip)]
    pub source: Option<PathBuf>,

    /// Deployment path prefix and base URL
    pub gatsby: GatsbyConfig,

    /// Logo, title, navigation and search
    pub header: HeaderConfig,

    /// SEO and social card metadata
    pub site_metadata: SiteMetadataConfig,

    /// Feedback backend
    pub feedback: FeedbackConfig,

    /// Footer columns and social links
    pub footer: FooterConfig,
}

impl SiteConfig {
    /// Static defaults plus the search environment.
    ///
    /// Pure function of `env`: two calls with the same environment
    /// produce equal records.
    pub fn from_env(env: &impl EnvSource) -> Self {
        let mut config = Self::default();
        config.apply_env(env);
        config
    }

    /// Load the record: defaults, then the overlay at `path` (if any),
    /// then the environment.
    pub fn load(path: Option<&Path>, env: &impl EnvSource) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_path(path)?,
            None => Self::default(),
        };
        config.apply_env(env);
        Ok(config)
    }

    /// Locate the overlay file.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_NAME`] is
    /// searched upward from `cwd`; not finding it is fine.
    pub fn resolve_path(explicit: Option<&Path>, cwd: &Path) -> Result<Option<PathBuf>> {
        match explicit {
            Some(path) => {
                let path = expand_tilde(path);
                let path = if path.is_relative() { cwd.join(path) } else { path };
                if !path.exists() {
                    bail!(ConfigError::NotFound(path));
                }
                Ok(Some(path))
            }
            None => Ok(find_config_file(cwd, Path::new(DEFAULT_CONFIG_NAME))),
        }
    }

    fn apply_env(&mut self, env: &impl EnvSource) {
        self.header.search.apply_env(env);
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path, warning about unknown fields.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Run every section check and collect the results.
    pub fn diagnose(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        self.gatsby.validate(&mut diag);
        self.header.validate(&mut diag);
        self.site_metadata.validate(&mut diag);
        self.feedback.validate(&mut diag);
        self.footer.validate(&mut diag);
        diag
    }

    /// Hardened validation.
    ///
    /// Prints warnings and returns all errors at once.
    pub fn validate(&self) -> Result<()> {
        let diag = self.diagnose();
        diag.print_warnings();
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    fn full_env() -> FxHashMap<String, String> {
        env_from_pairs([
            ("GATSBY_ALGOLIA_INDEX_NAME", "how-to-data"),
            ("GATSBY_ALGOLIA_APP_ID", "APP123"),
            ("GATSBY_ALGOLIA_SEARCH_KEY", "search-only"),
            ("GATSBY_ALGOLIA_ADMIN_API_KEY", "admin-secret"),
        ])
    }

    #[test]
    fn test_all_search_vars_set() {
        let config = SiteConfig::from_env(&full_env());
        let search = &config.header.search;

        assert_eq!(search.index_name.as_deref(), Some("how-to-data"));
        assert_eq!(search.app_id.expose(), Some("APP123"));
        assert_eq!(search.search_key.expose(), Some("search-only"));
        assert_eq!(search.admin_key.expose(), Some("admin-secret"));
    }

    #[test]
    fn test_no_search_vars_set() {
        let config = SiteConfig::from_env(&FxHashMap::<String, String>::default());
        let search = &config.header.search;

        assert!(search.index_name.is_none());
        assert!(search.app_id.is_unset());
        assert!(search.search_key.is_unset());
        assert!(search.admin_key.is_unset());
    }

    #[test]
    fn test_empty_var_passes_through() {
        let config = SiteConfig::from_env(&env_from_pairs([("GATSBY_ALGOLIA_INDEX_NAME", "")]));
        assert_eq!(config.header.search.index_name.as_deref(), Some(""));
    }

    #[test]
    fn test_static_lists_keep_order() {
        let config = SiteConfig::from_env(&FxHashMap::<String, String>::default());

        assert!(config.header.links.is_empty());
        assert_eq!(config.footer.resources[0], Link::new("Docs", "/"));
        assert_eq!(
            config.footer.products[0],
            Link::new(
                "Prisma Client",
                "https://www.prisma.io/docs/reference/tools-and-interfaces/prisma-client/crud"
            )
        );
        assert_eq!(config.footer.community[5].name, "TypeScript Meetup");
        assert_eq!(config.footer.company[0], Link::new("About", "https://www.prisma.io/about"));
    }

    #[test]
    fn test_reload_is_idempotent() {
        let env = full_env();
        let first = SiteConfig::from_env(&env);
        let second = SiteConfig::from_env(&env);
        assert_eq!(first, second);
    }

    #[test]
    fn test_og_image_survives_json() {
        let config = SiteConfig::from_env(&full_env());
        let json = serde_json::to_string(&config).unwrap();
        let back: SiteConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(back.site_metadata.og.image.width, "1200");
        assert_eq!(back.site_metadata.og.image.height, "630");
        assert_eq!(back, config);
    }

    #[test]
    fn test_debug_hides_secrets() {
        let config = SiteConfig::from_env(&full_env());
        let shown = format!("{config:?}");
        assert!(!shown.contains("admin-secret"));
        assert!(!shown.contains("search-only"));
        assert!(!shown.contains("APP123"));
        assert!(shown.contains("how-to-data"));
    }

    #[test]
    fn test_from_str_invalid_toml() {
        let result = SiteConfig::from_str("[header\ntitle = \"x\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_overlay_replaces_only_named_keys() {
        let config = SiteConfig::from_str(
            r#"
            [gatsby]
            pathPrefix = "/docs"

            [header]
            links = [{ name = "Blog", link = "https://www.prisma.io/blog/" }]

            [siteMetadata.og.image]
            width = "800"
            "#,
        )
        .unwrap();

        assert_eq!(config.gatsby.path_prefix, "/docs");
        assert_eq!(config.header.title, "How To Data");
        assert_eq!(config.header.links, vec![Link::new("Blog", "https://www.prisma.io/blog/")]);
        assert_eq!(config.site_metadata.og.image.width, "800");
        assert_eq!(config.site_metadata.og.image.height, "630");
        assert_eq!(config.footer, FooterConfig::default());
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[header]\ntitle = \"Docs\"\nlogo = \"x\"\n[unknown_section]\nfield = 1";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.header.title, "Docs");
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
        assert!(ignored.iter().any(|f| f == "header.logo"));
    }

    #[test]
    fn test_no_unknown_fields() {
        let content = "[footer]\ntitle = \"Acme\"\n[footer.findus]\ngitLink = \"https://github.com/acme\"";
        let (_, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_load_env_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_NAME);
        fs::write(
            &path,
            "[header.search]\nindexName = \"from-file\"\nalgoliaAppId = \"FILEAPP\"\n",
        )
        .unwrap();

        let env = env_from_pairs([("GATSBY_ALGOLIA_INDEX_NAME", "from-env")]);
        let config = SiteConfig::load(Some(&path), &env).unwrap();

        assert_eq!(config.source.as_deref(), Some(path.as_path()));
        assert_eq!(config.header.search.index_name.as_deref(), Some("from-env"));
        assert_eq!(config.header.search.app_id.expose(), Some("FILEAPP"));
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let config = SiteConfig::load(None, &FxHashMap::<String, String>::default()).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_resolve_path() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("content");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(SiteConfig::resolve_path(None, &nested).unwrap(), None);

        fs::write(dir.path().join(DEFAULT_CONFIG_NAME), "").unwrap();
        assert_eq!(
            SiteConfig::resolve_path(None, &nested).unwrap(),
            Some(dir.path().join(DEFAULT_CONFIG_NAME))
        );

        let missing = SiteConfig::resolve_path(Some(Path::new("missing.toml")), &nested);
        assert!(missing.is_err());
    }

    #[test]
    fn test_default_record_validates() {
        let config = SiteConfig::from_env(&FxHashMap::<String, String>::default());
        let diag = config.diagnose();
        assert!(diag.is_empty(), "{diag}");
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_malformed_link_reported_with_path() {
        let mut config = SiteConfig::default();
        config.footer.company[1].link = "jobs".into();
        config.header.title.clear();

        let diag = config.diagnose();
        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["header.title", "footer.company"]);
        assert!(config.validate().is_err());
    }
}
