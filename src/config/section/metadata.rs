//! `siteMetadata` section: SEO, Twitter card and Open Graph data.
//!
//! # Example
//!
//! ```toml
//! [siteMetadata]
//! title = "How To Data - title"
//! docsLocation = "https://github.com/prisma/how-to-data-docs/tree/master/content"
//!
//! [siteMetadata.og.image]
//! width = "1200"
//! height = "630"
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;
use crate::config::util::{validate_absolute_url, validate_link, validate_required};

/// Page-level metadata injected by the generator into every `<head>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default, rename_all = "camelCase")]
#[config(section = "siteMetadata")]
pub struct SiteMetadataConfig {
    pub title: String,
    pub description: String,
    /// Comma separated keyword list.
    pub keywords: String,
    /// Where the docs sources live, used for "edit this page" links.
    pub docs_location: String,
    pub twitter: TwitterConfig,
    pub og: OgConfig,
}

impl Default for SiteMetadataConfig {
    fn default() -> Self {
        Self {
            title: "How To Data - title".into(),
            description: "How To Data - desc".into(),
            keywords: "Docs, How To Data, 1.0".into(),
            docs_location: "https://github.com/prisma/how-to-data-docs/tree/master/content".into(),
            twitter: TwitterConfig::default(),
            og: OgConfig::default(),
        }
    }
}

impl SiteMetadataConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        validate_required(diag, Self::FIELDS.title, &self.title);
        validate_absolute_url(diag, Self::FIELDS.docs_location, &self.docs_location, true);
        self.twitter.validate(diag);
        self.og.validate(diag);
    }
}

// ============================================================================
// Twitter card
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "siteMetadata.twitter")]
pub struct TwitterConfig {
    /// `@handle` of the site.
    pub site: String,
    /// `@handle` of the content author.
    pub creator: String,
    pub image: String,
}

impl Default for TwitterConfig {
    fn default() -> Self {
        Self {
            site: "@howtodata".into(),
            creator: "@howtodata".into(),
            image: "/social/docs-social.png".into(),
        }
    }
}

impl TwitterConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (field, handle) in [(Self::FIELDS.site, &self.site), (Self::FIELDS.creator, &self.creator)] {
            if !handle.is_empty() && !handle.starts_with('@') {
                diag.warn(field, format!("twitter handle '{handle}' should start with '@'"));
            }
        }
        validate_link(diag, Self::FIELDS.image, &self.image, true);
    }
}

// ============================================================================
// Open Graph
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "siteMetadata.og")]
pub struct OgConfig {
    pub site_name: String,
    /// `og:type`, e.g. "website".
    #[serde(rename = "type")]
    pub kind: String,
    pub image: OgImageConfig,
}

impl Default for OgConfig {
    fn default() -> Self {
        Self {
            site_name: "How To Data".into(),
            kind: "website".into(),
            image: OgImageConfig::default(),
        }
    }
}

impl OgConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        self.image.validate(diag);
    }
}

/// `og:image` and its structured properties.
///
/// Dimensions stay strings: they are emitted verbatim into meta tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "siteMetadata.og.image")]
pub struct OgImageConfig {
    pub alt: String,
    pub height: String,
    /// MIME type of the image.
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
    pub width: String,
}

impl Default for OgImageConfig {
    fn default() -> Self {
        Self {
            alt: "How To Data".into(),
            height: "630".into(),
            kind: "image/png".into(),
            url: "/social/docs-social.png".into(),
            width: "1200".into(),
        }
    }
}

impl OgImageConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        validate_link(diag, Self::FIELDS.url, &self.url, true);

        for (field, value) in [(Self::FIELDS.width, &self.width), (Self::FIELDS.height, &self.height)] {
            match value.parse::<u32>() {
                Ok(n) if n > 0 => {}
                _ if value.is_empty() => diag.error_with_hint(
                    field,
                    "image dimension must not be empty",
                    "use a plain number like \"1200\"",
                ),
                _ => diag.error_with_hint(
                    field,
                    format!("'{value}' is not a positive pixel count"),
                    "use a plain number like \"1200\"",
                ),
            }
        }

        if !self.kind.is_empty() && !self.kind.starts_with("image/") {
            diag.warn(
                Self::FIELDS.kind,
                format!("'{}' does not look like an image MIME type", self.kind),
            );
        }
    }
}
