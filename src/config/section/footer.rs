//! `footer` section: link columns, newsletter blurb and social links.
//!
//! # Example
//!
//! ```toml
//! [footer]
//! logoLink = "/"
//! title = "Prisma"
//! resources = [
//!     { name = "Docs", link = "/" },
//!     { name = "Examples", link = "https://github.com/prisma/prisma-examples" },
//! ]
//!
//! [footer.findus]
//! gitLink = "https://github.com/prisma"
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};

use super::Link;
use crate::config::ConfigDiagnostics;
use crate::config::util::{validate_link, validate_link_list, validate_required};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default, rename_all = "camelCase")]
#[config(section = "footer")]
pub struct FooterConfig {
    pub logo_link: String,
    pub title: String,
    pub products: Vec<Link>,
    pub community: Vec<Link>,
    pub resources: Vec<Link>,
    pub company: Vec<Link>,
    pub newsletter: NewsletterConfig,
    pub findus: FindUsConfig,
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            logo_link: "/".into(),
            title: "Prisma".into(),
            products: vec![
                Link::new(
                    "Prisma Client",
                    "https://www.prisma.io/docs/reference/tools-and-interfaces/prisma-client/crud",
                ),
                Link::new("Prisma 1 Cloud", "https://app.prisma.io/login"),
            ],
            community: vec![
                Link::new("Meet the community", "https://www.prisma.io/community"),
                Link::new("Slack", "https://slack.prisma.io/"),
                Link::new("Github", "https://github.com/prisma"),
                Link::new("Discussions", "https://github.com/prisma/prisma/discussions"),
                Link::new("GraphQL Meetup", "https://www.meetup.com/graphql-berlin/"),
                Link::new("TypeScript Meetup", "https://www.meetup.com/TypeScript-Berlin/"),
            ],
            resources: vec![
                Link::new("Docs", "/"),
                Link::new("Get started", "https://www.prisma.io/docs/getting-started/quickstart"),
                Link::new(
                    "API Reference",
                    "https://www.prisma.io/docs/reference/tools-and-interfaces/prisma-client/generating-prisma-client",
                ),
                Link::new("Examples", "https://github.com/prisma/prisma-examples"),
                Link::new("How to GraphQL", "https://www.howtographql.com/"),
                Link::new("PostgreSQL Tutorial", "https://www.prisma.io/tutorials/?tag=postgresql"),
            ],
            company: vec![
                Link::new("About", "https://www.prisma.io/about"),
                Link::new("Jobs", "https://www.prisma.io/jobs"),
                Link::new("Blog", "https://www.prisma.io/blog/"),
                Link::new(
                    "Terms & Privacy",
                    "https://gist.github.com/nikolasburk/c0f34b0cc50d3403e2e0d40c0e6510aa",
                ),
            ],
            newsletter: NewsletterConfig::default(),
            findus: FindUsConfig::default(),
        }
    }
}

impl FooterConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        validate_link(diag, Self::FIELDS.logo_link, &self.logo_link, true);
        validate_required(diag, Self::FIELDS.title, &self.title);
        validate_link_list(diag, Self::FIELDS.products, &self.products);
        validate_link_list(diag, Self::FIELDS.community, &self.community);
        validate_link_list(diag, Self::FIELDS.resources, &self.resources);
        validate_link_list(diag, Self::FIELDS.company, &self.company);
        self.findus.validate(diag);
    }

    /// The four link columns with their keys, in display order.
    pub fn columns(&self) -> [(&'static str, &[Link]); 4] {
        [
            ("products", self.products.as_slice()),
            ("community", self.community.as_slice()),
            ("resources", self.resources.as_slice()),
            ("company", self.company.as_slice()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "footer.newsletter")]
pub struct NewsletterConfig {
    pub text: String,
}

impl Default for NewsletterConfig {
    fn default() -> Self {
        Self {
            text: "Stay up to date with the latest features and changes to Prisma".into(),
        }
    }
}

/// Social profile links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default, rename_all = "camelCase")]
#[config(section = "footer.findus")]
pub struct FindUsConfig {
    pub twitter_link: String,
    pub youtube_link: String,
    pub fb_link: String,
    pub slack_link: String,
    pub git_link: String,
}

impl Default for FindUsConfig {
    fn default() -> Self {
        Self {
            twitter_link: "https://twitter.com/prisma".into(),
            youtube_link: "https://www.youtube.com/channel/UCptAHlN1gdwD89tFM3ENb6w".into(),
            fb_link: "https://www.facebook.com/prisma.io".into(),
            slack_link: "https://slack.prisma.io/".into(),
            git_link: "https://github.com/prisma".into(),
        }
    }
}

impl FindUsConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let fields = Self::FIELDS;
        for (field, value) in [
            (fields.twitter_link, &self.twitter_link),
            (fields.youtube_link, &self.youtube_link),
            (fields.fb_link, &self.fb_link),
            (fields.slack_link, &self.slack_link),
            (fields.git_link, &self.git_link),
        ] {
            // an empty profile link just hides its icon
            validate_link(diag, field, value, true);
        }
    }
}
