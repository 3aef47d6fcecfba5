//! Configuration section definitions.
//!
//! Each module corresponds to a top-level group of the site record:
//!
//! | Module     | Key              | Purpose                                  |
//! |------------|------------------|------------------------------------------|
//! | `gatsby`   | `gatsby`         | Deployment path prefix and base URL      |
//! | `header`   | `header`         | Logo, title, nav links, search keys      |
//! | `metadata` | `siteMetadata`   | SEO, Twitter card and Open Graph data    |
//! | `feedback` | `feedback`       | Feedback backend endpoint                |
//! | `footer`   | `footer`         | Footer link lists, newsletter, socials   |
//! | `link`     | -                | `{name, link}` entry shared by the lists |

mod feedback;
mod footer;
mod gatsby;
mod header;
mod link;
mod metadata;

pub use feedback::FeedbackConfig;
pub use footer::{FindUsConfig, FooterConfig, NewsletterConfig};
pub use gatsby::GatsbyConfig;
pub use header::{HeaderConfig, SearchConfig};
pub use link::Link;
pub use metadata::{OgConfig, OgImageConfig, SiteMetadataConfig, TwitterConfig};
