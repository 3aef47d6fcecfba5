//! Proc macros for docsite-config.
//!
//! # Config derive macro
//!
//! Generates dotted field path accessors for diagnostics.
//!
//! ```ignore
//! #[derive(Serialize, Deserialize, Config)]
//! #[serde(rename_all = "camelCase")]
//! #[config(section = "header")]
//! pub struct HeaderConfig {
//!     pub logo_link: String,
//!
//!     #[serde(rename = "search")]
//!     pub search: SearchConfig,
//!
//!     #[config(skip)]
//!     pub internal: String,
//! }
//!
//! // Generates:
//! // - HeaderConfig::FIELDS.logo_link -> FieldPath("header.logoLink")
//! ```
//!
//! # Attributes
//!
//! Struct-level:
//! - `#[config(section = "path")]` - dotted section path
//! - `#[serde(rename_all = "camelCase")]` - honored when naming fields
//!
//! Field-level:
//! - `#[config(skip)]` - leave out of FIELDS
//! - `#[config(name = "x")]` - explicit key name
//! - `#[serde(rename = "x")]` - honored when no `config(name)` is given
//!
//! # Section inference
//!
//! Without `section` attribute, inferred from struct name:
//! - `FeedbackConfig` → `feedback`
//! - `FindUsConfig` → `find_us`

mod config;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive macro that generates `FIELDS`.
#[proc_macro_derive(Config, attributes(config))]
pub fn derive_config(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    config::derive(&input).into()
}
