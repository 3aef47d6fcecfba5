//! Environment lookups for search credentials.
//!
//! Loading reads the environment through [`EnvSource`] so the same code
//! path serves the real process and in-memory maps in tests.

use std::ffi::OsString;

use rustc_hash::FxHashMap;

use super::FieldPath;
use super::section::SearchConfig;

/// Search index name.
pub const INDEX_NAME: &str = "GATSBY_ALGOLIA_INDEX_NAME";
/// Search application id.
pub const APP_ID: &str = "GATSBY_ALGOLIA_APP_ID";
/// Search-only (client) key.
pub const SEARCH_KEY: &str = "GATSBY_ALGOLIA_SEARCH_KEY";
/// Admin key used by indexing jobs. Never exported to clients.
pub const ADMIN_KEY: &str = "GATSBY_ALGOLIA_ADMIN_API_KEY";

/// Something that can answer environment variable lookups.
pub trait EnvSource {
    /// Value of `key`, or `None` when it is not set.
    fn var(&self, key: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        decode(key, std::env::var_os(key)?)
    }
}

/// A value that is not UTF-8 is reported and treated as unset.
fn decode(key: &str, raw: OsString) -> Option<String> {
    match raw.into_string() {
        Ok(value) => Some(value),
        Err(_) => {
            crate::log!("warning"; "{} is not valid UTF-8, treating it as unset", key);
            None
        }
    }
}

impl EnvSource for FxHashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// One environment variable the loader consumes.
#[derive(Debug, Clone, Copy)]
pub struct EnvVar {
    pub name: &'static str,
    /// Config key the value lands in.
    pub field: FieldPath,
    /// Whether the value is a credential and must not be printed.
    pub secret: bool,
}

/// All variables read by [`SearchConfig::apply_env`], in load order.
pub fn search_vars() -> [EnvVar; 4] {
    let fields = SearchConfig::FIELDS;
    [
        EnvVar { name: INDEX_NAME, field: fields.index_name, secret: false },
        EnvVar { name: APP_ID, field: fields.app_id, secret: true },
        EnvVar { name: SEARCH_KEY, field: fields.search_key, secret: true },
        EnvVar { name: ADMIN_KEY, field: fields.admin_key, secret: true },
    ]
}

/// Build an in-memory environment from key/value pairs.
pub fn env_from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> FxHashMap<String, String> {
    pairs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
