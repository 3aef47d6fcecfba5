//! JSON export of the site record.
//!
//! The generator reads the record as JSON. Two views exist: the client
//! view, which can be embedded in pages, and the build view, which keeps
//! the admin key for indexing jobs.

use anyhow::{Context, Result};
use serde_json::Value;

use super::{SearchConfig, SiteConfig};

/// Which audience an export is for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportScope {
    /// Safe to ship to browsers: admin-level credentials removed.
    #[default]
    Client,
    /// Everything, for build-time jobs that write to the search index.
    Build,
}

impl SiteConfig {
    /// Serialize the record for `scope`.
    pub fn export(&self, scope: ExportScope) -> Result<Value> {
        let mut value = serde_json::to_value(self).context("failed to serialize site config")?;
        if scope == ExportScope::Client {
            remove_field(&mut value, SearchConfig::FIELDS.admin_key.as_str());
        }
        Ok(value)
    }

    /// Serialize the record for `scope` as a JSON string.
    pub fn export_string(&self, scope: ExportScope, pretty: bool) -> Result<String> {
        let value = self.export(scope)?;
        let json = if pretty {
            serde_json::to_string_pretty(&value)?
        } else {
            serde_json::to_string(&value)?
        };
        Ok(json)
    }
}

/// Remove the key at dotted `path` from a JSON tree, if present.
fn remove_field(root: &mut Value, path: &str) -> Option<Value> {
    let (parent, key) = match path.rsplit_once('.') {
        Some((parent, key)) => (format!("/{}", parent.replace('.', "/")), key),
        None => (String::new(), path),
    };
    root.pointer_mut(&parent)?.as_object_mut()?.remove(key)
}
