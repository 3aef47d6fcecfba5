//! Navigation link entry.

use serde::{Deserialize, Serialize};

/// A named link, used by every ordered link list in the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub name: String,
    /// Absolute http(s) URL or root-relative path.
    pub link: String,
}

impl Link {
    pub fn new(name: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            link: link.into(),
        }
    }
}
