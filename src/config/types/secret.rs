//! Credential wrapper.
//!
//! Search keys are read from the environment and must not show up in logs.
//! `Secret` serializes its value as-is (the export decides what reaches a
//! client) but its `Debug` output never contains it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An optional credential string with redacted `Debug` output.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Secret(Option<String>);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(Some(value.into()))
    }

    /// Borrow the raw value. Call sites are the only places a key leaves
    /// this wrapper, keep them few.
    pub fn expose(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// True when no value was provided at all.
    pub const fn is_unset(&self) -> bool {
        self.0.is_none()
    }

    /// True when a non-empty value was provided.
    pub fn is_configured(&self) -> bool {
        self.0.as_deref().is_some_and(|s| !s.is_empty())
    }
}

impl From<Option<String>> for Secret {
    fn from(value: Option<String>) -> Self {
        Self(value)
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(_) => f.write_str("Secret(***)"),
            None => f.write_str("Secret(unset)"),
        }
    }
}
