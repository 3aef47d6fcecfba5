//! `feedback` section.

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;

/// Endpoint of the page feedback backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "feedback")]
pub struct FeedbackConfig {
    /// Function path the feedback widget posts to.
    pub function_name: String,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            function_name: "*/.netlify/functions/index".into(),
        }
    }
}

impl FeedbackConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.function_name.trim().is_empty() {
            diag.warn(
                Self::FIELDS.function_name,
                "no feedback endpoint, the feedback widget will not submit",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint() {
        let feedback = FeedbackConfig::default();
        assert_eq!(feedback.function_name, "*/.netlify/functions/index");
        assert_eq!(FeedbackConfig::FIELDS.function_name.as_str(), "feedback.function_name");
    }

    #[test]
    fn test_empty_endpoint_warns() {
        let feedback = FeedbackConfig {
            function_name: String::new(),
        };
        let mut diag = ConfigDiagnostics::new();
        feedback.validate(&mut diag);
        assert!(diag.is_empty());
        assert_eq!(diag.warnings().len(), 1);
    }
}
