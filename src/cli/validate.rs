//! Validate command implementation.

use anyhow::Result;

use crate::config::SiteConfig;
use crate::log;
use crate::utils::plural_count;

/// Execute validate command.
///
/// Warnings are printed and never fail the command; errors are returned
/// together as one `ConfigError::Diagnostics`.
pub fn validate_site(config: &SiteConfig) -> Result<()> {
    let link_count = config.header.links.len()
        + config
            .footer
            .columns()
            .iter()
            .map(|(_, links)| links.len())
            .sum::<usize>();

    config.validate()?;

    let source = config
        .source
        .as_ref()
        .map_or_else(|| "built-in defaults".to_string(), |p| p.display().to_string());
    log!("validate"; "config ok ({}, {})", plural_count(link_count, "link"), source);
    Ok(())
}
