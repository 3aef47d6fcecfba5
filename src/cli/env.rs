//! Env command implementation.
//!
//! Reports which search variables are visible to the loader. Values of
//! credential variables are never printed.

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::config::{EnvSource, EnvVar, search_vars};

/// One report line per variable.
pub fn describe(env: &impl EnvSource) -> Vec<String> {
    search_vars()
        .iter()
        .map(|var| describe_var(var, env.var(var.name)))
        .collect()
}

fn describe_var(var: &EnvVar, value: Option<String>) -> String {
    let state = match value.as_deref() {
        None => "unset".dimmed().to_string(),
        Some("") => "empty".yellow().to_string(),
        Some(_) if var.secret => "set".green().to_string(),
        Some(v) => format!("{} ({v})", "set".green()),
    };
    format!("{:<30} {:<32} {}", var.name, var.field.as_str(), state)
}

/// Execute env command
pub fn run_env(env: &impl EnvSource) -> Result<()> {
    for line in describe(env) {
        println!("{line}");
    }
    Ok(())
}
