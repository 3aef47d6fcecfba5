//! Export command implementation.
//!
//! Writes the site record as JSON for the generator to consume.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::cli::args::ExportArgs;
use crate::config::{ExportScope, SiteConfig};
use crate::{debug, log};

/// Execute export command
pub fn run_export(args: &ExportArgs, config: &SiteConfig) -> Result<()> {
    if args.strict {
        config.validate()?;
    }

    let scope = if args.include_secrets {
        log!("warning"; "export includes the admin search key, do not ship it to clients");
        ExportScope::Build
    } else {
        ExportScope::Client
    };

    let json = config.export_string(scope, args.pretty)?;
    debug!("export"; "{} bytes, scope {:?}", json.len(), scope);

    match &args.output {
        Some(path) => write_file(path, &json),
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}")?;
            Ok(())
        }
    }
}

fn write_file(path: &Path, json: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    fs::write(path, format!("{json}\n"))
        .with_context(|| format!("failed to write {}", path.display()))?;
    log!("export"; "wrote {}", path.display());
    Ok(())
}
