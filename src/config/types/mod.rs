//! Configuration utility types.
//!
//! | Module   | Purpose                                      |
//! |----------|----------------------------------------------|
//! | `error`  | Configuration error and diagnostic types     |
//! | `field`  | Dotted field paths used in diagnostics       |
//! | `secret` | Credential wrapper with redacted `Debug`     |

mod error;
mod field;
mod secret;

pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError};
pub use field::FieldPath;
pub use secret::Secret;
