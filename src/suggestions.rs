//! # Error Suggestions
//!
//! Helper functions that turn library errors into user-facing messages with
//! hints. Errors should tell users what went wrong AND how to fix it.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ansiqa::suggestions;
//!
//! let source = config.attribute(attr).map_err(suggestions::with_hints)?;
//! ```

use std::path::Path;

use crate::defaults::{CONFIG_FILENAME, TEMPLATE_GLOB};
use crate::error::Error;

/// Convert a library error into an `anyhow::Error`, adding hints for the
/// failures a user can fix.
pub fn with_hints(error: Error) -> anyhow::Error {
    match &error {
        Error::MissingConfigKey { key } => missing_config_key(key),
        Error::TemplateNotFound { template } => template_not_found(template),
        Error::NoTemplate => no_template(),
        Error::CycleDetected { cycle } => cycle_detected(cycle),
        Error::UnknownDependency { role, dependency } => unknown_dependency(role, dependency),
        _ => anyhow::Error::new(error),
    }
}

/// Generate an error for a configuration key a command requires.
pub fn missing_config_key(key: &str) -> anyhow::Error {
    anyhow::anyhow!(
        "'{key}' not defined in configuration\n\n\
         hint: Add a '{key}:' mapping to ~/{CONFIG_FILENAME} or ./{CONFIG_FILENAME}\n\
         hint: Use --config to point at a different configuration file"
    )
}

/// Generate an error for a configured template that does not exist.
pub fn template_not_found(template: &str) -> anyhow::Error {
    anyhow::anyhow!(
        "Template file not found: {template}\n\n\
         hint: The path is tried relative to the current directory, then your home directory, then as given\n\
         hint: Fix or remove the 'template:' key in {CONFIG_FILENAME}"
    )
}

/// Generate an error for when no documentation template is available.
pub fn no_template() -> anyhow::Error {
    anyhow::anyhow!(
        "No usable template found\n\n\
         hint: Create a {TEMPLATE_GLOB} file (e.g. README.md.j2) in the current or home directory\n\
         hint: Or set 'template:' in {CONFIG_FILENAME}"
    )
}

/// Generate an error for a cycle in role dependencies.
pub fn cycle_detected(cycle: &str) -> anyhow::Error {
    anyhow::anyhow!(
        "Cycle detected in role dependencies: {cycle}\n\n\
         hint: Remove one of the entries under 'dependencies:' in meta/main.yml to break the cycle"
    )
}

/// Generate an error for a dependency on a role that was not scanned.
pub fn unknown_dependency(role: &str, dependency: &str) -> anyhow::Error {
    anyhow::anyhow!(
        "Unknown dependency: role '{role}' depends on '{dependency}', which was not found\n\n\
         hint: Scan a directory that contains '{dependency}' with --path\n\
         hint: Use --allow-external to treat unscanned roles as leaves"
    )
}

/// Generate an error for a `--config` file that does not exist.
pub fn config_not_found(path: &Path) -> anyhow::Error {
    anyhow::anyhow!(
        "Configuration file not found: {path}\n\n\
         hint: Omit --config to use ~/{CONFIG_FILENAME} and ./{CONFIG_FILENAME}\n\
         hint: Unset the ANSIQA_CONFIG environment variable",
        path = path.display()
    )
}
