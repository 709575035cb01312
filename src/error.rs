//! # Error Handling
//!
//! This module defines the centralized error type for the `ansiqa` library.
//! It uses `thiserror` to describe every anticipated failure mode with a
//! message that names the offending file, role or configuration key.
//!
//! ## Key Components
//!
//! - **`Error`**: The enum of all library failures. Configuration problems
//!   (missing keys, missing templates), malformed role data (YAML that fails
//!   to parse or has the wrong shape), dependency graph problems (cycles,
//!   unknown dependencies) and plain I/O.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.
//!
//! The binary wraps these errors in `anyhow` and adds hints where a user can
//! act on them (see `suggestions`).

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for ansiqa operations
#[derive(Error, Debug)]
pub enum Error {
    /// A configuration file could not be parsed or has the wrong shape.
    #[error("Configuration parsing error in {}: {message}", path.display())]
    ConfigParse { path: PathBuf, message: String },

    /// A command needs a configuration key that no config file defines.
    #[error("'{key}' not defined in configuration")]
    MissingConfigKey { key: String },

    /// The configured template path does not resolve to a file.
    #[error("Template file not found: {template}")]
    TemplateNotFound { template: String },

    /// No template was configured and none was discovered.
    #[error("No usable template found")]
    NoTemplate,

    /// An error occurred while loading or rendering a template.
    #[error("Template processing error: {message}{}", role.as_ref().map(|r| format!(" (role: {})", r)).unwrap_or_default())]
    Template {
        message: String,
        /// The role being rendered, if applicable
        role: Option<String>,
    },

    /// A YAML file failed to parse.
    #[error("YAML parsing error in {}: {source}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// A YAML file parsed, but not into the expected structure.
    #[error("Unexpected content in {}: expected {expected}", path.display())]
    UnexpectedShape { path: PathBuf, expected: String },

    /// A file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An error occurred while walking a directory tree.
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// A glob pattern error, wrapped from `glob::PatternError`.
    #[error("Glob pattern error: {0}")]
    Glob(#[from] glob::PatternError),

    /// A circular dependency was detected between roles.
    #[error("Cycle detected in role dependencies: {cycle}")]
    CycleDetected { cycle: String },

    /// A role depends on a role that was not scanned.
    #[error("Unknown dependency: role '{role}' depends on '{dependency}', which was not found")]
    UnknownDependency { role: String, dependency: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An error occurred during serialization.
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
