//! Default values and fixed names used across ansiqa.
//!
//! This module centralizes the file and directory names of the Ansible role
//! layout and the locations of the configuration files.

use std::path::{Path, PathBuf};

/// Name of the configuration file, both per-user and per-directory.
pub const CONFIG_FILENAME: &str = ".ansiqa";

/// Name of the YAML file read from each role attribute directory.
pub const MAIN_FILE: &str = "main.yml";

/// A directory containing any of these subdirectories is a role.
pub const ROLE_MARKER_DIRS: [&str; 2] = ["tasks", "handlers"];

/// Pattern for README files inside a role.
pub const README_GLOB: &str = "README.*";

/// Pattern for documentation templates discovered without configuration.
pub const TEMPLATE_GLOB: &str = "README.*.j2";

/// Document marker written at the top of generated YAML files.
pub const YAML_DOCUMENT_MARKER: &str = "---";

/// Returns the per-user configuration file path (`~/.ansiqa`).
///
/// `None` when the home directory cannot be determined.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_FILENAME))
}

/// Returns the working-directory configuration file path.
pub fn local_config_path(working_dir: &Path) -> PathBuf {
    working_dir.join(CONFIG_FILENAME)
}
