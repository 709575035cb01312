//! Shared test utilities for E2E tests.
//!
//! This module provides a fixture for building a small repository of roles
//! in a temporary directory and a command builder that runs `ansiqa` against
//! it in isolation.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_role("web", roles::WEB_TASKS);
//!     fixture.command().arg("stats").assert().success();
//! }
//! ```

use assert_cmd::Command;
use assert_fs::prelude::*;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use assert_fs::TempDir;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::roles;
    pub use super::TestFixture;
}

/// Common role file snippets for testing.
#[allow(dead_code)]
pub mod roles {
    /// Two plain tasks.
    pub const WEB_TASKS: &str = r#"---
- name: install nginx
  package:
    name: nginx
- name: start nginx
  service:
    name: nginx
    state: started
"#;

    /// A single task.
    pub const ONE_TASK: &str = r#"---
- name: ping
  ping:
"#;

    /// Meta file declaring dependencies in both supported shapes.
    pub const WEB_META: &str = r#"---
galaxy_info:
  author: web team
dependencies:
  - common
  - role: nginx
"#;

    /// Meta file depending on `common` only.
    pub const NGINX_META: &str = r#"---
dependencies:
  - common
"#;

    /// Invalid YAML for error testing.
    pub const INVALID_YAML: &str = "invalid: yaml: content:";
}

/// A test fixture holding roles under `roles/` and an isolated home
/// directory under `home/`.
///
/// # Example
///
/// ```rust,ignore
/// let fixture = TestFixture::new()
///     .with_role("web", roles::WEB_TASKS)
///     .with_file("roles/web/vars/main.yml", "port: 80\n");
///
/// fixture.command().args(["stats", "--dump-vars"]).assert().success();
/// ```
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new test fixture with an empty roles directory and home.
    pub fn new() -> Self {
        let temp_dir = assert_fs::TempDir::new().expect("Failed to create temp directory");
        temp_dir
            .child("roles")
            .create_dir_all()
            .expect("Failed to create roles directory");
        temp_dir
            .child("home")
            .create_dir_all()
            .expect("Failed to create home directory");
        Self { temp_dir }
    }

    /// Add a role with the given `tasks/main.yml` content.
    pub fn with_role(self, name: &str, tasks: &str) -> Self {
        self.with_file(&format!("roles/{}/tasks/main.yml", name), tasks)
    }

    /// Add a `.ansiqa` configuration in the working directory.
    #[allow(dead_code)]
    pub fn with_config(self, content: &str) -> Self {
        self.with_file(".ansiqa", content)
    }

    /// Add a `.ansiqa` configuration in the home directory.
    #[allow(dead_code)]
    pub fn with_user_config(self, content: &str) -> Self {
        self.with_file("home/.ansiqa", content)
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Get the path to the roles directory.
    #[allow(dead_code)]
    pub fn roles_path(&self) -> PathBuf {
        self.temp_dir.path().join("roles")
    }

    /// Create a child path in the temp directory.
    #[allow(dead_code)]
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// Build an `ansiqa` command scanning `roles/` from the fixture root,
    /// with `HOME` pointing at the fixture's home and colors off.
    pub fn command(&self) -> Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("ansiqa");
        cmd.current_dir(self.path())
            .env("HOME", self.path().join("home"))
            .env("NO_COLOR", "1")
            .env_remove("CLICOLOR_FORCE")
            .env_remove("ANSIQA_CONFIG")
            .env_remove("RUST_LOG")
            .env("ANSIQA_PATH", self.roles_path());
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_creates_layout() {
        let fixture = TestFixture::new();
        assert!(fixture.roles_path().is_dir());
        assert!(fixture.path().join("home").is_dir());
    }

    #[test]
    fn test_fixture_with_role() {
        let fixture = TestFixture::new().with_role("web", roles::ONE_TASK);
        assert!(fixture.path().join("roles/web/tasks/main.yml").exists());
    }
}
