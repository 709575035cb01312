//! # Documentation Rendering
//!
//! Renders one documentation file per role from a Jinja2-style template
//! using `minijinja`.
//!
//! The template is loaded through a path loader rooted at its own directory,
//! so it may `include` or `extend` sibling templates. Blocks are trimmed the
//! way Ansible users expect (`trim_blocks`, `lstrip_blocks`) and the final
//! newline is kept.
//!
//! ## Template Context
//!
//! | name           | value                                              |
//! |----------------|----------------------------------------------------|
//! | `name`         | role name                                          |
//! | `path`         | role directory                                     |
//! | `tasks`        | task mappings, includes expanded                   |
//! | `handlers`     | handler mappings                                   |
//! | `defaults`     | `defaults/main.yml` dumped as YAML text            |
//! | `vars`         | `vars/main.yml` dumped as YAML text                |
//! | `meta`         | `meta/main.yml` mapping                            |
//! | `extra`        | `extra/main.yml` mapping                           |
//! | `files`        | file paths under `files/`                          |
//! | `templates`    | file paths under `templates/`                      |
//! | `readme`       | existing README paths                              |
//! | `tests`        | whether `tests/` exists                            |
//! | `dependencies` | role names from `meta.dependencies`                |
//!
//! ## Output File
//!
//! The output name is the first two dot-separated components of the
//! template file name: `README.md.j2` renders to `README.md` in each role.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use minijinja::Environment;
use serde::Serialize;
use serde_yaml::Mapping;

use crate::error::{Error, Result};
use crate::role::Role;

/// Values exposed to the documentation template for one role.
#[derive(Debug, Serialize)]
struct RoleContext<'a> {
    name: &'a str,
    path: String,
    tasks: &'a [Mapping],
    handlers: &'a [Mapping],
    defaults: String,
    vars: String,
    meta: &'a Mapping,
    extra: &'a Mapping,
    files: Vec<String>,
    templates: Vec<String>,
    readme: Vec<String>,
    tests: bool,
    dependencies: Vec<String>,
}

impl<'a> RoleContext<'a> {
    fn new(role: &'a Role) -> Result<Self> {
        Ok(RoleContext {
            name: &role.name,
            path: role.path.display().to_string(),
            tasks: &role.tasks,
            handlers: &role.handlers,
            defaults: printable(&role.defaults)?,
            vars: printable(&role.vars)?,
            meta: &role.meta,
            extra: &role.extra,
            files: display_all(&role.files),
            templates: display_all(&role.templates),
            readme: display_all(&role.readme),
            tests: role.tests,
            dependencies: role.dependencies(),
        })
    }
}

fn printable(map: &Mapping) -> Result<String> {
    let text = serde_yaml::to_string(map).map_err(|e| Error::Serialization {
        message: e.to_string(),
    })?;
    Ok(text.trim_end_matches('\n').to_string())
}

fn display_all(paths: &[PathBuf]) -> Vec<String> {
    paths.iter().map(|p| p.display().to_string()).collect()
}

/// Name of the file a template renders to, e.g. `README.md.j2` → `README.md`.
pub fn output_file_name(template: &Path) -> Result<String> {
    let file_name = template
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut parts = file_name.split('.');
    match (parts.next(), parts.next()) {
        (Some(stem), Some(ext)) if !stem.is_empty() && !ext.is_empty() => {
            Ok(format!("{}.{}", stem, ext))
        }
        _ => Err(Error::Template {
            message: format!(
                "template name '{}' must look like NAME.EXT.j2 to derive the output file name",
                file_name
            ),
            role: None,
        }),
    }
}

/// Renders the documentation template for roles.
pub struct DocRenderer {
    env: Environment<'static>,
    template_name: String,
    output_name: String,
}

impl DocRenderer {
    /// Prepare a renderer for the template at `template`.
    pub fn new(template: &Path) -> Result<Self> {
        let template_name = template
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| Error::TemplateNotFound {
                template: template.display().to_string(),
            })?;
        let output_name = output_file_name(template)?;
        let dir = template
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        let mut env = Environment::new();
        env.set_loader(minijinja::path_loader(dir));
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);

        // Fail early on syntax errors, before any role is touched
        env.get_template(&template_name).map_err(|e| template_error(e, None))?;

        Ok(DocRenderer {
            env,
            template_name,
            output_name,
        })
    }

    /// File name written into each role directory.
    pub fn output_name(&self) -> &str {
        &self.output_name
    }

    /// Render the template for `role`.
    pub fn render(&self, role: &Role) -> Result<String> {
        let context = RoleContext::new(role)?;
        self.env
            .get_template(&self.template_name)
            .and_then(|tmpl| tmpl.render(&context))
            .map_err(|e| template_error(e, Some(&role.name)))
    }

    /// Render for `role` and write the result into the role directory.
    pub fn write(&self, role: &Role) -> Result<PathBuf> {
        let rendered = self.render(role)?;
        let path = role.path.join(&self.output_name);
        fs::write(&path, rendered)?;
        info!("Wrote {}", path.display());
        Ok(path)
    }
}

fn template_error(error: minijinja::Error, role: Option<&str>) -> Error {
    Error::Template {
        message: error.to_string(),
        role: role.map(str::to_string),
    }
}
