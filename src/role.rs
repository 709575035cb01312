//! # Role Records
//!
//! A role is a directory that directly contains a `tasks` or `handlers`
//! subdirectory. This module defines the [`Role`] record and the logic that
//! loads one from disk.
//!
//! ## Loaded Attributes
//!
//! - `defaults`, `vars`, `meta`, `extra`: the mapping in `<attr>/main.yml`,
//!   empty when the file is absent or holds an empty document.
//! - `tasks`, `handlers`: the sequence in `<attr>/main.yml`. Task entries
//!   with an `include` key are replaced by the contents of the referenced
//!   file, one level deep.
//! - `files`, `templates`: every regular file below those directories.
//! - `readme`: files matching `README.*` in the role directory.
//! - `tests`: whether a `tests` directory exists.
//!
//! Malformed YAML is never recovered from; the error names the file.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde_yaml::{Mapping, Value as YamlValue};
use walkdir::WalkDir;

use crate::defaults::{MAIN_FILE, README_GLOB, ROLE_MARKER_DIRS};
use crate::error::{Error, Result};
use crate::scan::skip_walk_error;

/// Everything ansiqa knows about one role.
#[derive(Debug, Clone)]
pub struct Role {
    /// Directory basename
    pub name: String,
    /// Role directory, as found by the scan
    pub path: PathBuf,
    /// Tasks from `tasks/main.yml` with includes expanded
    pub tasks: Vec<Mapping>,
    /// Handlers from `handlers/main.yml`
    pub handlers: Vec<Mapping>,
    pub defaults: Mapping,
    pub vars: Mapping,
    pub meta: Mapping,
    pub extra: Mapping,
    pub files: Vec<PathBuf>,
    pub templates: Vec<PathBuf>,
    pub readme: Vec<PathBuf>,
    pub tests: bool,
}

/// The mapping-valued attributes of a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    Defaults,
    Vars,
    Meta,
    Extra,
}

impl Attribute {
    /// Name of the attribute's directory inside a role.
    pub fn dir_name(self) -> &'static str {
        match self {
            Attribute::Defaults => "defaults",
            Attribute::Vars => "vars",
            Attribute::Meta => "meta",
            Attribute::Extra => "extra",
        }
    }
}

impl Role {
    /// Load the role rooted at `path`.
    ///
    /// The caller is expected to have checked [`is_role_dir`]; loading a
    /// directory without any role content yields an empty record.
    pub fn load(path: &Path) -> Result<Self> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        debug!("Loading role '{}' from {}", name, path.display());

        Ok(Role {
            tasks: load_tasks(path)?,
            handlers: load_sequence(&path.join("handlers").join(MAIN_FILE))?,
            defaults: load_mapping(&attribute_file(path, Attribute::Defaults))?,
            vars: load_mapping(&attribute_file(path, Attribute::Vars))?,
            meta: load_mapping(&attribute_file(path, Attribute::Meta))?,
            extra: load_mapping(&attribute_file(path, Attribute::Extra))?,
            files: list_files(&path.join("files")),
            templates: list_files(&path.join("templates")),
            readme: find_readmes(path)?,
            tests: path.join("tests").is_dir(),
            path: path.to_path_buf(),
            name,
        })
    }

    /// Borrow one of the mapping-valued attributes.
    pub fn attribute(&self, attr: Attribute) -> &Mapping {
        match attr {
            Attribute::Defaults => &self.defaults,
            Attribute::Vars => &self.vars,
            Attribute::Meta => &self.meta,
            Attribute::Extra => &self.extra,
        }
    }

    /// Mutably borrow one of the mapping-valued attributes.
    pub fn attribute_mut(&mut self, attr: Attribute) -> &mut Mapping {
        match attr {
            Attribute::Defaults => &mut self.defaults,
            Attribute::Vars => &mut self.vars,
            Attribute::Meta => &mut self.meta,
            Attribute::Extra => &mut self.extra,
        }
    }

    /// Path of `<attr>/main.yml` for this role.
    pub fn attribute_path(&self, attr: Attribute) -> PathBuf {
        attribute_file(&self.path, attr)
    }

    /// Names of the roles listed under `meta.dependencies`.
    ///
    /// Entries may be plain strings or mappings with a `role` key. Anything
    /// else, including a missing or null list, contributes nothing.
    pub fn dependencies(&self) -> Vec<String> {
        let Some(YamlValue::Sequence(entries)) = self.meta.get("dependencies") else {
            return Vec::new();
        };

        entries
            .iter()
            .filter_map(|entry| match entry {
                YamlValue::String(name) => Some(name.clone()),
                YamlValue::Mapping(map) => match map.get("role") {
                    Some(YamlValue::String(name)) => Some(name.clone()),
                    _ => {
                        debug!("{}: skipping dependency without a role name", self.name);
                        None
                    }
                },
                other => {
                    debug!("{}: skipping dependency entry {:?}", self.name, other);
                    None
                }
            })
            .collect()
    }
}

/// Whether `path` directly contains a `tasks` or `handlers` directory.
pub fn is_role_dir(path: &Path) -> bool {
    ROLE_MARKER_DIRS
        .iter()
        .any(|marker| path.join(marker).is_dir())
}

fn attribute_file(role_path: &Path, attr: Attribute) -> PathBuf {
    role_path.join(attr.dir_name()).join(MAIN_FILE)
}

/// Read and parse a YAML file, or `None` when it does not exist.
///
/// An empty document parses to `Null`.
fn read_yaml(path: &Path) -> Result<Option<YamlValue>> {
    if !path.is_file() {
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    if content.trim().is_empty() {
        return Ok(Some(YamlValue::Null));
    }
    serde_yaml::from_str(&content)
        .map(Some)
        .map_err(|source| Error::Yaml {
            path: path.to_path_buf(),
            source,
        })
}

fn load_mapping(path: &Path) -> Result<Mapping> {
    match read_yaml(path)? {
        None | Some(YamlValue::Null) => Ok(Mapping::new()),
        Some(YamlValue::Mapping(map)) => Ok(map),
        Some(_) => Err(Error::UnexpectedShape {
            path: path.to_path_buf(),
            expected: "a mapping".to_string(),
        }),
    }
}

fn load_sequence(path: &Path) -> Result<Vec<Mapping>> {
    let entries = match read_yaml(path)? {
        None | Some(YamlValue::Null) => return Ok(Vec::new()),
        Some(YamlValue::Sequence(entries)) => entries,
        Some(_) => {
            return Err(Error::UnexpectedShape {
                path: path.to_path_buf(),
                expected: "a sequence of mappings".to_string(),
            })
        }
    };

    entries
        .into_iter()
        .map(|entry| match entry {
            YamlValue::Mapping(map) => Ok(map),
            _ => Err(Error::UnexpectedShape {
                path: path.to_path_buf(),
                expected: "a sequence of mappings".to_string(),
            }),
        })
        .collect()
}

/// Load `tasks/main.yml` and expand its `include` entries.
///
/// Each include is replaced in place by the tasks of the referenced file,
/// resolved relative to `tasks/`. Included tasks are not expanded again.
fn load_tasks(role_path: &Path) -> Result<Vec<Mapping>> {
    let tasks_dir = role_path.join("tasks");
    let tasks = load_sequence(&tasks_dir.join(MAIN_FILE))?;

    let mut expanded = Vec::with_capacity(tasks.len());
    for task in tasks {
        let Some(target) = task.get("include") else {
            expanded.push(task);
            continue;
        };
        let include_path = include_target(target)
            .map(|file| tasks_dir.join(file))
            .ok_or_else(|| Error::UnexpectedShape {
                path: tasks_dir.join(MAIN_FILE),
                expected: "a file name as the value of 'include'".to_string(),
            })?;
        if !include_path.is_file() {
            return Err(Error::Read {
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "included task file not found"),
                path: include_path,
            });
        }

        debug!("Expanding include {}", include_path.display());
        expanded.extend(load_sequence(&include_path)?);
    }

    Ok(expanded)
}

/// File name of an include directive, without trailing `key=value` params.
fn include_target(value: &YamlValue) -> Option<&str> {
    value.as_str()?.split_whitespace().next()
}

/// Every regular file below `dir`, sorted by path. Missing dirs are empty
/// and unreadable subdirectories are skipped.
fn list_files(dir: &Path) -> Vec<PathBuf> {
    if !dir.is_dir() {
        return Vec::new();
    }

    WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(skip_walk_error)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .collect()
}

fn find_readmes(role_path: &Path) -> Result<Vec<PathBuf>> {
    let pattern = glob::Pattern::escape(&role_path.to_string_lossy());
    let pattern = Path::new(&pattern).join(README_GLOB);

    let mut found: Vec<PathBuf> = glob::glob(&pattern.to_string_lossy())?
        .filter_map(|entry| entry.ok())
        .filter(|path| path.is_file())
        .collect();
    found.sort();
    Ok(found)
}
