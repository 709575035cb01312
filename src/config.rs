//! # Configuration Loading
//!
//! ansiqa reads an optional YAML mapping from two places:
//!
//! 1.  The per-user file `~/.ansiqa`.
//! 2.  The working-directory file `./.ansiqa` (or the file given with
//!     `--config`).
//!
//! The second layer overrides the first on top-level key collisions. The
//! recognised keys are:
//!
//! ```yaml
//! meta:       # mapping merged into each role's meta/main.yml
//!   galaxy_info:
//!     author: ops-team
//! extra:      # mapping merged into each role's extra/main.yml
//!   owner: ops
//! template: README.md.j2   # documentation template
//! ```
//!
//! Unknown keys are ignored. The resulting [`Config`] value is passed
//! explicitly to every command that needs it.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;
use serde_yaml::{Mapping, Value as YamlValue};

use crate::defaults::{local_config_path, user_config_path, TEMPLATE_GLOB};
use crate::error::{Error, Result};
use crate::merge::yaml::update;
use crate::role::Attribute;

/// Settings loaded from the `.ansiqa` configuration files.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Default contents for each role's `meta/main.yml`
    #[serde(default)]
    pub meta: Option<Mapping>,
    /// Default contents for each role's `extra/main.yml`
    #[serde(default)]
    pub extra: Option<Mapping>,
    /// Documentation template path
    #[serde(default)]
    pub template: Option<String>,
}

/// Where configuration and templates are looked up.
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// Per-user config file, usually `~/.ansiqa`
    pub user_config: Option<PathBuf>,
    /// Working-directory config file, or the `--config` override
    pub local_config: PathBuf,
    /// Directory searched first for templates
    pub working_dir: PathBuf,
    /// Directory searched second for templates
    pub home_dir: Option<PathBuf>,
}

impl ConfigPaths {
    /// Standard locations for `working_dir`, with an optional override of
    /// the working-directory layer.
    pub fn discover(working_dir: &Path, config_override: Option<&Path>) -> Self {
        ConfigPaths {
            user_config: user_config_path(),
            local_config: config_override
                .map(Path::to_path_buf)
                .unwrap_or_else(|| local_config_path(working_dir)),
            working_dir: working_dir.to_path_buf(),
            home_dir: dirs::home_dir(),
        }
    }

    /// Standard locations for the current process.
    pub fn from_env(config_override: Option<&Path>) -> Result<Self> {
        let working_dir = env::current_dir()?;
        Ok(Self::discover(&working_dir, config_override))
    }
}

impl Config {
    /// Load and layer the user and working-directory configuration files.
    ///
    /// Missing files are skipped. An explicitly chosen local file that does
    /// not exist is still skipped here; the CLI checks for it up front.
    pub fn load(paths: &ConfigPaths) -> Result<Self> {
        let mut merged = Mapping::new();
        for path in paths.user_config.iter().chain([&paths.local_config]) {
            if let Some(layer) = read_layer(path)? {
                debug!("Loaded configuration from {}", path.display());
                update(&mut merged, &layer);
            }
        }

        serde_yaml::from_value(YamlValue::Mapping(merged)).map_err(|e| Error::ConfigParse {
            path: paths.local_config.clone(),
            message: e.to_string(),
        })
    }

    /// Parse a configuration document from a string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        serde_yaml::from_str(content).map_err(|e| Error::ConfigParse {
            path: PathBuf::from("<string>"),
            message: e.to_string(),
        })
    }

    /// The configured mapping for `meta` or `extra`.
    ///
    /// Fails with [`Error::MissingConfigKey`] when the key is absent.
    pub fn attribute(&self, attr: Attribute) -> Result<&Mapping> {
        let value = match attr {
            Attribute::Meta => self.meta.as_ref(),
            Attribute::Extra => self.extra.as_ref(),
            Attribute::Defaults | Attribute::Vars => None,
        };
        value.ok_or_else(|| Error::MissingConfigKey {
            key: attr.dir_name().to_string(),
        })
    }

    /// Resolve the documentation template.
    ///
    /// A configured `template` is tried relative to the working directory,
    /// then the home directory, then as given; if none exists that is an
    /// error. Without one, the first `README.*.j2` in the working directory
    /// and then the home directory is used. `Ok(None)` means nothing was
    /// found.
    pub fn resolve_template(&self, paths: &ConfigPaths) -> Result<Option<PathBuf>> {
        if let Some(template) = &self.template {
            let candidates = [
                Some(paths.working_dir.join(template)),
                paths.home_dir.as_ref().map(|home| home.join(template)),
                Some(PathBuf::from(template)),
            ];
            return candidates
                .into_iter()
                .flatten()
                .find(|candidate| candidate.is_file())
                .map(Some)
                .ok_or_else(|| Error::TemplateNotFound {
                    template: template.clone(),
                });
        }

        for dir in [Some(&paths.working_dir), paths.home_dir.as_ref()]
            .into_iter()
            .flatten()
        {
            if let Some(found) = first_template_in(dir)? {
                debug!("Discovered template {}", found.display());
                return Ok(Some(found));
            }
        }
        Ok(None)
    }
}

fn read_layer(path: &Path) -> Result<Option<Mapping>> {
    if !path.is_file() {
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    if content.trim().is_empty() {
        return Ok(None);
    }

    let value: YamlValue = serde_yaml::from_str(&content).map_err(|source| Error::Yaml {
        path: path.to_path_buf(),
        source,
    })?;
    let map = match value {
        YamlValue::Null => return Ok(None),
        YamlValue::Mapping(map) => map,
        _ => {
            return Err(Error::ConfigParse {
                path: path.to_path_buf(),
                message: "expected a mapping at the top level".to_string(),
            })
        }
    };

    // Validate each layer against its own file
    serde_yaml::from_value::<Config>(YamlValue::Mapping(map.clone())).map_err(|e| {
        Error::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        }
    })?;
    Ok(Some(map))
}

fn first_template_in(dir: &Path) -> Result<Option<PathBuf>> {
    let pattern = Path::new(&glob::Pattern::escape(&dir.to_string_lossy())).join(TEMPLATE_GLOB);
    let mut matches: Vec<PathBuf> = glob::glob(&pattern.to_string_lossy())?
        .filter_map(|entry| entry.ok())
        .filter(|path| path.is_file())
        .collect();
    matches.sort();
    Ok(matches.into_iter().next())
}
