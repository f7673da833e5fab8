use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Serialize;

use crate::defaults::InitDefaults;
use crate::error::{Error, Result};
use crate::sanitize::sanitize_pkg_name;

/// Repository visibility on the hosting platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Private,
    Public,
    Internal,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Private => "private",
            Visibility::Public => "public",
            Visibility::Internal => "internal",
        }
    }
}

impl FromStr for Visibility {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "private" => Ok(Visibility::Private),
            "public" => Ok(Visibility::Public),
            "internal" => Ok(Visibility::Internal),
            other => Err(Error::Config(format!(
                "Invalid visibility '{}' (expected private, public, or internal)",
                other
            ))),
        }
    }
}

/// How the finalizer treats existing version-control history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryMode {
    /// Collapse history to a single parentless commit (default).
    Squash,
    /// Leave history untouched and append a plain commit.
    Append,
}

impl FromStr for HistoryMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "squash" => Ok(HistoryMode::Squash),
            "append" => Ok(HistoryMode::Append),
            other => Err(Error::Config(format!(
                "Invalid history mode '{}' (expected squash or append)",
                other
            ))),
        }
    }
}

/// Resolved configuration for one init run. Built once, never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct InitConfig {
    pub project_name: String,
    pub org: String,
    pub visibility: Visibility,
    pub history: HistoryMode,

    // Derived identity values
    pub pkg_name: String,
    pub repo_slug: String,
    pub repo_url: String,

    #[serde(skip)]
    pub install_command: Vec<String>,
    #[serde(skip)]
    pub scaffold_paths: Vec<PathBuf>,
    #[serde(skip)]
    pub self_path: Option<PathBuf>,
}

impl InitConfig {
    /// Resolve flags against defaults and the working directory.
    ///
    /// `--name` falls back to the base name of `cwd`; `--org`, `--visibility`
    /// and `--history` fall back to the supplied defaults.
    pub fn from_flags(
        flags: &HashMap<String, String>,
        defaults: &InitDefaults,
        cwd: &Path,
    ) -> Result<Self> {
        let project_name = match flags.get("name") {
            Some(name) => name.clone(),
            None => cwd
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .ok_or_else(|| {
                    Error::Config(format!(
                        "Cannot derive project name from working directory '{}'",
                        cwd.display()
                    ))
                })?,
        };

        let org = flags
            .get("org")
            .cloned()
            .unwrap_or_else(|| defaults.org.clone());

        let visibility = match flags.get("visibility") {
            Some(v) => v.parse()?,
            None => defaults.visibility,
        };

        let history = match flags.get("history") {
            Some(h) => h.parse()?,
            None => defaults.history,
        };

        let pkg_name = sanitize_pkg_name(&project_name);
        let repo_slug = format!("{}/{}", org, project_name);
        let repo_url = format!("https://github.com/{}", repo_slug);

        Ok(InitConfig {
            project_name,
            org,
            visibility,
            history,
            pkg_name,
            repo_slug,
            repo_url,
            install_command: defaults.install_command.clone(),
            scaffold_paths: defaults.scaffold_paths.clone(),
            self_path: defaults.self_path.clone(),
        })
    }
}
