//! README materialization from the template document.

use std::fs;
use std::path::Path;

use crate::config::InitConfig;
use crate::defaults::{README_FILE, README_TEMPLATE_FILE};
use crate::error::{Error, Result};
use crate::utils::io;

/// Placeholder tokens recognized in the README template.
pub struct Tokens;

impl Tokens {
    pub const PROJECT_NAME: &'static str = "__PROJECT_NAME__";
    pub const PKG_NAME: &'static str = "__PKG_NAME__";
    pub const REPO_SLUG: &'static str = "__REPO_SLUG__";
    pub const VISIBILITY: &'static str = "__VISIBILITY__";
}

/// Replace every token occurrence with its configuration value.
///
/// Tokens are disjoint literals, so replacement order is irrelevant.
pub fn render(template: &str, config: &InitConfig) -> String {
    template
        .replace(Tokens::PROJECT_NAME, &config.project_name)
        .replace(Tokens::PKG_NAME, &config.pkg_name)
        .replace(Tokens::REPO_SLUG, &config.repo_slug)
        .replace(Tokens::VISIBILITY, config.visibility.as_str())
}

/// Render `README_TEMPLATE.md` into `README.md` and delete the template.
///
/// A missing template is a no-op, not an error. Returns whether a README was
/// materialized. One-way: a second run finds no template and does nothing.
pub fn materialize(cwd: &Path, config: &InitConfig) -> Result<bool> {
    let src = cwd.join(README_TEMPLATE_FILE);
    let dst = cwd.join(README_FILE);

    if !src.exists() {
        return Ok(false);
    }

    let template = io::read_file(&src, "read README template")?;
    io::write_file(&dst, &render(&template, config), "write README")?;

    fs::remove_file(&src).map_err(|e| Error::io("remove README template", e.to_string()))?;

    Ok(true)
}
