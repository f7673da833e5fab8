//! Manifest rewriting: updates package.json identity fields in place.

use std::path::Path;

use serde_json::{json, Value};

use crate::config::InitConfig;
use crate::defaults::{INIT_SCRIPT_TOMBSTONE, MANIFEST_FILE};
use crate::error::{Error, Result};
use crate::utils::io;

/// Rewrite the manifest's identity fields and write it back.
///
/// Overwrites `name`, `repository`, `homepage` and `bugs` unconditionally.
/// If `scripts.init` exists, it is replaced with a tombstone so a second run
/// of the template's init script is a visible no-op. Every other field passes
/// through verbatim; key order is preserved.
pub fn rewrite(cwd: &Path, config: &InitConfig) -> Result<()> {
    let path = cwd.join(MANIFEST_FILE);

    let raw = std::fs::read_to_string(&path).map_err(|e| {
        Error::Manifest(format!("Cannot read {}: {}", path.display(), e))
    })?;

    let mut pkg: Value = serde_json::from_str(&raw).map_err(|e| {
        Error::Manifest(format!("Cannot parse {}: {}", path.display(), e))
    })?;

    let obj = pkg.as_object_mut().ok_or_else(|| {
        Error::Manifest(format!("{} is not a JSON object", path.display()))
    })?;

    obj.insert("name".to_string(), json!(config.pkg_name));
    obj.insert(
        "repository".to_string(),
        json!({ "type": "git", "url": format!("{}.git", config.repo_url) }),
    );
    obj.insert("homepage".to_string(), json!(config.repo_url));
    obj.insert(
        "bugs".to_string(),
        json!({ "url": format!("{}/issues", config.repo_url) }),
    );

    if let Some(init) = obj
        .get_mut("scripts")
        .and_then(|s| s.as_object_mut())
        .and_then(|s| s.get_mut("init"))
    {
        *init = json!(INIT_SCRIPT_TOMBSTONE);
    }

    let serialized = serde_json::to_string_pretty(&pkg)
        .map_err(|e| Error::Manifest(format!("Cannot serialize manifest: {}", e)))?;

    io::write_file_atomic(&path, &format!("{}\n", serialized), "write manifest")
}
