//! Removal of template-only scaffolding, the tool's own install path last.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::InitConfig;
use crate::error::{Error, Result};
use crate::log_step;

/// Remove every scaffold path that exists under `cwd`.
///
/// Absent entries are skipped silently. Directories are removed recursively.
/// Returns the paths that were actually removed.
pub fn clean(cwd: &Path, config: &InitConfig) -> Result<Vec<PathBuf>> {
    let mut targets: Vec<PathBuf> = config
        .scaffold_paths
        .iter()
        .map(|p| cwd.join(p))
        .collect();
    if let Some(self_path) = &config.self_path {
        targets.push(self_path.clone());
    }

    let mut removed = Vec::new();
    for path in targets {
        if !path.exists() {
            continue;
        }
        remove_path(&path)?;
        log_step!("removed {}", path.display());
        removed.push(path);
    }

    Ok(removed)
}

fn remove_path(path: &Path) -> Result<()> {
    let result = if path.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };
    result.map_err(|e| Error::io(format!("remove {}", path.display()), e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::{init_defaults, InitDefaults};
    use std::collections::HashMap;

    fn config_with(defaults: InitDefaults) -> InitConfig {
        let flags: HashMap<String, String> =
            [("name".to_string(), "proj".to_string())].into();
        InitConfig::from_flags(&flags, &defaults, Path::new("/tmp")).unwrap()
    }

    #[test]
    fn removes_existing_and_skips_absent() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("TEMPLATE_TODO.md"), "todo").unwrap();

        let removed = clean(dir.path(), &config_with(init_defaults())).unwrap();

        assert_eq!(removed, vec![dir.path().join("TEMPLATE_TODO.md")]);
        assert!(!dir.path().join("TEMPLATE_TODO.md").exists());
        assert!(!dir.path().join(".template-notes.md").exists());
    }

    #[test]
    fn removes_directories_recursively() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("template-assets");
        fs::create_dir_all(nested.join("deep")).unwrap();
        fs::write(nested.join("deep/file.txt"), "x").unwrap();

        let mut defaults = init_defaults();
        defaults.scaffold_paths = vec![PathBuf::from("template-assets")];

        clean(dir.path(), &config_with(defaults)).unwrap();
        assert!(!nested.exists());
    }

    #[test]
    fn self_path_is_removed_last() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("TEMPLATE_TODO.md"), "todo").unwrap();
        let self_path = dir.path().join("sprout-bin");
        fs::write(&self_path, "binary").unwrap();

        let mut defaults = init_defaults();
        defaults.self_path = Some(self_path.clone());

        let removed = clean(dir.path(), &config_with(defaults)).unwrap();

        assert_eq!(removed.last(), Some(&self_path));
        assert!(!self_path.exists());
    }

    #[test]
    fn rerun_after_cleaning_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".template-notes.md"), "notes").unwrap();
        let config = config_with(init_defaults());

        clean(dir.path(), &config).unwrap();
        let removed = clean(dir.path(), &config).unwrap();
        assert!(removed.is_empty());
    }
}
