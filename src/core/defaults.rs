//! Built-in defaults for the init pipeline.
//!
//! Defaults are assembled into an explicit [`InitDefaults`] value passed to
//! the entry point, so tests can substitute their own without process-wide
//! state.

use std::path::PathBuf;

/// Organization used when `--org` is not given.
pub const DEFAULT_ORG: &str = "charlie-labs";

/// Commit message for the initialization commit.
pub const COMMIT_MESSAGE: &str = "chore: initialize from template";

/// Replacement body for `scripts.init` after the tool has run.
pub const INIT_SCRIPT_TOMBSTONE: &str = "echo 'Already initialized.'";

/// Relative path of the manifest file.
pub const MANIFEST_FILE: &str = "package.json";

/// Relative paths of the README template and its rendered output.
pub const README_TEMPLATE_FILE: &str = "README_TEMPLATE.md";
pub const README_FILE: &str = "README.md";

/// Defaults consumed by [`crate::config::InitConfig::from_flags`].
#[derive(Debug, Clone)]
pub struct InitDefaults {
    pub org: String,
    pub visibility: crate::config::Visibility,
    pub history: crate::config::HistoryMode,
    /// Install command run by the finalizer, program first.
    pub install_command: Vec<String>,
    /// Template-only paths removed by the scaffold cleaner.
    pub scaffold_paths: Vec<PathBuf>,
    /// The tool's own install path, removed last. Resolved by the caller
    /// (normally from `std::env::current_exe`) so the cleaner stays testable.
    pub self_path: Option<PathBuf>,
}

pub fn init_defaults() -> InitDefaults {
    InitDefaults {
        org: DEFAULT_ORG.to_string(),
        visibility: crate::config::Visibility::Private,
        history: crate::config::HistoryMode::Squash,
        install_command: vec!["bun".to_string(), "install".to_string()],
        scaffold_paths: vec![
            PathBuf::from(".template-notes.md"),
            PathBuf::from("TEMPLATE_TODO.md"),
            PathBuf::from("scripts/README.md"),
        ],
        self_path: None,
    }
}
