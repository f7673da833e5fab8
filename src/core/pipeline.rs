//! Ordered orchestration of the init steps.

use std::path::Path;

use crate::config::InitConfig;
use crate::error::Result;
use crate::log_step;
use crate::utils::command::CommandRunner;
use crate::{finalize, manifest, readme, scaffold};

/// Run the full init pipeline against `cwd`.
///
/// Steps run strictly in order and fail fast: the manifest rewrite comes
/// first, so a missing or invalid manifest aborts before anything on disk is
/// touched. Steps completed before a later failure stay applied; there is no
/// rollback.
pub fn run(cwd: &Path, config: &InitConfig, runner: &dyn CommandRunner) -> Result<()> {
    manifest::rewrite(cwd, config)?;
    log_step!("package.json updated (name={})", config.pkg_name);

    if readme::materialize(cwd, config)? {
        log_step!("README.md created");
    }

    scaffold::clean(cwd, config)?;

    finalize::run(cwd, config, runner)?;
    log_step!("dependencies installed and history initialized");

    log_step!("Done.");
    Ok(())
}
