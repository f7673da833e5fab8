//! Command execution primitives with consistent error handling.

use std::path::Path;
use std::process::Command;

use serde::Serialize;

use crate::error::{Error, Result};

/// Captured output from an external command.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
    pub exit_code: i32,
}

/// Narrow capability for running external tools.
///
/// The finalizer depends on this trait rather than on `std::process` so it
/// can be exercised against a scripted fake in tests.
pub trait CommandRunner {
    /// Run `program` with `args` in `dir`, blocking until completion.
    ///
    /// Returns the captured output on a zero exit status. A non-zero exit or
    /// a spawn failure becomes an error carrying `context` and the tool's
    /// error text (stderr preferred, stdout fallback).
    fn run(&self, dir: &Path, program: &str, args: &[&str], context: &str)
        -> Result<CommandOutput>;
}

/// `CommandRunner` backed by `std::process::Command`.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(
        &self,
        dir: &Path,
        program: &str,
        args: &[&str],
        context: &str,
    ) -> Result<CommandOutput> {
        let output = Command::new(program)
            .args(args)
            .current_dir(dir)
            .output()
            .map_err(|e| Error::command(context, format!("failed to run: {}", e)))?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        if !output.status.success() {
            let detail = if stderr.trim().is_empty() {
                stdout.trim().to_string()
            } else {
                stderr.trim().to_string()
            };
            return Err(Error::command(context, detail));
        }

        Ok(CommandOutput {
            stdout,
            stderr,
            success: true,
            exit_code: output.status.code().unwrap_or(0),
        })
    }
}
