//! Dependency install and version-control history rewrite.

use std::path::Path;

use crate::config::{HistoryMode, InitConfig};
use crate::defaults::COMMIT_MESSAGE;
use crate::error::{Error, Result};
use crate::utils::command::CommandRunner;

/// Run the install command, then rewrite history per the configured mode.
///
/// Squash (default): stage everything, write a tree from the index, create a
/// parentless commit for that tree, and force the branch ref onto it. Prior
/// commits become unreachable but are not purged. Append: stage everything
/// and commit on top of the existing history.
///
/// Any command failure aborts; nothing done before it is rolled back.
pub fn run(cwd: &Path, config: &InitConfig, runner: &dyn CommandRunner) -> Result<()> {
    install(cwd, config, runner)?;

    match config.history {
        HistoryMode::Squash => squash_history(cwd, runner),
        HistoryMode::Append => append_commit(cwd, runner),
    }
}

fn install(cwd: &Path, config: &InitConfig, runner: &dyn CommandRunner) -> Result<()> {
    let (program, args) = config
        .install_command
        .split_first()
        .ok_or_else(|| Error::Config("Install command is empty".to_string()))?;
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    runner.run(cwd, program, &args, "dependency install")?;
    Ok(())
}

fn squash_history(cwd: &Path, runner: &dyn CommandRunner) -> Result<()> {
    runner.run(cwd, "git", &["add", "-A"], "git add")?;

    let tree = runner
        .run(cwd, "git", &["write-tree"], "git write-tree")?
        .stdout
        .trim()
        .to_string();
    if tree.is_empty() {
        return Err(Error::command("git write-tree", "produced no tree id"));
    }

    let commit = runner
        .run(
            cwd,
            "git",
            &["commit-tree", &tree, "-m", COMMIT_MESSAGE],
            "git commit-tree",
        )?
        .stdout
        .trim()
        .to_string();
    if commit.is_empty() {
        return Err(Error::command("git commit-tree", "produced no commit id"));
    }

    runner.run(cwd, "git", &["reset", "--hard", &commit], "git reset")?;
    Ok(())
}

fn append_commit(cwd: &Path, runner: &dyn CommandRunner) -> Result<()> {
    runner.run(cwd, "git", &["add", "-A"], "git add")?;
    runner.run(
        cwd,
        "git",
        &["commit", "-m", COMMIT_MESSAGE],
        "git commit",
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InitConfig;
    use crate::defaults::init_defaults;
    use crate::utils::command::CommandOutput;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Scripted runner: records every invocation and replays canned stdout
    /// keyed by context; unknown contexts succeed with empty output.
    struct FakeRunner {
        calls: RefCell<Vec<String>>,
        stdout: HashMap<&'static str, &'static str>,
        fail_on: Option<&'static str>,
    }

    impl FakeRunner {
        fn new() -> Self {
            FakeRunner {
                calls: RefCell::new(Vec::new()),
                stdout: HashMap::from([
                    ("git write-tree", "abc123tree\n"),
                    ("git commit-tree", "def456commit\n"),
                ]),
                fail_on: None,
            }
        }

        fn failing_on(context: &'static str) -> Self {
            let mut runner = FakeRunner::new();
            runner.fail_on = Some(context);
            runner
        }

        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    impl CommandRunner for FakeRunner {
        fn run(
            &self,
            _dir: &Path,
            program: &str,
            args: &[&str],
            context: &str,
        ) -> Result<CommandOutput> {
            self.calls
                .borrow_mut()
                .push(format!("{} {}", program, args.join(" ")));

            if self.fail_on == Some(context) {
                return Err(Error::command(context, "scripted failure"));
            }

            Ok(CommandOutput {
                stdout: self.stdout.get(context).unwrap_or(&"").to_string(),
                stderr: String::new(),
                success: true,
                exit_code: 0,
            })
        }
    }

    fn config(history: &str) -> InitConfig {
        let flags: HashMap<String, String> = [
            ("name".to_string(), "proj".to_string()),
            ("history".to_string(), history.to_string()),
        ]
        .into();
        InitConfig::from_flags(&flags, &init_defaults(), Path::new("/tmp")).unwrap()
    }

    #[test]
    fn squash_runs_install_then_plumbing_sequence() {
        let runner = FakeRunner::new();
        run(Path::new("/repo"), &config("squash"), &runner).unwrap();

        assert_eq!(
            runner.calls(),
            vec![
                "bun install",
                "git add -A",
                "git write-tree",
                "git commit-tree abc123tree -m chore: initialize from template",
                "git reset --hard def456commit",
            ]
        );
    }

    #[test]
    fn append_runs_plain_commit() {
        let runner = FakeRunner::new();
        run(Path::new("/repo"), &config("append"), &runner).unwrap();

        assert_eq!(
            runner.calls(),
            vec![
                "bun install",
                "git add -A",
                "git commit -m chore: initialize from template",
            ]
        );
    }

    #[test]
    fn install_failure_aborts_before_any_git_command() {
        let runner = FakeRunner::failing_on("dependency install");
        let err = run(Path::new("/repo"), &config("squash"), &runner).unwrap_err();

        assert_eq!(err.code(), "command.failed");
        assert_eq!(runner.calls(), vec!["bun install"]);
    }

    #[test]
    fn write_tree_failure_stops_the_sequence() {
        let runner = FakeRunner::failing_on("git write-tree");
        let err = run(Path::new("/repo"), &config("squash"), &runner).unwrap_err();

        assert!(err.to_string().contains("git write-tree"));
        assert_eq!(
            runner.calls(),
            vec!["bun install", "git add -A", "git write-tree"]
        );
    }

    #[test]
    fn empty_tree_id_is_an_error() {
        let mut runner = FakeRunner::new();
        runner.stdout.insert("git write-tree", "");
        let err = run(Path::new("/repo"), &config("squash"), &runner).unwrap_err();
        assert!(err.to_string().contains("no tree id"));
    }
}
