use std::process::ExitCode;

use sprout::config::InitConfig;
use sprout::defaults;
use sprout::error::Result;
use sprout::flags::parse_flags;
use sprout::pipeline;
use sprout::utils::command::SystemRunner;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let flags = parse_flags(&args);

    let cwd = std::env::current_dir()
        .map_err(|e| sprout::Error::io("resolve working directory", e.to_string()))?;

    let mut defaults = defaults::init_defaults();
    // The cleaner deletes the tool itself as its final entry.
    defaults.self_path = std::env::current_exe().ok();

    let config = InitConfig::from_flags(&flags, &defaults, &cwd)?;

    pipeline::run(&cwd, &config, &SystemRunner)
}
