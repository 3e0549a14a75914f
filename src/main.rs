mod config;
mod dispatch;
mod runner;
mod util;

use crate::dispatch::Mode;
use crate::runner::Invocation;
use std::process;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    // Dispatch before touching settings: usage, the missing -t argument, and
    // the pass-through no-op must not depend on a readable settings file.
    match Mode::from_args(&args) {
        Mode::Usage => {
            print_usage();
            process::exit(1);
        }
        // Unrecognized first argument: no-op, exit 0.
        Mode::Passthrough => {}
        Mode::Suite { dir } => {
            let settings = load_settings()?;
            let dir = match dir {
                Some(d) => util::absolutize(d)?,
                None => settings.suite_dir()?,
            };
            let files = match runner::collect_suite_files(&dir) {
                Ok(files) => files,
                Err(err) => {
                    eprintln!("Error: {:#}", err);
                    process::exit(1);
                }
            };
            if files.is_empty() {
                println!("No files found in directory.");
                process::exit(0);
            }
            let invocation = Invocation::from_command(&settings.runner.command, &files)?;
            run_and_exit(&invocation, true);
        }
        Mode::Single { file } => {
            let Some(file) = file else {
                eprintln!("Please provide a file name with -t");
                process::exit(1);
            };
            let settings = load_settings()?;
            let file = util::absolutize(file)?;
            let invocation = Invocation::from_command(&settings.runner.command, &[file])?;
            run_and_exit(&invocation, true);
        }
        Mode::Ci => {
            let settings = load_settings()?;
            let invocation = Invocation::from_command(&settings.ci.command, &[])?;
            run_and_exit(&invocation, false);
        }
    }

    Ok(())
}

fn load_settings() -> anyhow::Result<config::Settings> {
    let data_dir = util::data_dir()?;
    let (settings, _settings_path) = config::load(&data_dir)?;
    Ok(settings)
}

/// Execute the child with inherited stdio and terminate with its exit code.
fn run_and_exit(invocation: &Invocation, banner: bool) -> ! {
    if banner {
        println!("Running: {}", invocation.display());
    }
    match runner::run(invocation) {
        Ok(status) => process::exit(runner::exit_code(status)),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!("Usage: moontest -d [<directory>], moontest -t <file>, or moontest --ci");
    eprintln!();
    eprintln!("Modes:");
    eprintln!("  -d [<directory>]  Run the test suite against every file in <directory>");
    eprintln!("                    (default: ~/.moon/lib/core/builtin)");
    eprintln!("  -t <file>         Run the test suite against a single file");
    eprintln!("  --ci              Run the CI result parser");
}
