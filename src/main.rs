use clap::Parser;
use config::Config;
use errors::PruneError;
use prompt::Terminal;
use runner::SystemRunner;
use std::io;

mod config;
mod core;
mod errors;
mod fallback;
mod git;
mod github;
mod prompt;
mod runner;

#[derive(Debug, Parser)] // requires `derive` feature
#[command(name = "prune-merged", version)]
#[command(about = "Delete local branches whose pull requests are merged", long_about = None)]
struct Cli {
    /// Log more (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() {
    let args = Cli::parse();
    init_logger(args.verbose);

    let config = match Config::from_current_dir() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let runner = SystemRunner::new(&config.workdir);
    let mut terminal = Terminal::new(io::stdin().lock(), io::stdout());
    let mut rng = rand::thread_rng();

    match crate::core::run(&config, &runner, &mut terminal, &mut rng) {
        Ok(outcome) => std::process::exit(outcome.exit_code()),
        // External failures are echoed verbatim and keep the command's exit code
        Err(PruneError::CommandFailed { stderr, code, .. }) => {
            eprint!("{}", stderr);
            std::process::exit(code);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}
