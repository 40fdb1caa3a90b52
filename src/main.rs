use clap::Parser;
use colored::Colorize;
use firebase_auth_check::{CheckConfig, run};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "firebase-auth-check",
    version,
    about = "Verify Firebase/Google Auth configuration and print the required console settings"
)]
struct Cli {
    /// Project root to check (default: walk up from the current directory)
    #[arg(long)]
    root: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = CheckConfig::arboris();

    match run(&config, cli.root.as_deref()) {
        Ok(summary) if summary.all_passed() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("{} {:#}", "\u{2717}".red(), err);
            ExitCode::FAILURE
        }
    }
}
