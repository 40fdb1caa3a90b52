//! Colored console rendering of check results and console checklists.
//!
//! Cosmetic only: the functional contract is the report content and the
//! process exit code, and `colored` degrades to plain text when stdout is
//! not a terminal.

use crate::console;
use crate::types::{CheckConfig, Finding, GroupResult, RunSummary, Status};
use colored::Colorize;
use std::path::Path;

const HEADER_WIDTH: usize = 60;

fn print_header(text: &str) {
    let line = "=".repeat(HEADER_WIDTH);
    println!("\n{}", line.magenta().bold());
    println!(
        "{}",
        format!("{:^width$}", text, width = HEADER_WIDTH).magenta().bold()
    );
    println!("{}\n", line.magenta().bold());
}

fn print_finding(finding: &Finding) {
    match finding.status {
        Status::Pass => println!("{} {}", "\u{2713}".green(), finding.message),
        Status::Fail => println!("{} {}", "\u{2717}".red(), finding.message),
        Status::Warn => println!("{} {}", "\u{26a0}".yellow(), finding.message),
        Status::Info => println!("{} {}", "\u{2139}".cyan(), finding.message),
    }
}

fn info(message: &str) {
    println!("{} {}", "\u{2139}".cyan(), message);
}

pub fn print_banner(config: &CheckConfig) {
    let line = "=".repeat(HEADER_WIDTH);
    println!("\n{}", line.magenta().bold());
    println!(
        "{}",
        format!(
            "{:^width$}",
            format!("{} Firebase & Google Auth check", config.project_id),
            width = HEADER_WIDTH
        )
        .magenta()
        .bold()
    );
    println!("{}", line.magenta().bold());
}

pub fn print_root(root: &Path) {
    println!();
    info(&format!("Project found at: {}", root.display()));
}

pub fn print_group(group: &GroupResult) {
    print_header(&format!("CHECKING {}", group.name.to_uppercase()));
    for finding in &group.findings {
        print_finding(finding);
    }
}

/// The OAuth client entries the operator must register in the Google Cloud
/// console. Printed on every run, pass or fail.
pub fn print_google_cloud_config(config: &CheckConfig) {
    print_header("GOOGLE CLOUD CONSOLE CONFIGURATION");

    info(&format!(
        "Visit: https://console.cloud.google.com/apis/credentials?project={}",
        config.project_id
    ));
    info("Edit the OAuth client ID and register the following entries:");

    println!("\n{}", "Authorized redirect URIs:".bold());
    for uri in console::redirect_uris(config.auth_domain, &config.dev_ports) {
        println!("  {}", uri.cyan());
    }

    println!("\n{}", "Authorized JavaScript origins:".bold());
    for origin in console::javascript_origins(config.auth_domain, &config.dev_ports) {
        println!("  {}", origin.cyan());
    }
}

/// The domains the operator must authorize in the Firebase console.
pub fn print_firebase_console_config(config: &CheckConfig) {
    print_header("FIREBASE CONSOLE CONFIGURATION");

    info(&format!(
        "Visit: https://console.firebase.google.com/project/{}/authentication/settings",
        config.project_id
    ));
    info("Make sure the following domains are authorized:");

    println!("\n{}", "Authorized domains:".bold());
    for domain in console::authorized_domains(config.auth_domain) {
        println!("  {}", domain.cyan());
    }
}

pub fn print_summary(summary: &RunSummary) {
    print_header("SUMMARY");

    println!("Total checks: {}", summary.total());
    println!("Passed: {}", summary.passed().to_string().green());
    println!("Failed: {}", summary.failed().to_string().red());

    if summary.all_passed() {
        println!("\n{}", "\u{2713} All checks passed".green().bold());
        println!("\n{}", "Next steps:".cyan());
        println!("1. Apply the Google Cloud console configuration above");
        println!("2. Apply the Firebase console configuration above");
        println!("3. Run: flutter run -d chrome --web-port=8080");
        println!("4. Test Google sign-in");
    } else {
        println!("\n{}", "\u{2717} Some checks failed".red().bold());
        println!(
            "{}",
            "Fix the problems above before configuring the consoles".yellow()
        );
    }
    println!();
}
