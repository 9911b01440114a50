//! vite-tags CLI entry point
//!
//! Parses arguments, runs the command, and turns any error into a colored
//! message with a suggestion before exiting with status 1.

use clap::Parser;
use vite_tags::cli::Cli;
use vite_tags::core::user_friendly_error;

fn main() {
    let cli = Cli::parse();

    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    if let Err(e) = cli.execute() {
        user_friendly_error(e).display();
        std::process::exit(1);
    }
}
