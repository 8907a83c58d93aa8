// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! toolbadge binary entry point.

use clap::Parser;

use toolbadge::cli::Cli;
use toolbadge::output_diagnostic::{print_error, print_info};
use toolbadge::pipeline::{self, exit_codes};

fn main() {
    let cli = Cli::parse();

    match pipeline::execute(&cli) {
        Ok(summary) => {
            if cli.verbose {
                print_info(summary);
            }
        }
        Err(e) if e.is_broken_pipe() => {}
        Err(e) => {
            print_error(e);
            std::process::exit(exit_codes::ERROR);
        }
    }
}
