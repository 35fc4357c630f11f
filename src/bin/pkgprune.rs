// src/bin/pkgprune.rs

use clap::Parser;
use pkgprune_cli::{Cli, exit_code_from_error_kind};
use std::process;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = exit_code_from_error_kind(e.kind());
            let _ = e.print();
            process::exit(i32::from(code));
        }
    };
    match pkgprune_cli::run(cli) {
        Ok(code) => process::exit(i32::from(code)),
        Err(e) => {
            eprintln!("pkgprune: {e}");
            process::exit(i32::from(e.exit_code()));
        }
    }
}
