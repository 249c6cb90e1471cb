use clap::Parser;

use srcreport::cli::{Cli, Output};

fn main() {
    let cli = Cli::parse();
    if let Err(e) = cli.run() {
        // Alternate format prints the whole context chain on one line
        Output::new(false, false).error(&format!("{e:#}"));
        std::process::exit(1);
    }
}
