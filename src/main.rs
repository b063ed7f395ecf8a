//! # TL
//!
//! Runs one TL program file from the command line.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tl::mach::Options;

mod term;

#[derive(Parser)]
#[command(name = "tl")]
#[command(about = "Interpreter for the TL scripting language", long_about = None)]
struct Cli {
    /// TL program to run
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Make `*` multiply instead of subtract
    #[arg(long)]
    product_multiply: bool,

    /// Make a label defined twice a load error
    #[arg(long)]
    strict_labels: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    term::init_logging();
    let options = Options {
        product_multiply: cli.product_multiply,
        strict_labels: cli.strict_labels,
    };
    term::main(&cli.file, options)
}
