use clap::Parser;
use nestegg::cli::{run, Cli};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
