mod cli;
mod commands;
mod config;
mod copy;
mod front_matter;
mod generator;
mod locate;
mod publish;
mod utils;

use log::LevelFilter;

fn main() {
    let app = cli::Cli::build();
    init_logging(app.verbose);

    if let Err(problem) = commands::run(app) {
        println!("❌ Error: {problem:#}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
