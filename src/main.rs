use std::process;

use clap::Parser;
use sql_glance::{
    app::{AnalyzeParams, FormatParams, read_input, run_analyze, run_format},
    cli::{Cli, Commands},
    config::Config,
    error::AppResult
};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run(cli: Cli) -> AppResult<String> {
    let config = Config::load()?;

    match cli.command {
        Commands::Format {
            input,
            indent,
            tabs,
            no_uppercase,
            max_line_length,
            lines_between_clauses
        } => {
            let sql = read_input(input.as_deref())?;
            let params = FormatParams {
                indent,
                tabs,
                no_uppercase,
                max_line_length,
                lines_between_clauses
            };
            Ok(run_format(&sql, &params, &config))
        }
        Commands::Analyze {
            input,
            output_format,
            no_color
        } => {
            let sql = read_input(input.as_deref())?;
            let params = AnalyzeParams {
                output_format,
                no_color,
                verbose: cli.verbose
            };
            run_analyze(&sql, &params, &config)
        }
    }
}
