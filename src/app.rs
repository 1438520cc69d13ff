//! Application logic for the sql-glance CLI.
//!
//! Kept apart from the entry point so command behavior can be tested
//! without spawning the binary.

use std::{
    fs::read_to_string,
    io::{self, Read},
    path::Path
};

use tracing::info;

use crate::{
    analyze::analyze_statements,
    cli::Format,
    config::Config,
    error::{AppResult, config_error, file_read_error},
    format::{FormatOptions, FormatOverrides, format_statements},
    output::{OutputFormat, OutputOptions, format_analyses},
    scan::split_statements
};

/// Separator placed between formatted statements
pub const STATEMENT_SEPARATOR: &str = ";\n\n";

/// Flags of the format command
#[derive(Debug, Clone, Default)]
pub struct FormatParams {
    pub indent:                Option<usize>,
    pub tabs:                  bool,
    pub no_uppercase:          bool,
    pub max_line_length:       Option<usize>,
    pub lines_between_clauses: Option<usize>
}

/// Flags of the analyze command
#[derive(Debug, Clone, Default)]
pub struct AnalyzeParams {
    pub output_format: Option<Format>,
    pub no_color:      bool,
    pub verbose:       bool
}

/// Read SQL from a file, or stdin when the path is absent or `-`
pub fn read_input(path: Option<&Path>) -> AppResult<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => {
            read_to_string(path).map_err(|e| file_read_error(&path.display().to_string(), e))
        }
        _ => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| file_read_error("stdin", e))?;
            Ok(buffer)
        }
    }
}

/// Convert CLI format to internal OutputFormat
pub fn convert_format(format: Format) -> OutputFormat {
    match format {
        Format::Text => OutputFormat::Text,
        Format::Json => OutputFormat::Json,
        Format::Yaml => OutputFormat::Yaml
    }
}

/// Resolve format options: defaults, then config, then CLI flags
pub fn build_format_options(params: &FormatParams, config: &Config) -> FormatOptions {
    let cli = FormatOverrides {
        indent:                if params.tabs {
            Some("\t".to_string())
        } else {
            params.indent.map(|n| " ".repeat(n))
        },
        uppercase:             params.no_uppercase.then_some(false),
        max_line_length:       params.max_line_length,
        lines_between_clauses: params.lines_between_clauses
    };
    FormatOptions::from(&config.format.clone().or_from(cli))
}

/// Resolve output options: CLI flags, then config, then defaults
pub fn build_output_options(params: &AnalyzeParams, config: &Config) -> AppResult<OutputOptions> {
    let format = match (params.output_format, &config.output.format) {
        (Some(format), _) => convert_format(format),
        (None, Some(name)) => Format::from_name(name)
            .map(convert_format)
            .ok_or_else(|| config_error(format!("Unknown output format: '{}'", name)))?,
        (None, None) => OutputFormat::default()
    };
    let colored = !params.no_color && config.output.colored.unwrap_or(true);
    Ok(OutputOptions {
        format,
        colored,
        verbose: params.verbose
    })
}

/// Run the format command over the full input text
pub fn run_format(sql: &str, params: &FormatParams, config: &Config) -> String {
    let options = build_format_options(params, config);
    let formatted = format_statements(sql, &options);
    info!(statements = formatted.len(), "format complete");
    formatted.join(STATEMENT_SEPARATOR)
}

/// Run the analyze command over the full input text
pub fn run_analyze(sql: &str, params: &AnalyzeParams, config: &Config) -> AppResult<String> {
    let options = build_output_options(params, config)?;
    let statements = split_statements(sql);
    let analyses = analyze_statements(sql)?;
    info!(statements = analyses.len(), "analysis complete");
    format_analyses(&statements, &analyses, &options)
}
