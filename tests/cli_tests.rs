// SPDX-FileCopyrightText: 2025 RAprogramm
// SPDX-License-Identifier: MIT

use clap::Parser;
use sql_glance::cli::{Cli, Commands, Format};

#[test]
fn test_format_from_name() {
    assert_eq!(Format::from_name("text"), Some(Format::Text));
    assert_eq!(Format::from_name("JSON"), Some(Format::Json));
    assert_eq!(Format::from_name("yml"), Some(Format::Yaml));
    assert_eq!(Format::from_name("sarif"), None);
}

#[test]
fn test_parse_format_command() {
    let cli = Cli::parse_from(["sql-glance", "format", "q.sql", "--indent", "4", "--no-uppercase"]);
    match cli.command {
        Commands::Format {
            input,
            indent,
            no_uppercase,
            tabs,
            ..
        } => {
            assert_eq!(input.as_deref(), Some(std::path::Path::new("q.sql")));
            assert_eq!(indent, Some(4));
            assert!(no_uppercase);
            assert!(!tabs);
        }
        _ => panic!("expected format command")
    }
}

#[test]
fn test_tabs_conflict_with_indent() {
    let result = Cli::try_parse_from(["sql-glance", "format", "--tabs", "--indent", "2"]);
    assert!(result.is_err());
}

#[test]
fn test_parse_analyze_command() {
    let cli = Cli::try_parse_from(["sql-glance", "analyze", "-f", "yaml", "--no-color", "-v"])
        .unwrap();
    assert!(cli.verbose);
    match cli.command {
        Commands::Analyze {
            input,
            output_format,
            no_color
        } => {
            assert!(input.is_none());
            assert_eq!(output_format, Some(Format::Yaml));
            assert!(no_color);
        }
        _ => panic!("expected analyze command")
    }
}
