// SPDX-FileCopyrightText: 2025 RAprogramm
// SPDX-License-Identifier: MIT

use sql_glance::{
    analyze::{QueryAnalysis, analyze_statements},
    output::{OutputFormat, OutputOptions, format_analyses},
    scan::split_statements
};

const SQL: &str = "SELECT * FROM users; SELECT id FROM orders o JOIN items i ON o.id = i.oid";

fn sample() -> (Vec<&'static str>, Vec<QueryAnalysis>) {
    (split_statements(SQL), analyze_statements(SQL).unwrap())
}

fn options(format: OutputFormat) -> OutputOptions {
    OutputOptions {
        format,
        colored: false,
        verbose: false
    }
}

#[test]
fn test_output_options_default() {
    let opts = OutputOptions::default();
    assert_eq!(opts.format, OutputFormat::Text);
    assert!(opts.colored);
    assert!(!opts.verbose);
}

#[test]
fn test_text_output() {
    let (statements, analyses) = sample();
    let output = format_analyses(&statements, &analyses, &options(OutputFormat::Text)).unwrap();
    assert!(output.contains("Statement #1 (SELECT):"));
    assert!(output.contains("Statement #2 (SELECT):"));
    assert!(output.contains("Tables: users"));
    assert!(output.contains("Joins: INNER items ON o.id = i.oid"));
}

#[test]
fn test_text_output_colored() {
    let (statements, analyses) = sample();
    let opts = OutputOptions {
        colored: true,
        ..options(OutputFormat::Text)
    };
    let output = format_analyses(&statements, &analyses, &opts).unwrap();
    assert!(output.contains("Statement #1"));
}

#[test]
fn test_json_output() {
    let (statements, analyses) = sample();
    let output = format_analyses(&statements, &analyses, &options(OutputFormat::Json)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value.as_array().map(Vec::len), Some(2));
    assert_eq!(value[1]["analysis"]["joins"][0]["table"], "items");
}

#[test]
fn test_yaml_output() {
    let (statements, analyses) = sample();
    let output = format_analyses(&statements, &analyses, &options(OutputFormat::Yaml)).unwrap();
    assert!(output.contains("statement:"));
    assert!(output.contains("SELECT * FROM users"));
    assert!(output.contains("complexity:"));
}

#[test]
fn test_empty_input() {
    let output = format_analyses(&[], &[], &options(OutputFormat::Json)).unwrap();
    assert_eq!(output, "[]");
}
