// SPDX-FileCopyrightText: 2025 RAprogramm
// SPDX-License-Identifier: MIT

use sql_glance::error::{
    ANALYSIS_FAILED, analysis_failed, config_error, file_read_error, output_error
};

#[test]
fn test_file_read_error() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error = file_read_error("/path/to/file.sql", io_error);
    let _msg = error.to_string();
}

#[test]
fn test_analysis_failed() {
    let error = analysis_failed(None);
    let _msg = error.to_string();
}

#[test]
fn test_analysis_failed_with_detail() {
    let error = analysis_failed(Some("index out of bounds"));
    let _msg = error.to_string();
}

#[test]
fn test_analysis_failed_message() {
    assert_eq!(ANALYSIS_FAILED, "SQL analysis failed");
}

#[test]
fn test_config_error() {
    let error = config_error("Invalid configuration");
    let _msg = error.to_string();
}

#[test]
fn test_config_error_string() {
    let error = config_error(String::from("Missing field"));
    let _msg = error.to_string();
}

#[test]
fn test_output_error() {
    let error = output_error("serialization failed");
    let _msg = error.to_string();
}
