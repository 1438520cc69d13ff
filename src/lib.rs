//! # SQL Glance
//!
//! Lightweight SQL pretty-printing and structural summaries without a parser.
//!
//! Everything here works from regular expressions and character scans over
//! the raw text. Output is best-effort: any string is accepted, and SQL that
//! is not recognized simply yields less structure.
//!
//! # Quick Start
//!
//! ```bash
//! # Reformat a file
//! sql-glance format queries.sql
//!
//! # Summarize statements from stdin as JSON
//! echo "SELECT * FROM users LIMIT 10" | sql-glance analyze -f json
//! ```
//!
//! # Modules
//!
//! - [`format`] - Formatting pipeline and options
//! - [`analyze`] - Field extractors, analysis record and complexity score
//! - [`keywords`] - Keyword tables and keyword case normalization
//! - [`scan`] - Shared character-level scanning helpers
//! - [`config`] - Configuration loading
//! - [`output`] - Rendering analyses as text, JSON or YAML
//! - [`cache`] - Process-wide analysis cache
//! - [`error`] - Error types and constructors

pub mod analyze;
pub mod app;
pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod keywords;
pub mod output;
pub mod scan;
