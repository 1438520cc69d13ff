use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// SQL Glance - Pretty-print SQL and summarize its structure without a parser
#[derive(Parser, Debug)]
#[command(name = "sql-glance")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Reformat SQL for reading
    Format {
        /// Path to SQL file (omit or use - for stdin)
        input: Option<PathBuf>,

        /// Spaces per indentation level
        #[arg(long)]
        indent: Option<usize>,

        /// Indent with tabs instead of spaces
        #[arg(long, conflicts_with = "indent")]
        tabs: bool,

        /// Keep keyword case as written
        #[arg(long)]
        no_uppercase: bool,

        /// Wrap lines longer than this (0 disables wrapping)
        #[arg(long)]
        max_line_length: Option<usize>,

        /// Blank lines inserted before each clause
        #[arg(long)]
        lines_between_clauses: Option<usize>
    },

    /// Summarize tables, joins, conditions and complexity
    Analyze {
        /// Path to SQL file (omit or use - for stdin)
        input: Option<PathBuf>,

        /// Output format
        #[arg(short = 'f', long, value_enum)]
        output_format: Option<Format>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
    Yaml
}

impl Format {
    /// Parse a format name as written in config files
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None
        }
    }
}
