use colored::Colorize;
use serde::Serialize;

use crate::{
    analyze::{ComplexityLevel, QueryAnalysis},
    error::{AppResult, output_error}
};

/// Output format for results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml
}

/// Output options
#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub format:  OutputFormat,
    pub colored: bool,
    pub verbose: bool
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            format:  OutputFormat::Text,
            colored: true,
            verbose: false
        }
    }
}

/// Analysis of one statement, paired with its source text
#[derive(Debug, Serialize)]
pub struct StatementReport<'a> {
    pub statement: &'a str,
    pub analysis:  &'a QueryAnalysis
}

/// Render analyses in the requested format
///
/// `statements` and `analyses` are paired by position.
pub fn format_analyses(
    statements: &[&str],
    analyses: &[QueryAnalysis],
    opts: &OutputOptions
) -> AppResult<String> {
    let reports: Vec<StatementReport<'_>> = statements
        .iter()
        .zip(analyses)
        .map(|(statement, analysis)| StatementReport {
            statement,
            analysis
        })
        .collect();
    match opts.format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(&reports).map_err(|e| output_error(e.to_string()))
        }
        OutputFormat::Yaml => {
            serde_yaml::to_string(&reports).map_err(|e| output_error(e.to_string()))
        }
        OutputFormat::Text => Ok(format_text_summary(&reports, opts))
    }
}

fn push_list(summary: &mut String, label: &str, items: &[String]) {
    if !items.is_empty() {
        summary.push_str(&format!("{}: {}\n", label, items.join(", ")));
    }
}

fn complexity_label(level: ComplexityLevel, colored: bool) -> String {
    if !colored {
        return level.to_string();
    }
    match level {
        ComplexityLevel::Low => level.to_string().green().to_string(),
        ComplexityLevel::Medium => level.to_string().yellow().to_string(),
        ComplexityLevel::High => level.to_string().red().to_string()
    }
}

fn format_text_summary(reports: &[StatementReport<'_>], opts: &OutputOptions) -> String {
    let mut summary = String::from("SQL Statements:\n\n");

    for (i, report) in reports.iter().enumerate() {
        let analysis = report.analysis;
        let header = format!("Statement #{} ({}):", i + 1, analysis.query_type);
        if opts.colored {
            summary.push_str(&header.cyan().bold().to_string());
        } else {
            summary.push_str(&header);
        }
        summary.push('\n');
        if opts.verbose {
            summary.push_str(&format!("{}\n", report.statement));
        }

        let tables: Vec<String> = analysis
            .tables
            .iter()
            .map(|t| match &t.alias {
                Some(alias) => format!("{} {}", t.name, alias),
                None => t.name.to_string()
            })
            .collect();
        push_list(&mut summary, "Tables", &tables);

        let columns: Vec<String> = analysis
            .columns
            .iter()
            .map(|c| match &c.alias {
                Some(alias) => format!("{} AS {}", c.expression, alias),
                None => c.expression.clone()
            })
            .collect();
        push_list(&mut summary, "Columns", &columns);

        let joins: Vec<String> = analysis
            .joins
            .iter()
            .map(|j| {
                if j.condition.is_empty() {
                    format!("{} {}", j.join_type, j.table)
                } else {
                    format!("{} {} ON {}", j.join_type, j.table, j.condition)
                }
            })
            .collect();
        push_list(&mut summary, "Joins", &joins);
        push_list(&mut summary, "Conditions", &analysis.conditions);

        let group: Vec<String> = analysis.group_by.iter().map(|g| g.to_string()).collect();
        push_list(&mut summary, "GROUP BY", &group);

        let order: Vec<String> = analysis
            .order_by
            .iter()
            .map(|o| format!("{} {}", o.column, o.direction))
            .collect();
        push_list(&mut summary, "ORDER BY", &order);

        if let Some(limit) = analysis.pagination.limit {
            summary.push_str(&format!("LIMIT: {}\n", limit));
        }
        if let Some(offset) = analysis.pagination.offset {
            summary.push_str(&format!("OFFSET: {}\n", offset));
        }

        let params: Vec<String> = analysis
            .parameters
            .iter()
            .map(|p| p.name.to_string())
            .collect();
        push_list(&mut summary, "Parameters", &params);

        if !analysis.subqueries.is_empty() {
            summary.push_str(&format!("Subqueries: {}\n", analysis.subqueries.len()));
        }

        let level = ComplexityLevel::from_score(analysis.complexity);
        summary.push_str(&format!(
            "Complexity: {} (score: {})\n",
            complexity_label(level, opts.colored),
            analysis.complexity
        ));

        summary.push('\n');
    }

    summary
}
