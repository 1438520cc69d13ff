use serde::Serialize;

use super::types::{QueryAnalysis, QueryType};

/// Scores below this are [`ComplexityLevel::Low`]
pub const MEDIUM_THRESHOLD: u32 = 30;
/// Scores from this up are [`ComplexityLevel::High`]
pub const HIGH_THRESHOLD: u32 = 70;

/// Coarse bucket of a complexity score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ComplexityLevel {
    Low,
    Medium,
    High
}

impl ComplexityLevel {
    pub fn from_score(score: u32) -> Self {
        if score < MEDIUM_THRESHOLD {
            Self::Low
        } else if score < HIGH_THRESHOLD {
            Self::Medium
        } else {
            Self::High
        }
    }
}

impl std::fmt::Display for ComplexityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High")
        }
    }
}

fn weighted(count: usize, weight: u32) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX).saturating_mul(weight)
}

/// Weighted complexity score of an analysis.
///
/// Depends only on the extracted fields; the stored `complexity` value is
/// ignored.
///
/// ```text
/// 10*tables + 15*joins + 5*conditions + 10*group_by + 5*order_by + 20*subqueries
///   + 10 if not SELECT
///   + 5  if any join is not INNER
///   + 10 if grouped
/// ```
pub fn calculate_complexity(analysis: &QueryAnalysis) -> u32 {
    let mut score = [
        weighted(analysis.tables.len(), 10),
        weighted(analysis.joins.len(), 15),
        weighted(analysis.conditions.len(), 5),
        weighted(analysis.group_by.len(), 10),
        weighted(analysis.order_by.len(), 5),
        weighted(analysis.subqueries.len(), 20)
    ]
    .into_iter()
    .fold(0u32, u32::saturating_add);
    if analysis.query_type != QueryType::Select {
        score = score.saturating_add(10);
    }
    if analysis.joins.iter().any(|j| !j.is_inner()) {
        score = score.saturating_add(5);
    }
    if !analysis.group_by.is_empty() {
        score = score.saturating_add(10);
    }
    score
}
