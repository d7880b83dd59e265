//! Bounded report history and cross-report aggregation

use std::collections::{BTreeMap, VecDeque};

use serde::{Deserialize, Serialize};

use crate::report::FailureAnalysisReport;

/// Aggregated counts across the whole history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailurePatterns {
    pub total_reports: usize,

    /// One count per failure reason
    pub by_category: BTreeMap<String, usize>,

    /// One count per report
    pub by_app: BTreeMap<String, usize>,

    /// One count per report
    pub by_target: BTreeMap<String, usize>,

    pub most_common_category: Option<String>,
}

/// Result of history aggregation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FailurePatternSummary {
    Patterns(FailurePatterns),
    NoHistory { message: String },
}

impl FailurePatternSummary {
    /// Marker for an empty history
    pub fn no_history() -> Self {
        FailurePatternSummary::NoHistory {
            message: "No failure history available".to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, FailurePatternSummary::NoHistory { .. })
    }

    pub fn patterns(&self) -> Option<&FailurePatterns> {
        match self {
            FailurePatternSummary::Patterns(p) => Some(p),
            FailurePatternSummary::NoHistory { .. } => None,
        }
    }
}

/// FIFO ring buffer of reports
#[derive(Debug, Clone)]
pub struct FailureHistory {
    capacity: usize,
    reports: VecDeque<FailureAnalysisReport>,
}

impl FailureHistory {
    /// Create history holding at most `capacity` reports (minimum 1)
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            reports: VecDeque::with_capacity(capacity.min(1024)),
        }
    }

    /// Append a report, returning the evicted oldest one on overflow
    pub fn push(&mut self, report: FailureAnalysisReport) -> Option<FailureAnalysisReport> {
        self.reports.push_back(report);
        if self.reports.len() > self.capacity {
            self.reports.pop_front()
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Reports oldest first
    pub fn iter(&self) -> impl Iterator<Item = &FailureAnalysisReport> {
        self.reports.iter()
    }

    pub fn latest(&self) -> Option<&FailureAnalysisReport> {
        self.reports.back()
    }

    pub fn clear(&mut self) {
        self.reports.clear();
    }

    /// Count categories, apps and targets across all reports
    pub fn aggregate(&self) -> FailurePatternSummary {
        if self.reports.is_empty() {
            return FailurePatternSummary::no_history();
        }

        let mut by_category: BTreeMap<String, usize> = BTreeMap::new();
        let mut by_app: BTreeMap<String, usize> = BTreeMap::new();
        let mut by_target: BTreeMap<String, usize> = BTreeMap::new();

        for report in &self.reports {
            for reason in &report.failure_reasons {
                *by_category.entry(reason.category.as_str().to_string()).or_insert(0) += 1;
            }
            *by_app.entry(report.app_name.clone()).or_insert(0) += 1;
            *by_target.entry(report.target_text.clone()).or_insert(0) += 1;
        }

        // Ties resolve to the alphabetically first category
        let most_common_category = by_category
            .iter()
            .fold(None, |best: Option<(&String, usize)>, (name, &count)| match best {
                Some((_, best_count)) if best_count >= count => best,
                _ => Some((name, count)),
            })
            .map(|(name, _)| name.clone());

        FailurePatternSummary::Patterns(FailurePatterns {
            total_reports: self.reports.len(),
            by_category,
            by_app,
            by_target,
            most_common_category,
        })
    }
}
