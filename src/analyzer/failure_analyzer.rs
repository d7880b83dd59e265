//! Failure analyzer facade
//! Runs classification, matching, recommendation and confidence assessment,
//! then records the report in a bounded history

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::Utc;
use serde_json::Value;
use tracing::{debug, info};

use crate::analyzer::history::{FailureHistory, FailurePatternSummary};
use crate::classifier::FailurePatternClassifier;
use crate::confidence::ConfidenceAssessor;
use crate::config::AnalyzerConfig;
use crate::errors::Result;
use crate::matching::{ClosestMatchFinder, SimilarityAnalyzer};
use crate::recommendation::RecommendationGenerator;
use crate::report::FailureAnalysisReport;
use crate::similarity::{FuzzyScorer, SimilarityScorer};
use crate::sink::{LogLevel, LogSink};
use crate::types::{Candidate, ContextMap, ObservedError, SearchAttempt};

const SINK_CATEGORY: &str = "failure_analysis";

/// Failure analysis engine
///
/// Safe to share across threads; analysis runs without locking and only the
/// final history append is serialized.
pub struct FailureAnalyzer {
    config: AnalyzerConfig,
    classifier: FailurePatternClassifier,
    match_finder: ClosestMatchFinder,
    similarity_analyzer: SimilarityAnalyzer,
    recommender: RecommendationGenerator,
    assessor: ConfidenceAssessor,
    history: Mutex<FailureHistory>,
    sink: Option<Arc<dyn LogSink>>,
}

impl FailureAnalyzer {
    /// Create analyzer with default configuration
    pub fn new() -> Self {
        Self::build(AnalyzerConfig::default(), Arc::new(FuzzyScorer::new()))
    }

    /// Create analyzer with custom configuration
    pub fn with_config(config: AnalyzerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config, Arc::new(FuzzyScorer::new())))
    }

    /// Replace the similarity scorer
    pub fn with_scorer(self, scorer: Arc<dyn SimilarityScorer>) -> Self {
        let sink = self.sink.clone();
        let history = self.history.into_inner().unwrap_or_else(PoisonError::into_inner);

        let mut analyzer = Self::build(self.config, scorer);
        analyzer.history = Mutex::new(history);
        analyzer.sink = sink;
        analyzer
    }

    /// Attach a structured log sink
    pub fn with_sink(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    fn build(config: AnalyzerConfig, scorer: Arc<dyn SimilarityScorer>) -> Self {
        let thresholds = config.thresholds;

        Self {
            classifier: FailurePatternClassifier::with_patterns(
                config.patterns.clone(),
                config.slow_search_threshold_ms,
            ),
            match_finder: ClosestMatchFinder::with_scorer(scorer.clone(), thresholds),
            similarity_analyzer: SimilarityAnalyzer::with_scorer(scorer, thresholds),
            recommender: RecommendationGenerator::new(thresholds),
            assessor: ConfidenceAssessor::new(thresholds),
            history: Mutex::new(FailureHistory::new(config.max_history_size)),
            sink: None,
            config,
        }
    }

    /// Analyze a failed attempt and record the report
    #[allow(clippy::too_many_arguments)]
    pub fn analyze_failure(
        &self,
        command: &str,
        target_text: &str,
        app_name: &str,
        error: &ObservedError,
        search_attempts: &[SearchAttempt],
        available_elements: &[Candidate],
        system_context: Option<ContextMap>,
    ) -> FailureAnalysisReport {
        debug!(command, target_text, app_name, "analyzing failure");

        let failure_reasons = self.classifier.classify(error, search_attempts);

        let closest_matches = self.match_finder.find_closest(
            target_text,
            available_elements,
            self.config.match_limit,
            self.config.min_match_score,
        );

        let similarity_analysis = self.similarity_analyzer.analyze(target_text, available_elements);

        let recommendation_set =
            self.recommender
                .generate(&failure_reasons, &closest_matches, &similarity_analysis);

        let confidence_assessment =
            self.assessor
                .assess(&failure_reasons, &closest_matches, search_attempts);

        let report = FailureAnalysisReport {
            command: command.to_string(),
            target_text: target_text.to_string(),
            app_name: app_name.to_string(),
            timestamp: Utc::now(),
            failure_reasons,
            search_attempts: search_attempts.to_vec(),
            available_elements: available_elements.to_vec(),
            closest_matches,
            similarity_analysis,
            system_context: system_context.unwrap_or_default(),
            recommendations: recommendation_set.recommendations,
            recovery_suggestions: recommendation_set.recovery_suggestions,
            confidence_assessment,
        };

        info!(
            command,
            reasons = report.failure_reasons.len(),
            matches = report.closest_matches.len(),
            confidence = %report.confidence_assessment.overall_confidence,
            "failure analysis complete"
        );

        self.emit(&report);
        self.record(report.clone());
        report
    }

    fn emit(&self, report: &FailureAnalysisReport) {
        let Some(sink) = &self.sink else { return };

        let mut context = ContextMap::new();
        context.insert("command".into(), Value::from(report.command.as_str()));
        context.insert("target_text".into(), Value::from(report.target_text.as_str()));
        context.insert("app_name".into(), Value::from(report.app_name.as_str()));
        context.insert("reason_count".into(), Value::from(report.failure_reasons.len()));
        context.insert("match_count".into(), Value::from(report.closest_matches.len()));
        context.insert(
            "overall_confidence".into(),
            Value::from(report.confidence_assessment.overall_confidence.as_str()),
        );
        if let Some(severity) = report.highest_severity() {
            context.insert("highest_severity".into(), Value::from(severity.as_str()));
        }

        sink.log(
            LogLevel::Warn,
            SINK_CATEGORY,
            &format!("Failure analyzed: {}", report.command),
            &context,
        );
    }

    fn lock_history(&self) -> MutexGuard<'_, FailureHistory> {
        self.history.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append a report, evicting the oldest on overflow
    pub fn record(&self, report: FailureAnalysisReport) {
        let evicted = self.lock_history().push(report);
        if let Some(old) = evicted {
            debug!(command = %old.command, "evicted oldest report from history");
        }
    }

    /// Aggregate the history by category, app and target
    pub fn get_failure_patterns(&self) -> FailurePatternSummary {
        self.lock_history().aggregate()
    }

    /// Snapshot of the history, oldest first
    pub fn history(&self) -> Vec<FailureAnalysisReport> {
        self.lock_history().iter().cloned().collect()
    }

    /// Most recent report
    pub fn latest(&self) -> Option<FailureAnalysisReport> {
        self.lock_history().latest().cloned()
    }

    pub fn history_len(&self) -> usize {
        self.lock_history().len()
    }

    pub fn clear_history(&self) {
        self.lock_history().clear();
    }

    /// Get configuration
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }
}

impl Default for FailureAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
