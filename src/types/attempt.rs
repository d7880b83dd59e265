//! Search attempt records supplied by callers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::ContextMap;

/// Record of one element/content search try
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchAttempt {
    /// Caller-assigned identifier
    pub search_id: String,

    /// When the search ran
    pub timestamp: DateTime<Utc>,

    /// Text that was searched for
    pub target_text: String,

    /// Parameters the search was run with
    #[serde(default)]
    pub search_parameters: ContextMap,

    /// Application the search ran against
    pub app_name: String,

    /// Wall-clock duration in milliseconds
    pub duration_ms: f64,

    /// Whether the search succeeded
    pub success: bool,

    /// Number of elements the search returned
    pub elements_found: usize,

    /// Best match score observed (0-100)
    pub best_match_score: f64,

    /// Strategy name (e.g. "exact", "fuzzy", "role")
    pub search_strategy: String,

    /// Error message if the search raised
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl SearchAttempt {
    /// Create a failed attempt with a generated id and the current timestamp
    pub fn new(target_text: impl Into<String>, app_name: impl Into<String>) -> Self {
        Self {
            search_id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            target_text: target_text.into(),
            search_parameters: ContextMap::new(),
            app_name: app_name.into(),
            duration_ms: 0.0,
            success: false,
            elements_found: 0,
            best_match_score: 0.0,
            search_strategy: "default".to_string(),
            error_message: None,
        }
    }

    /// Set the search id
    pub fn with_id(mut self, search_id: impl Into<String>) -> Self {
        self.search_id = search_id.into();
        self
    }

    /// Set the outcome
    pub fn with_outcome(mut self, success: bool, elements_found: usize, best_match_score: f64) -> Self {
        self.success = success;
        self.elements_found = elements_found;
        self.best_match_score = best_match_score.clamp(0.0, 100.0);
        self
    }

    /// Set the duration (negative values clamp to zero)
    pub fn with_duration_ms(mut self, duration_ms: f64) -> Self {
        self.duration_ms = duration_ms.max(0.0);
        self
    }

    /// Set the strategy name
    pub fn with_strategy(mut self, strategy: impl Into<String>) -> Self {
        self.search_strategy = strategy.into();
        self
    }

    /// Set the error message
    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    /// Add a search parameter
    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.search_parameters.insert(key.into(), value.into());
        self
    }
}
