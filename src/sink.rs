//! Structured log sink for finished analyses

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::types::ContextMap;

/// Log level accepted by a sink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// Receives structured log records
pub trait LogSink: Send + Sync {
    fn log(&self, level: LogLevel, category: &str, message: &str, context: &ContextMap);
}

/// Forwards records to `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogSink;

impl LogSink for TracingLogSink {
    fn log(&self, level: LogLevel, category: &str, message: &str, context: &ContextMap) {
        let context = serde_json::Value::Object(context.clone());
        match level {
            LogLevel::Debug => debug!(category, %context, "{}", message),
            LogLevel::Info => info!(category, %context, "{}", message),
            LogLevel::Warn => warn!(category, %context, "{}", message),
            LogLevel::Error => error!(category, %context, "{}", message),
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::sync::Mutex;

    /// Sink that keeps every record in memory
    #[derive(Default)]
    pub struct MemorySink {
        pub records: Mutex<Vec<(LogLevel, String, String, ContextMap)>>,
    }

    impl LogSink for MemorySink {
        fn log(&self, level: LogLevel, category: &str, message: &str, context: &ContextMap) {
            self.records.lock().unwrap().push((
                level,
                category.to_string(),
                message.to_string(),
                context.clone(),
            ));
        }
    }
}
