//! Candidate elements compared against a failed search target

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::ContextMap;

/// An available UI element or content item
///
/// Only `title`, `description` and `value` take part in matching. Any other
/// keys are kept in `extra` and echoed back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// Passthrough fields
    #[serde(flatten)]
    pub extra: ContextMap,
}

impl Candidate {
    /// Create a candidate with a title
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Set the role
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the value
    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Add a passthrough field
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Non-empty title
    pub fn title_text(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.is_empty())
    }

    /// Non-empty description
    pub fn description_text(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }

    /// Value rendered as text; strings are used verbatim, null and empty are skipped
    pub fn value_text(&self) -> Option<String> {
        let text = match self.value.as_ref()? {
            Value::Null => return None,
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// Role annotation, falling back to a passthrough `type` field
    pub fn role_or_type(&self) -> String {
        if let Some(role) = self.role.as_deref().filter(|r| !r.is_empty()) {
            return role.to_string();
        }
        match self.extra.get("type") {
            Some(Value::String(s)) if !s.is_empty() => s.clone(),
            _ => "unknown".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_passthrough_fields_round_trip() {
        let raw = json!({"title": "Login", "role": "button", "frame": [0, 0, 80, 24]});
        let candidate: Candidate = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(candidate.title_text(), Some("Login"));
        assert!(candidate.extra.contains_key("frame"));
        assert_eq!(serde_json::to_value(&candidate).unwrap(), raw);
    }

    #[test]
    fn test_value_text_rendering() {
        assert_eq!(Candidate::default().with_value(42).value_text().as_deref(), Some("42"));
        assert_eq!(Candidate::default().with_value("abc").value_text().as_deref(), Some("abc"));
        assert_eq!(Candidate::default().with_value(Value::Null).value_text(), None);
        assert_eq!(Candidate::default().with_value("").value_text(), None);
    }

    #[test]
    fn test_role_fallback() {
        assert_eq!(Candidate::titled("a").with_role("link").role_or_type(), "link");
        assert_eq!(Candidate::titled("a").with_extra("type", "menu").role_or_type(), "menu");
        assert_eq!(Candidate::titled("a").role_or_type(), "unknown");
    }

    #[test]
    fn test_empty_title_is_ignored() {
        let candidate = Candidate::titled("");
        assert!(candidate.title_text().is_none());
    }
}
