use std::fmt::Write;

use gcm_shared::{ResponseSummary, SendResult};
use serde::Serialize;

use crate::errors::InspectorError;

/// What the caller should do with the destination token after a send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "detail", rename_all = "snake_case")]
pub enum Action {
    Delivered,
    UpdateToken(String),
    RemoveToken,
    RetryLater,
    Investigate(String),
}

impl Action {
    /// Checks success first, then the known failures, then falls back to the raw code.
    pub fn for_result<C>(result: &SendResult<C>) -> Self {
        if result.is_success() {
            return match result.canonical_registration_id() {
                Some(canonical) if result.has_canonical_registration_id() => {
                    Action::UpdateToken(canonical.to_string())
                }
                _ => Action::Delivered,
            };
        }

        match result.error_code() {
            Some(code) if code.invalidates_token() => Action::RemoveToken,
            Some(code) if code.is_retryable() => Action::RetryLater,
            Some(code) => Action::Investigate(code.to_string()),
            None => Action::Investigate(String::new()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportLine {
    pub destination: String,
    pub message_id: Option<String>,
    pub error: Option<String>,
    pub action: Action,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub summary: ResponseSummary,
    pub lines: Vec<ReportLine>,
}

impl Report {
    pub fn build(summary: ResponseSummary, results: &[SendResult<String>]) -> Self {
        let lines = results
            .iter()
            .map(|result| ReportLine {
                destination: result.context().clone(),
                message_id: result.message_id().map(str::to_string),
                error: result.error().map(str::to_string),
                action: Action::for_result(result),
            })
            .collect();

        Self { summary, lines }
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "success={} failure={} canonical_ids={}",
            self.summary.success, self.summary.failure, self.summary.canonical_ids
        );

        for line in &self.lines {
            let action = match &line.action {
                Action::Delivered => "delivered".to_string(),
                Action::UpdateToken(token) => format!("update token -> {}", token),
                Action::RemoveToken => "remove token".to_string(),
                Action::RetryLater => "retry later".to_string(),
                Action::Investigate(code) if code.is_empty() => {
                    "investigate (no error code)".to_string()
                }
                Action::Investigate(code) => format!("investigate {}", code),
            };
            let _ = writeln!(out, "{}: {}", line.destination, action);
        }

        out
    }

    pub fn render_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

impl Format {
    pub fn parse(value: Option<&str>) -> Result<Self, InspectorError> {
        match value.map(str::trim) {
            None | Some("") | Some("text") => Ok(Format::Text),
            Some("json") => Ok(Format::Json),
            Some(other) => Err(InspectorError::UnknownFormat(other.to_string())),
        }
    }
}
