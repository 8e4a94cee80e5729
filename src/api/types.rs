//! Wire types for the SlideSpeak REST API

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::{ApiError, Result};

/// Identifier of a queued generation task.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct TaskHandle(String);

impl TaskHandle {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for TaskHandle {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for TaskHandle {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Acknowledgement returned when a generation task is queued.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitReceipt {
    pub task_id: TaskHandle,
}

/// Lifecycle state reported for a generation task.
///
/// Status strings this client does not recognize are kept verbatim in
/// [`TaskState::Other`] and treated as still in flight, so a new upstream
/// state never aborts a wait that could still succeed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaskState {
    Pending,
    Sent,
    Processing,
    Success,
    Failure,
    Other(String),
}

impl TaskState {
    /// Whether the task has finished, successfully or not.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Success | Self::Failure)
    }

    /// Wire name of the state.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "PENDING",
            Self::Sent => "SENT",
            Self::Processing => "PROCESSING",
            Self::Success => "SUCCESS",
            Self::Failure => "FAILURE",
            Self::Other(raw) => raw,
        }
    }
}

impl fmt::Display for TaskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for TaskState {
    fn from(raw: String) -> Self {
        match raw.to_ascii_uppercase().as_str() {
            "PENDING" => Self::Pending,
            "SENT" => Self::Sent,
            "PROCESSING" => Self::Processing,
            "SUCCESS" => Self::Success,
            // Some deployments report FAILED instead of FAILURE.
            "FAILURE" | "FAILED" => Self::Failure,
            _ => Self::Other(raw),
        }
    }
}

impl From<TaskState> for String {
    fn from(state: TaskState) -> Self {
        state.as_str().to_string()
    }
}

/// Status payload returned by the task status endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskStatusReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<TaskHandle>,
    pub task_status: TaskState,
    /// Result payload; present once the task reached a terminal state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_result: Option<Value>,
}

impl TaskStatusReport {
    /// Extract the download result from a successful report.
    ///
    /// The result payload is usually a `{"url": ...}` object, though some
    /// endpoints report the download URL as a bare string.
    pub fn into_result(self) -> Result<GenerationResult> {
        let value = self.task_result.ok_or_else(|| {
            ApiError::InvalidResponse("task succeeded but reported no result".to_string())
        })?;
        let result: GenerationResult = match value {
            Value::String(url) => GenerationResult { url },
            value => serde_json::from_value(value).map_err(|e| {
                ApiError::InvalidResponse(format!("task succeeded with an unusable result: {e}"))
            })?,
        };
        if result.url.is_empty() {
            return Err(ApiError::InvalidResponse(
                "task succeeded with an empty download URL".to_string(),
            ));
        }
        Ok(result)
    }

    /// Human-readable failure reason from a failed report.
    pub fn failure_detail(&self) -> String {
        self.task_result
            .as_ref()
            .and_then(|result| result.get("error"))
            .and_then(Value::as_str)
            .unwrap_or("unknown error")
            .to_string()
    }
}

/// Final outcome of a successful generation task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    /// Download URL of the rendered presentation.
    pub url: String,
}

fn default_template_name() -> String {
    "default".to_string()
}

/// A presentation template, with preview images where available.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Template {
    #[serde(default = "default_template_name")]
    pub name: String,
    #[serde(default)]
    pub images: TemplateImages,
}

/// Preview image URLs for a template.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct TemplateImages {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Details about the API key holder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credits: Option<serde_json::Number>,
    /// Fields this client does not model, kept as-is.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Acknowledgement for an uploaded document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadReceipt {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<TaskHandle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_uuid: Option<String>,
    /// Fields this client does not model, kept as-is.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}
