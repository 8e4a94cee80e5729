use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::api::{GenerationResult, TaskHandle, Template};

// ============================================================
// Parameter Types
// ============================================================

/// Parameters for get_task_status
#[derive(Debug, Deserialize, JsonSchema)]
pub struct TaskStatusParams {
    /// Handle of a generation task, as returned by the generate tools
    pub task_id: String,
}

/// Parameters for upload_document
#[derive(Debug, Deserialize, JsonSchema)]
pub struct UploadParams {
    /// Path of the document to upload (.pdf, .docx, .pptx, .xlsx or .txt)
    pub file_path: String,
}

// ============================================================
// Result Types
// ============================================================

/// Result of a finished generation
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerationReport {
    /// Handle of the generation task
    pub task_id: TaskHandle,
    /// Download URL of the generated presentation
    pub url: String,
}

impl GenerationReport {
    pub fn new(task_id: TaskHandle, result: GenerationResult) -> Self {
        Self {
            task_id,
            url: result.url,
        }
    }
}

/// Result of get_available_templates
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TemplateList {
    pub count: usize,
    pub templates: Vec<Template>,
}

impl From<Vec<Template>> for TemplateList {
    fn from(templates: Vec<Template>) -> Self {
        Self {
            count: templates.len(),
            templates,
        }
    }
}
