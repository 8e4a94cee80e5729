use std::path::Path;

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};

use crate::api::{
    ApiError, GenerationRequest, PollConfig, SlideBySlideRequest, SlideSpeakClient, TaskHandle,
};
use crate::config::Settings;

use super::types::{GenerationReport, TaskStatusParams, TemplateList, UploadParams};

#[derive(Clone)]
pub struct SlideSpeakMcpServer {
    client: SlideSpeakClient,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl SlideSpeakMcpServer {
    pub fn new(settings: &Settings) -> Self {
        Self {
            client: settings.client(),
            tool_router: Self::tool_router(),
        }
    }

    /// Generate a presentation from text and wait for the download URL
    #[tool(
        description = "Generate a PowerPoint presentation from text using SlideSpeak. Costs 1 credit per slide. Waits for the generation to finish and returns the download URL."
    )]
    pub async fn generate_powerpoint(
        &self,
        params: Parameters<GenerationRequest>,
    ) -> Result<CallToolResult, McpError> {
        let request = params.0;

        let task_id = self
            .client
            .submit_generate(&request)
            .await
            .map_err(to_mcp_error)?;
        let result = self
            .client
            .await_completion(&task_id, &PollConfig::default())
            .await
            .map_err(to_mcp_error)?;

        let report = GenerationReport::new(task_id, result);
        let json_str = serde_json::to_string_pretty(&report).map_err(|e| {
            McpError::internal_error(format!("JSON serialization failed: {}", e), None)
        })?;

        Ok(CallToolResult::success(vec![Content::text(json_str)]))
    }

    /// Generate a presentation with an explicit layout per slide
    #[tool(
        description = "Generate a PowerPoint presentation slide by slide, with an explicit layout, title, item count and content per slide. Waits for the generation to finish and returns the download URL."
    )]
    pub async fn generate_slide_by_slide(
        &self,
        params: Parameters<SlideBySlideRequest>,
    ) -> Result<CallToolResult, McpError> {
        let request = params.0;

        let task_id = self
            .client
            .submit_slide_by_slide(&request)
            .await
            .map_err(to_mcp_error)?;
        let result = self
            .client
            .await_completion(&task_id, &PollConfig::default())
            .await
            .map_err(to_mcp_error)?;

        let report = GenerationReport::new(task_id, result);
        let json_str = serde_json::to_string_pretty(&report).map_err(|e| {
            McpError::internal_error(format!("JSON serialization failed: {}", e), None)
        })?;

        Ok(CallToolResult::success(vec![Content::text(json_str)]))
    }

    /// List the presentation templates available to the account
    #[tool(
        description = "Get the presentation templates available to this account. Use a template name from this list when generating."
    )]
    pub async fn get_available_templates(&self) -> Result<CallToolResult, McpError> {
        let templates = self.client.templates().await.map_err(to_mcp_error)?;

        let list = TemplateList::from(templates);
        let json_str = serde_json::to_string_pretty(&list).map_err(|e| {
            McpError::internal_error(format!("JSON serialization failed: {}", e), None)
        })?;

        Ok(CallToolResult::success(vec![Content::text(json_str)]))
    }

    /// Check the status of a generation task
    #[tool(
        description = "Check the status of a generation task by its task_id. Useful when a generation timed out; the task keeps running upstream."
    )]
    pub async fn get_task_status(
        &self,
        params: Parameters<TaskStatusParams>,
    ) -> Result<CallToolResult, McpError> {
        let task_id = params.0.task_id;
        if task_id.trim().is_empty() {
            return Err(McpError::invalid_params("task_id cannot be empty", None));
        }

        let report = self
            .client
            .task_status(&TaskHandle::from(task_id))
            .await
            .map_err(to_mcp_error)?;

        let json_str = serde_json::to_string_pretty(&report).map_err(|e| {
            McpError::internal_error(format!("JSON serialization failed: {}", e), None)
        })?;

        Ok(CallToolResult::success(vec![Content::text(json_str)]))
    }

    /// Show the account behind the configured API key
    #[tool(
        description = "Get the account details for the configured API key, including the remaining credit balance."
    )]
    pub async fn get_me(&self) -> Result<CallToolResult, McpError> {
        let account = self.client.me().await.map_err(to_mcp_error)?;

        let json_str = serde_json::to_string_pretty(&account).map_err(|e| {
            McpError::internal_error(format!("JSON serialization failed: {}", e), None)
        })?;

        Ok(CallToolResult::success(vec![Content::text(json_str)]))
    }

    /// Upload a document to reference in generation requests
    #[tool(
        description = "Upload a local document (PDF, DOCX, PPTX, XLSX or TXT) to SlideSpeak. Pass the returned UUID in document_uuids when generating to draw content from it."
    )]
    pub async fn upload_document(
        &self,
        params: Parameters<UploadParams>,
    ) -> Result<CallToolResult, McpError> {
        let file_path = params.0.file_path;
        if file_path.trim().is_empty() {
            return Err(McpError::invalid_params("file_path cannot be empty", None));
        }

        let receipt = self
            .client
            .upload_document(Path::new(&file_path))
            .await
            .map_err(to_mcp_error)?;

        let json_str = serde_json::to_string_pretty(&receipt).map_err(|e| {
            McpError::internal_error(format!("JSON serialization failed: {}", e), None)
        })?;

        Ok(CallToolResult::success(vec![Content::text(json_str)]))
    }
}

#[tool_handler]
impl ServerHandler for SlideSpeakMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "SlideSpeak MCP generates PowerPoint presentations through the SlideSpeak API.\n\n\
                 Available tools:\n\
                 1. get_available_templates - List the presentation templates for this account\n\
                 2. generate_powerpoint - Generate a presentation from text (1 credit per slide)\n\
                 3. generate_slide_by_slide - Generate with explicit per-slide layouts\n\
                 4. get_task_status - Check a generation task by its task_id\n\
                 5. get_me - Show the account and its remaining credits\n\
                 6. upload_document - Upload a document to reference during generation\n\n\
                 Recommended Workflow:\n\
                 1. Use get_available_templates and pick a template name\n\
                 2. Optionally upload_document and collect the returned UUIDs\n\
                 3. Call generate_powerpoint (or the slide-by-slide variant) and wait for the URL\n\
                 4. If a generation times out, poll get_task_status with the reported task_id\n\n\
                 Generation consumes credits; check the balance with get_me when requests are rejected."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server(settings: &Settings) -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = SlideSpeakMcpServer::new(settings);
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}

// ============ Internal Functions ============

fn to_mcp_error(err: ApiError) -> McpError {
    match err {
        ApiError::InvalidRequest(_) => McpError::invalid_params(err.to_string(), None),
        ApiError::PollTimeout { ref task_id, .. } => McpError::internal_error(
            format!(
                "{err}. The task may still be running; check it with get_task_status (task_id: {task_id})."
            ),
            None,
        ),
        _ => McpError::internal_error(err.to_string(), None),
    }
}
