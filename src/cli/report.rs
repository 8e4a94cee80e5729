//! Report formatting and printing utilities.
//!
//! Output helpers for the CLI commands. Separate from the API client so
//! the crate can be used as a library without dragging in terminal
//! concerns. Command results go to stdout; errors are printed by main.

use std::io::{self, Write};

use colored::Colorize;

use crate::api::{
    AccountInfo, ApiError, GenerationResult, TaskHandle, TaskState, TaskStatusReport, Template,
    UploadReceipt,
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print a finished generation to stdout.
pub fn print_generation(task_id: &TaskHandle, result: &GenerationResult) {
    print_generation_to(task_id, result, &mut io::stdout().lock());
}

/// Print a finished generation to a custom writer.
pub fn print_generation_to<W: Write>(
    task_id: &TaskHandle,
    result: &GenerationResult,
    writer: &mut W,
) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        "Presentation ready".green().bold()
    );
    let _ = writeln!(writer, "  task: {}", task_id.to_string().dimmed());
    let _ = writeln!(writer, "  url:  {}", result.url.cyan());
}

/// Print a generation that ended without a presentation.
pub fn print_generation_failure(err: &ApiError) {
    print_generation_failure_to(err, &mut io::stdout().lock());
}

pub fn print_generation_failure_to<W: Write>(err: &ApiError, writer: &mut W) {
    let _ = writeln!(writer, "{} {}", FAILURE_MARK.red(), err.to_string().red());
    if let ApiError::PollTimeout { task_id, .. } = err {
        let _ = writeln!(
            writer,
            "The task keeps running upstream. Check it with: {}",
            format!("slidespeak-mcp status {}", task_id).cyan()
        );
    }
}

/// Print the template listing to stdout.
pub fn print_templates(templates: &[Template]) {
    print_templates_to(templates, &mut io::stdout().lock());
}

pub fn print_templates_to<W: Write>(templates: &[Template], writer: &mut W) {
    if templates.is_empty() {
        let _ = writeln!(writer, "No templates available.");
        return;
    }

    let _ = writeln!(writer, "{} template(s) available:\n", templates.len());
    for template in templates {
        let _ = writeln!(writer, "  {}", template.name.bold());
        if let Some(cover) = &template.images.cover {
            let _ = writeln!(writer, "    cover:   {}", cover.dimmed());
        }
        if let Some(content) = &template.images.content {
            let _ = writeln!(writer, "    content: {}", content.dimmed());
        }
    }
}

/// Print a task status report to stdout.
pub fn print_status(report: &TaskStatusReport) {
    print_status_to(report, &mut io::stdout().lock());
}

pub fn print_status_to<W: Write>(report: &TaskStatusReport, writer: &mut W) {
    if let Some(task_id) = &report.task_id {
        let _ = writeln!(writer, "task:   {}", task_id);
    }

    let state = &report.task_status;
    let state_str = match state {
        TaskState::Success => state.to_string().green().bold(),
        TaskState::Failure => state.to_string().red().bold(),
        _ => state.to_string().yellow(),
    };
    let _ = writeln!(writer, "status: {}", state_str);

    if let Some(result) = &report.task_result {
        let pretty = serde_json::to_string_pretty(result).unwrap_or_else(|_| result.to_string());
        let _ = writeln!(writer, "result: {}", pretty);
    }
}

/// Print the account details to stdout.
pub fn print_account(account: &AccountInfo) {
    print_account_to(account, &mut io::stdout().lock());
}

pub fn print_account_to<W: Write>(account: &AccountInfo, writer: &mut W) {
    if let Some(name) = &account.user_name {
        let _ = writeln!(writer, "account: {}", name.bold());
    }
    match &account.credits {
        Some(credits) => {
            let _ = writeln!(writer, "credits: {}", credits.to_string().cyan());
        }
        None => {
            let _ = writeln!(writer, "credits: {}", "unknown".dimmed());
        }
    }
    for (key, value) in &account.extra {
        let _ = writeln!(writer, "{}: {}", key, value);
    }
}

/// Print an upload receipt to stdout.
pub fn print_upload(receipt: &UploadReceipt) {
    print_upload_to(receipt, &mut io::stdout().lock());
}

pub fn print_upload_to<W: Write>(receipt: &UploadReceipt, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        "Document uploaded".green().bold()
    );
    if let Some(task_id) = &receipt.task_id {
        let _ = writeln!(writer, "  task: {}", task_id.to_string().dimmed());
    }
    if let Some(uuid) = &receipt.document_uuid {
        let _ = writeln!(writer, "  document_uuid: {}", uuid.cyan());
        let _ = writeln!(
            writer,
            "Pass it to generate with {}.",
            format!("--document-uuid {}", uuid).cyan()
        );
    }
}

// ============================================================
// Tests
// ============================================================
