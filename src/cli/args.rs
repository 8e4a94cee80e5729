//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all
//! slidespeak-mcp commands. It uses clap's derive API for declarative
//! argument parsing.
//!
//! ## Commands
//!
//! - `generate`: Generate a presentation from text
//! - `templates`: List the available presentation templates
//! - `status`: Check a generation task by its handle
//! - `me`: Show the account and remaining credits
//! - `upload`: Upload a document to reference during generation
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::api::DEFAULT_API_BASE;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// SlideSpeak API key
    #[arg(long, env = "SLIDESPEAK_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Base URL of the SlideSpeak API
    #[arg(
        long,
        env = "SLIDESPEAK_BASE_URL",
        default_value = DEFAULT_API_BASE,
        global = true
    )]
    pub base_url: String,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

#[derive(Debug, Args)]
pub struct GenerateCommand {
    /// Text to generate the presentation from
    #[arg(long)]
    pub text: String,

    /// Number of slides to generate (costs 1 credit per slide)
    #[arg(long, default_value_t = 10)]
    pub length: u32,

    /// Template name (see the templates command)
    #[arg(long, default_value = "default")]
    pub template: String,

    /// UUID of an uploaded document to draw content from
    /// Can be specified multiple times: --document-uuid a --document-uuid b
    #[arg(long = "document-uuid", value_name = "UUID")]
    pub document_uuids: Vec<String>,

    /// Seconds to wait for the generation before giving up
    #[arg(long, default_value_t = 90)]
    pub timeout: u64,

    /// Seconds between two status polls
    #[arg(long, default_value_t = 2)]
    pub poll_interval: u64,
}

#[derive(Debug, Args)]
pub struct StatusCommand {
    /// Handle of the task to inspect, as printed by generate
    pub task_id: String,

    /// Poll until the task finishes instead of reporting the current state
    #[arg(long)]
    pub wait: bool,

    /// Seconds to wait for the task when --wait is given
    #[arg(long, default_value_t = 90)]
    pub timeout: u64,
}

#[derive(Debug, Args)]
pub struct UploadCommand {
    /// Path of the document to upload (.pdf, .docx, .pptx, .xlsx or .txt)
    pub file: PathBuf,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a presentation from text and print the download URL
    Generate(GenerateCommand),
    /// List the presentation templates available to the account
    Templates,
    /// Check the status of a generation task
    Status(StatusCommand),
    /// Show the account and remaining credits for the configured API key
    Me,
    /// Upload a document to reference in later generation requests
    Upload(UploadCommand),
    /// Start MCP server for AI coding agents
    Serve,
}
