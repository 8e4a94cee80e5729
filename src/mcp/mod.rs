//! Model Context Protocol (MCP) server implementation.
//!
//! This module exposes SlideSpeak presentation generation to AI assistants
//! like Claude Desktop. The server speaks MCP tool calling over stdio.
//!
//! ## Module Structure
//!
//! - `server`: Main MCP server implementation
//! - `types`: MCP-specific type definitions

mod server;
pub mod types;

pub use server::{SlideSpeakMcpServer, run_server};
