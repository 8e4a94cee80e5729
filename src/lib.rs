//! SlideSpeak MCP - presentation generation for AI coding agents
//!
//! SlideSpeak MCP is a CLI tool and library that exposes the SlideSpeak
//! presentation API to AI assistants over the Model Context Protocol, and to
//! humans over a set of plain commands. Presentations are generated
//! asynchronously upstream: a request is queued, then polled until the
//! rendered file is ready.
//!
//! ## Module Structure
//!
//! - `api`: HTTP client for the SlideSpeak REST API (submit, poll, templates)
//! - `cli`: Command-line interface layer (user-facing commands and output)
//! - `config`: Runtime settings shared by the CLI and the MCP server
//! - `mcp`: Model Context Protocol server implementation

pub mod api;
pub mod cli;
pub mod config;
pub mod mcp;
