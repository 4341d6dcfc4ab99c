//! # mcp-core
//!
//! Protocol-agnostic tool framework plus the MCP (Model Context Protocol)
//! wire surface needed to host tools over JSON-RPC.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      McpServer                               │
//! │  ┌─────────────┐  ┌─────────────┐  ┌─────────────────────┐  │
//! │  │  JSON-RPC   │  │    Tool     │  │      Prompt         │  │
//! │  │   Router    │──│   Registry  │──│     Registry        │  │
//! │  └─────────────┘  └─────────────┘  └─────────────────────┘  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The `Tool` trait enables registering any async capability; the router
//! turns one JSON line into at most one JSON response line, so any
//! line-oriented transport (stdio, sockets) can host it.

pub mod error;
pub mod prompt;
pub mod protocol;
pub mod server;
pub mod tool;

pub use error::{CoreError, Result};
pub use prompt::{PromptDefinition, PromptRegistry};
pub use server::McpServer;
pub use tool::{Tool, ToolCall, ToolRegistry, ToolResult, ToolSchema};
