// MCP (Model Context Protocol) server for the Patchwork API
// Exposes coding sessions, sources and activities as tools for LLM hosts

pub mod protocol;
pub mod server;
pub mod tools;

pub use server::McpServer;
