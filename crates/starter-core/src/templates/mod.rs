//! Generated project files
//!
//! This module provides:
//! - Stub bodies embedded from the crate's `templates/` directory
//! - Placeholder substitution for stubs that vary by choice (`{{name}}`)

pub const REACT_APP: &str = include_str!("../../templates/web/app.jsx");
pub const VUE_APP: &str = include_str!("../../templates/web/app.vue");
pub const SVELTE_APP: &str = include_str!("../../templates/web/app.svelte");
pub const VITE_CONFIG: &str = include_str!("../../templates/web/vite.config.js");

pub const API_ROUTES: &str = include_str!("../../templates/hybrid/api.php");
pub const EXAMPLE_CONTROLLER: &str = include_str!("../../templates/hybrid/ExampleController.php");

/// Liveness and readiness routes appended to `routes/api.php`
pub const HEALTH_ROUTES: &str = include_str!("../../templates/microservice/health.php");

pub const CHAT_ACTION: &str = include_str!("../../templates/ai/ChatWithAI.php");
pub const EMBEDDING_ACTION: &str = include_str!("../../templates/ai/GenerateEmbedding.php");
/// Rate-limited AI route group appended to `routes/api.php`
pub const AI_ROUTES: &str = include_str!("../../templates/ai/routes.php");

pub const MCP_EXAMPLE_TOOL: &str = include_str!("../../templates/mcp/ExampleTool.php");

/// Substitute `{{key}}` placeholders
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    vars.iter().fold(template.to_string(), |acc, (key, value)| {
        acc.replace(&format!("{{{{{}}}}}", key), value)
    })
}
