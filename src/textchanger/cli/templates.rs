//! Output templates, kept as standalone minijinja files and embedded at
//! compile time. Line breaks are explicit in the templates; whitespace-heavy
//! layout (column padding) is computed in `render.rs` and passed in.

pub const LIST_TEMPLATE: &str = include_str!("templates/list.tmp");
pub const EXPLAIN_TEMPLATE: &str = include_str!("templates/explain.tmp");
pub const SESSION_TEMPLATE: &str = include_str!("templates/session.tmp");
pub const CONFIG_TEMPLATE: &str = include_str!("templates/config.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
pub const SHELL_HELP_TEMPLATE: &str = include_str!("templates/shell_help.tmp");
