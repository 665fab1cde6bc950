//! # CLI Behavior
//!
//! This is **one possible UI client** for textchanger, not the application
//! itself. It is the only place that knows about terminal I/O, exit codes
//! and output formatting.
//!
//! ## Modes
//!
//! - `textchanger` with no subcommand lists the catalogue.
//! - `textchanger convert -s Case=Upper Case hello` runs one pipeline over
//!   the given text. Without text arguments, piped stdin is used.
//! - `textchanger shell` keeps a session open: plain lines replace the input,
//!   `:`-prefixed lines are commands (`:select`, `:reset`, `:clear`, `:swap`).
//!
//! Converted text goes to stdout untouched so it can be piped. Logs go to
//! stderr.
//!
//! ## Module Structure
//!
//! - `commands`: dispatch, context setup and per-command handlers
//! - `render`: template-based output formatting
//! - `setup`: argument parsing via clap
//! - `shell`: the interactive session loop
//! - `styles`: terminal styling
//! - `templates`: output templates

mod commands;
mod render;
pub mod setup;
mod shell;
mod styles;
mod templates;

pub use commands::run;
