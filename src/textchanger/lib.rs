//! # Textchanger Architecture
//!
//! Textchanger rewrites text through a pipeline of named converters picked
//! from categorized groups ("Case", "Code Style", "Glitched", ...). It is a
//! **UI-agnostic library** with a CLI client on top: the same core could back
//! a web page, an editor plugin or a chat bot.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, runs the interactive shell             │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the session: registry, workbench, config, rng       │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - select / reset / clear / swap / convert / list / ...     │
//! │  - Operates on a Workbench, returns CmdResult               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (registry.rs, selection.rs, pipeline.rs, converters/) │
//! │  - Immutable catalogue, active pipeline, evaluate / render  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Pipeline
//!
//! Each category allows one choice at a time, `Default` (identity) included.
//! The [`selection::Selection`] keeps the chosen non-identity converters in
//! the order their categories were last activated, and
//! [`pipeline::evaluate`] applies them left to right:
//!
//! ```text
//! "Hello World"  →  Snake Case  →  Reverse  →  "dlrow_olleh"
//! ```
//!
//! Output is never stored. It is recomputed from the input and the selection
//! whenever either changes.
//!
//! ## Randomness
//!
//! Random Case, the Glitched tiers and Leetspeak are intentionally
//! non-deterministic. They draw from a `rand::RngCore` handed in by the
//! caller, so a seeded generator makes any run reproducible.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per user operation
//! - [`registry`]: The converter catalogue and name resolution
//! - [`converters`]: The transformation functions themselves
//! - [`selection`]: The active pipeline
//! - [`pipeline`]: Evaluation, stage traces and rendering
//! - [`model`]: Core data types (`Converter`, `Choice`, `Workbench`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod converters;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod registry;
pub mod selection;
