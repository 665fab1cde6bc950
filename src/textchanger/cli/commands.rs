//! # CLI Layer
//!
//! This module is **one possible UI client** for textchanger, not the
//! application itself. It is the only place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr, stdin)
//! - Installs the tracing subscriber
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Builds `AppContext` with the API and configuration
//! - `handle_*()`: Per-command handlers that call the API and format output

use super::render::{print_messages, render_catalogue, render_config, render_explain};
use super::setup::{Cli, Commands};
use super::shell::run_shell;
use clap::Parser;
use console::Term;
use rand::rngs::StdRng;
use std::io::{IsTerminal, Read};
use textchanger::api::{seeded_rng, ConfigAction, TextChangerApi};
use textchanger::config::{self, TextChangerConfig};
use textchanger::error::Result;
use textchanger::registry::Registry;
use tracing_subscriber::EnvFilter;

struct AppContext {
    api: TextChangerApi<StdRng>,
    use_color: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        None => handle_list(&mut ctx, None),
        Some(Commands::List { category }) => handle_list(&mut ctx, category),
        Some(Commands::Convert {
            select,
            explain,
            text,
        }) => handle_convert(&mut ctx, &select, explain, text),
        Some(Commands::Describe { select }) => handle_describe(&mut ctx, &select),
        Some(Commands::Shell { select }) => handle_shell(&mut ctx, &select),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
    }
}

/// Logs go to stderr so converted text on stdout stays pipeable.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = config::config_dir()?;
    let config = TextChangerConfig::load(&config_dir).unwrap_or_else(|e| {
        tracing::warn!(error = %e, dir = %config_dir.display(), "ignoring unreadable config");
        TextChangerConfig::default()
    });

    let seed = cli.seed.or(config.seed);
    tracing::debug!(?seed, dir = %config_dir.display(), "context ready");

    let use_color = !cli.no_color && Term::stdout().features().colors_supported();
    let api = TextChangerApi::new(Registry::standard(), config, config_dir, seeded_rng(seed));

    Ok(AppContext { api, use_color })
}

fn handle_list(ctx: &mut AppContext, category: Option<String>) -> Result<()> {
    let result = ctx.api.list(category.as_deref())?;
    print!("{}", render_catalogue(&result.catalogue, ctx.use_color));
    print_messages(&result.messages, ctx.use_color);
    Ok(())
}

fn handle_convert(
    ctx: &mut AppContext,
    selectors: &[String],
    explain: bool,
    text: Vec<String>,
) -> Result<()> {
    ctx.api.select_all(selectors)?;

    let input = if text.is_empty() {
        read_piped_stdin()?
    } else {
        text.join(" ")
    };
    ctx.api.set_input(input)?;

    let result = ctx.api.convert(explain)?;
    if explain {
        print!(
            "{}",
            render_explain(
                result.description.as_deref().unwrap_or_default(),
                &ctx.api.workbench().input,
                &result.stages,
                ctx.use_color,
            )
        );
    } else {
        println!("{}", result.output.unwrap_or_default());
    }
    Ok(())
}

/// Reads all of stdin when it is piped. One trailing newline is dropped, the
/// way `echo text |` adds it.
fn read_piped_stdin() -> Result<String> {
    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Ok(String::new());
    }
    let mut buffer = String::new();
    stdin.read_to_string(&mut buffer)?;
    if buffer.ends_with('\n') {
        buffer.pop();
        if buffer.ends_with('\r') {
            buffer.pop();
        }
    }
    Ok(buffer)
}

fn handle_describe(ctx: &mut AppContext, selectors: &[String]) -> Result<()> {
    ctx.api.select_all(selectors)?;
    let result = ctx.api.describe()?;
    println!("{}", result.description.unwrap_or_default());
    Ok(())
}

fn handle_shell(ctx: &mut AppContext, selectors: &[String]) -> Result<()> {
    ctx.api.select_all(selectors)?;

    let stdin = std::io::stdin();
    let show_prompt = stdin.is_terminal();
    let mut stdout = std::io::stdout();
    run_shell(
        &mut ctx.api,
        stdin.lock(),
        &mut stdout,
        ctx.use_color,
        show_prompt,
    )
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let show_all = key.is_none();
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.configure(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print!("{}", render_config(config, ctx.use_color));
        }
    }
    print_messages(&result.messages, ctx.use_color);
    Ok(())
}
