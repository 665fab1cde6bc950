//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every user interface (the bundled CLI and its interactive
//! shell included).
//!
//! The facade:
//! - **Owns session state**: the registry, the [`Workbench`] (input text and
//!   selection), the loaded configuration and the random source
//! - **Dispatches** to the matching `commands::*::run`
//! - **Returns structured types** (`Result<CmdResult>`), never strings for a
//!   terminal
//!
//! ## Generic Over the Random Source
//!
//! `TextChangerApi<R: RngCore>` is generic over where randomness comes from:
//! - Production: `TextChangerApi<StdRng>` seeded from entropy or `--seed`
//! - Testing: a fixed-seed `StdRng`, or `StepRng` for fully scripted draws
//!
//! Randomized converters re-sample on every call. The one exception is the
//! last output handed out by [`TextChangerApi::convert`]: it is kept until the
//! input or selection changes, so [`TextChangerApi::swap`] copies the text the
//! user was shown.

use crate::commands;
use crate::config::TextChangerConfig;
use crate::error::Result;
use crate::model::Workbench;
use crate::registry::Registry;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::path::PathBuf;

pub struct TextChangerApi<R: RngCore> {
    registry: Registry,
    workbench: Workbench,
    config: TextChangerConfig,
    config_dir: PathBuf,
    rng: R,
    last_output: Option<String>,
}

impl<R: RngCore> TextChangerApi<R> {
    pub fn new(registry: Registry, config: TextChangerConfig, config_dir: PathBuf, rng: R) -> Self {
        Self {
            registry,
            workbench: Workbench::default(),
            config,
            config_dir,
            rng,
            last_output: None,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn workbench(&self) -> &Workbench {
        &self.workbench
    }

    pub fn config(&self) -> &TextChangerConfig {
        &self.config
    }

    pub fn set_input(&mut self, text: impl Into<String>) -> Result<CmdResult> {
        self.last_output = None;
        commands::edit::run(&mut self.workbench, text)
    }

    pub fn select(&mut self, selector: &str) -> Result<CmdResult> {
        self.last_output = None;
        commands::select::run(&self.registry, &mut self.workbench, selector)
    }

    /// Applies selectors in order, stopping at the first invalid one.
    pub fn select_all<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<CmdResult> {
        let mut result = CmdResult::default();
        for selector in selectors {
            let step = self.select(selector.as_ref())?;
            result.messages.extend(step.messages);
        }
        Ok(result)
    }

    pub fn reset(&mut self) -> Result<CmdResult> {
        self.last_output = None;
        commands::reset::run(&mut self.workbench)
    }

    pub fn clear(&mut self) -> Result<CmdResult> {
        self.last_output = None;
        commands::clear::run(&mut self.workbench)
    }

    /// Copies the last output returned by [`Self::convert`] into the input,
    /// evaluating afresh only if nothing was converted since the last change.
    pub fn swap(&mut self) -> Result<CmdResult> {
        let shown = self.last_output.take();
        commands::swap::run(&mut self.workbench, shown, &mut self.rng)
    }

    pub fn convert(&mut self, explain: bool) -> Result<CmdResult> {
        let result = commands::convert::run(
            &self.workbench,
            &self.config.separator,
            explain,
            &mut self.rng,
        )?;
        self.last_output = result.output.clone();
        Ok(result)
    }

    pub fn describe(&self) -> Result<CmdResult> {
        commands::describe::run(&self.workbench, &self.config.separator)
    }

    pub fn list(&mut self, filter: Option<&str>) -> Result<CmdResult> {
        commands::list::run(
            &self.registry,
            &self.workbench.selection,
            filter,
            &mut self.rng,
        )
    }

    /// Reads or writes the config file. A successful write also takes effect
    /// for the rest of this session.
    pub fn configure(&mut self, action: ConfigAction) -> Result<CmdResult> {
        let is_set = matches!(action, ConfigAction::Set(..));
        let result = commands::config::run(&self.config_dir, action)?;
        if is_set {
            if let Some(config) = &result.config {
                self.config = config.clone();
            }
        }
        Ok(result)
    }
}

/// A generator seeded with `seed`, or from OS entropy when `None`.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{
    CategoryListing, CmdMessage, CmdResult, MessageLevel, OptionListing,
};
