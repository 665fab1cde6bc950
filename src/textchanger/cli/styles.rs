//! Styles for the textchanger CLI.
//!
//! Templates refer to styles by semantic name (`category`, `preview`, ...)
//! through the `style` filter registered by `outstanding`; this module maps
//! those names to terminal styles. Styles force their escape codes because
//! the caller decides about colour (`--no-color`, tty detection) before
//! rendering.

use console::Style;
use once_cell::sync::Lazy;
use outstanding::Theme;

pub mod names {
    pub const CATEGORY: &str = "category";
    pub const OPTION: &str = "option";
    pub const SELECTED: &str = "selected";
    pub const PREVIEW: &str = "preview";
    pub const MUTED: &str = "muted";
    pub const PIPELINE: &str = "pipeline";
    pub const STAGE: &str = "stage";
    pub const KEY: &str = "key";
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
    pub const ERROR: &str = "error";
}

pub static TEXTCHANGER_THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::new()
        .add(names::CATEGORY, Style::new().bold().underlined().force_styling(true))
        .add(names::OPTION, Style::new())
        .add(names::SELECTED, Style::new().green().bold().force_styling(true))
        .add(names::PREVIEW, Style::new().cyan().force_styling(true))
        .add(names::MUTED, Style::new().dim().force_styling(true))
        .add(names::PIPELINE, Style::new().yellow().force_styling(true))
        .add(names::STAGE, Style::new().magenta().force_styling(true))
        .add(names::KEY, Style::new().bold().force_styling(true))
        .add(names::INFO, Style::new().dim().force_styling(true))
        .add(names::SUCCESS, Style::new().green().force_styling(true))
        .add(names::WARNING, Style::new().yellow().force_styling(true))
        .add(names::ERROR, Style::new().red().force_styling(true))
});
