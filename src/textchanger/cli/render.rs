//! # Rendering Module
//!
//! Styled terminal output using the `outstanding` crate. Templates pick
//! styles by semantic name with the `style` filter; the names resolve against
//! [`TEXTCHANGER_THEME`].
//!
//! Layout math (column widths, padding) stays in Rust because it needs
//! Unicode-aware width measurement. Templates only arrange pre-computed
//! pieces.

use super::styles::{names, TEXTCHANGER_THEME};
use super::templates::{
    CONFIG_TEMPLATE, EXPLAIN_TEMPLATE, LIST_TEMPLATE, MESSAGES_TEMPLATE, SESSION_TEMPLATE,
    SHELL_HELP_TEMPLATE,
};
use outstanding::{render_with_color, ThemeChoice};
use serde::Serialize;
use textchanger::api::{CategoryListing, CmdMessage, MessageLevel};
use textchanger::config::{TextChangerConfig, CONFIG_KEYS};
use textchanger::pipeline::Stage;
use unicode_width::UnicodeWidthStr;

const SELECTED_MARKER: &str = "●";
const UNSELECTED_MARKER: &str = "○";

/// Renders with the textchanger theme. Output always ends in a newline.
fn render_template<T: Serialize>(
    template: &str,
    data: &T,
    use_color: bool,
) -> Result<String, minijinja::Error> {
    let mut out = render_with_color(
        template,
        data,
        ThemeChoice::from(&*TEXTCHANGER_THEME),
        use_color,
    )?;
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
    Ok(out)
}

fn pad_to(text: &str, width: usize) -> String {
    " ".repeat(width.saturating_sub(text.width()))
}

#[derive(Serialize)]
struct OptionLine {
    marker: &'static str,
    style: &'static str,
    name: String,
    padding: String,
    preview: String,
    random: bool,
}

#[derive(Serialize)]
struct CategoryBlock {
    name: String,
    options: Vec<OptionLine>,
}

#[derive(Serialize)]
struct ListData {
    categories: Vec<CategoryBlock>,
}

/// Renders the catalogue, one block per category, option previews aligned
/// in a single column across all blocks.
pub fn render_catalogue(catalogue: &[CategoryListing], use_color: bool) -> String {
    let width = catalogue
        .iter()
        .flat_map(|c| c.options.iter())
        .map(|o| o.name.width())
        .max()
        .unwrap_or(0);

    let categories = catalogue
        .iter()
        .map(|category| CategoryBlock {
            name: category.name.clone(),
            options: category
                .options
                .iter()
                .map(|option| OptionLine {
                    marker: if option.selected {
                        SELECTED_MARKER
                    } else {
                        UNSELECTED_MARKER
                    },
                    style: if option.selected {
                        names::SELECTED
                    } else {
                        names::OPTION
                    },
                    name: option.name.clone(),
                    padding: pad_to(&option.name, width),
                    preview: option.preview.clone(),
                    random: option.random,
                })
                .collect(),
        })
        .collect();

    render_template(LIST_TEMPLATE, &ListData { categories }, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

#[derive(Serialize)]
struct ExplainRow {
    label: String,
    padding: String,
    text: String,
}

#[derive(Serialize)]
struct ExplainData {
    description: String,
    rows: Vec<ExplainRow>,
}

/// Renders the pipeline description followed by the input and every stage.
pub fn render_explain(description: &str, input: &str, stages: &[Stage], use_color: bool) -> String {
    let labels: Vec<(&str, &str)> = std::iter::once(("Input", input))
        .chain(stages.iter().map(|s| (s.name.as_str(), s.output.as_str())))
        .collect();
    let width = labels.iter().map(|(label, _)| label.width()).max().unwrap_or(0);

    let rows = labels
        .into_iter()
        .map(|(label, text)| ExplainRow {
            label: label.to_string(),
            padding: pad_to(label, width),
            text: text.to_string(),
        })
        .collect();

    let data = ExplainData {
        description: description.to_string(),
        rows,
    };
    render_template(EXPLAIN_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

#[derive(Serialize)]
struct SessionData<'a> {
    input: &'a str,
    description: &'a str,
    output: &'a str,
}

/// Renders the shell's view of the session after an event.
pub fn render_session(input: &str, description: &str, output: &str, use_color: bool) -> String {
    let data = SessionData {
        input,
        description,
        output,
    };
    render_template(SESSION_TEMPLATE, &data, use_color)
        .unwrap_or_else(|_| format!("{}\n{}\n", description, output))
}

#[derive(Serialize)]
struct ConfigEntry {
    key: &'static str,
    value: String,
}

#[derive(Serialize)]
struct ConfigData {
    entries: Vec<ConfigEntry>,
}

pub fn render_config(config: &TextChangerConfig, use_color: bool) -> String {
    let entries = CONFIG_KEYS
        .iter()
        .map(|&key| ConfigEntry {
            key,
            value: config.get(key).unwrap_or_default(),
        })
        .collect();
    render_template(CONFIG_TEMPLATE, &ConfigData { entries }, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

#[derive(Serialize)]
struct HelpLine {
    usage: &'static str,
    padding: String,
    summary: &'static str,
}

#[derive(Serialize)]
struct HelpData {
    commands: Vec<HelpLine>,
}

pub fn render_shell_help(commands: &[(&'static str, &'static str)], use_color: bool) -> String {
    let width = commands.iter().map(|(usage, _)| usage.width()).max().unwrap_or(0);
    let commands = commands
        .iter()
        .map(|&(usage, summary)| HelpLine {
            usage,
            padding: pad_to(usage, width),
            summary,
        })
        .collect();
    render_template(SHELL_HELP_TEMPLATE, &HelpData { commands }, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: String,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

/// Renders command messages using the template system with themed styles.
pub fn render_messages(messages: &[CmdMessage], use_color: bool) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let message_data: Vec<MessageData> = messages
        .iter()
        .map(|msg| {
            let style = match msg.level {
                MessageLevel::Info => names::INFO,
                MessageLevel::Success => names::SUCCESS,
                MessageLevel::Warning => names::WARNING,
                MessageLevel::Error => names::ERROR,
            };
            MessageData {
                content: msg.content.clone(),
                style: style.to_string(),
            }
        })
        .collect();

    let data = MessagesData {
        messages: message_data,
    };

    render_template(MESSAGES_TEMPLATE, &data, use_color).unwrap_or_else(|_| {
        messages
            .iter()
            .map(|m| format!("{}\n", m.content))
            .collect()
    })
}

/// Prints command messages to stdout.
pub fn print_messages(messages: &[CmdMessage], use_color: bool) {
    print!("{}", render_messages(messages, use_color));
}
