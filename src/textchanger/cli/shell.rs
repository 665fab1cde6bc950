//! The interactive session.
//!
//! Reads one line at a time. Lines starting with `:` are commands, anything
//! else replaces the input text (`::` escapes a literal leading colon). After
//! every event the session view (input, pipeline, output) is printed again,
//! recomputed from scratch.

use super::render::{render_catalogue, render_messages, render_session, render_shell_help};
use rand::RngCore;
use std::io::{BufRead, Write};
use textchanger::api::{CmdMessage, TextChangerApi};
use textchanger::error::Result;

const PROMPT: &str = "> ";

pub const SHELL_COMMANDS: &[(&str, &str)] = &[
    (":select CATEGORY=OPTION", "Activate an option (alias :s)"),
    (":default CATEGORY", "Put a category back to Default"),
    (":reset", "Clear the pipeline, keep the input"),
    (":clear", "Clear the input, keep the pipeline"),
    (":swap", "Copy the output into the input"),
    (":show", "Show the current session"),
    (":list [CATEGORY]", "List options with previews"),
    (":help", "Show this help"),
    (":quit", "Leave the shell (alias :q)"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Input(String),
    Select(String),
    Default(String),
    Reset,
    Clear,
    Swap,
    Show,
    List(Option<String>),
    Help,
    Quit,
    Unknown(String),
}

impl ShellCommand {
    pub fn parse(line: &str) -> Self {
        let Some(command) = line.strip_prefix(':') else {
            return ShellCommand::Input(line.to_string());
        };
        if command.starts_with(':') {
            return ShellCommand::Input(command.to_string());
        }

        let (verb, rest) = match command.trim().split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (command.trim(), ""),
        };

        match (verb, rest) {
            ("select" | "s", "") => ShellCommand::Unknown(format!(":{} needs CATEGORY=OPTION", verb)),
            ("select" | "s", selector) => ShellCommand::Select(selector.to_string()),
            ("default", "") => ShellCommand::Unknown(":default needs a CATEGORY".to_string()),
            ("default", category) => ShellCommand::Default(category.to_string()),
            ("reset", _) => ShellCommand::Reset,
            ("clear", _) => ShellCommand::Clear,
            ("swap", _) => ShellCommand::Swap,
            ("show", _) => ShellCommand::Show,
            ("list" | "ls", "") => ShellCommand::List(None),
            ("list" | "ls", category) => ShellCommand::List(Some(category.to_string())),
            ("help" | "h" | "?", _) => ShellCommand::Help,
            ("quit" | "q" | "exit", _) => ShellCommand::Quit,
            (other, _) => ShellCommand::Unknown(format!("Unknown command :{} (try :help)", other)),
        }
    }
}

/// Runs the session until `:quit` or end of input.
///
/// Failures of a single command (an unknown option, say) are printed and the
/// session goes on. Only I/O errors end it.
pub fn run_shell<R, I, W>(
    api: &mut TextChangerApi<R>,
    input: I,
    out: &mut W,
    use_color: bool,
    show_prompt: bool,
) -> Result<()>
where
    R: RngCore,
    I: BufRead,
    W: Write,
{
    write_session(api, out, use_color)?;
    prompt(out, show_prompt)?;

    for line in input.lines() {
        let line = line?;
        let command = ShellCommand::parse(line.trim_end_matches('\r'));
        tracing::debug!(?command, "shell command");

        // Each event yields the text to print and whether the session view
        // needs refreshing afterwards.
        let outcome = match command {
            ShellCommand::Quit => break,
            ShellCommand::Help => Ok((render_shell_help(SHELL_COMMANDS, use_color), false)),
            ShellCommand::List(filter) => api
                .list(filter.as_deref())
                .map(|result| (render_catalogue(&result.catalogue, use_color), false)),
            ShellCommand::Unknown(message) => Ok((
                render_messages(&[CmdMessage::error(message)], use_color),
                false,
            )),
            ShellCommand::Show => Ok((String::new(), true)),
            ShellCommand::Input(text) => api.set_input(text).map(|_| (String::new(), true)),
            ShellCommand::Select(selector) => api.select(&selector).map(|result| {
                (render_messages(&result.messages, use_color), true)
            }),
            ShellCommand::Default(category) => api
                .select(&format!("{}=Default", category))
                .map(|result| (render_messages(&result.messages, use_color), true)),
            ShellCommand::Reset => api
                .reset()
                .map(|result| (render_messages(&result.messages, use_color), true)),
            ShellCommand::Clear => api
                .clear()
                .map(|result| (render_messages(&result.messages, use_color), true)),
            ShellCommand::Swap => api
                .swap()
                .map(|result| (render_messages(&result.messages, use_color), true)),
        };

        match outcome {
            Ok((text, refresh)) => {
                out.write_all(text.as_bytes())?;
                if refresh {
                    write_session(api, out, use_color)?;
                }
            }
            Err(e) => write!(
                out,
                "{}",
                render_messages(&[CmdMessage::error(e.to_string())], use_color)
            )?,
        }
        prompt(out, show_prompt)?;
    }

    out.flush()?;
    Ok(())
}

fn write_session<R: RngCore, W: Write>(
    api: &mut TextChangerApi<R>,
    out: &mut W,
    use_color: bool,
) -> Result<()> {
    let result = api.convert(false)?;
    let input = api.workbench().input.clone();
    write!(
        out,
        "{}",
        render_session(
            &input,
            result.description.as_deref().unwrap_or_default(),
            result.output.as_deref().unwrap_or_default(),
            use_color,
        )
    )?;
    Ok(())
}

fn prompt<W: Write>(out: &mut W, show_prompt: bool) -> Result<()> {
    if show_prompt {
        write!(out, "{}", PROMPT)?;
        out.flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use textchanger::api::seeded_rng;
    use textchanger::config::TextChangerConfig;
    use textchanger::registry::Registry;

    fn session(script: &str) -> String {
        let dir = tempfile::tempdir().unwrap();
        let mut api = TextChangerApi::new(
            Registry::standard(),
            TextChangerConfig::default(),
            dir.path().to_path_buf(),
            seeded_rng(Some(5)),
        );
        let mut out = Vec::new();
        run_shell(&mut api, Cursor::new(script), &mut out, false, false).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parse_commands() {
        assert_eq!(ShellCommand::parse("hello"), ShellCommand::Input("hello".into()));
        assert_eq!(ShellCommand::parse("::x"), ShellCommand::Input(":x".into()));
        assert_eq!(
            ShellCommand::parse(":select Case=Upper Case"),
            ShellCommand::Select("Case=Upper Case".into())
        );
        assert_eq!(
            ShellCommand::parse(":s  Meme=Cow "),
            ShellCommand::Select("Meme=Cow".into())
        );
        assert_eq!(
            ShellCommand::parse(":default Case"),
            ShellCommand::Default("Case".into())
        );
        assert_eq!(ShellCommand::parse(":list"), ShellCommand::List(None));
        assert_eq!(
            ShellCommand::parse(":list Fancy"),
            ShellCommand::List(Some("Fancy".into()))
        );
        assert_eq!(ShellCommand::parse(":q"), ShellCommand::Quit);
        assert!(matches!(ShellCommand::parse(":select"), ShellCommand::Unknown(_)));
        assert!(matches!(ShellCommand::parse(":frobnicate"), ShellCommand::Unknown(_)));
    }

    #[test]
    fn empty_line_clears_input() {
        assert_eq!(ShellCommand::parse(""), ShellCommand::Input(String::new()));
    }

    #[test]
    fn input_then_select_updates_output() {
        let out = session("Hello World\n:select Code Style=Snake Case\n:quit\n");
        assert!(out.contains("out  hello_world"));
        assert!(out.contains("via  Input → Snake Case → Output"));
        assert!(out.contains("Code Style: Snake Case"));
    }

    #[test]
    fn swap_then_reset_keeps_swapped_input() {
        let out = session("abc\n:s Direction=Reverse\n:swap\n:reset\n");
        let last = out.lines().rev().take(3).collect::<Vec<_>>();
        assert_eq!(last, vec!["out  cba", "via  Input → Output", "in   cba"]);
    }

    #[test]
    fn clear_keeps_pipeline() {
        let out = session("abc\n:s Case=Upper Case\n:clear\n");
        let last = out.lines().rev().take(3).collect::<Vec<_>>();
        assert_eq!(last, vec!["out  ", "via  Input → Upper Case → Output", "in   "]);
    }

    #[test]
    fn bad_selector_is_reported_and_session_continues() {
        let out = session(":s Nope=Thing\nabc\n");
        assert!(out.contains("Nope"));
        assert!(out.ends_with("out  abc\n"));
    }

    #[test]
    fn swap_copies_the_random_output_that_was_shown() {
        let out = session("abcdefgh\n:s Case=Random Case\n:swap\n:reset\n");
        let lines: Vec<&str> = out.lines().collect();
        let swap_at = lines
            .iter()
            .position(|line| *line == "Output copied to input")
            .unwrap();
        let shown = lines[..swap_at]
            .iter()
            .rev()
            .find_map(|line| line.strip_prefix("out  "))
            .unwrap();
        let final_input = lines
            .iter()
            .rev()
            .find_map(|line| line.strip_prefix("in   "))
            .unwrap();
        assert_eq!(shown, final_input);
    }

    #[test]
    fn quit_stops_reading() {
        let out = session(":quit\nafter\n");
        assert!(!out.contains("after"));
    }

    #[test]
    fn list_and_help() {
        let out = session(":list direction\n:help\n");
        assert!(out.contains("Reverse"));
        assert!(out.contains(":swap"));
    }
}
