use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TextChangerError};
use crate::model::{Choice, Workbench};
use crate::registry::Registry;

/// Splits a `CATEGORY=OPTION` selector.
pub fn parse_selector(selector: &str) -> Result<(&str, &str)> {
    match selector.split_once('=') {
        Some((category, option)) if !category.trim().is_empty() && !option.trim().is_empty() => {
            Ok((category.trim(), option.trim()))
        }
        _ => Err(TextChangerError::InvalidSelector(selector.to_string())),
    }
}

pub fn run(registry: &Registry, workbench: &mut Workbench, selector: &str) -> Result<CmdResult> {
    let (category, option) = parse_selector(selector)?;
    let (category, choice) = registry.resolve(category, option)?;
    workbench.selection.select(category, choice);

    let mut result = CmdResult::default();
    result.add_message(match choice {
        Choice::Default => CmdMessage::info(format!("{}: back to Default", category)),
        Choice::Converter(converter) => {
            CmdMessage::success(format!("{}: {}", category, converter.name()))
        }
    });
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;

    fn active(bench: &Workbench) -> Vec<&'static str> {
        bench.selection.active().iter().map(|c| c.name()).collect()
    }

    #[test]
    fn parses_selector() {
        assert_eq!(parse_selector("Case=Upper Case").unwrap(), ("Case", "Upper Case"));
        assert_eq!(parse_selector(" Code Style = Snake Case ").unwrap(), ("Code Style", "Snake Case"));
    }

    #[test]
    fn rejects_malformed_selectors() {
        for bad in ["Case", "=Upper", "Case=", "  =  "] {
            assert!(matches!(
                parse_selector(bad),
                Err(TextChangerError::InvalidSelector(_))
            ));
        }
    }

    #[test]
    fn selecting_replaces_within_category() {
        let registry = Registry::standard();
        let mut bench = Workbench::default();
        run(&registry, &mut bench, "Case=Upper Case").unwrap();
        run(&registry, &mut bench, "Case=Lower Case").unwrap();
        assert_eq!(active(&bench), vec!["Lower Case"]);
    }

    #[test]
    fn selecting_default_removes_category() {
        let registry = Registry::standard();
        let mut bench = Workbench::default();
        run(&registry, &mut bench, "Case=Upper Case").unwrap();
        let result = run(&registry, &mut bench, "case=default").unwrap();
        assert!(bench.selection.is_empty());
        assert_eq!(result.messages[0].level, MessageLevel::Info);
        assert_eq!(result.messages[0].content, "Case: back to Default");
    }

    #[test]
    fn reports_selected_converter() {
        let registry = Registry::standard();
        let mut bench = Workbench::default();
        let result = run(&registry, &mut bench, "binary-encoding=unicode-utf-8").unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(result.messages[0].content, "Binary Encoding: Unicode UTF-8");
    }

    #[test]
    fn unknown_names_leave_selection_untouched() {
        let registry = Registry::standard();
        let mut bench = Workbench::default();
        run(&registry, &mut bench, "Meme=Cow").unwrap();
        assert!(run(&registry, &mut bench, "Meme=Doge").is_err());
        assert!(run(&registry, &mut bench, "Colors=Red").is_err());
        assert_eq!(active(&bench), vec!["Cow"]);
    }
}
