use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Workbench;

/// Empties the input text. The selection is kept.
pub fn run(workbench: &mut Workbench) -> Result<CmdResult> {
    workbench.input.clear();
    tracing::debug!("input cleared");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Input cleared"));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::select;
    use crate::registry::Registry;

    #[test]
    fn empties_input_but_keeps_selection() {
        let registry = Registry::standard();
        let mut bench = Workbench::new("test");
        select::run(&registry, &mut bench, "Case=Title Case").unwrap();

        run(&mut bench).unwrap();
        assert_eq!(bench.input, "");
        let names: Vec<_> = bench.selection.active().iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["Title Case"]);
    }
}
