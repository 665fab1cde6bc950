use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Workbench;

/// Drops every active converter. The input text is kept.
pub fn run(workbench: &mut Workbench) -> Result<CmdResult> {
    let dropped = workbench.selection.len();
    workbench.selection.reset();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Pipeline reset ({} converter{} removed)",
        dropped,
        if dropped == 1 { "" } else { "s" }
    )));
    Ok(result)
}
