use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Workbench;

/// Replaces the input text. The selection is untouched.
pub fn run(workbench: &mut Workbench, text: impl Into<String>) -> Result<CmdResult> {
    workbench.input = text.into();
    Ok(CmdResult::default())
}
