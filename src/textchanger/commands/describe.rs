use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Workbench;
use crate::pipeline::render_with;

pub fn run(workbench: &Workbench, separator: &str) -> Result<CmdResult> {
    let description = render_with(workbench.selection.active(), separator);
    Ok(CmdResult::default().with_description(description))
}
