use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Workbench;
use crate::pipeline::evaluate;
use rand::RngCore;

/// Copies the current output into the input.
///
/// `shown` is the output last displayed for this exact input and selection.
/// It is copied as-is, so a randomized pipeline swaps the text the user saw
/// rather than a fresh draw. Without it the pipeline is evaluated once.
///
/// This is a one-time copy: the selection stays active, so the next
/// evaluation applies the pipeline to the swapped text again.
pub fn run(
    workbench: &mut Workbench,
    shown: Option<String>,
    rng: &mut dyn RngCore,
) -> Result<CmdResult> {
    let output = match shown {
        Some(output) => output,
        None => evaluate(&workbench.input, workbench.selection.active(), rng),
    };
    workbench.input = output.clone();
    tracing::debug!(len = output.len(), "output swapped into input");

    let mut result = CmdResult::default().with_output(output);
    result.add_message(CmdMessage::success("Output copied to input"));
    Ok(result)
}
