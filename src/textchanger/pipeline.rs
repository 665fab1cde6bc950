//! # Pipeline Evaluation and Rendering
//!
//! [`evaluate`] folds the active converters over the input, left to right.
//! Nothing is cached between runs: randomized converters draw fresh values
//! every time.
//!
//! [`render`] describes the same pipeline for humans:
//! `Input → Snake Case → Reverse → Output`.

use crate::model::Converter;
use rand::RngCore;
use serde::Serialize;
use tracing::trace;

pub const ARROW: &str = "→";

const INPUT_LABEL: &str = "Input";
const OUTPUT_LABEL: &str = "Output";

pub fn evaluate(input: &str, pipeline: &[Converter], rng: &mut dyn RngCore) -> String {
    pipeline.iter().fold(input.to_string(), |text, converter| {
        let next = converter.apply(&text, rng);
        trace!(stage = converter.name(), len = next.len(), "applied");
        next
    })
}

/// One step of an evaluation: the converter name and what it produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stage {
    pub name: String,
    pub output: String,
}

/// Evaluates `pipeline` keeping every intermediate value. The last stage's
/// output is the evaluation result; an empty pipeline yields no stages.
pub fn trace(input: &str, pipeline: &[Converter], rng: &mut dyn RngCore) -> Vec<Stage> {
    let mut stages = Vec::with_capacity(pipeline.len());
    let mut text = input.to_string();
    for converter in pipeline {
        text = converter.apply(&text, rng);
        trace!(stage = converter.name(), len = text.len(), "applied");
        stages.push(Stage {
            name: converter.name().to_string(),
            output: text.clone(),
        });
    }
    stages
}

pub fn render(pipeline: &[Converter]) -> String {
    render_with(pipeline, ARROW)
}

pub fn render_with(pipeline: &[Converter], separator: &str) -> String {
    std::iter::once(INPUT_LABEL)
        .chain(pipeline.iter().map(|c| c.name()))
        .chain(std::iter::once(OUTPUT_LABEL))
        .collect::<Vec<_>>()
        .join(&format!(" {} ", separator))
}
