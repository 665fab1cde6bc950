use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Workbench;
use crate::pipeline::{evaluate, render_with, trace};
use rand::RngCore;

/// Runs the active pipeline over the current input.
///
/// With `explain`, every intermediate stage is kept as well. Both modes
/// evaluate exactly once, so randomized output and stages always agree.
pub fn run(
    workbench: &Workbench,
    separator: &str,
    explain: bool,
    rng: &mut dyn RngCore,
) -> Result<CmdResult> {
    let pipeline = workbench.selection.active();
    let description = render_with(pipeline, separator);

    if explain {
        let stages = trace(&workbench.input, pipeline, rng);
        let output = stages
            .last()
            .map(|stage| stage.output.clone())
            .unwrap_or_else(|| workbench.input.clone());
        return Ok(CmdResult::default()
            .with_output(output)
            .with_description(description)
            .with_stages(stages));
    }

    let output = evaluate(&workbench.input, pipeline, rng);
    Ok(CmdResult::default()
        .with_output(output)
        .with_description(description))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::select;
    use crate::pipeline::ARROW;
    use crate::registry::Registry;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn converts_with_selected_pipeline() {
        let registry = Registry::standard();
        let mut bench = Workbench::new("Hello World");
        select::run(&registry, &mut bench, "Code Style=Snake Case").unwrap();

        let mut rng = StdRng::seed_from_u64(0);
        let result = run(&bench, ARROW, false, &mut rng).unwrap();
        assert_eq!(result.output.as_deref(), Some("hello_world"));
        assert_eq!(
            result.description.as_deref(),
            Some("Input → Snake Case → Output")
        );
        assert!(result.stages.is_empty());
    }

    #[test]
    fn empty_selection_echoes_input() {
        let bench = Workbench::new("unchanged");
        let mut rng = StdRng::seed_from_u64(0);
        let result = run(&bench, ARROW, false, &mut rng).unwrap();
        assert_eq!(result.output.as_deref(), Some("unchanged"));
        assert_eq!(result.description.as_deref(), Some("Input → Output"));
    }

    #[test]
    fn explain_keeps_each_stage() {
        let registry = Registry::standard();
        let mut bench = Workbench::new("test");
        select::run(&registry, &mut bench, "Case=Title Case").unwrap();
        select::run(&registry, &mut bench, "Direction=Reverse").unwrap();

        let mut rng = StdRng::seed_from_u64(0);
        let result = run(&bench, "->", true, &mut rng).unwrap();
        assert_eq!(result.output.as_deref(), Some("tseT"));
        assert_eq!(
            result.description.as_deref(),
            Some("Input -> Title Case -> Reverse -> Output")
        );
        let outputs: Vec<_> = result.stages.iter().map(|s| s.output.as_str()).collect();
        assert_eq!(outputs, vec!["Test", "tseT"]);
    }

    #[test]
    fn explain_with_empty_selection_echoes_input() {
        let bench = Workbench::new("same");
        let mut rng = StdRng::seed_from_u64(0);
        let result = run(&bench, ARROW, true, &mut rng).unwrap();
        assert_eq!(result.output.as_deref(), Some("same"));
        assert!(result.stages.is_empty());
    }

    #[test]
    fn selection_order_drives_result() {
        let registry = Registry::standard();
        let mut rng = StdRng::seed_from_u64(0);

        let mut case_first = Workbench::new("hello there");
        select::run(&registry, &mut case_first, "Case=Upper Case").unwrap();
        select::run(&registry, &mut case_first, "Meme=Cow").unwrap();
        let result = run(&case_first, ARROW, false, &mut rng).unwrap();
        assert_eq!(result.output.as_deref(), Some("MOOOO MOOOO"));

        let mut cow_first = Workbench::new("hello there");
        select::run(&registry, &mut cow_first, "Meme=Cow").unwrap();
        select::run(&registry, &mut cow_first, "Case=Upper Case").unwrap();
        let result = run(&cow_first, ARROW, false, &mut rng).unwrap();
        assert_eq!(result.output.as_deref(), Some("MOOOO MOOOO"));

        let mut title = Workbench::new("hello there");
        select::run(&registry, &mut title, "Meme=Cow").unwrap();
        select::run(&registry, &mut title, "Case=Title Case").unwrap();
        let result = run(&title, ARROW, false, &mut rng).unwrap();
        assert_eq!(result.output.as_deref(), Some("Moooo Moooo"));
    }
}
