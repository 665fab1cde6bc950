use crate::commands::{CategoryListing, CmdResult, OptionListing};
use crate::error::Result;
use crate::model::Choice;
use crate::registry::{Category, Registry};
use crate::selection::Selection;
use rand::RngCore;

fn listing(category: &Category, selection: &Selection, rng: &mut dyn RngCore) -> CategoryListing {
    let selected = selection.choice_of(category.name());
    let options = category
        .options()
        .map(|choice| OptionListing {
            name: choice.name().to_string(),
            preview: choice.apply(choice.name(), rng),
            selected: choice == selected,
            random: matches!(choice, Choice::Converter(c) if c.is_random()),
        })
        .collect();

    CategoryListing {
        name: category.name().to_string(),
        options,
    }
}

/// Lists the catalogue, or a single category when `filter` names one.
///
/// Every option carries a preview of itself applied to its own name, and the
/// option currently selected in `selection` is flagged.
pub fn run(
    registry: &Registry,
    selection: &Selection,
    filter: Option<&str>,
    rng: &mut dyn RngCore,
) -> Result<CmdResult> {
    let catalogue = match filter {
        Some(query) => vec![listing(registry.find_category(query)?, selection, rng)],
        None => registry
            .iter()
            .map(|category| listing(category, selection, rng))
            .collect(),
    };
    Ok(CmdResult::default().with_catalogue(catalogue))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TextChangerError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn lists_every_category_with_default_first() {
        let registry = Registry::standard();
        let mut rng = StdRng::seed_from_u64(0);
        let result = run(&registry, &Selection::new(), None, &mut rng).unwrap();

        assert_eq!(result.catalogue.len(), 8);
        for category in &result.catalogue {
            assert_eq!(category.options[0].name, "Default");
            assert!(category.options[0].selected);
        }
    }

    #[test]
    fn previews_apply_option_to_its_own_name() {
        let registry = Registry::standard();
        let mut rng = StdRng::seed_from_u64(0);
        let result = run(&registry, &Selection::new(), Some("code style"), &mut rng).unwrap();

        let previews: Vec<_> = result.catalogue[0]
            .options
            .iter()
            .map(|o| (o.name.as_str(), o.preview.as_str()))
            .collect();
        assert_eq!(
            previews,
            vec![
                ("Default", "Default"),
                ("Snake Case", "snake_case"),
                ("Screaming Snake Case", "SCREAMING_SNAKE_CASE"),
                ("Camel Case", "camelCase"),
                ("Pascal Case", "PascalCase"),
            ]
        );
    }

    #[test]
    fn flags_current_selection() {
        let registry = Registry::standard();
        let mut selection = Selection::new();
        let (category, choice) = registry.resolve("Direction", "Reverse").unwrap();
        selection.select(category, choice);

        let mut rng = StdRng::seed_from_u64(0);
        let result = run(&registry, &selection, Some("direction"), &mut rng).unwrap();
        let options = &result.catalogue[0].options;
        assert!(!options[0].selected);
        assert!(options[1].selected);
        assert_eq!(options[1].preview, "esreveR");
    }

    #[test]
    fn marks_random_options() {
        let registry = Registry::standard();
        let mut rng = StdRng::seed_from_u64(0);
        let result = run(&registry, &Selection::new(), Some("Meme"), &mut rng).unwrap();
        let flags: Vec<_> = result.catalogue[0]
            .options
            .iter()
            .map(|o| (o.name.as_str(), o.random))
            .collect();
        assert_eq!(
            flags,
            vec![("Default", false), ("Leetspeak", true), ("Cow", false)]
        );
    }

    #[test]
    fn unknown_filter_is_an_error() {
        let registry = Registry::standard();
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            run(&registry, &Selection::new(), Some("Colors"), &mut rng),
            Err(TextChangerError::UnknownCategory(_))
        ));
    }
}
