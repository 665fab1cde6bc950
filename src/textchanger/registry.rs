//! # Converter Registry
//!
//! The catalogue of available converters, grouped by category. Display order
//! is insertion order, both for categories and for converters inside a
//! category. Every category also offers the implicit `Default` option, which
//! is not stored here: callers add it (see [`Category::options`]).
//!
//! A registry never changes after construction. [`Registry::standard`] returns
//! the built-in catalogue; [`Registry::new`] validates a custom one.
//!
//! ## Name Resolution
//!
//! User interfaces address categories and options by name. Lookups through
//! [`Registry::find_category`] and [`Registry::resolve`] ignore case and treat
//! `-` and `_` like spaces, so `code-style=snake_case` resolves the same as
//! `Code Style=Snake Case`.

use crate::converters::{case, code_style, direction, encoding, fancy, glitch, meme};
use crate::error::{Result, TextChangerError};
use crate::model::{Choice, Converter, PureFn, RandomFn, DEFAULT_OPTION};
use rand::RngCore;
use std::collections::HashSet;

/// A named group of mutually exclusive converters.
#[derive(Debug, Clone)]
pub struct Category {
    name: &'static str,
    converters: Vec<Converter>,
}

impl Category {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            converters: Vec::new(),
        }
    }

    pub fn pure(mut self, name: &'static str, f: PureFn) -> Self {
        self.converters.push(Converter::pure(self.name, name, f));
        self
    }

    pub fn random(mut self, name: &'static str, f: RandomFn) -> Self {
        self.converters.push(Converter::random(self.name, name, f));
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn converters(&self) -> &[Converter] {
        &self.converters
    }

    /// All options in display order, `Default` first.
    pub fn options(&self) -> impl Iterator<Item = Choice> + '_ {
        std::iter::once(Choice::Default).chain(self.converters.iter().copied().map(Choice::Converter))
    }

    /// Resolves an option name, accepting `Default` for the identity.
    pub fn option(&self, query: &str) -> Option<Choice> {
        let wanted = normalize_name(query);
        if wanted == normalize_name(DEFAULT_OPTION) {
            return Some(Choice::Default);
        }
        self.converters
            .iter()
            .find(|c| normalize_name(c.name()) == wanted)
            .copied()
            .map(Choice::Converter)
    }
}

#[derive(Debug, Clone)]
pub struct Registry {
    categories: Vec<Category>,
}

impl Registry {
    /// Builds a registry, rejecting duplicate category names and duplicate
    /// converter names within a category.
    pub fn new(categories: Vec<Category>) -> Result<Self> {
        let mut seen_categories = HashSet::new();
        for category in &categories {
            if !seen_categories.insert(category.name) {
                return Err(TextChangerError::DuplicateCategory(category.name.to_string()));
            }
            let mut seen_names = HashSet::new();
            for converter in &category.converters {
                if converter.name() == DEFAULT_OPTION || !seen_names.insert(converter.name()) {
                    return Err(TextChangerError::DuplicateConverter {
                        category: category.name.to_string(),
                        name: converter.name().to_string(),
                    });
                }
            }
        }
        Ok(Self { categories })
    }

    /// The built-in catalogue, checked by the same rules as [`Registry::new`].
    ///
    /// # Panics
    ///
    /// If the built-in catalogue breaks those rules, which is a bug in this
    /// crate rather than a runtime condition.
    pub fn standard() -> Self {
        Self::new(standard_categories()).expect("built-in catalogue has duplicate names")
    }

    pub fn categories(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.categories.iter().map(|c| c.name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Category> {
        self.categories.iter()
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Converters of `category` in display order, identity excluded.
    /// Unknown categories have no converters.
    pub fn converters_of(&self, category: &str) -> &[Converter] {
        self.category(category)
            .map(Category::converters)
            .unwrap_or(&[])
    }

    pub fn find_category(&self, query: &str) -> Result<&Category> {
        let wanted = normalize_name(query);
        self.categories
            .iter()
            .find(|c| normalize_name(c.name) == wanted)
            .ok_or_else(|| TextChangerError::UnknownCategory(query.trim().to_string()))
    }

    /// Resolves a `(category, option)` pair typed by a user.
    pub fn resolve(&self, category: &str, option: &str) -> Result<(&'static str, Choice)> {
        let found = self.find_category(category)?;
        let choice = found
            .option(option)
            .ok_or_else(|| TextChangerError::UnknownConverter {
                category: found.name.to_string(),
                name: option.trim().to_string(),
            })?;
        Ok((found.name, choice))
    }

    pub fn transform(&self, converter: &Converter, text: &str, rng: &mut dyn RngCore) -> String {
        converter.apply(text, rng)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::standard()
    }
}

/// Lowercases and folds `-`, `_` and whitespace runs into single spaces.
pub fn normalize_name(name: &str) -> String {
    name.split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn standard_categories() -> Vec<Category> {
    vec![
        Category::new("Case")
            .pure("Lower Case", case::lower)
            .pure("Upper Case", case::upper)
            .pure("Title Case", case::title)
            .random("Random Case", case::random),
        Category::new("Code Style")
            .pure("Snake Case", code_style::snake)
            .pure("Screaming Snake Case", code_style::screaming_snake)
            .pure("Camel Case", code_style::camel)
            .pure("Pascal Case", code_style::pascal),
        Category::new("Binary Encoding")
            .pure("ASCII", encoding::ascii_binary)
            .pure("Unicode UTF-8", encoding::utf8_binary),
        Category::new("Unicode")
            .pure("Decimal", encoding::decimal)
            .pure("Code", encoding::code),
        Category::new("Glitched")
            .random("Slightly Cursed", glitch::slightly)
            .random("Medium Cursed", glitch::medium)
            .random("Very Cursed", glitch::very),
        Category::new("Direction").pure("Reverse", direction::reverse),
        Category::new("Meme")
            .random("Leetspeak", meme::leetspeak)
            .pure("Cow", meme::cow),
        Category::new("Fancy")
            .pure("Circle", fancy::circle)
            .pure("Filled Circle", fancy::filled_circle),
    ]
}
