use crate::selection::Selection;
use rand::RngCore;
use std::fmt;

/// Display name of the implicit identity option every category offers.
pub const DEFAULT_OPTION: &str = "Default";

pub type PureFn = fn(&str) -> String;
pub type RandomFn = fn(&str, &mut dyn RngCore) -> String;

/// The function behind a converter.
///
/// Randomized converters receive the caller's random source, so a seeded
/// generator makes their output reproducible.
#[derive(Clone, Copy)]
pub enum Transform {
    Pure(PureFn),
    Random(RandomFn),
}

impl Transform {
    pub fn apply(&self, text: &str, rng: &mut dyn RngCore) -> String {
        match self {
            Transform::Pure(f) => f(text),
            Transform::Random(f) => f(text, rng),
        }
    }

    pub fn is_random(&self) -> bool {
        matches!(self, Transform::Random(_))
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transform::Pure(_) => f.write_str("Pure"),
            Transform::Random(_) => f.write_str("Random"),
        }
    }
}

/// A named text transformation belonging to one category.
///
/// Two converters are equal when they share category and name.
#[derive(Debug, Clone, Copy)]
pub struct Converter {
    category: &'static str,
    name: &'static str,
    transform: Transform,
}

impl Converter {
    pub fn new(category: &'static str, name: &'static str, transform: Transform) -> Self {
        Self {
            category,
            name,
            transform,
        }
    }

    pub fn pure(category: &'static str, name: &'static str, f: PureFn) -> Self {
        Self::new(category, name, Transform::Pure(f))
    }

    pub fn random(category: &'static str, name: &'static str, f: RandomFn) -> Self {
        Self::new(category, name, Transform::Random(f))
    }

    pub fn category(&self) -> &'static str {
        self.category
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_random(&self) -> bool {
        self.transform.is_random()
    }

    pub fn apply(&self, text: &str, rng: &mut dyn RngCore) -> String {
        self.transform.apply(text, rng)
    }
}

impl PartialEq for Converter {
    fn eq(&self, other: &Self) -> bool {
        self.category == other.category && self.name == other.name
    }
}

impl Eq for Converter {}

impl fmt::Display for Converter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// One option inside a category: the identity or a concrete converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Default,
    Converter(Converter),
}

impl Choice {
    pub fn name(&self) -> &'static str {
        match self {
            Choice::Default => DEFAULT_OPTION,
            Choice::Converter(c) => c.name(),
        }
    }

    pub fn apply(&self, text: &str, rng: &mut dyn RngCore) -> String {
        match self {
            Choice::Default => text.to_string(),
            Choice::Converter(c) => c.apply(text, rng),
        }
    }
}

/// The editable state behind one session: the input text plus the active
/// selection. Output is never stored here; it is always recomputed.
#[derive(Debug, Clone, Default)]
pub struct Workbench {
    pub input: String,
    pub selection: Selection,
}

impl Workbench {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            selection: Selection::new(),
        }
    }
}
