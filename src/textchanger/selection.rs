//! # Selection State
//!
//! `Selection` is the active pipeline: the ordered list of non-identity
//! converters currently chosen, at most one per category. Order is the order
//! in which each category's choice most recently became active, which is the
//! order the pipeline applies them in.
//!
//! Choosing a converter for a category drops that category's previous entry
//! and appends the new one at the end. Choosing `Default` drops the entry
//! without appending anything.

use crate::model::{Choice, Converter};
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    active: Vec<Converter>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `choice` the selected option of `category`.
    ///
    /// A converter choice must belong to `category`.
    pub fn select(&mut self, category: &str, choice: Choice) {
        self.active.retain(|c| c.category() != category);
        if let Choice::Converter(converter) = choice {
            debug_assert_eq!(converter.category(), category);
            self.active.push(converter);
        }
        debug!(category, option = choice.name(), active = self.active.len(), "selection changed");
    }

    pub fn reset(&mut self) {
        self.active.clear();
        debug!("selection reset");
    }

    /// Active converters in application order.
    pub fn active(&self) -> &[Converter] {
        &self.active
    }

    /// The option currently selected in `category`.
    pub fn choice_of(&self, category: &str) -> Choice {
        self.active
            .iter()
            .find(|c| c.category() == category)
            .copied()
            .map(Choice::Converter)
            .unwrap_or(Choice::Default)
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }
}
