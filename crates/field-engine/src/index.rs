//! Section locators recovered from a flat text rendering
//!
//! The structured paragraph stream loses automatic numbering; the flat
//! rendering keeps it ("1.1 Nome completo"). Locators are queued per label
//! key in rendering order and handed out first-seen, first-assigned, so
//! repeated labels receive distinct locators as long as both renderings
//! agree on document order.

use crate::normalize::normalize_key;
use crate::patterns::parse_locator_line;
use std::collections::{HashMap, VecDeque};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocatorIndex {
    entries: HashMap<String, VecDeque<String>>,
}

impl LocatorIndex {
    /// Index for a document without a flat rendering: nothing resolves
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_flat_text(text: &str) -> Self {
        Self::from_lines(text.lines())
    }

    /// Lines that do not start with a locator, or whose label is empty,
    /// are ignored.
    pub fn from_lines<'a, I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut entries: HashMap<String, VecDeque<String>> = HashMap::new();

        for line in lines {
            let line = line.trim_start_matches('\u{feff}').trim();
            if line.is_empty() {
                continue;
            }
            let Some((locator, label)) = parse_locator_line(line) else {
                continue;
            };
            if label.is_empty() {
                continue;
            }
            entries
                .entry(normalize_key(label))
                .or_default()
                .push_back(locator.to_string());
        }

        Self { entries }
    }

    /// Next unassigned locator for `key`
    pub fn assign(&mut self, key: &str) -> Option<String> {
        self.entries.get_mut(key).and_then(VecDeque::pop_front)
    }

    /// Locators not yet assigned
    pub fn remaining(&self) -> usize {
        self.entries.values().map(VecDeque::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }
}
