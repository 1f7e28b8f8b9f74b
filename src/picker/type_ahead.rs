use crate::api::PaymentOption;
use log::debug;
use std::collections::HashMap;

/// Keyboard search that jumps to options by their first letter
///
/// Repeated presses of the same letter walk through every option starting
/// with it and wrap around. A matching press of a different letter starts
/// that letter over and forgets the previous one. Cursors survive closing
/// and reopening the dropdown.
#[derive(Debug, Clone, Default)]
pub struct TypeAheadCycler {
    cursors: HashMap<char, usize>,
}

impl TypeAheadCycler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Find the option to activate for `key`, advancing its cursor on a match
    pub fn next<'a>(&mut self, key: char, options: &'a [PaymentOption]) -> Option<&'a PaymentOption> {
        let key = key.to_lowercase().next()?;
        let candidates: Vec<&PaymentOption> = options
            .iter()
            .filter(|option| option.initial() == Some(key))
            .collect();

        if candidates.is_empty() {
            return None;
        }

        let cursor = self.cursors.get(&key).copied().unwrap_or(0);
        let index = if cursor < candidates.len() { cursor } else { 0 };
        self.cursors.retain(|k, _| *k == key);
        self.cursors.insert(key, index + 1);

        let target = candidates[index];
        debug!("Type-ahead '{}' matched {} ({}/{})", key, target.name, index + 1, candidates.len());
        Some(target)
    }

    /// Current cursor for a character, if it has ever matched
    pub fn cursor(&self, key: char) -> Option<usize> {
        key.to_lowercase()
            .next()
            .and_then(|key| self.cursors.get(&key).copied())
    }

    pub fn reset(&mut self) {
        self.cursors.clear();
    }
}
