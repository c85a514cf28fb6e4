use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

pub const DEFAULT_CAPACITY: usize = 20;

/// Recently accepted surface forms, most recent first.
///
/// Only ever a ranking signal; lookups compare case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecencySet {
    capacity: usize,
    forms: VecDeque<String>,
}

impl RecencySet {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            forms: VecDeque::new(),
        }
    }

    /// Rebuild from a persisted most-recent-first list
    pub fn from_forms(capacity: usize, forms: Vec<String>) -> Self {
        let mut set = Self::new(capacity);
        for form in forms.into_iter().rev() {
            set.record(&form);
        }
        set
    }

    pub fn record(&mut self, form: &str) {
        let form = form.trim().to_lowercase();
        if form.is_empty() {
            return;
        }
        self.forms.retain(|f| *f != form);
        self.forms.push_front(form);
        self.forms.truncate(self.capacity);
    }

    pub fn contains(&self, form: &str) -> bool {
        let form = form.to_lowercase();
        self.forms.iter().any(|f| *f == form)
    }

    pub fn forms(&self) -> Vec<String> {
        self.forms.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }
}

impl Default for RecencySet {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
