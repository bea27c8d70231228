//! Running statement counters

use crate::classify::Category;

/// Per-category statement counts for the current import
///
/// The total is never stored; it is always the sum of the three categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counters {
    pub tables: u64,
    pub inserts: u64,
    pub others: u64,
}

impl Counters {
    /// Count one line under `category`
    pub fn record(&mut self, category: Category) {
        match category {
            Category::Table => self.tables += 1,
            Category::Insert => self.inserts += 1,
            Category::Other => self.others += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.tables + self.inserts + self.others
    }
}
