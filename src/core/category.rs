use crate::domain::model::{LaureateRecord, YearEntry};
use std::collections::HashMap;

/// Laureates of one prize category keyed by year.
///
/// Years iterate in the order they were first added. Adding a year that is
/// already present replaces its laureates but keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Category {
    entries: Vec<YearEntry>,
    index: HashMap<i32, usize>,
}

impl Category {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the laureates previously stored for `year`, if any.
    pub fn add(&mut self, year: i32, laureates: Vec<LaureateRecord>) -> Option<Vec<LaureateRecord>> {
        match self.index.get(&year).copied() {
            Some(pos) => Some(std::mem::replace(&mut self.entries[pos].laureates, laureates)),
            None => {
                self.index.insert(year, self.entries.len());
                self.entries.push(YearEntry { year, laureates });
                None
            }
        }
    }

    pub fn get(&self, year: i32) -> Option<&[LaureateRecord]> {
        self.index
            .get(&year)
            .map(|&pos| self.entries[pos].laureates.as_slice())
    }

    pub fn contains_year(&self, year: i32) -> bool {
        self.index.contains_key(&year)
    }

    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.entries.iter().map(|entry| entry.year)
    }

    pub fn entries(&self) -> &[YearEntry] {
        &self.entries
    }

    pub fn laureates(&self) -> impl Iterator<Item = &LaureateRecord> + '_ {
        self.entries.iter().flat_map(|entry| entry.laureates.iter())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for entry in &self.entries {
            let names: Vec<&str> = entry.laureates.iter().map(LaureateRecord::name).collect();
            writeln!(f, "  {}: {}", entry.year, names.join(", "))?;
        }
        Ok(())
    }
}
