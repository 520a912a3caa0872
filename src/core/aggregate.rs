//! Folding flat prize records into category → year → laureates.

use crate::core::category::Category;
use crate::domain::model::{LaureateRecord, PrizeRecord};
use std::collections::{HashMap, HashSet};

/// Categories keyed by name, iterated in first-insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregatedData {
    order: Vec<String>,
    categories: HashMap<String, Category>,
    countries: Vec<String>,
}

impl AggregatedData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one record, creating its category on first sight. Category names
    /// are stored trimmed.
    pub fn insert(&mut self, record: PrizeRecord) {
        let PrizeRecord {
            category,
            year,
            laureates,
        } = record;
        let category = category.trim().to_string();

        for country in laureates.iter().filter_map(LaureateRecord::country) {
            if !self.countries.iter().any(|seen| seen == country) {
                self.countries.push(country.to_string());
            }
        }

        if !self.categories.contains_key(&category) {
            self.order.push(category.clone());
        }
        let current = self.categories.entry(category.clone()).or_default();
        if current.add(year, laureates).is_some() {
            tracing::warn!(
                "Duplicate {} prize entry for year {}, keeping the latest",
                category,
                year
            );
        }
    }

    pub fn get(&self, category: &str) -> Option<&Category> {
        self.categories.get(category)
    }

    pub fn get_mut(&mut self, category: &str) -> Option<&mut Category> {
        self.categories.get_mut(category)
    }

    pub fn remove(&mut self, category: &str) -> Option<Category> {
        let removed = self.categories.remove(category)?;
        self.order.retain(|key| key != category);
        Some(removed)
    }

    pub fn contains(&self, category: &str) -> bool {
        self.categories.contains_key(category)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Category)> + '_ {
        self.order
            .iter()
            .filter_map(|key| self.categories.get(key).map(|c| (key.as_str(), c)))
    }

    pub fn category_keys(&self) -> Vec<String> {
        self.order.clone()
    }

    /// Distinct non-empty countries in the order records introduced them.
    /// Countries whose laureates were all overwritten are left out; any added
    /// later through [`Category`] directly follow in traversal order.
    pub fn country_keys(&self) -> Vec<String> {
        let present: HashSet<&str> = self.laureates().filter_map(LaureateRecord::country).collect();

        let mut seen = HashSet::new();
        self.countries
            .iter()
            .map(String::as_str)
            .filter(|country| present.contains(country))
            .chain(self.laureates().filter_map(LaureateRecord::country))
            .filter(|country| seen.insert(*country))
            .map(str::to_string)
            .collect()
    }

    pub fn laureates(&self) -> impl Iterator<Item = &LaureateRecord> + '_ {
        self.iter().flat_map(|(_, category)| category.laureates())
    }

    /// Inverse of [`aggregate`].
    pub fn flatten(&self) -> Vec<PrizeRecord> {
        self.iter()
            .flat_map(|(name, category)| {
                category.entries().iter().map(move |entry| PrizeRecord {
                    category: name.to_string(),
                    year: entry.year,
                    laureates: entry.laureates.clone(),
                })
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Group records by category then year. Last write wins on a repeated
/// category and year. Never fails.
pub fn aggregate(records: Vec<PrizeRecord>) -> AggregatedData {
    let mut data = AggregatedData::new();
    for record in records {
        data.insert(record);
    }
    tracing::debug!("Aggregated into {} categories", data.len());
    data
}
