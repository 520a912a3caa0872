use crate::core::prize_data::PrizeData;
use crate::domain::model::PrizeRow;
use std::sync::Arc;

/// Read-only queries over a shared snapshot, plus the current filter pair.
///
/// Filters live here, never in the snapshot, so any number of queries can
/// share one `Arc<PrizeData>`.
#[derive(Debug, Clone)]
pub struct PrizeQuery {
    data: Arc<PrizeData>,
    prize_filter: Option<String>,
    country_filter: Option<String>,
}

fn normalise(filter: &str) -> Option<String> {
    let filter = filter.trim();
    if filter.is_empty() {
        None
    } else {
        Some(filter.to_string())
    }
}

impl PrizeQuery {
    pub fn new(data: Arc<PrizeData>) -> Self {
        Self {
            data,
            prize_filter: None,
            country_filter: None,
        }
    }

    pub fn snapshot(&self) -> &Arc<PrizeData> {
        &self.data
    }

    pub fn get_prize_keys_in_order(&self) -> Vec<String> {
        self.data.list_category_keys().to_vec()
    }

    pub fn get_country_keys_in_order(&self) -> Vec<String> {
        self.data
            .list_country_keys()
            .iter()
            .filter(|country| self.data.is_country_referenced(country))
            .cloned()
            .collect()
    }

    pub fn check_if_country_in_use(&self, country: &str) -> bool {
        self.data.is_country_referenced(country)
    }

    /// An empty filter clears the category selection.
    pub fn update_prize(&mut self, filter: &str) -> Vec<PrizeRow> {
        self.prize_filter = normalise(filter);
        if let Some(category) = &self.prize_filter {
            if self.data.category(category).is_none() {
                tracing::warn!("Category filter '{}' matches no prizes", category);
            }
        }
        self.current_view()
    }

    /// An empty filter clears the country selection.
    pub fn update_country(&mut self, filter: &str) -> Vec<PrizeRow> {
        self.country_filter = normalise(filter);
        if let Some(country) = &self.country_filter {
            if !self.data.is_country_referenced(country) {
                tracing::warn!("Country filter '{}' matches no laureates", country);
            }
        }
        self.current_view()
    }

    pub fn prize_filter(&self) -> Option<&str> {
        self.prize_filter.as_deref()
    }

    pub fn country_filter(&self) -> Option<&str> {
        self.country_filter.as_deref()
    }

    pub fn current_view(&self) -> Vec<PrizeRow> {
        let prize_filter = self.prize_filter.as_deref();
        let country_filter = self.country_filter.as_deref();

        self.data
            .data()
            .iter()
            .filter(|(name, _)| prize_filter.map_or(true, |wanted| *name == wanted))
            .flat_map(|(name, category)| {
                category.entries().iter().flat_map(move |entry| {
                    entry
                        .laureates
                        .iter()
                        .filter(move |laureate| {
                            country_filter.map_or(true, |wanted| laureate.country() == Some(wanted))
                        })
                        .map(move |laureate| PrizeRow {
                            category: name.to_string(),
                            year: entry.year,
                            laureate: laureate.clone(),
                        })
                })
            })
            .collect()
    }
}
