use crate::core::aggregate::AggregatedData;
use crate::core::category::Category;
use std::collections::HashSet;
use std::fmt;

const NAME: &str = "Prize data.";
const INFO: &str = "Map of prizes, years, and their laureates.";

/// Read-only snapshot of the aggregated prizes.
///
/// Key listings are computed once here; callers that need an owned,
/// mutable map get one through [`PrizeData::copy`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrizeData {
    data: AggregatedData,
    category_keys: Vec<String>,
    country_keys: Vec<String>,
    countries: HashSet<String>,
}

impl PrizeData {
    pub fn new(data: AggregatedData) -> Self {
        let category_keys = data.category_keys();
        let country_keys = data.country_keys();
        let countries = country_keys.iter().cloned().collect();

        Self {
            data,
            category_keys,
            country_keys,
            countries,
        }
    }

    pub fn list_category_keys(&self) -> &[String] {
        &self.category_keys
    }

    pub fn list_country_keys(&self) -> &[String] {
        &self.country_keys
    }

    pub fn is_country_referenced(&self, country: &str) -> bool {
        self.countries.contains(country)
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.data.get(name)
    }

    pub fn data(&self) -> &AggregatedData {
        &self.data
    }

    /// Deep copy: fresh maps and cloned laureate records.
    pub fn copy(&self) -> AggregatedData {
        self.data.clone()
    }

    pub fn name(&self) -> &str {
        NAME
    }

    pub fn info(&self) -> &str {
        INFO
    }
}

impl From<AggregatedData> for PrizeData {
    fn from(data: AggregatedData) -> Self {
        Self::new(data)
    }
}

impl fmt::Display for PrizeData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name())?;
        writeln!(f, "{}", self.info())?;
        for (name, category) in self.data.iter() {
            writeln!(f, "{}", name)?;
            write!(f, "{}", category)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::aggregate::aggregate;
    use crate::domain::model::{LaureateRecord, PrizeRecord};

    fn sample() -> PrizeData {
        PrizeData::new(aggregate(vec![
            PrizeRecord::new(
                "chemistry",
                1911,
                vec![LaureateRecord::new("6", "Marie Curie").with_country("Poland")],
            ),
            PrizeRecord::new(
                "physics",
                1903,
                vec![
                    LaureateRecord::new("4", "Henri Becquerel").with_country("France"),
                    LaureateRecord::new("6", "Marie Curie").with_country("Poland"),
                ],
            ),
            PrizeRecord::new("peace", 1917, vec![LaureateRecord::new("482", "Red Cross")]),
        ]))
    }

    #[test]
    fn test_cached_key_listings() {
        let data = sample();

        assert_eq!(data.list_category_keys(), ["chemistry", "physics", "peace"]);
        assert_eq!(data.list_country_keys(), ["Poland", "France"]);
    }

    #[test]
    fn test_country_membership() {
        let data = sample();

        assert!(data.is_country_referenced("France"));
        assert!(data.is_country_referenced("Poland"));
        assert!(!data.is_country_referenced("Germany"));
        assert!(!data.is_country_referenced(""));
    }

    #[test]
    fn test_copy_is_independent() {
        let data = sample();
        let mut copy = data.copy();
        assert_eq!(&copy, data.data());

        copy.get_mut("physics").unwrap().add(1904, vec![]);
        copy.remove("peace");

        assert!(!data.category("physics").unwrap().contains_year(1904));
        assert!(data.category("peace").is_some());
        assert_eq!(data.list_category_keys().len(), 3);
    }

    #[test]
    fn test_display_has_header_and_categories() {
        let text = sample().to_string();

        assert!(text.starts_with("Prize data.\nMap of prizes, years, and their laureates.\n"));
        assert!(text.contains("physics\n  1903: Henri Becquerel, Marie Curie\n"));
        assert!(text.contains("peace\n  1917: Red Cross\n"));
    }
}
