use crate::app::query::PrizeQuery;
use crate::domain::model::PrizeRow;
use crate::utils::error::{NobelError, Result};

pub const ALL_CATEGORIES: &str = "All categories";
pub const ALL_COUNTRIES: &str = "All countries";

/// Invoked with the value selected at the time of the call. The
/// placeholder maps to an empty filter.
pub type SelectHandler = fn(&mut PrizeQuery, &str) -> Vec<PrizeRow>;

/// Dropdown model: a placeholder followed by the options, with a single
/// handler fixed at construction.
#[derive(Debug, Clone)]
pub struct Selector {
    placeholder: &'static str,
    options: Vec<String>,
    selected: usize,
    on_select: SelectHandler,
}

impl Selector {
    pub fn new(placeholder: &'static str, options: Vec<String>, on_select: SelectHandler) -> Self {
        Self {
            placeholder,
            options,
            selected: 0,
            on_select,
        }
    }

    pub fn prize_selector(query: &PrizeQuery) -> Self {
        Self::new(
            ALL_CATEGORIES,
            query.get_prize_keys_in_order(),
            PrizeQuery::update_prize,
        )
    }

    /// Only countries with at least one laureate are offered.
    pub fn country_selector(query: &PrizeQuery) -> Self {
        let options = query
            .get_country_keys_in_order()
            .into_iter()
            .filter(|country| query.check_if_country_in_use(country))
            .collect();
        Self::new(ALL_COUNTRIES, options, PrizeQuery::update_country)
    }

    /// Placeholder first, then the options in order.
    pub fn items(&self) -> impl Iterator<Item = &str> + '_ {
        std::iter::once(self.placeholder).chain(self.options.iter().map(String::as_str))
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn value(&self) -> &str {
        match self.selected {
            0 => self.placeholder,
            n => self.options[n - 1].as_str(),
        }
    }

    pub fn is_placeholder_selected(&self) -> bool {
        self.selected == 0
    }

    pub fn select(&mut self, value: &str, query: &mut PrizeQuery) -> Result<Vec<PrizeRow>> {
        let position = self
            .items()
            .position(|item| item == value)
            .ok_or_else(|| {
                NobelError::validation(format!(
                    "'{}' is not one of the {} options",
                    value,
                    self.options.len()
                ))
            })?;
        self.selected = position;
        Ok(self.fire(query))
    }

    pub fn reset(&mut self, query: &mut PrizeQuery) -> Vec<PrizeRow> {
        self.selected = 0;
        self.fire(query)
    }

    fn fire(&self, query: &mut PrizeQuery) -> Vec<PrizeRow> {
        let filter = if self.is_placeholder_selected() {
            ""
        } else {
            self.value()
        };
        tracing::debug!("Selector '{}' changed to '{}'", self.placeholder, self.value());
        (self.on_select)(query, filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::aggregate::aggregate;
    use crate::core::prize_data::PrizeData;
    use crate::domain::model::{LaureateRecord, PrizeRecord};
    use std::sync::Arc;

    fn query() -> PrizeQuery {
        let data = aggregate(vec![
            PrizeRecord::new(
                "physics",
                1921,
                vec![LaureateRecord::new("26", "Albert Einstein").with_country("Germany")],
            ),
            PrizeRecord::new(
                "peace",
                1917,
                vec![LaureateRecord::new("482", "International Committee of the Red Cross")],
            ),
            PrizeRecord::new(
                "literature",
                1913,
                vec![LaureateRecord::new("587", "Rabindranath Tagore").with_country("India")],
            ),
        ]);
        PrizeQuery::new(Arc::new(PrizeData::new(data)))
    }

    #[test]
    fn test_prize_selector_items() {
        let query = query();
        let selector = Selector::prize_selector(&query);

        assert_eq!(
            selector.items().collect::<Vec<_>>(),
            vec![ALL_CATEGORIES, "physics", "peace", "literature"]
        );
        assert_eq!(selector.value(), ALL_CATEGORIES);
    }

    #[test]
    fn test_country_selector_skips_unused() {
        let query = query();
        let selector = Selector::country_selector(&query);

        assert_eq!(selector.options(), ["Germany", "India"]);
    }

    #[test]
    fn test_padded_values_are_offered_trimmed_and_selectable() {
        let data = aggregate(vec![PrizeRecord::new(
            " chemistry ",
            1918,
            vec![LaureateRecord::new("180", "Fritz Haber").with_country("Germany ")],
        )]);
        let mut query = PrizeQuery::new(Arc::new(PrizeData::new(data)));
        let mut prizes = Selector::prize_selector(&query);
        let mut countries = Selector::country_selector(&query);

        assert_eq!(prizes.options(), ["chemistry"]);
        assert_eq!(countries.options(), ["Germany"]);

        let rows = countries.select("Germany", &mut query).unwrap();
        assert_eq!(rows.len(), 1);
        let rows = prizes.select("chemistry", &mut query).unwrap();
        assert_eq!(rows[0].laureate.name(), "Fritz Haber");
        assert_eq!(rows[0].category, "chemistry");
    }

    #[test]
    fn test_each_selection_uses_current_value() {
        let mut query = query();
        let mut prizes = Selector::prize_selector(&query);

        let rows = prizes.select("peace", &mut query).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(query.prize_filter(), Some("peace"));

        let rows = prizes.select("literature", &mut query).unwrap();
        assert_eq!(rows[0].laureate.name(), "Rabindranath Tagore");
        assert_eq!(query.prize_filter(), Some("literature"));

        let rows = prizes.select(ALL_CATEGORIES, &mut query).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(query.prize_filter(), None);
    }

    #[test]
    fn test_country_and_prize_selectors_stack() {
        let mut query = query();
        let mut prizes = Selector::prize_selector(&query);
        let mut countries = Selector::country_selector(&query);

        countries.select("India", &mut query).unwrap();
        let rows = prizes.select("physics", &mut query).unwrap();
        assert!(rows.is_empty());

        let rows = countries.reset(&mut query);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].laureate.name(), "Albert Einstein");
    }

    #[test]
    fn test_unknown_value_is_rejected() {
        let mut query = query();
        let mut prizes = Selector::prize_selector(&query);
        prizes.select("physics", &mut query).unwrap();

        let err = prizes.select("poetry", &mut query).unwrap_err();

        assert!(matches!(err, NobelError::ValidationError { .. }));
        assert_eq!(prizes.value(), "physics");
        assert_eq!(query.prize_filter(), Some("physics"));
    }
}
