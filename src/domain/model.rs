use serde::Serialize;

/// A person or organisation awarded a prize. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaureateRecord {
    id: String,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    motivation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    share: Option<u32>,
}

impl LaureateRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            country: None,
            motivation: None,
            share: None,
        }
    }

    /// Surrounding whitespace is dropped; blank countries are treated as absent.
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        let country = country.into();
        let country = country.trim();
        self.country = if country.is_empty() {
            None
        } else {
            Some(country.to_string())
        };
        self
    }

    pub fn with_motivation(mut self, motivation: impl Into<String>) -> Self {
        self.motivation = Some(motivation.into());
        self
    }

    pub fn with_share(mut self, share: u32) -> Self {
        self.share = Some(share);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    pub fn motivation(&self) -> Option<&str> {
        self.motivation.as_deref()
    }

    pub fn share(&self) -> Option<u32> {
        self.share
    }
}

/// One prize as emitted by the API, before aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrizeRecord {
    pub category: String,
    pub year: i32,
    pub laureates: Vec<LaureateRecord>,
}

impl PrizeRecord {
    pub fn new(category: impl Into<String>, year: i32, laureates: Vec<LaureateRecord>) -> Self {
        Self {
            category: category.into(),
            year,
            laureates,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearEntry {
    pub year: i32,
    pub laureates: Vec<LaureateRecord>,
}

/// A single line of the filtered view handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrizeRow {
    pub category: String,
    pub year: i32,
    pub laureate: LaureateRecord,
}
