//! Decoding of the `prize.json` payload.
//!
//! The API encodes years, ids and shares as JSON strings holding integers;
//! older dumps and test fixtures use plain numbers. Both are accepted.

use crate::domain::model::{LaureateRecord, PrizeRecord};
use crate::utils::error::Result;
use serde::de::{self, Deserializer};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct PrizeResponse {
    prizes: Vec<RawPrize>,
}

#[derive(Debug, Deserialize)]
struct RawPrize {
    #[serde(deserialize_with = "integer_from_string_or_number")]
    year: i32,
    category: String,
    #[serde(default)]
    laureates: Vec<RawLaureate>,
}

#[derive(Debug, Deserialize)]
struct RawLaureate {
    #[serde(deserialize_with = "string_from_string_or_number")]
    id: String,
    firstname: String,
    #[serde(default)]
    surname: Option<String>,
    #[serde(default)]
    motivation: Option<String>,
    #[serde(default, deserialize_with = "optional_integer_from_string_or_number")]
    share: Option<u32>,
    #[serde(default)]
    country: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    Str(String),
    Num(i64),
}

fn integer_from_string_or_number<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64>,
{
    let raw = match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::Str(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| de::Error::custom(format!("expected an integer, got \"{}\"", s)))?,
        StringOrNumber::Num(n) => n,
    };
    T::try_from(raw).map_err(|_| de::Error::custom(format!("integer {} out of range", raw)))
}

fn optional_integer_from_string_or_number<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    integer_from_string_or_number(deserializer).map(Some)
}

fn string_from_string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::Str(s) => s,
        StringOrNumber::Num(n) => n.to_string(),
    })
}

impl From<RawLaureate> for LaureateRecord {
    fn from(raw: RawLaureate) -> Self {
        let name = match raw.surname.as_deref().map(str::trim) {
            Some(surname) if !surname.is_empty() => format!("{} {}", raw.firstname.trim(), surname),
            _ => raw.firstname.trim().to_string(),
        };

        let mut laureate = LaureateRecord::new(raw.id, name);
        if let Some(country) = raw.country {
            laureate = laureate.with_country(country);
        }
        if let Some(motivation) = raw.motivation {
            laureate = laureate.with_motivation(motivation);
        }
        if let Some(share) = raw.share {
            laureate = laureate.with_share(share);
        }
        laureate
    }
}

/// Parse the raw body into prize records, keeping source order.
pub fn decode(raw: &str) -> Result<Vec<PrizeRecord>> {
    let response: PrizeResponse = serde_json::from_str(raw)?;

    let records: Vec<PrizeRecord> = response
        .prizes
        .into_iter()
        .map(|prize| PrizeRecord {
            category: prize.category,
            year: prize.year,
            laureates: prize.laureates.into_iter().map(LaureateRecord::from).collect(),
        })
        .collect();

    tracing::debug!("Decoded {} prize records", records.len());
    Ok(records)
}
