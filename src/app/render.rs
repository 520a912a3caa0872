use crate::domain::model::PrizeRow;
use crate::utils::error::{NobelError, Result};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, Table};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

const CSV_HEADER: [&str; 5] = ["category", "year", "id", "name", "country"];

pub fn render_rows(rows: &[PrizeRow], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(rows)),
        OutputFormat::Csv => render_csv(rows),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(rows)?),
    }
}

pub fn render_keys(keys: &[String], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table | OutputFormat::Csv => Ok(keys.join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(keys)?),
    }
}

fn render_table(rows: &[PrizeRow]) -> String {
    if rows.is_empty() {
        return "No laureates match the current selection.".to_string();
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(vec!["CATEGORY", "YEAR", "NAME", "COUNTRY"]);

    for row in rows {
        table.add_row(vec![
            Cell::new(&row.category),
            Cell::new(row.year).set_alignment(CellAlignment::Right),
            Cell::new(row.laureate.name()),
            Cell::new(row.laureate.country().unwrap_or("-")),
        ]);
    }
    table.to_string()
}

fn render_csv(rows: &[PrizeRow]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;
    for row in rows {
        let year = row.year.to_string();
        writer.write_record([
            row.category.as_str(),
            year.as_str(),
            row.laureate.id(),
            row.laureate.name(),
            row.laureate.country().unwrap_or(""),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| NobelError::IoError(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| NobelError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::LaureateRecord;

    fn rows() -> Vec<PrizeRow> {
        vec![
            PrizeRow {
                category: "physics".to_string(),
                year: 1921,
                laureate: LaureateRecord::new("26", "Albert Einstein").with_country("Germany"),
            },
            PrizeRow {
                category: "peace".to_string(),
                year: 1917,
                laureate: LaureateRecord::new("482", "Red Cross, International Committee"),
            },
        ]
    }

    #[test]
    fn test_csv_has_header_and_quotes_commas() {
        let csv = render_rows(&rows(), OutputFormat::Csv).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "category,year,id,name,country");
        assert_eq!(lines[1], "physics,1921,26,Albert Einstein,Germany");
        assert_eq!(lines[2], "peace,1917,482,\"Red Cross, International Committee\",");
    }

    #[test]
    fn test_json_is_parseable() {
        let json = render_rows(&rows(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["category"], "physics");
        assert_eq!(value[0]["laureate"]["name"], "Albert Einstein");
        assert!(value[1]["laureate"].get("country").is_none());
    }

    /// Terminal columns taken by `text`; CJK ideographs occupy two.
    fn display_width(text: &str) -> usize {
        text.chars()
            .map(|c| if ('\u{4E00}'..='\u{9FFF}').contains(&c) { 2 } else { 1 })
            .sum()
    }

    fn column_of(line: &str, needle: &str) -> usize {
        let byte_pos = line.find(needle).unwrap();
        display_width(&line[..byte_pos])
    }

    #[test]
    fn test_table_has_header_and_rows() {
        let table = render_rows(&rows(), OutputFormat::Table).unwrap();

        for heading in ["CATEGORY", "YEAR", "NAME", "COUNTRY"] {
            assert!(table.contains(heading));
        }
        let einstein = table.lines().find(|l| l.contains("Albert Einstein")).unwrap();
        assert!(einstein.contains("physics"));
        assert!(einstein.contains("1921"));
        assert!(einstein.contains("Germany"));

        let red_cross = table.lines().find(|l| l.contains("Red Cross")).unwrap();
        assert!(red_cross.contains(" - "));
    }

    #[test]
    fn test_table_aligns_wide_characters() {
        let rows = vec![
            PrizeRow {
                category: "physics".to_string(),
                year: 1949,
                laureate: LaureateRecord::new("64", "湯川秀樹").with_country("Japan"),
            },
            PrizeRow {
                category: "physics".to_string(),
                year: 1921,
                laureate: LaureateRecord::new("26", "Albert E").with_country("Germany"),
            },
        ];

        let table = render_rows(&rows, OutputFormat::Table).unwrap();
        let yukawa = table.lines().find(|l| l.contains("Japan")).unwrap();
        let einstein = table.lines().find(|l| l.contains("Germany")).unwrap();

        assert_eq!(column_of(yukawa, "Japan"), column_of(einstein, "Germany"));
    }

    #[test]
    fn test_empty_table_message() {
        let table = render_rows(&[], OutputFormat::Table).unwrap();
        assert_eq!(table, "No laureates match the current selection.");
    }

    #[test]
    fn test_render_keys() {
        let keys = vec!["physics".to_string(), "peace".to_string()];

        assert_eq!(render_keys(&keys, OutputFormat::Table).unwrap(), "physics\npeace");
        let json = render_keys(&keys, OutputFormat::Json).unwrap();
        assert_eq!(serde_json::from_str::<Vec<String>>(&json).unwrap(), keys);
    }
}
