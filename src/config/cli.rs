use crate::app::render::OutputFormat;
use crate::config::toml_config::TomlConfig;
use crate::core::pipeline::DEFAULT_API_ENDPOINT;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_optional_filter, validate_url, Validate};
use clap::Parser;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "nobel-explorer")]
#[command(about = "Browse Nobel Prize laureates by category and country")]
pub struct CliConfig {
    /// Prize API endpoint [default: http://api.nobelprize.org/v1/prize.json?]
    #[arg(long)]
    pub api_endpoint: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Only show this prize category (e.g. physics)
    #[arg(long)]
    pub category: Option<String>,

    /// Only show laureates from this country
    #[arg(long)]
    pub country: Option<String>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Print the prize categories and exit
    #[arg(long, conflicts_with = "list_countries")]
    pub list_categories: bool,

    /// Print the countries with at least one laureate and exit
    #[arg(long)]
    pub list_countries: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    /// Fill anything not given on the command line from the file.
    pub fn merge_file(mut self, file: &TomlConfig) -> Self {
        if self.api_endpoint.is_none() {
            self.api_endpoint = Some(file.source.endpoint.clone());
        }
        if let Some(display) = &file.display {
            if self.category.is_none() {
                self.category = display.category.clone();
            }
            if self.country.is_none() {
                self.country = display.country.clone();
            }
            if self.format.is_none() {
                self.format = display.format;
            }
        }
        self
    }

    pub fn output_format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }
}

impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        self.api_endpoint.as_deref().unwrap_or(DEFAULT_API_ENDPOINT)
    }

    fn category_filter(&self) -> Option<&str> {
        self.category.as_deref()
    }

    fn country_filter(&self) -> Option<&str> {
        self.country.as_deref()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_endpoint", self.api_endpoint())?;
        validate_optional_filter("category", self.category_filter())?;
        validate_optional_filter("country", self.country_filter())?;
        Ok(())
    }
}
