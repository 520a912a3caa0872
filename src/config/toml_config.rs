use crate::app::render::OutputFormat;
use crate::core::pipeline::DEFAULT_API_ENDPOINT;
use crate::core::ConfigProvider;
use crate::utils::error::{NobelError, Result};
use crate::utils::validation::{validate_optional_filter, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub source: SourceConfig,
    pub display: Option<DisplayConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_API_ENDPOINT.to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub category: Option<String>,
    pub country: Option<String>,
    pub format: Option<OutputFormat>,
}

impl TomlConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| NobelError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Expand `${VAR}` references; unset variables are left untouched.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| NobelError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl ConfigProvider for TomlConfig {
    fn api_endpoint(&self) -> &str {
        &self.source.endpoint
    }

    fn category_filter(&self) -> Option<&str> {
        self.display.as_ref().and_then(|d| d.category.as_deref())
    }

    fn country_filter(&self) -> Option<&str> {
        self.display.as_ref().and_then(|d| d.country.as_deref())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_url("source.endpoint", &self.source.endpoint)?;
        validate_optional_filter("display.category", self.category_filter())?;
        validate_optional_filter("display.country", self.country_filter())?;
        Ok(())
    }
}
