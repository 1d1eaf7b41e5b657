use crate::adapters::http::DEFAULT_TIMEOUT_SECONDS;
use crate::config::DOWNLOAD_DIR_DEFAULT;
use crate::domain::directory::{CourtCategory, CourtDirectory, CourtEntry};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{LookupError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub service: ServiceConfig,
    pub downloads: Option<DownloadsConfig>,
    pub courts: Option<CourtsConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub base_url: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadsConfig {
    pub output_path: String,
}

/// Overrides for the built-in court directory. A category that is not
/// given keeps its defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourtsConfig {
    pub high: Option<Vec<CourtEntry>>,
    pub district: Option<Vec<CourtEntry>>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| LookupError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${COURT_API_URL})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        crate::utils::validation::validate_url("service.base_url", &self.service.base_url)?;

        if let Some(timeout) = self.service.timeout_seconds {
            crate::utils::validation::validate_range("service.timeout_seconds", timeout, 1, 600)?;
        }

        if let Some(downloads) = &self.downloads {
            crate::utils::validation::validate_path("downloads.output_path", &downloads.output_path)?;
        }

        if let Some(courts) = &self.courts {
            if let Some(high) = &courts.high {
                validate_court_entries("courts.high", high)?;
            }
            if let Some(district) = &courts.district {
                validate_court_entries("courts.district", district)?;
            }
        }

        Ok(())
    }

    /// Builds the directory the controller runs with: configured
    /// categories replace the built-in tables, missing ones keep them.
    pub fn court_directory(&self) -> CourtDirectory {
        let defaults = CourtDirectory::default();
        let high = self
            .courts
            .as_ref()
            .and_then(|courts| courts.high.clone())
            .unwrap_or_else(|| defaults.courts(CourtCategory::High).to_vec());
        let district = self
            .courts
            .as_ref()
            .and_then(|courts| courts.district.clone())
            .unwrap_or_else(|| defaults.courts(CourtCategory::District).to_vec());
        CourtDirectory::new(high, district)
    }
}

fn validate_court_entries(field_name: &str, entries: &[CourtEntry]) -> Result<()> {
    let mut seen = HashSet::new();
    for entry in entries {
        crate::utils::validation::validate_non_empty_string(
            &format!("{}.name", field_name),
            &entry.name,
        )?;
        crate::utils::validation::validate_non_empty_string(
            &format!("{}.code", field_name),
            &entry.code,
        )?;

        if !seen.insert(entry.name.as_str()) {
            return Err(LookupError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: entry.name.clone(),
                reason: "Duplicate court name".to_string(),
            });
        }
    }
    Ok(())
}

impl ConfigProvider for TomlConfig {
    fn base_url(&self) -> &str {
        &self.service.base_url
    }

    fn download_dir(&self) -> &str {
        self.downloads
            .as_ref()
            .map(|downloads| downloads.output_path.as_str())
            .unwrap_or(DOWNLOAD_DIR_DEFAULT)
    }

    fn timeout_seconds(&self) -> u64 {
        self.service.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
