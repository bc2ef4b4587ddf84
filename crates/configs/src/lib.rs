use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub pagination: PaginationConfig,
}

/// Query parameter names and page-size bounds used when building page links.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PaginationConfig {
    #[serde(default = "default_page_param")]
    pub page_param: String,
    #[serde(default = "default_per_page_param")]
    pub per_page_param: String,
    #[serde(default = "default_per_page")]
    pub default_per_page: i64,
    #[serde(default = "default_max_per_page")]
    pub max_per_page: i64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            page_param: default_page_param(),
            per_page_param: default_per_page_param(),
            default_per_page: default_per_page(),
            max_per_page: default_max_per_page(),
        }
    }
}

fn default_page_param() -> String { "page".into() }
fn default_per_page_param() -> String { "per_page".into() }
fn default_per_page() -> i64 { 20 }
fn default_max_per_page() -> i64 { 100 }

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    from_toml_str(&content)
}

pub fn from_toml_str(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.pagination.normalize();
        self.pagination.validate()
    }
}

impl PaginationConfig {
    /// Trim surrounding whitespace from parameter names.
    pub fn normalize(&mut self) {
        self.page_param = self.page_param.trim().to_string();
        self.per_page_param = self.per_page_param.trim().to_string();
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_param.is_empty() {
            return Err(anyhow!("pagination.page_param must not be empty"));
        }
        if self.per_page_param.is_empty() {
            return Err(anyhow!("pagination.per_page_param must not be empty"));
        }
        if self.page_param == self.per_page_param {
            return Err(anyhow!("pagination.page_param and pagination.per_page_param must differ"));
        }
        if self.max_per_page < 1 {
            return Err(anyhow!("pagination.max_per_page must be >= 1"));
        }
        if self.default_per_page < 1 || self.default_per_page > self.max_per_page {
            return Err(anyhow!("pagination.default_per_page must be within 1..=max_per_page"));
        }
        Ok(())
    }
}
