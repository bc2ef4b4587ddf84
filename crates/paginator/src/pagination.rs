use configs::{AppConfig, PaginationConfig};
use serde::Serialize;
use tracing::{debug, instrument, warn};

use crate::errors::PaginatorError;
use crate::page::PageLink;
use crate::page_url::BaseUrl;
use crate::range::{compute_range, ShowingRange};
use crate::request::PageRequest;
use crate::window::{last_page, select_pages};

/// Pagination metadata for one page of a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationResult {
    pub total: i64,
    pub per_page: i64,
    /// As requested; may lie beyond the last page.
    pub current_page: i64,
    pub showing_range: ShowingRange,
    pub pages: Vec<PageLink>,
    pub prev: Option<PageLink>,
    pub next: Option<PageLink>,
}

impl PaginationResult {
    pub fn last_page(&self) -> i64 { last_page(self.total, self.per_page) }
}

/// Builds [`PaginationResult`]s using a validated [`PaginationConfig`].
#[derive(Debug, Clone, Default)]
pub struct Paginator {
    config: PaginationConfig,
}

impl Paginator {
    /// Trims parameter names, then validates.
    pub fn new(mut config: PaginationConfig) -> Result<Self, PaginatorError> {
        config.normalize();
        config
            .validate()
            .map_err(|e| PaginatorError::InvalidConfiguration(e.to_string()))?;
        Ok(Self { config })
    }

    pub fn from_app_config(config: AppConfig) -> Result<Self, PaginatorError> {
        Self::new(config.pagination)
    }

    /// Build from the file named by `CONFIG_PATH` (default `config.toml`).
    pub fn from_default_config() -> Result<Self, PaginatorError> {
        let cfg = AppConfig::load_and_validate()
            .map_err(|e| PaginatorError::InvalidConfiguration(e.to_string()))?;
        Self::from_app_config(cfg)
    }

    pub fn config(&self) -> &PaginationConfig { &self.config }

    #[instrument(level = "debug", skip(self, base_url))]
    pub fn paginate(
        &self,
        current_page: i64,
        per_page: i64,
        total: i64,
        base_url: &BaseUrl,
    ) -> Result<PaginationResult, PaginatorError> {
        if per_page <= 0 {
            warn!(per_page, "rejecting non-positive page size");
            return Err(PaginatorError::InvalidConfiguration(format!("per_page must be positive, got {per_page}")));
        }
        if total < 0 {
            warn!(total, "rejecting negative item count");
            return Err(PaginatorError::InvalidConfiguration(format!("total must not be negative, got {total}")));
        }

        let last = last_page(total, per_page);
        let link = |order: i64| PageLink {
            order,
            url: base_url.page_url(&self.config.page_param, order),
            is_current: order == current_page,
        };

        let pages: Vec<PageLink> = select_pages(current_page, last).into_iter().map(&link).collect();
        let prev = (current_page > 1).then(|| link(current_page - 1));
        let next = (current_page < last).then(|| link(current_page + 1));
        debug!(last_page = last, window = pages.len(), "computed page window");

        Ok(PaginationResult {
            total,
            per_page,
            current_page,
            showing_range: compute_range(current_page, per_page, total),
            pages,
            prev,
            next,
        })
    }

    /// Paginate using the page and page size carried by `base_url` itself.
    pub fn paginate_request(&self, total: i64, base_url: &BaseUrl) -> Result<PaginationResult, PaginatorError> {
        let req = PageRequest::from_url(base_url, &self.config);
        self.paginate(req.page, req.per_page, total, base_url)
    }
}

/// Paginate with the default configuration (`page` query parameter).
pub fn paginate(current_page: i64, per_page: i64, total: i64, base_url: &str) -> Result<PaginationResult, PaginatorError> {
    let base = BaseUrl::parse(base_url)?;
    Paginator::default().paginate(current_page, per_page, total, &base)
}
