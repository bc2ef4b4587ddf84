//! Page parameters read from an incoming listing URL.
//!
//! Provides a `PageRequest` struct and helpers to normalize inputs before
//! handing them to the paginator.

use configs::PaginationConfig;

use crate::page_url::BaseUrl;

/// Requested page parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page index
    pub page: i64,
    /// items per page
    pub per_page: i64,
}

impl PageRequest {
    /// Read page and page size from the query of `base`, falling back to
    /// defaults for missing or unparsable values.
    pub fn from_url(base: &BaseUrl, config: &PaginationConfig) -> Self {
        let read = |key: &str| base.query_value(key).and_then(|v| v.trim().parse::<i64>().ok());
        Self {
            page: read(&config.page_param).unwrap_or(1),
            per_page: read(&config.per_page_param).unwrap_or(config.default_per_page),
        }
        .normalize(config)
    }

    /// Clamp to sane bounds. The page is only floored at 1, never capped at
    /// the last page.
    pub fn normalize(self, config: &PaginationConfig) -> Self {
        let page = if self.page < 1 { 1 } else { self.page };
        let per_page = self.per_page.clamp(1, config.max_per_page.max(1));
        Self { page, per_page }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(s: &str) -> BaseUrl { BaseUrl::parse(s).expect("base url") }

    #[test]
    fn normalize_clamps_zero_to_defaults() {
        let r = PageRequest { page: 0, per_page: 0 }.normalize(&PaginationConfig::default());
        assert_eq!(r, PageRequest { page: 1, per_page: 1 });
    }

    #[test]
    fn normalize_clamps_upper_bound() {
        let r = PageRequest { page: 5, per_page: 1000 }.normalize(&PaginationConfig::default());
        assert_eq!(r.page, 5);
        assert_eq!(r.per_page, 100);
    }

    #[test]
    fn reads_params_from_query() {
        let r = PageRequest::from_url(&base("/items?page=3&per_page=25"), &PaginationConfig::default());
        assert_eq!(r, PageRequest { page: 3, per_page: 25 });
    }

    #[test]
    fn missing_or_garbage_params_fall_back() {
        let cfg = PaginationConfig::default();
        assert_eq!(PageRequest::from_url(&base("/items"), &cfg), PageRequest { page: 1, per_page: 20 });
        assert_eq!(
            PageRequest::from_url(&base("/items?page=abc&per_page=-4"), &cfg),
            PageRequest { page: 1, per_page: 1 }
        );
    }

    #[test]
    fn missing_page_size_uses_configured_default() {
        let cfg = PaginationConfig { default_per_page: 15, ..PaginationConfig::default() };
        assert_eq!(PageRequest::from_url(&base("/items?page=2"), &cfg), PageRequest { page: 2, per_page: 15 });
    }

    #[test]
    fn honours_configured_param_names() {
        let cfg = PaginationConfig { page_param: "p".into(), per_page_param: "n".into(), ..PaginationConfig::default() };
        let r = PageRequest::from_url(&base("http://example.com/?p=4&n=7&page=9"), &cfg);
        assert_eq!(r, PageRequest { page: 4, per_page: 7 });
    }
}
