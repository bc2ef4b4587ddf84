use url::{ParseError, Url};

use crate::errors::PaginatorError;

pub const DEFAULT_PAGE_PARAM: &str = "page";

// Host used to resolve origin-relative request targets; never rendered.
const RELATIVE_ROOT: &str = "http://relative.invalid/";

/// Parsed URL of the listing being paginated.
///
/// Accepts absolute URLs as well as origin-relative request targets such as
/// `/products?sort=asc`. Links built from a relative base stay relative.
/// Scheme-relative (`//host/path`), path-relative and query-only inputs are
/// rejected since they cannot be rendered without losing part of the URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl {
    url: Url,
    relative: bool,
}

impl BaseUrl {
    pub fn parse(input: &str) -> Result<Self, PaginatorError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(PaginatorError::invalid_url(input, "empty url"));
        }
        match Url::parse(trimmed) {
            Ok(url) => Ok(Self { url, relative: false }),
            Err(ParseError::RelativeUrlWithoutBase) => {
                if !is_origin_relative(trimmed) {
                    return Err(PaginatorError::invalid_url(input, "relative url must start with a single '/'"));
                }
                let root = Url::parse(RELATIVE_ROOT).map_err(|e| PaginatorError::invalid_url(input, e))?;
                let url = root.join(trimmed).map_err(|e| PaginatorError::invalid_url(input, e))?;
                Ok(Self { url, relative: true })
            }
            Err(e) => Err(PaginatorError::invalid_url(input, e)),
        }
    }

    pub fn is_relative(&self) -> bool {
        self.relative
    }

    /// First value of a query parameter, decoded.
    pub fn query_value(&self, key: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.into_owned())
    }

    /// Render this URL with `param` set to `page`.
    ///
    /// Every previous value of `param` is dropped. The remaining parameters
    /// keep their values and are re-encoded sorted by key; the sort is stable,
    /// so repeated keys keep their relative order.
    pub fn page_url(&self, param: &str, page: i64) -> String {
        let mut pairs: Vec<(String, String)> = self
            .url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .filter(|(k, _)| k != param)
            .collect();
        pairs.push((param.to_string(), page.to_string()));
        pairs.sort_by(|a, b| a.0.cmp(&b.0));

        let mut url = self.url.clone();
        url.query_pairs_mut().clear().extend_pairs(&pairs);

        if !self.relative {
            return url.into();
        }
        let mut out = url.path().to_string();
        if let Some(query) = url.query() {
            out.push('?');
            out.push_str(query);
        }
        if let Some(fragment) = url.fragment() {
            out.push('#');
            out.push_str(fragment);
        }
        out
    }
}

impl std::str::FromStr for BaseUrl {
    type Err = PaginatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Url> for BaseUrl {
    fn from(url: Url) -> Self {
        Self { url, relative: false }
    }
}

// `/path`, but not `//authority/path` or `/\authority` which browsers treat
// as scheme-relative.
fn is_origin_relative(target: &str) -> bool {
    let mut chars = target.chars();
    chars.next() == Some('/') && !matches!(chars.next(), Some('/') | Some('\\'))
}

/// Parse `base` and set its `page` parameter to `page`.
pub fn build_page_url(base: &str, page: i64) -> Result<String, PaginatorError> {
    Ok(BaseUrl::parse(base)?.page_url(DEFAULT_PAGE_PARAM, page))
}
