use serde::Serialize;

/// One navigable page reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLink {
    /// 1-based page number
    pub order: i64,
    pub url: String,
    /// true iff `order` is the requested page
    pub is_current: bool,
}
