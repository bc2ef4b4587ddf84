//! Pagination metadata for lists split across fixed-size pages.
//! - Picks the window of page numbers worth linking to.
//! - Derives the "showing X-Y" range of the current page.
//! - Renders each page as a URL carrying the page query parameter.

pub mod errors;
pub mod page;
pub mod page_url;
pub mod pagination;
pub mod range;
pub mod request;
pub mod window;

pub use configs::PaginationConfig;
pub use errors::PaginatorError;
pub use page::PageLink;
pub use page_url::{build_page_url, BaseUrl};
pub use pagination::{paginate, PaginationResult, Paginator};
pub use range::{compute_range, ShowingRange};
pub use request::PageRequest;
pub use window::{last_page, select_pages, should_include};
