//! Shared helpers for crates embedding the paginator.

pub mod utils;
