/// State management module
///
/// This module handles all application state, including:
/// - Search payload structures (data.rs)
/// - The explicit query cache (cache.rs)
/// - Loading the search and tracking its state (fetcher.rs)

pub mod cache;
pub mod data;
pub mod fetcher;
