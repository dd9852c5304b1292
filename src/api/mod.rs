/// Network module
///
/// This module handles:
/// - The single photo search request (client.rs)
/// - Downloading image bytes for the carousel (client.rs)
/// - The failure taxonomy for both (error.rs)

pub mod client;
pub mod error;

pub use client::SearchClient;
pub use error::FetchError;
