//! Network access used by URL-aware checks.

pub mod http;

pub use http::{FetchResponse, HttpFetcher};
