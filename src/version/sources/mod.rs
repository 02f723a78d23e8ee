//! Source implementations for fetching version descriptors

pub mod http;

pub use http::HttpVersionSource;
