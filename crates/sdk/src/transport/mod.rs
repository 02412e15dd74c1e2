//! Transport layer for the Patchwork SDK.

mod http;

pub use http::HttpTransport;
