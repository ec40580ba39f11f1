//! HTTP client layer — `FyersHttp`, one request per call.

pub mod client;

pub use client::{with_query, FyersHttp};
