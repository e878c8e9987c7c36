//! HTTP client for the kubedeck inventory API
//!
//! This crate wraps the dashboard API's read-only GET surface: one request
//! per call, no retries, no caching, no in-flight deduplication. Both
//! transport failures and non-success responses are normalized into a
//! single [`ApiError`] so callers can match on the error kind instead of
//! digging through transport internals.

mod client;
mod error;

pub use client::{ApiClient, HealthStatus, WebSocketStatus, DEFAULT_BASE_URL};
pub use error::ApiError;

// Re-export types that are used in our public API
pub use kubedeck_types::{Cluster, Deployment, Namespace, Node, Pod, Service};
