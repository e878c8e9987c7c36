//! Pure aggregation and selection logic for kubedeck
//!
//! This crate has no I/O: it derives display summaries from cluster
//! resource trees and tracks which clusters are selected for comparison.

mod selection;
mod summary;

pub use selection::SelectionTracker;
pub use summary::{derive_summary, healthy_deployments, total_deployments, NodeScope};

// Re-export types used in our public API
pub use kubedeck_types::{Cluster, ClusterSummary};
