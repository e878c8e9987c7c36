mod cluster_detail;
mod cluster_list;
mod compare;

pub use cluster_detail::ClusterDetailScreen;
pub use cluster_list::ClusterListScreen;
pub use compare::CompareScreen;
