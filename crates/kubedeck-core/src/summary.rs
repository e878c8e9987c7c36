use kubedeck_types::{Cluster, ClusterSummary, Node, Phase};

/// Which nodes participate in derived totals.
///
/// The inventory API keeps worker nodes and control-plane nodes in separate
/// groups, and an authoritative `summary` from the server may count either
/// set. When we have to derive the numbers ourselves the scope is an
/// explicit choice rather than an accident of traversal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NodeScope {
    /// Count worker nodes and their pods only. This matches the dashboard's
    /// historical fallback behavior and is the default.
    #[default]
    WorkersOnly,
    /// Count control-plane nodes and their pods as well.
    AllNodes,
}

fn nodes_in_scope<'a>(cluster: &'a Cluster, scope: NodeScope) -> impl Iterator<Item = &'a Node> {
    let workers: &[Node] = cluster.nodes.as_deref().unwrap_or(&[]);
    let control_plane: &[Node] = match scope {
        NodeScope::AllNodes => cluster.control_plane.nodes.as_deref().unwrap_or(&[]),
        NodeScope::WorkersOnly => &[],
    };
    workers.iter().chain(control_plane.iter())
}

/// Compute a display summary for a cluster.
///
/// If the cluster carries an authoritative precomputed summary it is
/// returned unchanged; nothing is recomputed or cross-checked against the
/// resource tree. Otherwise a fallback summary is derived by pure
/// reductions over the nested collections, with any absent collection
/// counting as empty. The result is independent of input ordering and the
/// derivation has no error paths.
///
/// CPU and memory utilization are not derivable from counts alone and stay
/// at zero in the fallback; only an authoritative summary carries them.
pub fn derive_summary(cluster: &Cluster, scope: NodeScope) -> ClusterSummary {
    if let Some(summary) = &cluster.summary {
        return summary.clone();
    }

    let mut derived = ClusterSummary::default();

    for node in nodes_in_scope(cluster, scope) {
        derived.total_nodes += 1;
        if node.status.ready {
            derived.ready_nodes += 1;
        }
        for pod in node.pods.iter().flatten() {
            derived.total_pods += 1;
            match pod.status.phase() {
                Phase::Running => derived.running_pods += 1,
                Phase::Pending => derived.pending_pods += 1,
                Phase::Failed => derived.failed_pods += 1,
                Phase::Succeeded | Phase::Unknown => {}
            }
        }
    }

    for namespace in cluster.namespaces.iter().flatten() {
        derived.total_namespaces += 1;
        derived.total_deployments += namespace.deployments.as_deref().unwrap_or(&[]).len() as u32;
        derived.total_services += namespace.services.as_deref().unwrap_or(&[]).len() as u32;
    }

    derived
}

/// Count of deployments across all namespaces, absent collections as zero.
pub fn total_deployments(cluster: &Cluster) -> usize {
    cluster
        .namespaces
        .iter()
        .flatten()
        .flat_map(|ns| ns.deployments.iter().flatten())
        .count()
}

/// Count of healthy deployments across all namespaces.
///
/// A deployment is healthy here if and only if its desired replica count is
/// present and strictly positive. Ready/available replica counts are
/// deliberately not consulted: this is a coarse "is anything supposed to be
/// running" signal, not a rollout health check. Always derived from the
/// resource tree, never read out of a pod summary.
pub fn healthy_deployments(cluster: &Cluster) -> usize {
    cluster
        .namespaces
        .iter()
        .flatten()
        .flat_map(|ns| ns.deployments.iter().flatten())
        .filter(|d| d.replicas.is_some_and(|r| r > 0))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use kubedeck_types::{Deployment, Namespace, Node, Pod, ResourceStatus, Service};

    fn worker(name: &str, pods: Vec<Pod>) -> Node {
        let mut node = Node::new(name, "worker").with_pods(pods);
        node.status = ResourceStatus::new("Running", true);
        node
    }

    fn running_pod(name: &str) -> Pod {
        Pod::new(name, "default").with_phase("Running")
    }

    #[test]
    fn test_authoritative_summary_returned_unchanged() {
        let summary = ClusterSummary {
            total_nodes: 99,
            total_pods: 1234,
            cpu_utilization: 55.5,
            ..Default::default()
        };
        // Resource tree deliberately contradicts the summary
        let cluster = Cluster::new("c1", "One", "v1.30.0")
            .with_nodes(vec![worker("w1", vec![running_pod("p1")])])
            .with_summary(summary.clone());

        assert_eq!(derive_summary(&cluster, NodeScope::WorkersOnly), summary);
    }

    #[test]
    fn test_derive_pod_and_node_counts() {
        let cluster = Cluster::new("c1", "One", "v1.30.0").with_nodes(vec![
            worker("w1", vec![running_pod("p1"), running_pod("p2")]),
            worker("w2", vec![running_pod("p3")]),
        ]);

        let summary = derive_summary(&cluster, NodeScope::WorkersOnly);
        assert_eq!(summary.total_pods, 3);
        assert_eq!(summary.total_nodes, 2);
        assert_eq!(summary.ready_nodes, 2);
        assert_eq!(summary.running_pods, 3);
    }

    #[test]
    fn test_derive_on_empty_cluster_is_all_zero() {
        let cluster = Cluster::new("c1", "One", "v1.30.0");

        let summary = derive_summary(&cluster, NodeScope::WorkersOnly);
        assert_eq!(summary, ClusterSummary::default());
    }

    #[test]
    fn test_absent_pod_list_counts_as_zero() {
        // Node with `pods` absent entirely, not empty
        let cluster = Cluster::new("c1", "One", "v1.30.0")
            .with_nodes(vec![Node::new("w1", "worker"), worker("w2", vec![running_pod("p1")])]);

        let summary = derive_summary(&cluster, NodeScope::WorkersOnly);
        assert_eq!(summary.total_nodes, 2);
        assert_eq!(summary.total_pods, 1);
    }

    #[test]
    fn test_pod_phase_buckets() {
        let pods = vec![
            running_pod("p1"),
            Pod::new("p2", "default").with_phase("Pending"),
            Pod::new("p3", "default").with_phase("Failed"),
            Pod::new("p4", "default").with_phase("Succeeded"),
        ];
        let cluster = Cluster::new("c1", "One", "v1.30.0").with_nodes(vec![worker("w1", pods)]);

        let summary = derive_summary(&cluster, NodeScope::WorkersOnly);
        assert_eq!(summary.total_pods, 4);
        assert_eq!(summary.running_pods, 1);
        assert_eq!(summary.pending_pods, 1);
        assert_eq!(summary.failed_pods, 1);
    }

    #[test]
    fn test_node_scope_controls_control_plane_inclusion() {
        let mut cluster = Cluster::new("c1", "One", "v1.30.0")
            .with_nodes(vec![worker("w1", vec![running_pod("p1")])]);
        cluster.control_plane.nodes = Some(vec![worker("cp1", vec![
            running_pod("etcd"),
            running_pod("apiserver"),
        ])]);

        let workers_only = derive_summary(&cluster, NodeScope::WorkersOnly);
        assert_eq!(workers_only.total_nodes, 1);
        assert_eq!(workers_only.total_pods, 1);

        let all_nodes = derive_summary(&cluster, NodeScope::AllNodes);
        assert_eq!(all_nodes.total_nodes, 2);
        assert_eq!(all_nodes.total_pods, 3);
    }

    #[test]
    fn test_namespace_counts() {
        let cluster = Cluster::new("c1", "One", "v1.30.0").with_namespaces(vec![
            Namespace::new("default")
                .with_deployments(vec![
                    Deployment::new("web", "default").with_replicas(3),
                    Deployment::new("api", "default").with_replicas(2),
                ])
                .with_services(vec![Service::new("web", "default")]),
            Namespace::new("kube-system"),
        ]);

        let summary = derive_summary(&cluster, NodeScope::WorkersOnly);
        assert_eq!(summary.total_namespaces, 2);
        assert_eq!(summary.total_deployments, 2);
        assert_eq!(summary.total_services, 1);
    }

    #[test]
    fn test_healthy_deployments_requires_positive_replicas() {
        let cluster = Cluster::new("c1", "One", "v1.30.0").with_namespaces(vec![
            Namespace::new("default").with_deployments(vec![
                Deployment::new("web", "default").with_replicas(3),
                Deployment::new("scaled-down", "default").with_replicas(0),
                Deployment::new("no-spec", "default"),
            ]),
        ]);

        assert_eq!(total_deployments(&cluster), 3);
        assert_eq!(healthy_deployments(&cluster), 1);
    }

    #[test]
    fn test_derivation_is_order_independent() {
        let nodes = vec![
            worker("w1", vec![running_pod("p1"), running_pod("p2")]),
            worker("w2", vec![running_pod("p3")]),
            Node::new("w3", "worker"),
        ];
        let mut reversed = nodes.clone();
        reversed.reverse();

        let a = derive_summary(&Cluster::new("c", "C", "v1").with_nodes(nodes), NodeScope::WorkersOnly);
        let b = derive_summary(
            &Cluster::new("c", "C", "v1").with_nodes(reversed),
            NodeScope::WorkersOnly,
        );
        assert_eq!(a, b);
    }
}
