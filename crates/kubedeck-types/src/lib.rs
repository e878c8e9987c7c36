//! Shared types for kubedeck
//!
//! This crate contains the cluster inventory data model shared across the
//! kubedeck crates. The shapes mirror the JSON the dashboard API serves
//! (camelCase on the wire). Everything here is a read-only snapshot:
//! resources are deserialized whole, never mutated in place, and replaced
//! wholesale on the next fetch.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Status & Metrics
// ============================================================================

/// Lifecycle phase of a resource, parsed from the free-form status string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    Running,
    Pending,
    Succeeded,
    Failed,
    Unknown,
}

impl From<&str> for Phase {
    fn from(s: &str) -> Self {
        match s {
            "Running" => Self::Running,
            "Pending" => Self::Pending,
            "Succeeded" => Self::Succeeded,
            "Failed" => Self::Failed,
            _ => Self::Unknown,
        }
    }
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::Pending => "Pending",
            Self::Succeeded => "Succeeded",
            Self::Failed => "Failed",
            Self::Unknown => "Unknown",
        }
    }
}

/// Status block attached to every resource kind
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceStatus {
    pub phase: String,
    pub ready: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub last_updated: Option<DateTime<Utc>>,
}

impl ResourceStatus {
    pub fn new(phase: impl Into<String>, ready: bool) -> Self {
        Self {
            phase: phase.into(),
            ready,
            reason: None,
            message: None,
            last_updated: None,
        }
    }

    /// Parsed phase of the free-form status string
    pub fn phase(&self) -> Phase {
        Phase::from(self.phase.as_str())
    }
}

impl Default for ResourceStatus {
    fn default() -> Self {
        Self::new("Unknown", false)
    }
}

/// Resource usage and requests/limits, CPU in millicores, memory in bytes
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceMetrics {
    pub cpu_usage: f64,
    pub memory_usage: f64,
    pub cpu_request: f64,
    pub memory_request: f64,
    pub cpu_limit: f64,
    pub memory_limit: f64,
}

// ============================================================================
// Nodes
// ============================================================================

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeCapacity {
    #[serde(default)]
    pub cpu: String,
    #[serde(default)]
    pub memory: String,
    #[serde(default)]
    pub pods: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ephemeral_storage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeCondition {
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub last_transition_time: Option<DateTime<Utc>>,
}

/// A cluster node, with the pods scheduled on it.
///
/// `pods` is an option rather than a list so that "field absent" and
/// "present but empty" stay distinct on the wire; aggregation treats both
/// as zero pods.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub name: String,
    #[serde(default)]
    pub kubelet: String,
    #[serde(default)]
    pub runtime: String,
    pub role: String,
    pub pods: Option<Vec<Pod>>,
    pub status: ResourceStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<ResourceMetrics>,
    #[serde(default)]
    pub capacity: NodeCapacity,
    #[serde(default)]
    pub allocatable: NodeCapacity,
    #[serde(default)]
    pub conditions: Vec<NodeCondition>,
    #[serde(default)]
    pub labels: HashMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<HashMap<String, String>>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Node {
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kubelet: String::new(),
            runtime: String::new(),
            role: role.into(),
            pods: None,
            status: ResourceStatus::default(),
            metrics: None,
            capacity: NodeCapacity::default(),
            allocatable: NodeCapacity::default(),
            conditions: Vec::new(),
            labels: HashMap::new(),
            annotations: None,
            created_at: None,
        }
    }

    pub fn with_pods(mut self, pods: Vec<Pod>) -> Self {
        self.pods = Some(pods);
        self
    }
}

/// Control-plane node group
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlPlane {
    pub nodes: Option<Vec<Node>>,
    pub status: ResourceStatus,
}

impl Default for ControlPlane {
    fn default() -> Self {
        Self {
            nodes: None,
            status: ResourceStatus::default(),
        }
    }
}

// ============================================================================
// Pods
// ============================================================================

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Container {
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub ready: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<ResourceMetrics>,
    #[serde(default)]
    pub status: ResourceStatus,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Volume {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pod {
    pub name: String,
    pub namespace: String,
    #[serde(default)]
    pub containers: Vec<Container>,
    #[serde(default)]
    pub volumes: Vec<Volume>,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub ip: String,
    #[serde(default)]
    pub labels: HashMap<String, String>,
    pub status: ResourceStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<ResourceMetrics>,
    #[serde(default)]
    pub node_name: String,
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub restart_count: u32,
}

impl Pod {
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            containers: Vec::new(),
            volumes: Vec::new(),
            role: String::new(),
            ip: String::new(),
            labels: HashMap::new(),
            status: ResourceStatus::default(),
            metrics: None,
            node_name: String::new(),
            created_at: None,
            restart_count: 0,
        }
    }

    pub fn with_phase(mut self, phase: impl Into<String>) -> Self {
        self.status.phase = phase.into();
        self
    }
}

// ============================================================================
// Workloads & Services
// ============================================================================

/// A deployment as reported by the inventory API.
///
/// `replicas` is the desired count and may be absent entirely when the
/// server has no spec data for the deployment.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deployment {
    pub name: String,
    pub namespace: String,
    pub replicas: Option<i32>,
    #[serde(default)]
    pub ready_replicas: i32,
    #[serde(default)]
    pub available_replicas: i32,
    #[serde(default)]
    pub selector: String,
    #[serde(default)]
    pub template: String,
    #[serde(default)]
    pub strategy: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub status: ResourceStatus,
    #[serde(default)]
    pub labels: HashMap<String, String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Deployment {
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            replicas: None,
            ready_replicas: 0,
            available_replicas: 0,
            selector: String::new(),
            template: String::new(),
            strategy: String::new(),
            role: String::new(),
            status: ResourceStatus::default(),
            labels: HashMap::new(),
            created_at: None,
        }
    }

    pub fn with_replicas(mut self, replicas: i32) -> Self {
        self.replicas = Some(replicas);
        self
    }

    /// Format replica status as "ready/desired"
    pub fn replica_status(&self) -> String {
        format!("{}/{}", self.ready_replicas, self.replicas.unwrap_or(0))
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicePort {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub port: u16,
    #[serde(default)]
    pub target_port: String,
    #[serde(default)]
    pub protocol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_port: Option<u16>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub name: String,
    pub namespace: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub pods: Vec<Pod>,
    #[serde(default)]
    pub cluster_ip: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_balancer_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_ips: Option<Vec<String>>,
    #[serde(default)]
    pub selector: String,
    #[serde(default)]
    pub ports: Vec<ServicePort>,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub status: ResourceStatus,
    #[serde(default)]
    pub labels: HashMap<String, String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Service {
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            kind: "ClusterIP".to_string(),
            pods: Vec::new(),
            cluster_ip: String::new(),
            node_port: None,
            load_balancer_ip: None,
            external_ips: None,
            selector: String::new(),
            ports: Vec::new(),
            role: String::new(),
            status: ResourceStatus::default(),
            labels: HashMap::new(),
            created_at: None,
        }
    }
}

// ============================================================================
// Namespaces & Clusters
// ============================================================================

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Namespace {
    pub name: String,
    pub deployments: Option<Vec<Deployment>>,
    pub services: Option<Vec<Service>>,
    #[serde(default)]
    pub pod_count: u32,
    #[serde(default)]
    pub status: ResourceStatus,
    #[serde(default)]
    pub labels: HashMap<String, String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Namespace {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            deployments: None,
            services: None,
            pod_count: 0,
            status: ResourceStatus::default(),
            labels: HashMap::new(),
            created_at: None,
        }
    }

    pub fn with_deployments(mut self, deployments: Vec<Deployment>) -> Self {
        self.deployments = Some(deployments);
        self
    }

    pub fn with_services(mut self, services: Vec<Service>) -> Self {
        self.services = Some(services);
        self
    }
}

/// Precomputed aggregate counters for a cluster.
///
/// When the API provides one it is authoritative and used as-is; otherwise
/// a fallback summary is derived from the resource tree (kubedeck-core).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterSummary {
    pub total_nodes: u32,
    pub ready_nodes: u32,
    pub total_pods: u32,
    pub running_pods: u32,
    pub pending_pods: u32,
    pub failed_pods: u32,
    pub total_namespaces: u32,
    pub total_deployments: u32,
    pub total_services: u32,
    /// Percentage, 0.0 to 100.0
    pub cpu_utilization: f64,
    /// Percentage, 0.0 to 100.0
    pub memory_utilization: f64,
}

/// Top-level monitored unit.
///
/// `nodes` holds the worker nodes; control-plane nodes live under
/// `control_plane`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cluster {
    pub id: String,
    pub name: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    #[serde(default)]
    pub control_plane: ControlPlane,
    pub nodes: Option<Vec<Node>>,
    pub namespaces: Option<Vec<Namespace>>,
    #[serde(default)]
    pub status: ResourceStatus,
    pub summary: Option<ClusterSummary>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Cluster {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            version: version.into(),
            environment: None,
            control_plane: ControlPlane::default(),
            nodes: None,
            namespaces: None,
            status: ResourceStatus::default(),
            summary: None,
            created_at: None,
        }
    }

    pub fn with_nodes(mut self, nodes: Vec<Node>) -> Self {
        self.nodes = Some(nodes);
        self
    }

    pub fn with_namespaces(mut self, namespaces: Vec<Namespace>) -> Self {
        self.namespaces = Some(namespaces);
        self
    }

    pub fn with_summary(mut self, summary: ClusterSummary) -> Self {
        self.summary = Some(summary);
        self
    }
}

// ============================================================================
// Display Types
// ============================================================================

/// How the cluster list is rendered
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Card,
    List,
}

impl ViewMode {
    /// Cycle between the two views
    pub fn toggle(&self) -> Self {
        match self {
            Self::Card => Self::List,
            Self::List => Self::Card,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Card => "cards",
            Self::List => "list",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_from_str() {
        assert_eq!(Phase::from("Running"), Phase::Running);
        assert_eq!(Phase::from("Pending"), Phase::Pending);
        assert_eq!(Phase::from("Failed"), Phase::Failed);
        assert_eq!(Phase::from("Terminating"), Phase::Unknown);
        assert_eq!(Phase::from(""), Phase::Unknown);
    }

    #[test]
    fn test_cluster_deserialize_camel_case() {
        let json = r#"{
            "id": "prod-east",
            "name": "Production East",
            "version": "v1.30.2",
            "environment": "production",
            "controlPlane": {
                "nodes": [{"name": "cp-1", "role": "control-plane", "pods": [],
                           "status": {"phase": "Running", "ready": true, "lastUpdated": null},
                           "createdAt": null}],
                "status": {"phase": "Running", "ready": true, "lastUpdated": null}
            },
            "nodes": [{"name": "worker-1", "role": "worker",
                       "pods": [{"name": "web-1", "namespace": "default",
                                 "status": {"phase": "Running", "ready": true, "lastUpdated": null},
                                 "createdAt": null}],
                       "status": {"phase": "Running", "ready": true, "lastUpdated": null},
                       "createdAt": null}],
            "namespaces": null,
            "status": {"phase": "Running", "ready": true, "lastUpdated": "2024-06-01T12:00:00Z"},
            "summary": null,
            "createdAt": null
        }"#;

        let cluster: Cluster = serde_json::from_str(json).unwrap();
        assert_eq!(cluster.id, "prod-east");
        assert_eq!(cluster.environment.as_deref(), Some("production"));
        assert_eq!(cluster.nodes.as_ref().unwrap().len(), 1);
        assert_eq!(cluster.nodes.as_ref().unwrap()[0].pods.as_ref().unwrap().len(), 1);
        assert!(cluster.namespaces.is_none());
        assert!(cluster.summary.is_none());
        assert!(cluster.status.last_updated.is_some());
    }

    #[test]
    fn test_absent_collections_deserialize_to_none() {
        // Fields the server omits entirely, not just nulls
        let json = r#"{
            "id": "bare",
            "name": "Bare",
            "version": "v1.29.0",
            "status": {"phase": "Unknown", "ready": false, "lastUpdated": null}
        }"#;

        let cluster: Cluster = serde_json::from_str(json).unwrap();
        assert!(cluster.nodes.is_none());
        assert!(cluster.namespaces.is_none());
        assert!(cluster.control_plane.nodes.is_none());
    }

    #[test]
    fn test_deployment_optional_replicas() {
        let json = r#"{"name": "api", "namespace": "default", "replicas": null}"#;
        let d: Deployment = serde_json::from_str(json).unwrap();
        assert!(d.replicas.is_none());

        let json = r#"{"name": "api", "namespace": "default", "replicas": 3, "readyReplicas": 2}"#;
        let d: Deployment = serde_json::from_str(json).unwrap();
        assert_eq!(d.replicas, Some(3));
        assert_eq!(d.replica_status(), "2/3");
    }

    #[test]
    fn test_summary_wire_format() {
        let json = r#"{
            "totalNodes": 5, "readyNodes": 4,
            "totalPods": 40, "runningPods": 38, "pendingPods": 1, "failedPods": 1,
            "totalNamespaces": 6, "totalDeployments": 12, "totalServices": 9,
            "cpuUtilization": 62.5, "memoryUtilization": 71.0
        }"#;

        let summary: ClusterSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.total_pods, 40);
        assert_eq!(summary.ready_nodes, 4);
        assert!((summary.cpu_utilization - 62.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_view_mode_toggle() {
        assert_eq!(ViewMode::Card.toggle(), ViewMode::List);
        assert_eq!(ViewMode::List.toggle(), ViewMode::Card);
        assert_eq!(ViewMode::default(), ViewMode::Card);
    }
}
