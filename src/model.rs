use serde::{Deserialize, Serialize};

/// Resource counters reported by a single hypervisor host.
///
/// Counters are signed because the `*_used` values come straight from the
/// resource tracker and may transiently exceed the totals under
/// oversubscription. Free capacity is derived per dimension and can be
/// negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputeNode {
    /// Hypervisor hostname, unique within the cluster.
    pub hostname: String,
    /// Total virtual CPUs.
    pub vcpus: i64,
    /// Virtual CPUs currently allocated to instances.
    pub vcpus_used: i64,
    /// Total RAM in megabytes.
    pub memory_mb: i64,
    /// Free RAM in megabytes. Authoritative, not derived from `memory_mb`.
    pub free_ram_mb: i64,
    /// Total local disk in gigabytes.
    pub local_gb: i64,
    /// Used local disk in gigabytes. May exceed `local_gb` (overcommit).
    pub local_gb_used: i64,
}

impl ComputeNode {
    pub fn free_vcpus(&self) -> i64 {
        self.vcpus - self.vcpus_used
    }

    pub fn free_local_gb(&self) -> i64 {
        self.local_gb - self.local_gb_used
    }

    /// Used disk exceeding total disk is possible with disk overcommit and
    /// worth flagging in reports.
    pub fn disk_overcommitted(&self) -> bool {
        self.free_local_gb() < 0
    }
}

/// A compute service owning zero or more hypervisor nodes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    /// Host the service runs on.
    pub host: String,
    /// Disabled services keep reporting nodes, but those nodes must not be
    /// counted towards cluster capacity.
    pub disabled: bool,
    #[serde(default)]
    pub nodes: Vec<ComputeNode>,
}

/// A named bundle of per-instance resource requirements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flavor {
    pub name: String,
    /// CPU requirement per instance.
    pub vcpus: i64,
    /// RAM requirement per instance, in megabytes.
    pub memory_mb: i64,
    /// Root disk per instance, in gigabytes.
    pub root_gb: i64,
    /// Ephemeral disk per instance, in gigabytes. Zero is common.
    pub ephemeral_gb: i64,
}

impl Flavor {
    /// Total disk demand per instance.
    pub fn disk_gb(&self) -> i64 {
        self.root_gb + self.ephemeral_gb
    }

    /// Ordering key for reports: smallest flavors first, by CPU then memory.
    pub fn sort_key(&self) -> (i64, i64) {
        (self.vcpus, self.memory_mb)
    }
}

/// Collects the nodes of all enabled services, sorted by hostname so report
/// ordering is stable across runs.
pub fn enabled_nodes(services: &[Service]) -> Vec<ComputeNode> {
    let mut nodes: Vec<ComputeNode> = services
        .iter()
        .filter(|service| !service.disabled)
        .flat_map(|service| service.nodes.iter().cloned())
        .collect();

    nodes.sort_by(|a, b| a.hostname.cmp(&b.hostname));

    nodes
}
