use crate::model::{ComputeNode, Flavor};

/// How many instances of one flavor still fit into a set of nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Capacity {
    /// Instances that fit into the currently free resources.
    pub free: u64,
    /// Instances that would fit into the nominal resources of a fully
    /// drained cluster.
    pub max: u64,
}

/// A flavor whose requirements make the fit computation undefined.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InvalidFlavorError {
    #[error("flavor {0}: vcpus requirement must be greater than zero")]
    Vcpus(String),
    #[error("flavor {0}: memory_mb requirement must be greater than zero")]
    Memory(String),
    #[error("flavor {0}: disk requirement (root_gb + ephemeral_gb) must be greater than zero")]
    Disk(String),
}

fn validate(flavor: &Flavor) -> Result<(), InvalidFlavorError> {
    if flavor.vcpus <= 0 {
        return Err(InvalidFlavorError::Vcpus(flavor.name.clone()));
    }
    if flavor.memory_mb <= 0 {
        return Err(InvalidFlavorError::Memory(flavor.name.clone()));
    }
    if flavor.disk_gb() <= 0 {
        return Err(InvalidFlavorError::Disk(flavor.name.clone()));
    }
    Ok(())
}

/// Counts how many instances of `flavor` fit into the free and into the total
/// capacity of `nodes`, constrained independently by CPU, memory and disk.
///
/// Each node contributes the minimum fit across the three dimensions. A node
/// whose fit is zero or negative (oversubscribed nodes produce negative free
/// capacity) contributes nothing; it never subtracts from the cluster total.
pub fn compute_capacity(
    nodes: &[ComputeNode],
    flavor: &Flavor,
) -> Result<Capacity, InvalidFlavorError> {
    validate(flavor)?;

    let mut free = 0u64;
    let mut max = 0u64;

    for node in nodes {
        let free_fit = (node.free_vcpus() / flavor.vcpus)
            .min(node.free_ram_mb / flavor.memory_mb)
            .min(node.free_local_gb() / flavor.disk_gb());

        let max_fit = (node.vcpus / flavor.vcpus)
            .min(node.memory_mb / flavor.memory_mb)
            .min(node.local_gb / flavor.disk_gb());

        if free_fit > 0 {
            free += free_fit as u64;
        }
        if max_fit > 0 {
            max += max_fit as u64;
        }
    }

    Ok(Capacity { free, max })
}
