use crate::model::ComputeNode;
use crate::summary::Summary;

/// Cluster-wide resource totals, shown at verbosity 1 and up.
fn overview(nodes: &[ComputeNode]) -> String {
    let mut out = String::new();

    out.push_str(&format!("{} compute nodes\n", nodes.len()));
    out.push_str(&format!(
        "  vcpus total: {}\n",
        nodes.iter().map(|n| n.vcpus).sum::<i64>()
    ));
    out.push_str(&format!(
        "  vcpus used:  {}\n",
        nodes.iter().map(|n| n.vcpus_used).sum::<i64>()
    ));
    out.push_str(&format!(
        "  ram total:   {} mb\n",
        nodes.iter().map(|n| n.memory_mb).sum::<i64>()
    ));
    out.push_str(&format!(
        "  ram free:    {} mb\n",
        nodes.iter().map(|n| n.free_ram_mb).sum::<i64>()
    ));
    out.push_str(&format!(
        "  disk total:  {} gb\n",
        nodes.iter().map(|n| n.local_gb).sum::<i64>()
    ));
    out.push_str(&format!(
        "  disk used:   {} gb\n",
        nodes.iter().map(|n| n.local_gb_used).sum::<i64>()
    ));
    out.push('\n');

    out
}

fn node_diagnostics(nodes: &[ComputeNode], verbose: u8) -> String {
    let mut out = String::new();

    for node in nodes {
        if node.disk_overcommitted() && verbose > 0 {
            out.push_str(&format!(
                "WARNING: node {}, disk total/used/free: {}/{}/{}\n",
                node.hostname,
                node.local_gb,
                node.local_gb_used,
                node.free_local_gb()
            ));
        }
        if verbose > 2 {
            out.push_str(&format!(
                "DEBUG: node {}: free cpus: {}/{} free mem: {}/{}, free disk: {}/{}\n",
                node.hostname,
                node.free_vcpus(),
                node.vcpus,
                node.free_ram_mb,
                node.memory_mb,
                node.free_local_gb(),
                node.local_gb
            ));
        }
    }

    out
}

fn flavor_details(summary: &Summary) -> String {
    let mut out = String::new();

    for row in &summary.rows {
        let flavor = &row.flavor;
        out.push_str(&format!("Flavor '{}'\n", flavor.name));
        out.push_str(&format!("  vcpus:  {}\n", flavor.vcpus));
        out.push_str(&format!("  memory: {} mb\n", flavor.memory_mb));
        out.push_str(&format!("  root disk: {} gb\n", flavor.root_gb));
        out.push_str(&format!("  ephemeral disk: {} gb\n", flavor.ephemeral_gb));
        out.push_str(&format!(
            "Max nr. of instances: {} (total capacity: {})\n\n",
            row.capacity.free, row.capacity.max
        ));
    }

    out
}

/// The final table: flavor names left-justified to the widest name, counts
/// right-aligned as free/max.
fn capacity_table(summary: &Summary) -> String {
    let name_width = summary
        .rows
        .iter()
        .map(|row| row.flavor.name.len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();

    for rejected in &summary.rejected {
        out.push_str(&format!(
            "WARNING: flavor {} skipped: {}\n",
            rejected.name, rejected.error
        ));
    }

    for row in &summary.rows {
        out.push_str(&format!(
            "{:<name_width$} : {:>4}/{:>4}\n",
            row.flavor.name, row.capacity.free, row.capacity.max
        ));
    }

    out
}

/// Renders the full text report at the given verbosity level.
pub fn render(nodes: &[ComputeNode], summary: &Summary, verbose: u8) -> String {
    let mut out = String::new();

    if verbose > 0 {
        out.push_str(&overview(nodes));
    }

    out.push_str(&node_diagnostics(nodes, verbose));

    if verbose > 1 {
        out.push_str(&flavor_details(summary));
    }

    out.push_str(&capacity_table(summary));

    out
}
