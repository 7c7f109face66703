use serde::Serialize;
use tracing::warn;

use crate::capacity::{compute_capacity, Capacity, InvalidFlavorError};
use crate::model::{ComputeNode, Flavor};

/// One row of the capacity report.
#[derive(Debug, Clone, Serialize)]
pub struct FlavorSlots {
    pub flavor: Flavor,
    pub capacity: Capacity,
}

/// A flavor the calculator refused to process. Kept separate from the rows so
/// the presentation layer can surface it distinctly from "no capacity".
#[derive(Debug)]
pub struct RejectedFlavor {
    pub name: String,
    pub error: InvalidFlavorError,
}

#[derive(Debug, Default)]
pub struct Summary {
    /// Rows ordered by flavor size, smallest first.
    pub rows: Vec<FlavorSlots>,
    pub rejected: Vec<RejectedFlavor>,
}

/// Computes free and total capacity for every flavor over the given nodes.
///
/// `filter` restricts the catalog to the named flavors; an empty filter means
/// all of them. Flavors with undefined requirements land in
/// `Summary::rejected` instead of aborting the whole report.
pub fn summarize(nodes: &[ComputeNode], flavors: &[Flavor], filter: &[String]) -> Summary {
    let mut selected: Vec<&Flavor> = flavors
        .iter()
        .filter(|flavor| filter.is_empty() || filter.contains(&flavor.name))
        .collect();

    selected.sort_by_key(|flavor| flavor.sort_key());

    let mut summary = Summary::default();

    for flavor in selected {
        match compute_capacity(nodes, flavor) {
            Ok(capacity) => summary.rows.push(FlavorSlots {
                flavor: flavor.clone(),
                capacity,
            }),
            Err(error) => {
                warn!(flavor = %flavor.name, %error, "skipping flavor with undefined requirements");
                summary.rejected.push(RejectedFlavor {
                    name: flavor.name.clone(),
                    error,
                });
            }
        }
    }

    summary
}
