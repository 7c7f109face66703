use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::path::Path;

use crate::model::{Flavor, Service};

/// Source of the service and flavor catalogs.
///
/// The report only needs these two point-in-time queries; where the data comes
/// from (a database, an API, a file) is the provider's business. Failures
/// propagate unchanged, there are no retries. Empty catalogs are valid input.
#[async_trait]
pub trait InventoryProvider {
    async fn services(&self) -> Result<Vec<Service>>;
    async fn flavors(&self) -> Result<Vec<Flavor>>;
}

/// A cluster snapshot loaded from a YAML file.
#[derive(Debug, Deserialize)]
pub struct Inventory {
    #[serde(default)]
    services: Vec<Service>,
    #[serde(default)]
    flavors: Vec<Flavor>,
}

impl Inventory {
    #[tracing::instrument(name = "Inventory::from_file", skip_all, fields(
        file_path = ?file_path.as_ref()
    ))]
    pub async fn from_file(file_path: impl AsRef<Path>) -> Result<Self> {
        let file_contents = tokio::fs::read_to_string(file_path.as_ref()).await?;

        let inventory: Inventory = serde_yaml::from_str(&file_contents)?;

        Ok(inventory)
    }
}

#[async_trait]
impl InventoryProvider for Inventory {
    async fn services(&self) -> Result<Vec<Service>> {
        Ok(self.services.clone())
    }

    async fn flavors(&self) -> Result<Vec<Flavor>> {
        Ok(self.flavors.clone())
    }
}
