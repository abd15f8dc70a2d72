//! Resources shared by every command: the warehouse and the nflverse source.

use crate::{
    config::{Settings, WarehouseSettings},
    nflverse::{HttpSource, LocalDirSource, NflDataSource},
    warehouse::{BigQueryWarehouse, SqliteWarehouse, Warehouse},
    Result,
};

/// Context containing the resources needed by every command
pub struct CommandContext {
    pub warehouse: Box<dyn Warehouse>,
    pub source: Box<dyn NflDataSource>,
}

impl CommandContext {
    /// Connect the configured warehouse and pick the nflverse source.
    pub fn new(settings: &Settings) -> Result<Self> {
        let warehouse: Box<dyn Warehouse> = match &settings.warehouse {
            WarehouseSettings::BigQuery(bq) => Box::new(BigQueryWarehouse::new(bq)),
            WarehouseSettings::Sqlite { path } => Box::new(SqliteWarehouse::open(path)?),
        };

        let source: Box<dyn NflDataSource> = match &settings.data_dir {
            Some(dir) => Box::new(LocalDirSource::new(dir)),
            None => Box::new(HttpSource::with_defaults(settings.refresh)),
        };

        tracing::debug!("Warehouse: {}", warehouse.describe());
        tracing::debug!("Source: {}", source.describe());
        Ok(Self::from_parts(warehouse, source))
    }

    pub fn from_parts(warehouse: Box<dyn Warehouse>, source: Box<dyn NflDataSource>) -> Self {
        Self { warehouse, source }
    }

    pub fn warehouse(&self) -> &dyn Warehouse {
        self.warehouse.as_ref()
    }

    pub fn source(&self) -> &dyn NflDataSource {
        self.source.as_ref()
    }
}
