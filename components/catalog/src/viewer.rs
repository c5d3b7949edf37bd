use config::Database;
use log::{debug, warn};
use model::{PartitionRange, PartitionRangeReader};

use crate::{error::CatalogError, MySqlCatalog, PartitionCatalog, PartitionedTable};

/// Exposes key ranges of the known range-partitioned tables.
pub struct PartitionViewer<C> {
    catalog: C,
    schema: String,
}

impl PartitionViewer<MySqlCatalog> {
    pub fn with_database(database: &Database) -> Self {
        Self::new(MySqlCatalog::new(database), database.schema.clone())
    }
}

impl<C> PartitionViewer<C>
where
    C: PartitionCatalog,
{
    pub fn new<S>(catalog: C, schema: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            catalog,
            schema: schema.into(),
        }
    }

    pub fn schema(&self) -> &str {
        &self.schema
    }

    pub fn into_catalog(self) -> C {
        self.catalog
    }

    /// Key ranges of `table`, ordered by partition ordinal position.
    pub async fn partitions(
        &self,
        table: PartitionedTable,
    ) -> Result<Vec<PartitionRange>, CatalogError> {
        let descriptors = self
            .catalog
            .partition_descriptors(&self.schema, table.table_name())
            .await?;
        if descriptors.is_empty() {
            warn!("No partition found for `{}`.`{}`", self.schema, table);
        }

        let ranges = PartitionRangeReader::convert(&descriptors)?;
        debug!(
            "Table `{}`.`{}` has {} partitions",
            self.schema,
            table,
            ranges.len()
        );
        Ok(ranges)
    }

    pub async fn holding_market_offer_partitions(
        &self,
    ) -> Result<Vec<PartitionRange>, CatalogError> {
        self.partitions(PartitionedTable::HoldingMarketOffer).await
    }

    pub async fn holding_market_offer_interaction_partitions(
        &self,
    ) -> Result<Vec<PartitionRange>, CatalogError> {
        self.partitions(PartitionedTable::HoldingMarketOfferInteraction)
            .await
    }

    pub async fn vehicle_sale_statistic_view_partitions(
        &self,
    ) -> Result<Vec<PartitionRange>, CatalogError> {
        self.partitions(PartitionedTable::VehicleSaleStatisticView)
            .await
    }
}
