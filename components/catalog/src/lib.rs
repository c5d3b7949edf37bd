pub mod error;
pub mod mysql;
pub mod table;
pub mod viewer;

use model::PartitionDescriptor;

use crate::error::CatalogError;

pub use crate::mysql::MySqlCatalog;
pub use crate::table::PartitionedTable;
pub use crate::viewer::PartitionViewer;

/// Source of partition metadata.
#[allow(async_fn_in_trait)]
pub trait PartitionCatalog {
    /// Fetch partition descriptors of `schema`.`table`.
    ///
    /// # Returns
    /// Descriptors ordered by partition ordinal position, ascending. An empty list if the catalog
    /// knows no partition of the table.
    async fn partition_descriptors(
        &self,
        schema: &str,
        table: &str,
    ) -> Result<Vec<PartitionDescriptor>, CatalogError>;
}
