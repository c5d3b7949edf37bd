use model::error::PartitionError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Table `{schema}`.`{table}` is not partitioned")]
    NotPartitioned { schema: String, table: String },

    #[error("Invalid partition metadata")]
    Partition(#[from] PartitionError),

    #[error("MySQL error")]
    MySql(#[from] mysql_async::Error),
}
