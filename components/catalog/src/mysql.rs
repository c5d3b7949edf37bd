use config::Database;
use log::{debug, info};
use model::PartitionDescriptor;
use mysql_async::{prelude::Queryable, Opts, OptsBuilder, Pool, SslOpts};

use crate::{error::CatalogError, PartitionCatalog};

const PARTITIONS_QUERY: &str = r#"
SELECT PARTITION_METHOD, PARTITION_DESCRIPTION
FROM information_schema.PARTITIONS
WHERE TABLE_SCHEMA = ? AND TABLE_NAME = ?
ORDER BY PARTITION_ORDINAL_POSITION ASC"#;

/// Partition catalog backed by `information_schema.PARTITIONS` of a MySQL server.
pub struct MySqlCatalog {
    pool: Pool,
}

impl MySqlCatalog {
    pub fn new(database: &Database) -> Self {
        let opts = OptsBuilder::default()
            .ip_or_hostname(database.host.clone())
            .tcp_port(database.port)
            .user(Some(database.user.clone()))
            .pass(Some(database.password.clone()))
            .ssl_opts(database.ssl.then(SslOpts::default));
        Self {
            pool: Pool::new(Opts::from(opts)),
        }
    }

    /// Close all pooled connections.
    pub async fn disconnect(self) -> Result<(), CatalogError> {
        self.pool.disconnect().await?;
        info!("Disconnected from MySQL");
        Ok(())
    }
}

impl PartitionCatalog for MySqlCatalog {
    async fn partition_descriptors(
        &self,
        schema: &str,
        table: &str,
    ) -> Result<Vec<PartitionDescriptor>, CatalogError> {
        // The connection goes back to the pool once dropped, whether the query succeeds or not.
        let mut conn = self.pool.get_conn().await?;
        let rows: Vec<(Option<String>, Option<String>)> =
            conn.exec(PARTITIONS_QUERY, (schema.to_owned(), table.to_owned())).await?;
        debug!(
            "Fetched {} partition rows of `{}`.`{}`",
            rows.len(),
            schema,
            table
        );
        into_descriptors(schema, table, rows)
    }
}

/// MySQL reports a table without partitions as a single row whose method is `NULL`.
fn into_descriptors(
    schema: &str,
    table: &str,
    rows: Vec<(Option<String>, Option<String>)>,
) -> Result<Vec<PartitionDescriptor>, CatalogError> {
    rows.into_iter()
        .map(|(method, description)| match method {
            Some(method) => Ok(PartitionDescriptor::new(
                method,
                description.unwrap_or_default(),
            )),
            None => Err(CatalogError::NotPartitioned {
                schema: schema.to_owned(),
                table: table.to_owned(),
            }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PartitionViewer, PartitionedTable};
    use std::error::Error;

    #[test]
    fn test_into_descriptors() -> Result<(), CatalogError> {
        let rows = vec![
            (Some("RANGE".to_owned()), Some("1000".to_owned())),
            (Some("RANGE".to_owned()), Some("MAXVALUE".to_owned())),
        ];
        let descriptors = into_descriptors("maxposter", "holding_market_offer", rows)?;
        assert_eq!(
            descriptors,
            vec![
                PartitionDescriptor::new("RANGE", "1000"),
                PartitionDescriptor::new("RANGE", "MAXVALUE"),
            ]
        );

        assert!(into_descriptors("maxposter", "holding_market_offer", vec![])?.is_empty());
        Ok(())
    }

    #[test]
    fn test_into_descriptors_not_partitioned() {
        let rows = vec![(None, None)];
        match into_descriptors("maxposter", "vehicle", rows) {
            Err(CatalogError::NotPartitioned { schema, table }) => {
                assert_eq!("maxposter", schema);
                assert_eq!("vehicle", table);
            }
            other => panic!("Unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_null_description() -> Result<(), CatalogError> {
        let rows = vec![(Some("HASH".to_owned()), None)];
        let descriptors = into_descriptors("maxposter", "holding_market_offer", rows)?;
        assert_eq!(descriptors, vec![PartitionDescriptor::new("HASH", "")]);
        Ok(())
    }

    /// Requires a reachable MySQL server configured as in `etc/partition-viewer.yaml`.
    #[ignore]
    #[tokio::test]
    async fn test_mysql_partitions() -> Result<(), Box<dyn Error>> {
        ulog::try_init_log();
        let database = Database::default();
        let viewer = PartitionViewer::with_database(&database);
        let ranges = viewer.partitions(PartitionedTable::HoldingMarketOffer).await?;
        for range in &ranges {
            log::info!("holding_market_offer partition {}", range);
        }
        viewer.into_catalog().disconnect().await?;
        Ok(())
    }
}
