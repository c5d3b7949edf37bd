use std::fmt::{self, Display, Formatter};

/// Value of `PARTITION_METHOD` for tables partitioned by `RANGE`.
pub const RANGE_METHOD: &str = "RANGE";

/// Value of `PARTITION_DESCRIPTION` for the partition holding everything above the last boundary.
pub const MAX_VALUE: &str = "MAXVALUE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartitionMethod {
    Range,
    Other(String),
}

impl From<&str> for PartitionMethod {
    fn from(value: &str) -> Self {
        match value {
            RANGE_METHOD => PartitionMethod::Range,
            other => PartitionMethod::Other(other.to_owned()),
        }
    }
}

impl Display for PartitionMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PartitionMethod::Range => f.write_str(RANGE_METHOD),
            PartitionMethod::Other(method) => f.write_str(method),
        }
    }
}

/// One row of partition metadata, as reported by `information_schema.PARTITIONS`.
///
/// `description` holds the exclusive upper boundary of the partition, or [`MAX_VALUE`]
/// for the trailing unbounded one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionDescriptor {
    method: String,
    description: String,
}

impl PartitionDescriptor {
    pub fn new<M, D>(method: M, description: D) -> Self
    where
        M: Into<String>,
        D: Into<String>,
    {
        Self {
            method: method.into(),
            description: description.into(),
        }
    }

    pub fn partition_method(&self) -> PartitionMethod {
        PartitionMethod::from(self.method.as_str())
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_unbounded(&self) -> bool {
        self.description == MAX_VALUE
    }
}
