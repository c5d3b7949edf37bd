use std::num::ParseIntError;

use thiserror::Error;

use crate::partition::PartitionMethod;

#[derive(Debug, Error, PartialEq)]
pub enum PartitionError {
    #[error("Partition method `{0}` is not supported, expecting RANGE")]
    UnsupportedMethod(PartitionMethod),

    #[error("Partition description `{description}` is not a valid unsigned integer")]
    MalformedBoundary {
        description: String,
        source: LiteralError,
    },

    #[error("Partition boundary `{description}` does not exceed range start {start}")]
    BoundaryOutOfOrder { description: String, start: u64 },

    #[error("Unbounded partition at position {position} is followed by more partitions")]
    UnboundedNotLast { position: usize },
}

#[derive(Debug, Error, PartialEq)]
pub enum LiteralError {
    #[error("Unsigned literal must not carry a sign")]
    Signed,

    #[error("Invalid integer literal")]
    Int(#[from] ParseIntError),
}
