pub mod error;
pub mod partition;
pub mod range;
pub mod reader;

pub use crate::partition::PartitionDescriptor;
pub use crate::partition::PartitionMethod;
pub use crate::range::PartitionRange;
pub use crate::reader::PartitionRangeReader;
