use log::debug;

use crate::error::{LiteralError, PartitionError};
use crate::partition::{PartitionDescriptor, PartitionMethod};
use crate::range::PartitionRange;

/// Rebuilds the key ranges of a range-partitioned table from its partition descriptors.
///
/// Databases store, for each range partition, the boundary its keys stay below. The reader walks
/// descriptors in ordinal order and turns each of those exclusive boundaries into the inclusive
/// `[from, to]` range the partition owns, the trailing `MAXVALUE` partition becoming open-ended.
pub struct PartitionRangeReader;

impl PartitionRangeReader {
    /// Convert descriptors, ordered by partition ordinal position, into contiguous ranges.
    ///
    /// The first range starts at `0` and each following range starts right after its predecessor.
    /// One range is returned per descriptor. Any invalid descriptor fails the whole conversion.
    pub fn convert(
        descriptors: &[PartitionDescriptor],
    ) -> Result<Vec<PartitionRange>, PartitionError> {
        let mut ranges = Vec::with_capacity(descriptors.len());
        let mut start = 0_u64;
        let mut unbounded_at: Option<usize> = None;

        for (position, descriptor) in descriptors.iter().enumerate() {
            let method = descriptor.partition_method();
            if method != PartitionMethod::Range {
                return Err(PartitionError::UnsupportedMethod(method));
            }

            if let Some(position) = unbounded_at {
                return Err(PartitionError::UnboundedNotLast { position });
            }

            match upper_bound(descriptor)? {
                Some(bound) => {
                    if bound <= start {
                        return Err(PartitionError::BoundaryOutOfOrder {
                            description: descriptor.description().to_owned(),
                            start,
                        });
                    }
                    ranges.push(PartitionRange::bounded(start, bound - 1));
                    start = bound;
                }
                None => {
                    ranges.push(PartitionRange::unbounded(start));
                    unbounded_at = Some(position);
                }
            }
        }

        debug!(
            "Converted {} partition descriptors into ranges: {:?}",
            descriptors.len(),
            ranges
        );
        Ok(ranges)
    }
}

/// Exclusive upper boundary of the partition; `None` for `MAXVALUE`.
fn upper_bound(descriptor: &PartitionDescriptor) -> Result<Option<u64>, PartitionError> {
    if descriptor.is_unbounded() {
        return Ok(None);
    }

    parse_literal(descriptor.description())
        .map(Some)
        .map_err(|source| PartitionError::MalformedBoundary {
            description: descriptor.description().to_owned(),
            source,
        })
}

/// Parse an unsigned integer literal, honoring `0x`, `0o`, `0b` and leading-zero octal prefixes.
fn parse_literal(literal: &str) -> Result<u64, LiteralError> {
    let (digits, radix) = match literal.get(..2) {
        Some("0x") | Some("0X") => (&literal[2..], 16),
        Some("0o") | Some("0O") => (&literal[2..], 8),
        Some("0b") | Some("0B") => (&literal[2..], 2),
        _ if literal.len() > 1 && literal.starts_with('0') => (&literal[1..], 8),
        _ => (literal, 10),
    };
    if digits.starts_with('+') {
        return Err(LiteralError::Signed);
    }
    Ok(u64::from_str_radix(digits, radix)?)
}
