//! Errors reported by the fallible `FreqTable` entry points.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TableError {
    #[error("bucket array allocation failed ({buckets} buckets)")]
    Alloc { buckets: usize },
    #[error("capacity overflow growing {capacity} buckets by a factor of {growth_factor}")]
    CapacityOverflow {
        capacity: usize,
        growth_factor: usize,
    },
    #[error("table capacity must be greater than zero")]
    ZeroCapacity,
    #[error("max load must be finite and greater than zero, got {0}")]
    InvalidMaxLoad(f64),
    #[error("growth factor must be at least 2, got {0}")]
    InvalidGrowthFactor(usize),
}
