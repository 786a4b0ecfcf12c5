//! Construction parameters for `FreqTable`.

use crate::error::TableError;

pub const DEFAULT_INITIAL_CAPACITY: usize = 64;
pub const DEFAULT_MAX_LOAD: f64 = 1.0;
pub const DEFAULT_GROWTH_FACTOR: usize = 3;

/// Sizing policy of a table: where it starts, when it grows, and by how much.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TableConfig {
    /// Number of buckets allocated up front. Must be non-zero.
    pub initial_capacity: usize,
    /// Growth triggers once `len / capacity` is strictly greater than this.
    pub max_load: f64,
    /// Capacity multiplier applied on growth. At least 2.
    pub growth_factor: usize,
}

impl TableConfig {
    pub fn new(initial_capacity: usize, max_load: f64) -> Self {
        Self {
            initial_capacity,
            max_load,
            ..Self::default()
        }
    }

    pub fn with_growth_factor(self, growth_factor: usize) -> Self {
        Self {
            growth_factor,
            ..self
        }
    }

    pub fn validate(&self) -> Result<(), TableError> {
        if self.initial_capacity == 0 {
            return Err(TableError::ZeroCapacity);
        }
        validate_max_load(self.max_load)?;
        validate_growth_factor(self.growth_factor)
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            max_load: DEFAULT_MAX_LOAD,
            growth_factor: DEFAULT_GROWTH_FACTOR,
        }
    }
}

pub(crate) fn validate_max_load(max_load: f64) -> Result<(), TableError> {
    if max_load.is_finite() && max_load > 0.0 {
        Ok(())
    } else {
        Err(TableError::InvalidMaxLoad(max_load))
    }
}

pub(crate) fn validate_growth_factor(growth_factor: usize) -> Result<(), TableError> {
    if growth_factor >= 2 {
        Ok(())
    } else {
        Err(TableError::InvalidGrowthFactor(growth_factor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = TableConfig::default();
        assert_eq!(cfg.initial_capacity, 64);
        assert_eq!(cfg.max_load, 1.0);
        assert_eq!(cfg.growth_factor, 3);
        assert_eq!(cfg.validate(), Ok(()));
    }

    #[test]
    fn rejects_out_of_range_parameters() {
        assert_eq!(
            TableConfig::new(0, 1.0).validate(),
            Err(TableError::ZeroCapacity)
        );
        assert_eq!(
            TableConfig::new(4, 0.0).validate(),
            Err(TableError::InvalidMaxLoad(0.0))
        );
        assert_eq!(
            TableConfig::new(4, -1.0).validate(),
            Err(TableError::InvalidMaxLoad(-1.0))
        );
        assert!(matches!(
            TableConfig::new(4, f64::NAN).validate(),
            Err(TableError::InvalidMaxLoad(_))
        ));
        assert_eq!(
            TableConfig::new(4, 1.0).with_growth_factor(1).validate(),
            Err(TableError::InvalidGrowthFactor(1))
        );
    }

    /// Loads above 1.0 are legal for a chained table.
    #[test]
    fn accepts_max_load_above_one() {
        assert_eq!(TableConfig::new(1, 4.5).with_growth_factor(2).validate(), Ok(()));
    }
}
