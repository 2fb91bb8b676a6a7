//! Configuration for sparse matrix multiplication

/// How the right operand's rows are located for each left element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MultiplyStrategy {
    /// Rescan the right operand from its first element for every left element
    ///
    /// No extra memory, worst case `nnz(A) × nnz(B)` steps.
    #[default]
    RowScan,
    /// Split the right operand into per-row runs once, then jump to each run
    ///
    /// Uses `O(B.n_rows)` extra memory for the run table.
    RowBucketed,
}

/// Configuration for [`crate::multiply_with_config`]
#[derive(Debug, Clone, Default)]
pub struct MultiplyConfig {
    /// Strategy for locating matching rows of the right operand
    pub strategy: MultiplyStrategy,
}

impl MultiplyConfig {
    /// Create a config using the given strategy
    pub fn with_strategy(strategy: MultiplyStrategy) -> Self {
        Self { strategy }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_row_scan() {
        let config = MultiplyConfig::default();
        assert_eq!(config.strategy, MultiplyStrategy::RowScan);
    }

    #[test]
    fn test_with_strategy() {
        let config = MultiplyConfig::with_strategy(MultiplyStrategy::RowBucketed);
        assert_eq!(config.strategy, MultiplyStrategy::RowBucketed);
    }
}
