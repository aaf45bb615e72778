//! Configuration and strategy selection parameters for multiplication

use crate::constants::{
    DEFAULT_LOW_DENSITY_CARDINALITY_LIMIT, DEFAULT_LOW_DENSITY_MIN_ROWS,
    DEFAULT_SMALL_CARDINALITY_LIMIT,
};

/// The multiplication strategy selected for a pair of operands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MulStrategy {
    /// Both operands carry very few non-zeros: nested scan with a live
    /// traversal of the left operand
    Small,
    /// The right operand is large but nearly empty: nested scan over COO
    /// snapshots of both operands
    LowDensity,
    /// Default: walk the right operand's CSR row slices per left non-zero
    MediumDensity,
}

/// Tuning knobs for multiplication dispatch
///
/// The defaults are empirically tuned constants, not derived quantities;
/// treat them as a starting point rather than load-bearing invariants.
#[derive(Debug, Clone)]
pub struct MulConfig {
    /// Both cardinalities below this select [`MulStrategy::Small`]
    pub small_cardinality_limit: usize,

    /// Right-operand row count that must be exceeded for
    /// [`MulStrategy::LowDensity`]
    pub low_density_min_rows: usize,

    /// Right-operand cardinality that must not be reached for
    /// [`MulStrategy::LowDensity`]
    pub low_density_cardinality_limit: usize,
}

impl Default for MulConfig {
    fn default() -> Self {
        Self {
            small_cardinality_limit: DEFAULT_SMALL_CARDINALITY_LIMIT,
            low_density_min_rows: DEFAULT_LOW_DENSITY_MIN_ROWS,
            low_density_cardinality_limit: DEFAULT_LOW_DENSITY_CARDINALITY_LIMIT,
        }
    }
}
