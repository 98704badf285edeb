//! Run configuration

use crate::Address;

/// Which literals a pool flush places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PoolMode {
    /// Every flush places the whole literal table seen so far.
    #[default]
    Cumulative,
    /// A flush places only the literals registered since the previous one.
    PerPool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    pub pool_mode: PoolMode,
    /// Location counter before the first statement.
    pub start_address: Address,
}

impl Config {
    pub fn with_pool_mode(mut self, pool_mode: PoolMode) -> Self {
        self.pool_mode = pool_mode;
        self
    }

    pub fn with_start_address(mut self, start_address: Address) -> Self {
        self.start_address = start_address;
        self
    }
}
