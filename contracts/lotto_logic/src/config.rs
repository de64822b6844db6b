use crate::error::LottoError;
use crate::Balance;

/// One whole unit of the native token (18 decimals).
pub const UNIT: Balance = 1_000_000_000_000_000_000;

/// 0.01 unit.
pub const DEFAULT_MINIMUM_ENTRY_FEE: Balance = UNIT / 100;

/// Construction-time settings. Fixed for the lifetime of a deployment.
#[derive(Debug, Clone, Copy, Eq, PartialEq, scale::Encode, scale::Decode)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub struct LottoConfig {
    pub minimum_entry_fee: Balance,
}

impl Default for LottoConfig {
    fn default() -> Self {
        Self {
            minimum_entry_fee: DEFAULT_MINIMUM_ENTRY_FEE,
        }
    }
}

impl LottoConfig {
    /// The entry fee must be non-zero.
    pub fn validate(&self) -> Result<(), LottoError> {
        if self.minimum_entry_fee == 0 {
            return Err(LottoError::InvalidConfig);
        }
        Ok(())
    }
}
