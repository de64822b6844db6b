use crate::error::LottoError;
use crate::{AccountId, Balance};

/// Moves value out of the lottery.
///
/// The round calls `pay` before it commits a reset. An `Err` aborts the
/// whole operation and leaves the pool in place.
pub trait Payout {
    fn pay(&mut self, recipient: AccountId, amount: Balance) -> Result<(), LottoError>;
}
