/// Every way a lottery operation can be rejected.
///
/// A rejected operation has no effect on the round.
#[derive(Debug, Eq, PartialEq, Clone, Copy, scale::Encode, scale::Decode)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub enum LottoError {
    /// Caller is not the manager.
    NotManager,
    /// The manager tried to enter its own lottery.
    ManagerCannotEnter,
    /// Transferred value is below the minimum entry fee.
    InsufficientEntryFee,
    /// Caller already holds a slot in the current round.
    AlreadyEntered,
    /// Entries are closed while the lottery is paused.
    Paused,
    /// Emergency withdrawal needs the lottery to be paused first.
    NotPaused,
    /// Nobody has entered the current round.
    NoPlayers,
    /// The native transfer of the pool did not go through.
    TransferFailed,
    /// Pool arithmetic overflowed.
    Overflow,
    /// Rejected construction parameters.
    InvalidConfig,
}
