use crate::AccountId;
use ink::env::hash::Keccak256;

/// Supplies the randomness a draw picks its winner from.
pub trait EntropySource {
    /// Returns a 32-byte seed for a draw over `participants`.
    fn seed(&self, participants: &[AccountId]) -> [u8; 32];
}

/// Seed derived from the block the draw executes in.
///
/// Block producers can predict and influence this value. It is only fit for
/// low-stakes rounds. A verifiable randomness provider can replace it through
/// [`EntropySource`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ChainEntropy {
    pub block_timestamp: u64,
    pub block_number: u32,
}

impl EntropySource for ChainEntropy {
    fn seed(&self, participants: &[AccountId]) -> [u8; 32] {
        let mut output = [0u8; 32];
        ink::env::hash_encoded::<Keccak256, _>(
            &(self.block_timestamp, self.block_number, participants),
            &mut output,
        );
        output
    }
}

/// Always returns the same seed.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct FixedEntropy(pub [u8; 32]);

impl FixedEntropy {
    /// Seed whose winner index is `value % count` for any participant count.
    pub fn from_u128(value: u128) -> Self {
        let mut seed = [0u8; 32];
        seed[..16].copy_from_slice(&value.to_le_bytes());
        Self(seed)
    }
}

impl EntropySource for FixedEntropy {
    fn seed(&self, _participants: &[AccountId]) -> [u8; 32] {
        self.0
    }
}

/// Maps a seed onto `0..count` using its low 128 bits (little endian).
///
/// Returns `None` when `count` is zero.
pub fn winner_index(seed: &[u8; 32], count: usize) -> Option<usize> {
    let mut head = [0u8; 16];
    head.copy_from_slice(&seed[..16]);
    let value = u128::from_le_bytes(head);
    value
        .checked_rem(count as u128)
        .map(|index| index as usize)
}
