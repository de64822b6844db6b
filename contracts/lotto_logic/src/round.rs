use crate::entropy::{winner_index, EntropySource};
use crate::error::LottoError;
use crate::payout::Payout;
use crate::{AccountId, Balance};
use ink::prelude::{collections::BTreeSet, vec::Vec};

/// Snapshot returned by `get_lotto_info`.
#[derive(Debug, Clone, Eq, PartialEq, scale::Encode, scale::Decode)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub struct LottoInfo {
    pub player_count: u32,
    pub prize_pool: Balance,
    pub minimum_entry_fee: Balance,
    pub manager: AccountId,
    pub players: Vec<AccountId>,
}

/// Result of a successful draw.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct DrawOutcome {
    pub winner: AccountId,
    pub prize: Balance,
    /// Number of the round that was drawn.
    pub round: u32,
}

/// The single live lottery round.
///
/// `participants` keeps entry order; `entered` holds the same accounts for
/// membership checks. A reset clears both together with the pool and moves
/// on to the next round number. `manager`, `minimum_entry_fee` and `paused`
/// survive resets.
#[derive(Debug, Clone, Eq, PartialEq, scale::Encode, scale::Decode)]
#[cfg_attr(
    feature = "std",
    derive(scale_info::TypeInfo, ink::storage::traits::StorageLayout)
)]
pub struct Round {
    manager: AccountId,
    participants: Vec<AccountId>,
    entered: BTreeSet<AccountId>,
    pool: Balance,
    paused: bool,
    minimum_entry_fee: Balance,
    number: u32,
}

impl Round {
    pub fn new(manager: AccountId, minimum_entry_fee: Balance) -> Self {
        Self {
            manager,
            participants: Vec::new(),
            entered: BTreeSet::new(),
            pool: 0,
            paused: false,
            minimum_entry_fee,
            number: 0,
        }
    }

    // ---------------------------------------------------------------------
    // Transitions
    // ---------------------------------------------------------------------

    /// Adds `caller` to the round with a payment of `amount`.
    ///
    /// Returns the slot the caller was given (0-based entry order).
    pub fn enter(&mut self, caller: AccountId, amount: Balance) -> Result<u32, LottoError> {
        if self.paused {
            return Err(LottoError::Paused);
        }
        if amount < self.minimum_entry_fee {
            return Err(LottoError::InsufficientEntryFee);
        }
        if caller == self.manager {
            return Err(LottoError::ManagerCannotEnter);
        }
        if self.entered.contains(&caller) {
            return Err(LottoError::AlreadyEntered);
        }

        let pool = self.pool.checked_add(amount).ok_or(LottoError::Overflow)?;
        let slot = self.participants.len() as u32;

        self.participants.push(caller);
        self.entered.insert(caller);
        self.pool = pool;

        Ok(slot)
    }

    /// Picks a winner with `entropy`, pays the whole pool through `payout`
    /// and resets the round.
    ///
    /// Nothing is reset unless the payout succeeds.
    pub fn draw<E, P>(
        &mut self,
        caller: AccountId,
        entropy: &E,
        payout: &mut P,
    ) -> Result<DrawOutcome, LottoError>
    where
        E: EntropySource + ?Sized,
        P: Payout + ?Sized,
    {
        self.ensure_manager(caller)?;
        if self.participants.is_empty() {
            return Err(LottoError::NoPlayers);
        }

        let seed = entropy.seed(&self.participants);
        let winner = winner_index(&seed, self.participants.len())
            .and_then(|index| self.participants.get(index).copied())
            .ok_or(LottoError::NoPlayers)?;
        let prize = self.pool;

        payout.pay(winner, prize)?;

        let round = self.number;
        self.reset();

        Ok(DrawOutcome {
            winner,
            prize,
            round,
        })
    }

    /// Flips the paused flag. Returns the new value.
    pub fn toggle_pause(&mut self, caller: AccountId) -> Result<bool, LottoError> {
        self.ensure_manager(caller)?;
        self.paused = !self.paused;
        Ok(self.paused)
    }

    /// Drains the pool to the manager and resets the round. Only while paused.
    ///
    /// An empty pool is not transferred; the round still resets.
    pub fn emergency_withdraw<P>(
        &mut self,
        caller: AccountId,
        payout: &mut P,
    ) -> Result<Balance, LottoError>
    where
        P: Payout + ?Sized,
    {
        self.ensure_manager(caller)?;
        if !self.paused {
            return Err(LottoError::NotPaused);
        }

        let amount = self.pool;
        if amount > 0 {
            payout.pay(self.manager, amount)?;
        }
        self.reset();

        Ok(amount)
    }

    fn reset(&mut self) {
        self.participants.clear();
        self.entered.clear();
        self.pool = 0;
        self.number = self.number.saturating_add(1);
    }

    fn ensure_manager(&self, caller: AccountId) -> Result<(), LottoError> {
        if caller != self.manager {
            return Err(LottoError::NotManager);
        }
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------------

    pub fn player_count(&self) -> u32 {
        self.participants.len() as u32
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn has_entered(&self, account: &AccountId) -> bool {
        self.entered.contains(account)
    }

    pub fn manager(&self) -> AccountId {
        self.manager
    }

    pub fn pool(&self) -> Balance {
        self.pool
    }

    pub fn minimum_entry_fee(&self) -> Balance {
        self.minimum_entry_fee
    }

    pub fn players(&self) -> &[AccountId] {
        &self.participants
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn info(&self) -> LottoInfo {
        LottoInfo {
            player_count: self.player_count(),
            prize_pool: self.pool,
            minimum_entry_fee: self.minimum_entry_fee,
            manager: self.manager,
            players: self.participants.clone(),
        }
    }
}
