#![cfg_attr(not(feature = "std"), no_std, no_main)]

/// # Lotto
///
/// Single-round lottery. Players pay at least the minimum entry fee to join.
/// The manager (the deployer) starts the draw, which pays the whole pool to
/// one player and opens the next round.
///
/// ```text
///   enter() ──► [round: players + pool] ──start_lottery()──► winner paid
///                      │                                       │
///                      └── pause() + emergency_withdraw() ──► manager paid
///                                                              │
///                                                   round resets (n + 1)
/// ```
///
/// The state machine itself lives in `lotto_logic::round::Round`. This
/// contract feeds it the caller, the transferred value, block-derived
/// entropy and native transfers, and turns its results into events.
#[ink::contract]
mod lotto {
    use ink::prelude::vec::Vec;
    use lotto_logic::{
        config::LottoConfig,
        entropy::ChainEntropy,
        error::LottoError,
        payout::Payout,
        round::{LottoInfo, Round},
    };

    // =========================================================================
    // STORAGE
    // =========================================================================

    #[ink(storage)]
    pub struct Lotto {
        round: Round,
    }

    // =========================================================================
    // EVENTS
    // =========================================================================

    /// Emitted when a player joins the current round.
    #[ink(event)]
    pub struct PlayerJoined {
        #[ink(topic)]
        player: AccountId,
        amount: Balance,
        round: u32,
    }

    /// Emitted when a draw pays out.
    #[ink(event)]
    pub struct WinnerSelected {
        #[ink(topic)]
        winner: AccountId,
        amount: Balance,
        round: u32,
    }

    /// Emitted after a draw or emergency withdrawal. `round` is the round now open.
    #[ink(event)]
    pub struct LotteryReset {
        round: u32,
    }

    #[ink(event)]
    pub struct PauseToggled {
        paused: bool,
    }

    /// Emitted when the manager drains the pool of a paused lottery.
    #[ink(event)]
    pub struct EmergencyWithdrawal {
        #[ink(topic)]
        manager: AccountId,
        amount: Balance,
        round: u32,
    }

    // =========================================================================
    // NATIVE TRANSFER
    // =========================================================================

    /// Pays out of the contract's own balance.
    struct NativeTransfer;

    impl Payout for NativeTransfer {
        fn pay(&mut self, recipient: AccountId, amount: Balance) -> Result<(), LottoError> {
            ink::env::transfer::<ink::env::DefaultEnvironment>(recipient, amount).map_err(|err| {
                ink::env::debug_println!("transfer of {} to {:?} failed: {:?}", amount, recipient, err);
                LottoError::TransferFailed
            })
        }
    }

    // =========================================================================
    // IMPLEMENTATION
    // =========================================================================

    impl Lotto {
        /// Deploys with the default 0.01 unit minimum entry fee. The caller becomes manager.
        #[ink(constructor)]
        pub fn new() -> Self {
            Self::from_config(LottoConfig::default())
        }

        #[ink(constructor)]
        pub fn with_minimum_entry_fee(minimum_entry_fee: Balance) -> Result<Self, LottoError> {
            let config = LottoConfig { minimum_entry_fee };
            config.validate()?;
            Ok(Self::from_config(config))
        }

        fn from_config(config: LottoConfig) -> Self {
            Self {
                round: Round::new(Self::env().caller(), config.minimum_entry_fee),
            }
        }

        // =================================================================
        // PLAYER
        // =================================================================

        /// Join the current round. The transferred value goes to the pool.
        #[ink(message, payable)]
        pub fn enter(&mut self) -> Result<(), LottoError> {
            let player = self.env().caller();
            let amount = self.env().transferred_value();

            self.round.enter(player, amount)?;

            self.env().emit_event(PlayerJoined {
                player,
                amount,
                round: self.round.number(),
            });

            Ok(())
        }

        // =================================================================
        // MANAGER
        // =================================================================

        /// Draw a winner, pay them the whole pool and open the next round.
        ///
        /// Entropy comes from the current block timestamp and number. That
        /// is predictable to block producers.
        #[ink(message)]
        pub fn start_lottery(&mut self) -> Result<AccountId, LottoError> {
            let caller = self.env().caller();
            let entropy = ChainEntropy {
                block_timestamp: self.env().block_timestamp(),
                block_number: self.env().block_number(),
            };

            let outcome = self.round.draw(caller, &entropy, &mut NativeTransfer)?;

            ink::env::debug_println!(
                "round {} won by {:?} for {}",
                outcome.round,
                outcome.winner,
                outcome.prize
            );

            self.env().emit_event(WinnerSelected {
                winner: outcome.winner,
                amount: outcome.prize,
                round: outcome.round,
            });
            self.env().emit_event(LotteryReset {
                round: self.round.number(),
            });

            Ok(outcome.winner)
        }

        /// Toggle the pause flag. Returns the new value.
        #[ink(message)]
        pub fn pause(&mut self) -> Result<bool, LottoError> {
            let paused = self.round.toggle_pause(self.env().caller())?;
            self.env().emit_event(PauseToggled { paused });
            Ok(paused)
        }

        /// Send the whole pool to the manager and reset. Only while paused.
        #[ink(message)]
        pub fn emergency_withdraw(&mut self) -> Result<Balance, LottoError> {
            let caller = self.env().caller();
            let round = self.round.number();

            let amount = self.round.emergency_withdraw(caller, &mut NativeTransfer)?;

            ink::env::debug_println!("emergency withdrawal of {} in round {}", amount, round);

            self.env().emit_event(EmergencyWithdrawal {
                manager: caller,
                amount,
                round,
            });
            self.env().emit_event(LotteryReset {
                round: self.round.number(),
            });

            Ok(amount)
        }

        // =================================================================
        // VIEW FUNCTIONS
        // =================================================================

        #[ink(message)]
        pub fn get_players_count(&self) -> u32 {
            self.round.player_count()
        }

        #[ink(message)]
        pub fn is_paused(&self) -> bool {
            self.round.is_paused()
        }

        #[ink(message)]
        pub fn has_player_entered(&self, player: AccountId) -> bool {
            self.round.has_entered(&player)
        }

        /// Returns player count, pool, minimum fee, manager and players in one call.
        #[ink(message)]
        pub fn get_lotto_info(&self) -> LottoInfo {
            self.round.info()
        }

        #[ink(message)]
        pub fn get_manager(&self) -> AccountId {
            self.round.manager()
        }

        #[ink(message)]
        pub fn get_prize_pool(&self) -> Balance {
            self.round.pool()
        }

        #[ink(message)]
        pub fn get_minimum_entry_fee(&self) -> Balance {
            self.round.minimum_entry_fee()
        }

        #[ink(message)]
        pub fn get_players(&self) -> Vec<AccountId> {
            self.round.players().to_vec()
        }

        #[ink(message)]
        pub fn get_round(&self) -> u32 {
            self.round.number()
        }
    }

    // =========================================================================
    // UNIT TESTS
    // =========================================================================


    // =========================================================================
    // E2E TESTS
    // =========================================================================

}
