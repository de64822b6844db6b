#![cfg_attr(not(feature = "std"), no_std, no_main)]

//! Chain-agnostic core of the Lotto contract.
//!
//! [`round::Round`] owns the whole lottery state. The execution environment
//! reaches it only through the caller and amount arguments and the
//! [`entropy::EntropySource`] and [`payout::Payout`] capabilities, so the
//! same state machine runs inside the contract and in plain unit tests.

pub use ink::primitives::AccountId;

pub type Balance = u128;

pub mod config;
pub mod entropy;
pub mod error;
pub mod payout;
pub mod round;
