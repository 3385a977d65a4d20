//! # Liskov Substitution
//!
//! A consumer holding "some account" should be able to call any operation
//! that account type declares.
//!
//! * **[`before`]**: one broad `Account` trait. `FixedTermDepositAccount`
//!   declares `withdraw` but rejects every call, so generic callers have to
//!   guard against it.
//! * **[`after`]**: `Depositable` and `Withdrawable` are split. Only the
//!   accounts that can withdraw implement `Withdrawable`, and its `withdraw`
//!   has no error path at all.

pub mod after;
pub mod before;
