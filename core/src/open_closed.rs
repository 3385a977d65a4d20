//! # Open/Closed
//!
//! A payslip should stay closed for modification when a new kind of
//! employee contract appears.
//!
//! * **[`before`]**: `Payslip::calculate` inspects the concrete type of its
//!   argument. Every new contract kind means another branch.
//! * **[`after`]**: `Payslip::calculate` takes any [`after::Employee`]. New
//!   contract kinds implement the trait and the payslip never changes.
//!
//! Both designs share the contract kinds in [`contracts`].

pub mod after;
pub mod before;
pub mod contracts;
