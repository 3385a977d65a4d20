//! # SOLID Examples
//!
//! Each module pairs a design that violates one SOLID principle (`before`)
//! with one that honors it (`after`). The modules share nothing but the
//! value objects in `solid-common`.
//!
//! * **[`liskov_substitution`]**: accounts that can and cannot withdraw.
//! * **[`open_closed`]**: a payslip that must be edited for every new contract kind, and one that need not.
//! * **[`dependency_inversion`]**: a password reminder that builds its own database connection, and one that is handed one.

pub mod dependency_inversion;
pub mod liskov_substitution;
pub mod open_closed;
