//! # Dependency Inversion
//!
//! A password reminder needs a database connection to look users up.
//!
//! * **[`before`]**: the reminder names `MySqlConnection` directly and can
//!   build one itself. It cannot run against anything else.
//! * **[`after`]**: the reminder depends on the [`after::DbConnection`]
//!   trait and is always handed its connection by the caller.
//!
//! ## Dependency Rule
//! * High-level policy (`PasswordReminder`) depends on the abstraction.
//! * Low-level details (`MySqlConnection`, test doubles) implement it.

pub mod after;
pub mod before;

/// Data source used when a connection is built without one.
pub const DEFAULT_DATA_SOURCE: &str = "mysql://localhost:3306/app";
