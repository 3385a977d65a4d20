//! # Shared Building Blocks
//!
//! Types used by every example in `solid-core` and by the CLI.
//!
//! * **[`money`]**: the [`money::Amount`] value object passed to every account and payslip operation.
//! * **[`error`]**: the failure vocabulary of the "before" designs.
//! * **[`config`]**: runtime switches the CLI hands to each command.

pub mod config;
pub mod error;
pub mod money;
