//! # Error Types
//!
//! Each variant here belongs to a "before" design. The matching "after"
//! designs make them impossible to construct through their public API.

use rust_decimal::Decimal;
use thiserror::Error;

/// Failures when building an [`crate::money::Amount`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    #[error("Amount cannot be negative: {0}")]
    Negative(Decimal),
    #[error("Invalid amount: {0}")]
    Invalid(String),
}

/// Failures raised by accounts that declare more than they can do.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountError {
    /// The account type declares the operation but cannot honor it.
    #[error("{operation} are not supported by {account}!!")]
    UnsupportedOperation {
        operation: &'static str,
        account: &'static str,
    },
}

impl AccountError {
    pub fn withdrawals_unsupported(account: &'static str) -> Self {
        Self::UnsupportedOperation {
            operation: "Withdrawals",
            account,
        }
    }
}

/// Failures raised by a payslip that inspects concrete employee types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayslipError {
    #[error("Invalid employee type: {type_name}")]
    InvalidEmployeeType { type_name: &'static str },
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
