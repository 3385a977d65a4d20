use rust_decimal::Decimal;
use tracing::{debug, warn};

use solid_common::error::AccountError;
use solid_common::money::Amount;

/// Balances saturate at `Decimal::MIN`/`Decimal::MAX` instead of overflowing.
pub trait Account {
    fn deposit(&mut self, amount: Amount);

    /// Fails with [`AccountError::UnsupportedOperation`] on account types
    /// that cannot pay out.
    fn withdraw(&mut self, amount: Amount) -> Result<(), AccountError>;

    fn balance(&self) -> Decimal;

    fn kind(&self) -> &'static str;
}

#[derive(Debug, Default, Clone)]
pub struct CurrentAccount {
    balance: Decimal,
}

impl CurrentAccount {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Account for CurrentAccount {
    fn deposit(&mut self, amount: Amount) {
        self.balance = self.balance.saturating_add(amount.value());
        debug!("CurrentAccount: deposited {amount}, balance {}", self.balance);
    }

    fn withdraw(&mut self, amount: Amount) -> Result<(), AccountError> {
        self.balance = self.balance.saturating_sub(amount.value());
        debug!("CurrentAccount: withdrew {amount}, balance {}", self.balance);
        Ok(())
    }

    fn balance(&self) -> Decimal {
        self.balance
    }

    fn kind(&self) -> &'static str {
        "CurrentAccount"
    }
}

#[derive(Debug, Default, Clone)]
pub struct SavingAccount {
    balance: Decimal,
}

impl SavingAccount {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Account for SavingAccount {
    fn deposit(&mut self, amount: Amount) {
        self.balance = self.balance.saturating_add(amount.value());
        debug!("SavingAccount: deposited {amount}, balance {}", self.balance);
    }

    fn withdraw(&mut self, amount: Amount) -> Result<(), AccountError> {
        self.balance = self.balance.saturating_sub(amount.value());
        debug!("SavingAccount: withdrew {amount}, balance {}", self.balance);
        Ok(())
    }

    fn balance(&self) -> Decimal {
        self.balance
    }

    fn kind(&self) -> &'static str {
        "SavingAccount"
    }
}

#[derive(Debug, Default, Clone)]
pub struct FixedTermDepositAccount {
    balance: Decimal,
}

impl FixedTermDepositAccount {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Account for FixedTermDepositAccount {
    fn deposit(&mut self, amount: Amount) {
        self.balance = self.balance.saturating_add(amount.value());
        debug!("FixedTermDepositAccount: deposited {amount}, balance {}", self.balance);
    }

    fn withdraw(&mut self, amount: Amount) -> Result<(), AccountError> {
        warn!("FixedTermDepositAccount: rejected withdrawal of {amount}");
        Err(AccountError::withdrawals_unsupported(self.kind()))
    }

    fn balance(&self) -> Decimal {
        self.balance
    }

    fn kind(&self) -> &'static str {
        "FixedTermDepositAccount"
    }
}

/// Withdraws `amount` from every account.
///
/// Returns one result per account, in order. Callers cannot assume success
/// for any element because some `Account` implementors reject the call.
pub fn withdraw_from_all(
    accounts: &mut [Box<dyn Account>],
    amount: Amount,
) -> Vec<Result<(), AccountError>> {
    accounts
        .iter_mut()
        .map(|account| account.withdraw(amount))
        .collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
