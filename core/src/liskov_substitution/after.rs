use rust_decimal::Decimal;
use tracing::debug;

use solid_common::money::Amount;

/// Anything that can take money in.
///
/// Balances saturate at `Decimal::MIN`/`Decimal::MAX` instead of overflowing.
pub trait Depositable {
    fn deposit(&mut self, amount: Amount);

    fn balance(&self) -> Decimal;

    fn kind(&self) -> &'static str;
}

/// An account that can also pay money out.
///
/// There is no error path: every implementor honors every withdrawal.
pub trait Withdrawable: Depositable {
    fn withdraw(&mut self, amount: Amount);
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

impl Depositable for CurrentAccount {
    fn deposit(&mut self, amount: Amount) {
        self.balance = self.balance.saturating_add(amount.value());
        debug!("CurrentAccount: deposited {amount}, balance {}", self.balance);
    }

    fn balance(&self) -> Decimal {
        self.balance
    }

    fn kind(&self) -> &'static str {
        "CurrentAccount"
    }
}

impl Withdrawable for CurrentAccount {
    fn withdraw(&mut self, amount: Amount) {
        self.balance = self.balance.saturating_sub(amount.value());
        debug!("CurrentAccount: withdrew {amount}, balance {}", self.balance);
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

impl Depositable for SavingAccount {
    fn deposit(&mut self, amount: Amount) {
        self.balance = self.balance.saturating_add(amount.value());
        debug!("SavingAccount: deposited {amount}, balance {}", self.balance);
    }

    fn balance(&self) -> Decimal {
        self.balance
    }

    fn kind(&self) -> &'static str {
        "SavingAccount"
    }
}

impl Withdrawable for SavingAccount {
    fn withdraw(&mut self, amount: Amount) {
        self.balance = self.balance.saturating_sub(amount.value());
        debug!("SavingAccount: withdrew {amount}, balance {}", self.balance);
    }
}

/// Deposit only. Not [`Withdrawable`], so a withdrawal does not type-check.
#[derive(Debug, Default, Clone)]
pub struct FixedTermDepositAccount {
    balance: Decimal,
}

impl FixedTermDepositAccount {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Depositable for FixedTermDepositAccount {
    fn deposit(&mut self, amount: Amount) {
        self.balance = self.balance.saturating_add(amount.value());
        debug!("FixedTermDepositAccount: deposited {amount}, balance {}", self.balance);
    }

    fn balance(&self) -> Decimal {
        self.balance
    }

    fn kind(&self) -> &'static str {
        "FixedTermDepositAccount"
    }
}

/// Withdraws `amount` from every account. Nothing to check afterwards.
pub fn withdraw_from_all(accounts: &mut [Box<dyn Withdrawable>], amount: Amount) {
    for account in accounts.iter_mut() {
        account.withdraw(amount);
    }
}

/// Deposits `amount` into every account, fixed-term ones included.
pub fn deposit_into_all(accounts: &mut [Box<dyn Depositable>], amount: Amount) {
    for account in accounts.iter_mut() {
        account.deposit(amount);
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
