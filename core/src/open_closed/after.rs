use tracing::debug;

use solid_common::money::Amount;

use super::contracts::{Contractor, FullTimeContract, PartTimeContract};

/// Anyone the payslip can be calculated for.
pub trait Employee {
    fn salary(&self) -> Amount;
}

impl Employee for FullTimeContract {
    fn salary(&self) -> Amount {
        FullTimeContract::salary(self)
    }
}

impl Employee for PartTimeContract {
    fn salary(&self) -> Amount {
        PartTimeContract::salary(self)
    }
}

impl Employee for Contractor {
    fn salary(&self) -> Amount {
        self.payment()
    }
}

#[derive(Debug, Default, Clone)]
pub struct Payslip {
    balance: Option<Amount>,
}

impl Payslip {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn balance(&self) -> Option<Amount> {
        self.balance
    }

    pub fn calculate(&mut self, employee: &dyn Employee) {
        let amount = employee.salary();
        debug!("Payslip: balance set to {amount}");
        self.balance = Some(amount);
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
