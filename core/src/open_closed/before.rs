use std::any::{self, Any};

use tracing::{debug, warn};

use solid_common::error::PayslipError;
use solid_common::money::Amount;

use super::contracts::{Contractor, FullTimeContract, PartTimeContract};

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

    /// Sets the balance from whatever `employee` happens to be.
    ///
    /// Only the three contract kinds in [`super::contracts`] are known. Any
    /// other type fails and leaves the balance untouched.
    pub fn calculate<T: Any>(&mut self, employee: &T) -> Result<(), PayslipError> {
        let employee: &dyn Any = employee;

        let amount = if let Some(contract) = employee.downcast_ref::<FullTimeContract>() {
            contract.salary()
        } else if let Some(contract) = employee.downcast_ref::<PartTimeContract>() {
            contract.salary()
        } else if let Some(contractor) = employee.downcast_ref::<Contractor>() {
            contractor.payment()
        } else {
            let type_name = any::type_name::<T>();
            warn!("Payslip: cannot calculate for {type_name}");
            return Err(PayslipError::InvalidEmployeeType { type_name });
        };

        debug!("Payslip: balance set to {amount}");
        self.balance = Some(amount);
        Ok(())
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
