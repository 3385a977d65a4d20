#![cfg(test)]
use solid_common::error::PayslipError;
use solid_common::money::Amount;
use solid_core::open_closed::after::{self, Employee};
use solid_core::open_closed::before;
use solid_core::open_closed::contracts::{Contractor, FullTimeContract, PartTimeContract};

struct Freelancer {
    invoice: Amount,
}

impl Employee for Freelancer {
    fn salary(&self) -> Amount {
        self.invoice
    }
}

#[test]
fn before_payslip_handles_known_contracts_only() {
    let mut payslip = before::Payslip::new();

    payslip.calculate(&PartTimeContract::new(Amount::from(900))).unwrap();
    assert_eq!(payslip.balance(), Some(Amount::from(900)));

    let err = payslip
        .calculate(&Freelancer {
            invoice: Amount::from(1),
        })
        .unwrap_err();

    assert!(matches!(err, PayslipError::InvalidEmployeeType { type_name } if type_name.contains("Freelancer")));
    assert_eq!(payslip.balance(), Some(Amount::from(900)));
}

#[test]
fn after_payslip_handles_new_contract_kind_unchanged() {
    let employees: Vec<Box<dyn Employee>> = vec![
        Box::new(FullTimeContract::new(Amount::from(4000))),
        Box::new(Contractor::new(Amount::from(700))),
        Box::new(Freelancer {
            invoice: Amount::from(1250),
        }),
    ];

    let mut payslip = after::Payslip::new();
    let mut seen = Vec::new();
    for employee in employees.iter() {
        payslip.calculate(employee.as_ref());
        seen.extend(payslip.balance());
    }

    assert_eq!(
        seen,
        [Amount::from(4000), Amount::from(700), Amount::from(1250)]
    );
}

#[test]
fn both_designs_agree_on_known_contracts() {
    let contractor = Contractor::new(Amount::from(321));

    let mut old = before::Payslip::new();
    old.calculate(&contractor).unwrap();

    let mut new = after::Payslip::new();
    new.calculate(&contractor);

    assert_eq!(old.balance(), new.balance());
}
