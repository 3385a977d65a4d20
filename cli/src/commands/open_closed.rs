use std::num::NonZeroU32;

use colored::*;

use solid_common::{config::Config, money::Amount};
use solid_core::open_closed::after::{self, Employee};
use solid_core::open_closed::before;
use solid_core::open_closed::contracts::{Contractor, FullTimeContract, PartTimeContract};

use crate::terminal::{colors, print};

const HALF: NonZeroU32 = NonZeroU32::new(2).unwrap();
const QUARTER: NonZeroU32 = NonZeroU32::new(4).unwrap();

/// A contract kind the core crate has never heard of.
struct Intern {
    stipend: Amount,
}

impl Employee for Intern {
    fn salary(&self) -> Amount {
        self.stipend
    }
}

struct Staff {
    full_time: FullTimeContract,
    part_time: PartTimeContract,
    contractor: Contractor,
    intern: Intern,
}

impl Staff {
    /// Part-timers get half, contractors and interns a quarter.
    fn from_salary(salary: Amount) -> Self {
        Self {
            full_time: FullTimeContract::new(salary),
            part_time: PartTimeContract::new(salary.divided_by(HALF)),
            contractor: Contractor::new(salary.divided_by(QUARTER)),
            intern: Intern {
                stipend: salary.divided_by(QUARTER),
            },
        }
    }
}

pub fn open_closed(salary: Amount, cfg: &Config) -> anyhow::Result<()> {
    let staff = Staff::from_salary(salary);

    let (failures, total_before) = run_before(&staff, cfg);
    crate::sprint!();
    let total_after = run_after(&staff, cfg);

    print::summary(&format!(
        "before: {failures} of {total_before} payslips failed, after: 0 of {total_after}"
    ));
    Ok(())
}

fn show(kind: &str, result: Result<Option<Amount>, String>, cfg: &Config) {
    match result {
        Ok(Some(balance)) => print::aligned_line(kind, format!("balance {balance}"), cfg),
        Ok(None) => print::aligned_line(kind, "no balance", cfg),
        Err(err) => print::aligned_line(kind, err.color(colors::FAILURE), cfg),
    }
}

/// Returns how many payslips failed, out of how many.
fn run_before(staff: &Staff, cfg: &Config) -> (usize, usize) {
    print::header("open/closed: before", cfg);

    let outcomes = [
        ("FullTimeContract", calculate_before(&staff.full_time)),
        ("PartTimeContract", calculate_before(&staff.part_time)),
        ("Contractor", calculate_before(&staff.contractor)),
        ("Intern", calculate_before(&staff.intern)),
    ];

    let total: usize = outcomes.len();
    let mut failures: usize = 0;
    for (kind, outcome) in outcomes {
        if outcome.is_err() {
            failures += 1;
        }
        show(kind, outcome, cfg);
    }
    (failures, total)
}

fn calculate_before<T: 'static>(employee: &T) -> Result<Option<Amount>, String> {
    let mut payslip = before::Payslip::new();
    payslip
        .calculate(employee)
        .map(|()| payslip.balance())
        .map_err(|err| err.to_string())
}

fn run_after(staff: &Staff, cfg: &Config) -> usize {
    print::header("open/closed: after", cfg);

    let employees: [(&str, &dyn Employee); 4] = [
        ("FullTimeContract", &staff.full_time),
        ("PartTimeContract", &staff.part_time),
        ("Contractor", &staff.contractor),
        ("Intern", &staff.intern),
    ];

    for (kind, employee) in employees {
        let mut payslip = after::Payslip::new();
        payslip.calculate(employee);
        show(kind, Ok(payslip.balance()), cfg);
    }
    employees.len()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staff_from_salary() {
        let staff = Staff::from_salary(Amount::from(3000));

        assert_eq!(staff.full_time.salary(), Amount::from(3000));
        assert_eq!(staff.part_time.salary(), Amount::from(1500));
        assert_eq!(staff.contractor.payment(), Amount::from(750));
        assert_eq!(staff.intern.stipend, Amount::from(750));
    }

    #[test]
    fn test_walkthrough_counts_match_staff() {
        let cfg = Config::default();
        let staff = Staff::from_salary(Amount::from(1000));

        assert_eq!(run_before(&staff, &cfg), (1, 4));
        assert_eq!(run_after(&staff, &cfg), 4);
    }
}

