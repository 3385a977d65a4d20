use colored::*;

use solid_common::{config::Config, money::Amount};
use solid_core::liskov_substitution::after::{self, Depositable};
use solid_core::liskov_substitution::before::{self, Account};

use crate::terminal::{colors, print};

pub fn liskov(amount: Amount, cfg: &Config) -> anyhow::Result<()> {
    let (failures, total_before) = run_before(amount, cfg);
    crate::sprint!();
    let total_after = run_after(amount, cfg);

    print::summary(&format!(
        "before: {failures} of {total_before} withdrawals failed, after: 0 of {total_after}"
    ));
    Ok(())
}

/// Returns how many withdrawals were rejected, out of how many.
fn run_before(amount: Amount, cfg: &Config) -> (usize, usize) {
    print::header("liskov substitution: before", cfg);

    let mut accounts: Vec<Box<dyn before::Account>> = vec![
        Box::new(before::CurrentAccount::new()),
        Box::new(before::SavingAccount::new()),
        Box::new(before::FixedTermDepositAccount::new()),
    ];

    for account in accounts.iter_mut() {
        account.deposit(amount);
    }

    let results = before::withdraw_from_all(&mut accounts, amount);

    let mut failures: usize = 0;
    for (account, result) in accounts.iter().zip(results) {
        match result {
            Ok(()) => {
                let value = format!("withdrew {amount}, balance {}", account.balance());
                print::aligned_line(account.kind(), value, cfg);
            }
            Err(err) => {
                failures += 1;
                print::aligned_line(account.kind(), err.to_string().color(colors::FAILURE), cfg);
            }
        }
    }

    (failures, accounts.len())
}

/// Returns how many withdrawals were made.
fn run_after(amount: Amount, cfg: &Config) -> usize {
    print::header("liskov substitution: after", cfg);

    let mut withdrawable: Vec<Box<dyn after::Withdrawable>> = vec![
        Box::new(after::CurrentAccount::new()),
        Box::new(after::SavingAccount::new()),
    ];
    for account in withdrawable.iter_mut() {
        account.deposit(amount);
    }
    after::withdraw_from_all(&mut withdrawable, amount);

    for account in withdrawable.iter() {
        let value = format!("withdrew {amount}, balance {}", account.balance());
        print::aligned_line(account.kind(), value, cfg);
    }

    let mut depositable: Vec<Box<dyn after::Depositable>> =
        vec![Box::new(after::FixedTermDepositAccount::new())];
    after::deposit_into_all(&mut depositable, amount);

    for account in depositable.iter() {
        let value = format!("deposit only, balance {}", account.balance());
        print::aligned_line(account.kind(), value, cfg);
    }
    withdrawable.len()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
