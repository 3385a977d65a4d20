#![cfg(test)]
use rstest::rstest;
use rust_decimal::Decimal;
use solid_common::error::AccountError;
use solid_common::money::Amount;
use solid_core::liskov_substitution::after::{self, Depositable, Withdrawable};
use solid_core::liskov_substitution::before::{self, Account};

/// Generic over the capability only; never sees a concrete account type.
fn deposit_then_withdraw(account: &mut dyn Withdrawable, deposit: Amount, withdraw: Amount) {
    account.deposit(deposit);
    account.withdraw(withdraw);
}

#[test]
fn before_fixed_term_withdraw_fails() {
    let mut account = before::FixedTermDepositAccount::new();

    let result = account.withdraw(Amount::from(100));

    let err: AccountError = result.expect_err("fixed-term withdrawals must be rejected");
    assert!(
        err.to_string()
            .contains("Withdrawals are not supported by FixedTermDepositAccount"),
        "unexpected message: {err}"
    );
}

#[rstest]
#[case("0")]
#[case("0.01")]
#[case("100")]
#[case("123456789.99")]
fn before_fixed_term_withdraw_fails_for_any_amount(#[case] amount: &str) {
    let amount: Amount = amount.parse().unwrap();
    let mut account: Box<dyn Account> = Box::new(before::FixedTermDepositAccount::new());
    account.deposit(Amount::from(10));

    for _ in 0..3 {
        assert!(matches!(
            account.withdraw(amount),
            Err(AccountError::UnsupportedOperation { .. })
        ));
    }
    assert_eq!(account.balance(), Decimal::from(10));
}

#[rstest]
#[case("0")]
#[case("50")]
#[case("0.5")]
#[case("79228162514264337593543950335")]
fn before_deposit_never_fails(#[case] amount: &str) {
    let amount: Amount = amount.parse().unwrap();
    let mut accounts: Vec<Box<dyn Account>> = vec![
        Box::new(before::CurrentAccount::new()),
        Box::new(before::SavingAccount::new()),
        Box::new(before::FixedTermDepositAccount::new()),
    ];

    for account in accounts.iter_mut() {
        account.deposit(amount);
        assert_eq!(account.balance(), amount.value());
        account.deposit(amount);
        assert!(account.balance() >= amount.value());
    }
}

#[test]
fn before_generic_caller_must_guard() {
    let mut accounts: Vec<Box<dyn Account>> = vec![
        Box::new(before::CurrentAccount::new()),
        Box::new(before::FixedTermDepositAccount::new()),
        Box::new(before::SavingAccount::new()),
    ];

    let failed: Vec<&str> = before::withdraw_from_all(&mut accounts, Amount::from(5))
        .iter()
        .zip(accounts.iter())
        .filter(|(result, _)| result.is_err())
        .map(|(_, account)| account.kind())
        .collect();

    assert_eq!(failed, ["FixedTermDepositAccount"]);
}

#[test]
fn after_current_account_deposit_and_withdraw() {
    let mut account = after::CurrentAccount::new();

    account.deposit(Amount::from(50));
    account.withdraw(Amount::from(20));

    assert_eq!(account.balance(), Decimal::from(30));
}

#[test]
fn after_saving_account_through_capability() {
    let mut account: Box<dyn Withdrawable> = Box::new(after::SavingAccount::new());

    account.withdraw(Amount::from(10));

    assert_eq!(account.kind(), "SavingAccount");
    assert_eq!(account.balance(), Decimal::from(-10));
}

#[test]
fn after_every_withdrawable_is_substitutable() {
    let mut accounts: Vec<Box<dyn Withdrawable>> = vec![
        Box::new(after::CurrentAccount::new()),
        Box::new(after::SavingAccount::new()),
    ];

    for account in accounts.iter_mut() {
        deposit_then_withdraw(account.as_mut(), Amount::from(80), Amount::from(30));
    }
    after::withdraw_from_all(&mut accounts, Amount::from(50));

    assert!(accounts.iter().all(|a| a.balance().is_zero()));
}

#[rstest]
#[case("1")]
#[case("79228162514264337593543950335")]
fn after_withdraw_never_fails_for_any_amount(#[case] amount: &str) {
    let amount: Amount = amount.parse().unwrap();
    let mut accounts: Vec<Box<dyn Withdrawable>> = vec![
        Box::new(after::CurrentAccount::new()),
        Box::new(after::SavingAccount::new()),
    ];

    after::withdraw_from_all(&mut accounts, amount);
    after::withdraw_from_all(&mut accounts, amount);

    assert!(accounts.iter().all(|a| a.balance() <= -amount.value()));
}

#[test]
fn after_fixed_term_still_accepts_deposits() {
    let mut accounts: Vec<Box<dyn Depositable>> = vec![
        Box::new(after::FixedTermDepositAccount::new()),
        Box::new(after::CurrentAccount::new()),
    ];

    after::deposit_into_all(&mut accounts, Amount::from(15));
    after::deposit_into_all(&mut accounts, Amount::from(5));

    assert!(accounts.iter().all(|a| a.balance() == Decimal::from(20)));
}
