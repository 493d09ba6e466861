use tbl::ids::AccountNumber;
use tbl::models::{AccountDetails, AccountVariant};
use tbl::Money;

use std::{
    env, fs,
    path::PathBuf,
    process::{self, Command, Output},
};

use csv::{ReaderBuilder, Trim};

/// Runs the compiled binary against a throwaway account store
struct Bank {
    store: PathBuf,
}

impl Bank {
    fn new(name: &str) -> Self {
        let store = env::temp_dir().join(format!("tbl-{name}-{}.csv", process::id()));
        let _ = fs::remove_file(&store);

        Self { store }
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_toy-bank-ledger"))
            .args(args)
            .env("TBL_STORE_PATH", &self.store)
            .env_remove("RUST_LOG")
            .output()
            .unwrap()
    }

    fn stdout(&self, args: &[&str]) -> String {
        let output = self.run(args);

        println!("{}", String::from_utf8_lossy(&output.stderr));
        assert!(output.status.success(), "command failed: {args:?}");

        String::from_utf8(output.stdout).unwrap()
    }

    fn list(&self) -> Vec<AccountDetails> {
        let output = self.stdout(&["list"]);

        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .from_reader(output.as_bytes());

        reader
            .deserialize()
            .map(|record| record.unwrap())
            .collect()
    }
}

impl Drop for Bank {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.store);
    }
}

fn details(number: &str, holder: &str, balance: &str, variant: AccountVariant) -> AccountDetails {
    AccountDetails {
        account_number: AccountNumber::from(number),
        account_holder: holder.to_string(),
        balance: Money::parse(balance).unwrap(),
        variant,
    }
}

#[test]
fn savings_account_session() {
    let bank = Bank::new("savings");

    assert_eq!(
        bank.stdout(&["open-savings", "SA001", "John Doe", "1500"]),
        "success: Account created successfully!\n"
    );
    assert_eq!(
        bank.stdout(&["deposit", "SA001", "john doe", "500"]),
        "success: Deposited: 500.00. New Balance: 2000.00\n"
    );
    assert_eq!(
        bank.stdout(&["withdraw", "SA001", "John Doe", "1001"]),
        "error: Insufficient funds or withdrawal would breach minimum balance of 1000.00\n"
    );
    assert_eq!(
        bank.stdout(&["withdraw", "SA001", "John Doe", "500"]),
        "success: Withdrawn: 500.00. New Balance: 1500.00\n"
    );
    assert_eq!(
        bank.stdout(&["interest", "SA001", "John Doe"]),
        "success: Interest added: 75.00. New Balance: 1575.00\n"
    );

    assert_eq!(
        bank.list(),
        vec![details("SA001", "John Doe", "1575", AccountVariant::Savings)]
    );
}

#[test]
fn current_account_session() {
    let bank = Bank::new("current");

    bank.stdout(&["open-current", "CA001", "Jane Smith", "1000", "500"]);

    assert_eq!(
        bank.stdout(&["withdraw", "CA001", "Jane Smith", "1200"]),
        "success: Withdrawn: 1200.00. New Balance: -200.00\n"
    );
    assert_eq!(
        bank.stdout(&["withdraw", "CA001", "Jane Smith", "400"]),
        "error: Withdrawal exceeds overdraft limit of 500.00\n"
    );
    assert_eq!(
        bank.stdout(&["deposit", "CA001", "Jane Smith", "200"]),
        "success: Deposited: 200.00. New Balance: 0.00\n"
    );

    assert_eq!(
        bank.stdout(&["details", "CA001", "JANE SMITH"]),
        "accountNumber,accountHolder,balance,type\nCA001,Jane Smith,0.0000,CurrentAccount\n"
    );

    assert_eq!(
        bank.stdout(&["interest", "CA001", "Jane Smith"]),
        "error: Interest can only be added to savings accounts\n"
    );
}

#[test]
fn accounts_persist_between_runs() {
    let bank = Bank::new("persist");

    bank.stdout(&["open-savings", "SA002", "Poly Sav", "2000"]);
    bank.stdout(&["open-current", "CA002", "Poly Cur", "1000", "500"]);
    bank.stdout(&["withdraw", "SA002", "Poly Sav", "1500"]);
    bank.stdout(&["withdraw", "CA002", "Poly Cur", "1500"]);

    let stored = fs::read_to_string(&bank.store).unwrap();
    assert_eq!(
        stored,
        "type,accountNumber,accountHolder,balance,overdraftLimit\n\
         SavingsAccount,SA002,Poly Sav,2000.0000,\n\
         CurrentAccount,CA002,Poly Cur,-500.0000,500.0000\n"
    );

    assert_eq!(
        bank.list(),
        vec![
            details("SA002", "Poly Sav", "2000", AccountVariant::Savings),
            details("CA002", "Poly Cur", "-500", AccountVariant::Current),
        ]
    );
}

#[test]
fn rejected_requests() {
    let bank = Bank::new("rejected");

    assert_eq!(
        bank.stdout(&["open-savings", "SA003", "Low Balance", "999"]),
        "error: Savings account requires min 1000.00\n"
    );

    bank.stdout(&["open-savings", "SA003", "John Doe", "1000"]);

    assert_eq!(
        bank.stdout(&["open-current", "SA003", "Jane Smith", "0"]),
        "error: Account number already exists\n"
    );
    assert_eq!(
        bank.stdout(&["deposit", "SA003", "Jane Smith", "10"]),
        "error: Invalid Account Number or Name\n"
    );
    assert_eq!(
        bank.stdout(&["deposit", "XX999", "John Doe", "10"]),
        "error: Invalid Account Number or Name\n"
    );
    assert_eq!(
        bank.stdout(&["deposit", "SA003", "John Doe", "0"]),
        "error: Please enter a valid amount\n"
    );

    assert!(!bank.run(&["deposit", "SA003", "John Doe", "ten"]).status.success());
    assert!(!bank.run(&["transfer"]).status.success());

    assert_eq!(
        bank.list(),
        vec![details("SA003", "John Doe", "1000", AccountVariant::Savings)]
    );
}
