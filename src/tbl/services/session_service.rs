use crate::ids::AccountNumber;
use crate::models::{Account, AccountVariant, Notification, MINIMUM_BALANCE};
use crate::{Ledger, Money, Result};

use thiserror::Error;

/// Rate applied by `add_interest`, in percent
pub const DEFAULT_INTEREST_RATE: Money = Money::from_whole(5);

#[derive(Error, Debug)]
pub enum SessionServiceError {
    #[error("No account is logged in")]
    NotLoggedIn,

    #[error("Logged in account is missing from the ledger: {0}")]
    ActiveAccountMissing(AccountNumber),
}

/// Opens accounts, logs a holder in, and runs operations against the logged in account.
///
/// Business rejections (bad input, failed login, refused withdrawal) come back as error
/// notifications. `Err` is for operations that can't run at all, like acting without a login.
pub struct SessionService {
    ledger: Ledger,
    active_account: Option<AccountNumber>,
}

impl SessionService {
    pub fn new(ledger: Ledger) -> Self {
        return Self {
            ledger,
            active_account: None,
        };
    }

    pub fn open_savings(
        &mut self,
        account_number: AccountNumber,
        account_holder: &str,
        initial_balance: Money,
    ) -> Notification {
        let account_number = AccountNumber::new(account_number.as_str().trim());

        if let Some(rejection) = self.check_opening(&account_number, account_holder) {
            return rejection;
        }

        if initial_balance < MINIMUM_BALANCE {
            return Notification::error(format!(
                "Savings account requires min {MINIMUM_BALANCE}"
            ));
        }

        self.ledger.add_account(Account::savings(
            account_number,
            account_holder.trim(),
            initial_balance,
        ));

        return Notification::success("Account created successfully!");
    }

    pub fn open_current(
        &mut self,
        account_number: AccountNumber,
        account_holder: &str,
        initial_balance: Money,
        overdraft_limit: Money,
    ) -> Notification {
        let account_number = AccountNumber::new(account_number.as_str().trim());

        if let Some(rejection) = self.check_opening(&account_number, account_holder) {
            return rejection;
        }

        if overdraft_limit.is_negative() {
            return Notification::error("Overdraft limit cannot be negative");
        }

        self.ledger.add_account(Account::current(
            account_number,
            account_holder.trim(),
            initial_balance,
            overdraft_limit,
        ));

        return Notification::success("Account created successfully!");
    }

    /// Matches the holder name case-insensitively. A failed login also ends any current session.
    pub fn login(&mut self, account_number: &AccountNumber, account_holder: &str) -> Notification {
        let account_number = AccountNumber::new(account_number.as_str().trim());

        let account = self
            .ledger
            .get_account(&account_number)
            .filter(|account| account.holder_matches(account_holder.trim()));

        let Some(account) = account else {
            log::debug!("Failed login for account {account_number}");
            self.active_account = None;
            return Notification::error("Invalid Account Number or Name");
        };

        log::debug!("Logged in to account {}", account.account_number());
        self.active_account = Some(account.account_number().clone());

        return Notification::success("Login successful!");
    }

    pub fn logout(&mut self) {
        self.active_account = None;
    }

    pub fn active_account(&self) -> Option<&Account> {
        return self
            .active_account
            .as_ref()
            .and_then(|account_number| self.ledger.get_account(account_number));
    }

    pub fn deposit(&mut self, amount: Money) -> Result<Notification> {
        let account = self.active_account_mut()?;

        if !amount.is_positive() {
            return Ok(Notification::error("Please enter a valid amount"));
        }

        let message = account.deposit(amount)?;

        return Ok(Notification::success(message));
    }

    pub fn withdraw(&mut self, amount: Money) -> Result<Notification> {
        let account = self.active_account_mut()?;

        if !amount.is_positive() {
            return Ok(Notification::error("Please enter a valid amount"));
        }

        let outcome = account.withdraw(amount)?;

        if outcome.success {
            return Ok(Notification::success(outcome.message));
        }

        return Ok(Notification::error(outcome.message));
    }

    pub fn add_interest(&mut self) -> Result<Notification> {
        return self.add_interest_at(DEFAULT_INTEREST_RATE);
    }

    /// Only savings accounts earn interest, other accounts get an error notification
    pub fn add_interest_at(&mut self, rate: Money) -> Result<Notification> {
        let account = self.active_account_mut()?;

        if account.variant() != AccountVariant::Savings {
            return Ok(Notification::error(
                "Interest can only be added to savings accounts",
            ));
        }

        let message = account.calculate_interest(rate)?;

        return Ok(Notification::success(message));
    }

    pub fn ledger(&self) -> &Ledger {
        return &self.ledger;
    }

    fn check_opening(
        &self,
        account_number: &AccountNumber,
        account_holder: &str,
    ) -> Option<Notification> {
        if account_number.as_str().trim().is_empty() || account_holder.trim().is_empty() {
            return Some(Notification::error(
                "Creation failed. Please check your inputs.",
            ));
        }

        if self.ledger.contains(account_number) {
            return Some(Notification::error("Account number already exists"));
        }

        return None;
    }

    fn active_account_mut(&mut self) -> Result<&mut Account> {
        let account_number = self
            .active_account
            .as_ref()
            .ok_or(SessionServiceError::NotLoggedIn)?;

        let account = self
            .ledger
            .get_account_mut(account_number)
            .ok_or_else(|| SessionServiceError::ActiveAccountMissing(account_number.clone()))?;

        return Ok(account);
    }
}
