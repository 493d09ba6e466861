use super::{AccountDetails, AccountVariant, WithdrawalOutcome};

use crate::ids::AccountNumber;
use crate::{Money, Result};

use thiserror::Error;

/// Floor a savings account's balance may never cross on withdrawal
pub const MINIMUM_BALANCE: Money = Money::from_whole(1000);

#[derive(Error, Debug)]
pub enum AccountError {
    #[error("Interest can only be added to savings accounts, not to account {0}")]
    InterestUnsupported(AccountNumber),
}

/// Variant-specific policy carried by an account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    /// Withdrawals may not take the balance below `MINIMUM_BALANCE`; interest may be added
    Savings,

    /// Withdrawals may take the balance down to `-overdraft_limit`
    Current { overdraft_limit: Money },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    account_number: AccountNumber,
    account_holder: String,
    balance: Money,
    kind: AccountKind,
}

impl Account {
    /// Opens a savings account. The minimum opening balance is the caller's to enforce, this only
    /// warns about it.
    pub fn savings(
        account_number: AccountNumber,
        account_holder: impl Into<String>,
        initial_balance: Money,
    ) -> Self {
        if initial_balance < MINIMUM_BALANCE {
            log::warn!(
                "Savings account {account_number} opened with {initial_balance}, below the minimum balance of {MINIMUM_BALANCE}"
            );
        }

        return Self {
            account_number,
            account_holder: account_holder.into(),
            balance: initial_balance,
            kind: AccountKind::Savings,
        };
    }

    pub fn current(
        account_number: AccountNumber,
        account_holder: impl Into<String>,
        initial_balance: Money,
        overdraft_limit: Money,
    ) -> Self {
        return Self {
            account_number,
            account_holder: account_holder.into(),
            balance: initial_balance,
            kind: AccountKind::Current { overdraft_limit },
        };
    }

    /// Adds a positive `amount` to the balance. A non-positive amount is rejected through the
    /// returned message only; `Err` is reserved for arithmetic overflow.
    pub fn deposit(&mut self, amount: Money) -> Result<String> {
        if !amount.is_positive() {
            log::debug!("Rejected deposit of {amount} into {}", self.account_number);
            return Ok("Invalid deposit amount.".to_string());
        }

        self.balance.add(&amount)?;

        return Ok(format!("Deposited: {amount}. New Balance: {}", self.balance));
    }

    pub fn withdraw(&mut self, amount: Money) -> Result<WithdrawalOutcome> {
        let outcome = match self.kind {
            AccountKind::Savings => self.withdraw_from_savings(amount)?,
            AccountKind::Current { overdraft_limit } => {
                self.withdraw_from_current(amount, overdraft_limit)?
            }
        };

        log::debug!(
            "Withdrawal of {amount} from {}: {outcome:?}",
            self.account_number
        );

        return Ok(outcome);
    }

    /// Adds `rate` percent of the balance to the balance. There is no cap on the rate and repeated
    /// calls compound.
    pub fn calculate_interest(&mut self, rate: Money) -> Result<String> {
        if let AccountKind::Current { .. } = self.kind {
            Err(AccountError::InterestUnsupported(self.account_number.clone()))?
        }

        let interest = self.balance.percent(&rate)?;
        self.balance.add(&interest)?;

        return Ok(format!(
            "Interest added: {interest}. New Balance: {}",
            self.balance
        ));
    }

    pub fn details(&self) -> AccountDetails {
        return AccountDetails {
            account_number: self.account_number.clone(),
            account_holder: self.account_holder.clone(),
            balance: self.balance,
            variant: self.variant(),
        };
    }

    pub fn account_number(&self) -> &AccountNumber {
        return &self.account_number;
    }

    pub fn account_holder(&self) -> &str {
        return &self.account_holder;
    }

    pub fn balance(&self) -> Money {
        return self.balance;
    }

    pub fn kind(&self) -> AccountKind {
        return self.kind;
    }

    pub fn variant(&self) -> AccountVariant {
        return match self.kind {
            AccountKind::Savings => AccountVariant::Savings,
            AccountKind::Current { .. } => AccountVariant::Current,
        };
    }

    pub fn overdraft_limit(&self) -> Option<Money> {
        return match self.kind {
            AccountKind::Savings => None,
            AccountKind::Current { overdraft_limit } => Some(overdraft_limit),
        };
    }

    /// Case-insensitive comparison against the account holder's name
    pub fn holder_matches(&self, name: &str) -> bool {
        return self.account_holder.to_lowercase() == name.to_lowercase();
    }

    fn withdraw_from_savings(&mut self, amount: Money) -> Result<WithdrawalOutcome> {
        // i128 so that the comparison itself can't overflow
        let remaining = i128::from(self.balance.0) - i128::from(amount.0);

        if !amount.is_positive() || remaining < i128::from(MINIMUM_BALANCE.0) {
            return Ok(WithdrawalOutcome::rejected(format!(
                "Insufficient funds or withdrawal would breach minimum balance of {MINIMUM_BALANCE}"
            )));
        }

        self.balance.sub(&amount)?;

        return Ok(WithdrawalOutcome::accepted(format!(
            "Withdrawn: {amount}. New Balance: {}",
            self.balance
        )));
    }

    fn withdraw_from_current(
        &mut self,
        amount: Money,
        overdraft_limit: Money,
    ) -> Result<WithdrawalOutcome> {
        let available = i128::from(self.balance.0) + i128::from(overdraft_limit.0);

        if !amount.is_positive() || i128::from(amount.0) > available {
            return Ok(WithdrawalOutcome::rejected(format!(
                "Withdrawal exceeds overdraft limit of {overdraft_limit}"
            )));
        }

        self.balance.sub(&amount)?;

        return Ok(WithdrawalOutcome::accepted(format!(
            "Withdrawn: {amount}. New Balance: {}",
            self.balance
        )));
    }
}
