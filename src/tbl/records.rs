use crate::ids::AccountNumber;
use crate::models::{Account, AccountKind, AccountVariant};
use crate::Money;
use crate::Result;

use serde::{Deserialize, Serialize};

use thiserror::Error;

/// One persisted account, as a row of the account store
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AccountRecord {
    #[serde(rename = "type")]
    pub typ: AccountVariant,

    pub account_number: AccountNumber,
    pub account_holder: String,
    pub balance: Money,
    pub overdraft_limit: Option<Money>,
}

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("Error parsing account record: current account has no overdraft limit: {0:?}")]
    MissingOverdraftLimit(AccountRecord),

    #[error("Error parsing account record: negative overdraft limits not supported: {0:?}")]
    NegativeOverdraftLimit(AccountRecord),
}

impl AccountRecord {
    /// Rebuilds the concrete account variant named by the record's type tag
    pub fn parse_account(self) -> Result<Account> {
        let account = match self.typ {
            AccountVariant::Savings => {
                Account::savings(self.account_number, self.account_holder, self.balance)
            }
            AccountVariant::Current => {
                let overdraft_limit = self
                    .overdraft_limit
                    .ok_or_else(|| RecordError::MissingOverdraftLimit(self.clone()))?;

                if overdraft_limit.is_negative() {
                    Err(RecordError::NegativeOverdraftLimit(self.clone()))?;
                }

                Account::current(
                    self.account_number,
                    self.account_holder,
                    self.balance,
                    overdraft_limit,
                )
            }
        };

        Ok(account)
    }
}

impl From<&Account> for AccountRecord {
    fn from(account: &Account) -> Self {
        let overdraft_limit = match account.kind() {
            AccountKind::Savings => None,
            AccountKind::Current { overdraft_limit } => Some(overdraft_limit),
        };

        return Self {
            typ: account.variant(),
            account_number: account.account_number().clone(),
            account_holder: account.account_holder().to_string(),
            balance: account.balance(),
            overdraft_limit,
        };
    }
}
