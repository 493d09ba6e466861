use crate::ids::AccountNumber;
use crate::Money;

use serde::{Deserialize, Serialize};

/// Discriminant between the two kinds of account. The serialized names double as the `type`
/// column of the account store.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountVariant {
    #[serde(rename = "SavingsAccount")]
    Savings,

    #[serde(rename = "CurrentAccount")]
    Current,
}

/// Read-only snapshot of an account
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AccountDetails {
    pub account_number: AccountNumber,
    pub account_holder: String,
    pub balance: Money,

    #[serde(rename = "type")]
    pub variant: AccountVariant,
}
