use crate::ids::AccountNumber;
use crate::models::Account;

/// In-memory collection of accounts, kept in the order they were added
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Ledger {
    accounts: Vec<Account>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the account as-is. Duplicate account numbers are not rejected here; lookups
    /// resolve to the first one added.
    pub fn add_account(&mut self, account: Account) {
        log::debug!("Adding account to ledger: {}", account.account_number());
        self.accounts.push(account);
    }

    pub fn get_account(&self, account_number: &AccountNumber) -> Option<&Account> {
        self.accounts
            .iter()
            .find(|account| account.account_number() == account_number)
    }

    pub fn get_account_mut(&mut self, account_number: &AccountNumber) -> Option<&mut Account> {
        self.accounts
            .iter_mut()
            .find(|account| account.account_number() == account_number)
    }

    pub fn get_all_accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn contains(&self, account_number: &AccountNumber) -> bool {
        self.get_account(account_number).is_some()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
