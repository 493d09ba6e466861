use std::fmt;

use serde::{Deserialize, Serialize};

/// Caller-assigned account identifier. Never changes once an account is opened.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct AccountNumber(String);

impl AccountNumber {
    pub fn new(value: impl Into<String>) -> Self {
        return Self(value.into());
    }

    pub fn as_str(&self) -> &str {
        return &self.0;
    }
}

impl From<&str> for AccountNumber {
    fn from(value: &str) -> Self {
        return Self::new(value);
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.0);
    }
}
