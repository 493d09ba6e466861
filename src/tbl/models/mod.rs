mod account;
mod account_details;
mod notification;
mod withdrawal_outcome;

pub use account::{Account, AccountError, AccountKind, MINIMUM_BALANCE};
pub use account_details::{AccountDetails, AccountVariant};
pub use notification::{Notification, NotificationKind};
pub use withdrawal_outcome::WithdrawalOutcome;
