pub mod ids;
mod ledger;
pub mod models;
mod money;
pub mod records;
mod result;
pub mod services;
pub mod store;

pub use ledger::Ledger;
pub use money::{Money, MoneyError};
pub use result::Result;

/// Loads the stored ledger and opens a session over it
pub fn build_session_service(store: &store::AccountStore) -> Result<services::SessionService> {
    let ledger = store.load()?;
    let session_service = services::SessionService::new(ledger);

    return Ok(session_service);
}
