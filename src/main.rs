mod args;
mod config;
mod writer;

use args::{Command, Credentials};

use tbl::models::Notification;
use tbl::services::SessionService;
use tbl::store::AccountStore;
use tbl::Result;

fn main() -> Result {
    config::configure_app()?;

    log::debug!("Application configured. Parsing command...");

    let command = args::parse_command()?;
    log::debug!("Parsed command: {command:?}");

    let store = AccountStore::new(config::store_path());
    log::debug!("Using account store: {:?}", store.path());

    let mut session = tbl::build_session_service(&store)?;

    let should_save = command.is_mutation();
    let output = run_command(&mut session, command)?;

    if should_save {
        log::debug!("Command complete. Saving accounts...");
        store.save(session.ledger())?;
    }

    print!("{output}");

    log::debug!("Application finished successfully!");

    Ok(())
}

/// Runs a single command against the session, returning what should be shown to the user
fn run_command(session: &mut SessionService, command: Command) -> Result<String> {
    let notification = match command {
        Command::OpenSavings {
            account_number,
            account_holder,
            initial_balance,
        } => session.open_savings(account_number, &account_holder, initial_balance),

        Command::OpenCurrent {
            account_number,
            account_holder,
            initial_balance,
            overdraft_limit,
        } => session.open_current(
            account_number,
            &account_holder,
            initial_balance,
            overdraft_limit,
        ),

        Command::Deposit {
            credentials,
            amount,
        } => with_login(session, &credentials, |session| session.deposit(amount))?,

        Command::Withdraw {
            credentials,
            amount,
        } => with_login(session, &credentials, |session| session.withdraw(amount))?,

        Command::Interest { credentials, rate } => {
            with_login(session, &credentials, |session| session.add_interest_at(rate))?
        }

        Command::Details { credentials } => {
            let notification = login(session, &credentials);

            return match session.active_account() {
                Some(account) if notification.is_success() => {
                    writer::write_details([&account.details()])
                }
                _ => Ok(format!("{notification}\n")),
            };
        }

        Command::List => {
            let details: Vec<_> = session
                .ledger()
                .get_all_accounts()
                .iter()
                .map(|account| account.details())
                .collect();

            log::debug!("Listing {} accounts", details.len());

            return writer::write_details(&details);
        }
    };

    Ok(format!("{notification}\n"))
}

fn login(session: &mut SessionService, credentials: &Credentials) -> Notification {
    session.login(&credentials.account_number, &credentials.account_holder)
}

/// Logs in and runs `operation` on the session, or returns the failed login notification
fn with_login(
    session: &mut SessionService,
    credentials: &Credentials,
    operation: impl FnOnce(&mut SessionService) -> Result<Notification>,
) -> Result<Notification> {
    let notification = login(session, credentials);

    if !notification.is_success() {
        return Ok(notification);
    }

    operation(session)
}
