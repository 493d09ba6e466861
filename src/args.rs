use tbl::ids::AccountNumber;
use tbl::services::DEFAULT_INTEREST_RATE;
use tbl::{Money, Result};

use std::env;

use anyhow::Context;

use thiserror::Error;

const USAGE: &str = "Usage: toy-bank-ledger <command> [args..]

Commands:
    open-savings <number> <holder> <initial>
    open-current <number> <holder> <initial> [overdraft]
    deposit <number> <holder> <amount>
    withdraw <number> <holder> <amount>
    interest <number> <holder> [rate]
    details <number> <holder>
    list";

#[derive(Error, Debug)]
pub enum InputArgsError {
    #[error("Couldn't parse input arguments: {0}")]
    Parse(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),
}

/// Account number and holder name used to log in before an operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub account_number: AccountNumber,
    pub account_holder: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    OpenSavings {
        account_number: AccountNumber,
        account_holder: String,
        initial_balance: Money,
    },
    OpenCurrent {
        account_number: AccountNumber,
        account_holder: String,
        initial_balance: Money,
        overdraft_limit: Money,
    },
    Deposit {
        credentials: Credentials,
        amount: Money,
    },
    Withdraw {
        credentials: Credentials,
        amount: Money,
    },
    Interest {
        credentials: Credentials,
        rate: Money,
    },
    Details {
        credentials: Credentials,
    },
    List,
}

impl Command {
    /// Whether running the command can change the ledger, and so must be saved afterwards
    pub fn is_mutation(&self) -> bool {
        return !matches!(self, Command::Details { .. } | Command::List);
    }
}

/// Parses the input arguments, requiring the first argument to be a command name
pub fn parse_command() -> Result<Command> {
    return parse_args(env::args().skip(1).collect());
}

fn parse_args(args: Vec<String>) -> Result<Command> {
    let (name, args) = args
        .split_first()
        .ok_or_else(|| InputArgsError::Parse(USAGE.to_string()))?;

    let command = match name.as_str() {
        "open-savings" => {
            check_arity(name, args, 3, 0)?;

            Command::OpenSavings {
                account_number: AccountNumber::new(args[0].clone()),
                account_holder: args[1].clone(),
                initial_balance: parse_money("initial balance", &args[2])?,
            }
        }
        "open-current" => {
            check_arity(name, args, 3, 1)?;

            let overdraft_limit = match args.get(3) {
                Some(value) => parse_money("overdraft limit", value)?,
                None => Money::ZERO,
            };

            Command::OpenCurrent {
                account_number: AccountNumber::new(args[0].clone()),
                account_holder: args[1].clone(),
                initial_balance: parse_money("initial balance", &args[2])?,
                overdraft_limit,
            }
        }
        "deposit" => {
            check_arity(name, args, 3, 0)?;

            Command::Deposit {
                credentials: parse_credentials(args),
                amount: parse_money("amount", &args[2])?,
            }
        }
        "withdraw" => {
            check_arity(name, args, 3, 0)?;

            Command::Withdraw {
                credentials: parse_credentials(args),
                amount: parse_money("amount", &args[2])?,
            }
        }
        "interest" => {
            check_arity(name, args, 2, 1)?;

            let rate = match args.get(2) {
                Some(value) => parse_money("rate", value)?,
                None => DEFAULT_INTEREST_RATE,
            };

            Command::Interest {
                credentials: parse_credentials(args),
                rate,
            }
        }
        "details" => {
            check_arity(name, args, 2, 0)?;

            Command::Details {
                credentials: parse_credentials(args),
            }
        }
        "list" => {
            check_arity(name, args, 0, 0)?;

            Command::List
        }
        _ => Err(InputArgsError::UnknownCommand(name.clone()))?,
    };

    return Ok(command);
}

fn check_arity(name: &str, args: &[String], required: usize, optional: usize) -> Result {
    if args.len() < required || args.len() > required + optional {
        Err(InputArgsError::Parse(format!(
            "{name} takes {required} argument(s) ({optional} optional), got {}\n\n{USAGE}",
            args.len()
        )))?
    }

    return Ok(());
}

/// Expects the account number and holder name as the first two arguments
fn parse_credentials(args: &[String]) -> Credentials {
    return Credentials {
        account_number: AccountNumber::new(args[0].clone()),
        account_holder: args[1].clone(),
    };
}

fn parse_money(field: &str, value: &str) -> Result<Money> {
    let money = Money::parse(value)
        .with_context(|| InputArgsError::Parse(format!("{field} must be a number: {value:?}")))?;

    return Ok(money);
}
