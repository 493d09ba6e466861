use crate::records::AccountRecord;
use crate::{Ledger, Result};

use std::{
    fs::File,
    io,
    path::{Path, PathBuf},
};

use anyhow::Context;

use csv::{ReaderBuilder, Trim, Writer};

/// Rebuilds a ledger from CSV account records. Rows that can't be parsed are logged and skipped.
///
/// Only headers are trimmed: account numbers and holder names are read back exactly as written.
pub fn read_ledger<R: io::Read>(reader: R) -> Result<Ledger> {
    let mut rdr = ReaderBuilder::new().trim(Trim::Headers).from_reader(reader);

    let mut ledger = Ledger::new();

    log::debug!("Deserializing account records...");
    for record in rdr.deserialize::<AccountRecord>() {
        log::debug!("Parsing record into AccountRecord: {record:?}");
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                log::warn!("{e}");
                continue;
            }
        };

        let account = match record.parse_account() {
            Ok(account) => account,
            Err(e) => {
                log::warn!("{e}");
                continue;
            }
        };

        ledger.add_account(account);
    }

    Ok(ledger)
}

/// Writes every account in the ledger as a CSV record, in ledger order
pub fn write_ledger<W: io::Write>(ledger: &Ledger, writer: W) -> Result {
    let mut wtr = Writer::from_writer(writer);

    for account in ledger.get_all_accounts() {
        let record = AccountRecord::from(account);
        log::debug!("Serializing record: {record:?}");
        wtr.serialize(record)?;
    }

    wtr.flush()?;

    Ok(())
}

/// File-backed snapshot of the whole ledger
#[derive(Debug, Clone)]
pub struct AccountStore {
    path: PathBuf,
}

impl AccountStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the stored ledger, or an empty one if nothing has been stored yet
    pub fn load(&self) -> Result<Ledger> {
        if !self.path.exists() {
            log::debug!("No account store at {:?}, starting empty", self.path);
            return Ok(Ledger::new());
        }

        let file = File::open(&self.path)
            .with_context(|| format!("Couldn't open account store: {:?}", self.path))?;

        let ledger = read_ledger(file)?;
        log::debug!("Loaded {} accounts from {:?}", ledger.len(), self.path);

        Ok(ledger)
    }

    /// Replaces the stored snapshot with the given ledger
    pub fn save(&self, ledger: &Ledger) -> Result {
        let file = File::create(&self.path)
            .with_context(|| format!("Couldn't write account store: {:?}", self.path))?;

        write_ledger(ledger, file)?;
        log::debug!("Saved {} accounts to {:?}", ledger.len(), self.path);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::ids::AccountNumber;
    use crate::models::Account;
    use crate::Money;

    use super::*;

    use std::{env, fs};

    fn build_ledger() -> Ledger {
        let mut ledger = Ledger::new();

        ledger.add_account(Account::savings(
            AccountNumber::from("SA001"),
            "John Doe",
            Money::parse("1575.1234").unwrap(),
        ));
        ledger.add_account(Account::current(
            AccountNumber::from("CA001"),
            "Jane Smith",
            Money::from_whole(-250),
            Money::from_whole(300),
        ));

        ledger
    }

    fn write_to_string(ledger: &Ledger) -> String {
        let mut buffer = vec![];
        write_ledger(ledger, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn write() {
        let output = write_to_string(&build_ledger());

        assert_eq!(
            output,
            "type,accountNumber,accountHolder,balance,overdraftLimit\n\
             SavingsAccount,SA001,John Doe,1575.1234,\n\
             CurrentAccount,CA001,Jane Smith,-250.0000,300.0000\n"
        );
    }

    #[test]
    fn round_trip() {
        let ledger = build_ledger();

        let restored = read_ledger(write_to_string(&ledger).as_bytes()).unwrap();

        assert_eq!(restored, ledger);
    }

    #[test]
    fn read_skips_invalid_records() {
        let input = "type, accountNumber, accountHolder, balance, overdraftLimit\n\
                     SavingsAccount,SA001,John Doe,1500,\n\
                     CurrentAccount,CA001,Jane Smith,200,\n\
                     ChequingAccount,XX001,Nobody,10,\n\
                     SavingsAccount,SA002,Bad Balance,lots,\n\
                     CurrentAccount,CA002,Poly Cur,1000,500\n";

        let ledger = read_ledger(input.as_bytes()).unwrap();

        let numbers: Vec<&str> = ledger
            .get_all_accounts()
            .iter()
            .map(|account| account.account_number().as_str())
            .collect();

        assert_eq!(numbers, vec!["SA001", "CA002"]);
    }

    #[test]
    fn round_trip_keeps_surrounding_whitespace() {
        let mut ledger = Ledger::new();
        ledger.add_account(Account::savings(
            AccountNumber::from("SA1 "),
            " Alice ",
            Money::from_whole(1500),
        ));
        ledger.add_account(Account::savings(
            AccountNumber::from("SA1"),
            "Alice",
            Money::from_whole(1500),
        ));

        let restored = read_ledger(write_to_string(&ledger).as_bytes()).unwrap();

        assert_eq!(restored, ledger);
        assert_eq!(
            restored.get_all_accounts()[0].account_number(),
            &AccountNumber::from("SA1 ")
        );
        assert_eq!(restored.get_all_accounts()[0].account_holder(), " Alice ");
    }

    #[test]
    fn read_empty_input() {
        let ledger = read_ledger("".as_bytes()).unwrap();
        assert!(ledger.is_empty());
    }

    #[test]
    fn account_store() {
        let path = env::temp_dir().join(format!("tbl-store-{}.csv", std::process::id()));
        let _ = fs::remove_file(&path);

        let store = AccountStore::new(&path);
        assert!(store.load().unwrap().is_empty());

        let ledger = build_ledger();
        store.save(&ledger).unwrap();
        assert_eq!(store.load().unwrap(), ledger);

        store.save(&Ledger::new()).unwrap();
        assert!(store.load().unwrap().is_empty());

        fs::remove_file(&path).unwrap();
    }
}
