use tbl::models::AccountDetails;
use tbl::Result;

use csv::Writer;

pub fn build_csv_writer() -> Writer<Vec<u8>> {
    return Writer::from_writer(vec![]);
}

pub fn write_to_string(writer: Writer<Vec<u8>>) -> Result<String> {
    let utf8 = writer.into_inner()?;
    let string = String::from_utf8(utf8)?;
    return Ok(string);
}

/// Renders account details as CSV, one row per account
pub fn write_details<'a>(details: impl IntoIterator<Item = &'a AccountDetails>) -> Result<String> {
    let mut wtr = build_csv_writer();

    log::debug!("Serializing account details...");
    for account_details in details {
        log::debug!("Serializing details: {account_details:?}");
        wtr.serialize(account_details)?;
    }

    return write_to_string(wtr);
}
