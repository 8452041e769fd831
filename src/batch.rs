//! Batch mode: replays a CSV script of ledger operations and exports account snapshots.

use anyhow::Result;
use csv::Trim;
use std::io::{Read, Write};

use crate::engine::{InputRecord, Ledger};

/// Applies every record of `reader` to `ledger`.
/// Malformed records and refused operations are logged and skipped.
pub fn replay<R: Read>(reader: R, ledger: &mut Ledger) -> Result<()> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    log::debug!("Started deserialising records");
    for (line, result) in rdr.deserialize::<InputRecord>().enumerate() {
        log::debug!("Deserialising record into InputRecord: {result:?}");
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                log::warn!("Error deserializing record {}: {e}", line + 1);
                continue;
            }
        };

        let command = match record.to_command() {
            Ok(c) => c,
            Err(e) => {
                log::warn!("Invalid {:?} record for tax id {}: {e}", record.typ, record.tax_id);
                continue;
            }
        };

        log::debug!("Executing command in ledger: {command:?}");
        if let Err(e) = ledger.execute(command) {
            log::warn!(
                "Error processing {:?} record for tax id {}: {e}",
                record.typ,
                record.tax_id
            );
        }
    }

    Ok(())
}

pub fn write_snapshots<W: Write>(ledger: &Ledger, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    log::debug!("Starting account snapshot serialisation");
    for acc in ledger.snapshots() {
        log::debug!("Serialising account snapshot: {acc:?}");
        wtr.serialize(acc)?;
    }

    log::debug!("Account snapshot serialisation done -> Flushing");
    wtr.flush()?;

    Ok(())
}
