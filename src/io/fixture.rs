use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::error::Error;
use crate::model::element::ElementFields;
use crate::store::ElementStore;

/// Model tag carried by every fixture record.
pub const FIXTURE_MODEL: &str = "periodic_table.element";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureRecord {
    pub model: String,
    pub pk: u32,
    pub fields: ElementFields,
}

/// Reads fixture records as `(id, fields)` pairs, in file order.
///
/// Only the JSON shape and model tag are checked here; field ranges are
/// validated when the records are inserted into a store.
pub fn read<R: Read>(reader: R) -> Result<Vec<(u32, ElementFields)>, Error> {
    let records: Vec<FixtureRecord> = serde_json::from_reader(reader)?;
    debug!("parsed {} fixture records", records.len());

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            if record.model != FIXTURE_MODEL {
                return Err(Error::fixture(
                    index,
                    format!(
                        "unexpected model '{}', expected '{}'",
                        record.model, FIXTURE_MODEL
                    ),
                ));
            }
            Ok((record.pk, record.fields))
        })
        .collect()
}

pub fn read_file(path: impl AsRef<Path>) -> Result<Vec<(u32, ElementFields)>, Error> {
    let path = path.as_ref();
    let records = read(BufReader::new(File::open(path)?))?;
    info!("read {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Writes every record of `store` as a pretty-printed JSON fixture.
pub fn write<W: Write>(mut writer: W, store: &ElementStore) -> Result<(), Error> {
    let records: Vec<FixtureRecord> = store
        .records()
        .map(|element| FixtureRecord {
            model: FIXTURE_MODEL.to_string(),
            pk: element.id(),
            fields: element.fields().clone(),
        })
        .collect();
    serde_json::to_writer_pretty(&mut writer, &records)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

pub fn write_file(path: impl AsRef<Path>, store: &ElementStore) -> Result<(), Error> {
    let path = path.as_ref();
    write(BufWriter::new(File::create(path)?), store)?;
    info!("wrote {} records to {}", store.len(), path.display());
    Ok(())
}
