//! Output formats: allocation and summary csv, diagnostics json.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/formats_test.rs"]
mod formats_test;

use fleet_core::prelude::*;
use serde::Serialize;
use std::io::{BufWriter, Read, Write};

/// Writes allocation records as csv.
pub fn write_allocation_csv<W: Write>(writer: BufWriter<W>, records: &[AllocationRecord]) -> GenericResult<()> {
    write_csv(writer, records)
}

/// Writes run summaries as csv.
pub fn write_summary_csv<W: Write>(writer: BufWriter<W>, summaries: &[RunSummary]) -> GenericResult<()> {
    write_csv(writer, summaries)
}

/// Writes bucket diagnostics as json array.
pub fn write_diagnostics_json<W: Write>(writer: BufWriter<W>, diagnostics: &[BucketDiagnostic]) -> GenericResult<()> {
    let mut writer = writer;

    serde_json::to_writer_pretty(&mut writer, diagnostics)
        .map_err(|err| format!("cannot write diagnostics: '{err}'"))?;

    writer.flush().map_err(GenericError::from)
}

/// Reads allocation records from csv.
pub fn read_allocation_csv<R: Read>(reader: R) -> GenericResult<Vec<AllocationRecord>> {
    ::csv::Reader::from_reader(reader)
        .deserialize::<AllocationRecord>()
        .map(|record| record.map_err(|err| GenericError::from(format!("cannot read allocation row: {err}"))))
        .collect()
}

fn write_csv<W: Write, T: Serialize>(writer: BufWriter<W>, entries: &[T]) -> GenericResult<()> {
    let mut writer = ::csv::Writer::from_writer(writer);

    entries
        .iter()
        .try_for_each(|entry| writer.serialize(entry))
        .map_err(|err| GenericError::from(format!("cannot write csv: '{err}'")))?;

    writer.flush().map_err(GenericError::from)
}
