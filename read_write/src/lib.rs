use std::fs::File;
use std::io::prelude::*;
use std::io::{BufReader, BufWriter, Error, ErrorKind, Result};

/// A value stored as a single line of whitespace separated fields
pub trait LineRecord: Sized {
    /// number of fields on every line
    const FIELDS: usize;

    /// Formats the record as one line, without the trailing newline
    fn to_line(&self) -> String;

    /// Parses the fields of one line
    ///
    /// Called with exactly `FIELDS` fields. Returns a description of the
    /// problem when a field can't be parsed.
    fn from_fields(fields: &[&str]) -> std::result::Result<Self, String>;
}

/// object used to extend functionality of File
/// used for reading and writing line records to files
pub trait RecordIO {
    fn write_records_to_file<T: LineRecord>(&mut self, records: &[T]) -> Result<()>;
    fn read_records_from_file<T: LineRecord>(&mut self) -> Result<Vec<T>>;
}

impl RecordIO for File {
    /// Writes every record followed by a newline and syncs the file to disk
    fn write_records_to_file<T: LineRecord>(&mut self, records: &[T]) -> Result<()> {
        {
            let mut writer = BufWriter::new(&mut *self);
            write_records(&mut writer, records)?;
            writer.flush()?;
        }
        self.sync_all()
    }

    /// Reads every line of the file as a record
    ///
    /// Fails on the first malformed line, nothing is returned partially.
    fn read_records_from_file<T: LineRecord>(&mut self) -> Result<Vec<T>> {
        read_records(BufReader::new(self))
    }
}

/// Writes records to any writer, one per line
pub fn write_records<W: Write, T: LineRecord>(writer: &mut W, records: &[T]) -> Result<()> {
    for record in records {
        writer.write_all(record.to_line().as_bytes())?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}

/// Reads records from any buffered reader, one per line
///
/// A line with the wrong number of fields, or a field the record rejects,
/// fails the whole read with `ErrorKind::InvalidData`.
pub fn read_records<R: BufRead, T: LineRecord>(reader: R) -> Result<Vec<T>> {
    let mut records = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != T::FIELDS {
            return Err(Error::new(
                ErrorKind::InvalidData,
                format!(
                    "line {}: expected {} fields, found {}: {:?}",
                    i + 1,
                    T::FIELDS,
                    fields.len(),
                    line
                ),
            ));
        }
        let record = T::from_fields(&fields).map_err(|reason| {
            Error::new(ErrorKind::InvalidData, format!("line {}: {}", i + 1, reason))
        })?;
        records.push(record);
    }
    Ok(records)
}
