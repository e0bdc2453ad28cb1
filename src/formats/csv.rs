//! Support for the spreadsheet (CSV) side of a conversion.
//!
//! Every [`Matrix`] row is one CSV record and every cell one field, in order.
//! No shape check happens here: ragged records are read as-is so the
//! transposer can report them.
use std::io::{BufRead, Write};

use crate::{error::Error, matrix::Matrix, traits::Parser};

/// Field separator used unless a caller picks another one.
pub const DEFAULT_DELIMITER: u8 = b',';

const UTF8_BOM: char = '\u{feff}';

impl Parser for Matrix {
    /// Parse comma-separated records from any reader.
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        read_delimited(reader, DEFAULT_DELIMITER)
    }

    /// Write comma-separated records to any writer.
    fn to_writer<W: Write>(&self, writer: W) -> Result<(), Error> {
        write_delimited(self, writer, DEFAULT_DELIMITER)
    }
}

/// Reads every record of `reader` as one matrix row.
///
/// A UTF-8 byte order mark at the start of the input is dropped.
pub fn read_delimited<R: BufRead>(reader: R, delimiter: u8) -> Result<Matrix, Error> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(reader);

    let mut matrix = Matrix::new();
    for result in rdr.records() {
        let record = result?;
        let mut row: Vec<String> = record.iter().map(str::to_string).collect();
        if matrix.is_empty() {
            if let Some(first) = row.first_mut() {
                if let Some(stripped) = first.strip_prefix(UTF8_BOM) {
                    *first = stripped.to_string();
                }
            }
        }
        matrix.push_row(row);
    }
    Ok(matrix)
}

/// Writes every matrix row as one record.
pub fn write_delimited<W: Write>(matrix: &Matrix, writer: W, delimiter: u8) -> Result<(), Error> {
    let mut wtr = csv::WriterBuilder::new()
        .flexible(true)
        .delimiter(delimiter)
        .from_writer(writer);
    for row in matrix.rows() {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}
