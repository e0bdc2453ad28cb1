use std::path::Path;

use stringsheet::{Codec, ConversionSummary, ConvertOptions, DictionarySet, Error};

/// Direction of a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    XmlToCsv,
    CsvToXml,
}

/// Runs one conversion from `from` to `to`.
pub fn run_convert_command(
    direction: Direction,
    from: &Path,
    to: &Path,
    options: ConvertOptions,
) -> Result<ConversionSummary, Error> {
    let codec = Codec::with_options(options);
    match direction {
        Direction::XmlToCsv => codec.xml_to_csv(from, to),
        Direction::CsvToXml => codec.csv_to_xml(from, to),
    }
}

/// Reads `from` (a resource directory, or else a CSV file) and renders the
/// dictionary set as pretty JSON.
pub fn run_dump_command(from: &Path, options: ConvertOptions) -> Result<String, Error> {
    let codec = Codec::with_options(options);
    let set: DictionarySet = if from.is_dir() {
        codec.read_res_dir(from)?
    } else {
        codec.read_csv(from)?
    };

    Ok(serde_json::to_string_pretty(&set)?)
}

/// One-line report of a finished conversion.
pub fn describe(summary: &ConversionSummary) -> String {
    let files = match summary.files.as_slice() {
        [single] => single.display().to_string(),
        files => format!("{} files", files.len()),
    };
    format!(
        "{} languages, {} keys -> {}",
        summary.languages, summary.keys, files
    )
}
