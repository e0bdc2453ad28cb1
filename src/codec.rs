//! This module provides the `Codec` struct, which wires the resource directory
//! reader/writer, the transposer and the CSV reader/writer together into the
//! two end-to-end conversions: resource directory → CSV file and back.
//!
//! Each call builds its values from scratch; a `Codec` only carries options.
use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::{Path, PathBuf},
};

use tracing::info;

use crate::{
    error::Error,
    formats::csv::{read_delimited, write_delimited},
    matrix::{Matrix, to_dictionary_set, to_matrix_with_label},
    options::ConvertOptions,
    res_dir::{read_res_dir, write_res_dir},
    types::DictionarySet,
};

/// What a conversion read and wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    /// Number of languages converted.
    pub languages: usize,
    /// Number of distinct string keys across all languages.
    pub keys: usize,
    /// Files created or replaced.
    pub files: Vec<PathBuf>,
}

impl ConversionSummary {
    fn new(set: &DictionarySet, files: Vec<PathBuf>) -> Self {
        Self {
            languages: set.len(),
            keys: set.all_keys().len(),
            files,
        }
    }
}

/// Runs conversions with one set of [`ConvertOptions`].
#[derive(Debug, Clone, Default)]
pub struct Codec {
    options: ConvertOptions,
}

impl Codec {
    /// Creates a codec using the default options.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ConvertOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Reads all language folders of the resource directory at `path`.
    pub fn read_res_dir<P: AsRef<Path>>(&self, path: P) -> Result<DictionarySet, Error> {
        read_res_dir(path, &self.options.layout)
    }

    /// Writes `set` as a resource directory at `path`.
    pub fn write_res_dir<P: AsRef<Path>>(
        &self,
        path: P,
        set: &DictionarySet,
    ) -> Result<Vec<PathBuf>, Error> {
        write_res_dir(path, set, &self.options.layout, self.options.overwrite)
    }

    /// Reads the CSV file at `path` as a matrix, without interpreting it.
    pub fn read_matrix<P: AsRef<Path>>(&self, path: P) -> Result<Matrix, Error> {
        let file = File::open(path)?;
        read_delimited(BufReader::new(file), self.options.delimiter)
    }

    /// Reads the CSV file at `path` and rebuilds the dictionary set from it.
    pub fn read_csv<P: AsRef<Path>>(&self, path: P) -> Result<DictionarySet, Error> {
        to_dictionary_set(&self.read_matrix(path)?)
    }

    /// Flattens `set` and writes it as a CSV file at `path`.
    ///
    /// Without `overwrite`, an existing file is an [`Error::AlreadyExists`].
    pub fn write_csv<P: AsRef<Path>>(&self, path: P, set: &DictionarySet) -> Result<(), Error> {
        let path = path.as_ref();
        let file = if self.options.overwrite {
            File::create(path)?
        } else {
            File::create_new(path).map_err(|e| match e.kind() {
                std::io::ErrorKind::AlreadyExists => Error::AlreadyExists(path.to_path_buf()),
                _ => Error::Io(e),
            })?
        };
        let matrix = to_matrix_with_label(set, &self.options.header_label);
        write_delimited(&matrix, BufWriter::new(file), self.options.delimiter)
    }

    /// Converts the resource directory `from` into the CSV file `to`.
    ///
    /// A directory without any language folder is rejected before `to` is
    /// created.
    pub fn xml_to_csv<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        from: P,
        to: Q,
    ) -> Result<ConversionSummary, Error> {
        let from = from.as_ref();
        let to = to.as_ref();

        let set = self.read_res_dir(from)?;
        if set.is_empty() {
            return Err(Error::NoLanguages(from.to_path_buf()));
        }
        self.write_csv(to, &set)?;

        let summary = ConversionSummary::new(&set, vec![to.to_path_buf()]);
        info!(
            "converted {} languages / {} keys from {} to {}",
            summary.languages,
            summary.keys,
            from.display(),
            to.display()
        );
        Ok(summary)
    }

    /// Converts the CSV file `from` into the resource directory `to`.
    ///
    /// The whole CSV is validated before anything is written.
    pub fn csv_to_xml<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        from: P,
        to: Q,
    ) -> Result<ConversionSummary, Error> {
        let from = from.as_ref();
        let to = to.as_ref();

        let set = self.read_csv(from)?;
        let files = self.write_res_dir(to, &set)?;

        let summary = ConversionSummary::new(&set, files);
        info!(
            "converted {} languages / {} keys from {} to {}",
            summary.languages,
            summary.keys,
            from.display(),
            to.display()
        );
        Ok(summary)
    }
}

/// Converts a resource directory into a CSV file with default options.
///
/// # Example
///
/// ```rust,no_run
/// use stringsheet::convert_xml_to_csv;
/// let summary = convert_xml_to_csv("app/src/main/res", "translations.csv")?;
/// println!("{} languages", summary.languages);
/// # Ok::<(), stringsheet::Error>(())
/// ```
pub fn convert_xml_to_csv<P: AsRef<Path>, Q: AsRef<Path>>(
    from: P,
    to: Q,
) -> Result<ConversionSummary, Error> {
    Codec::new().xml_to_csv(from, to)
}

/// Converts a CSV file into a new resource directory with default options.
pub fn convert_csv_to_xml<P: AsRef<Path>, Q: AsRef<Path>>(
    from: P,
    to: Q,
) -> Result<ConversionSummary, Error> {
    Codec::new().csv_to_xml(from, to)
}
