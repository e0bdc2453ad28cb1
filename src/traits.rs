//! Reading and writing a whole model from/to one file.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::error::Error;

/// Implemented by every model that maps onto a single file: [`crate::Matrix`]
/// (CSV), [`crate::formats::AndroidStringsFormat`] (`strings.xml`) and
/// [`crate::DictionarySet`] (JSON).
///
/// # Example
///
/// ```rust,no_run
/// use stringsheet::{Matrix, traits::Parser};
/// let matrix = Matrix::read_from("translations.csv")?;
/// matrix.write_to("translations_copy.csv")?;
/// Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait Parser: Sized {
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error>;

    fn to_writer<W: Write>(&self, writer: W) -> Result<(), Error>;

    fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Creates or truncates `path`. Buffered output is flushed before
    /// returning so write errors are not lost on drop.
    fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.to_writer(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
