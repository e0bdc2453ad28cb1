//! Row/column view of a [`DictionarySet`] and the transposition in both
//! directions.
//!
//! ```text
//! code \ language, lang1, lang2, ...
//! key1,            val1,  val2,  ...
//! key2,            val1,  val2,  ...
//! ```
//!
//! Row 0 is the header. Its first cell is a label, the remaining cells are
//! language codes. Every data row starts with a string key and has exactly as
//! many cells as the header; cell `j` belongs to the language in header cell
//! `j`.

use std::collections::HashSet;

use crate::{error::Error, types::DictionarySet};

/// Label written into the first header cell.
pub const DEFAULT_HEADER_LABEL: &str = "code \\ language";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Matrix {
    rows: Vec<Vec<String>>,
}

impl Matrix {
    /// Creates a matrix with zero rows.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps already-materialized rows. No shape check happens here; see
    /// [`to_dictionary_set`].
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.rows
    }

    pub fn header(&self) -> Option<&[String]> {
        self.rows.first().map(Vec::as_slice)
    }

    /// Language codes of the header, in column order.
    pub fn languages(&self) -> &[String] {
        self.header()
            .and_then(|header| header.get(1..))
            .unwrap_or_default()
    }

    pub fn data_rows(&self) -> &[Vec<String>] {
        self.rows.get(1..).unwrap_or_default()
    }

    /// Number of rows, header included.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl From<&DictionarySet> for Matrix {
    fn from(set: &DictionarySet) -> Self {
        to_matrix(set)
    }
}

impl TryFrom<&Matrix> for DictionarySet {
    type Error = Error;

    fn try_from(matrix: &Matrix) -> Result<Self, Self::Error> {
        to_dictionary_set(matrix)
    }
}

/// Flattens `set` into a matrix using [`DEFAULT_HEADER_LABEL`].
pub fn to_matrix(set: &DictionarySet) -> Matrix {
    to_matrix_with_label(set, DEFAULT_HEADER_LABEL)
}

/// Flattens `set` into a matrix.
///
/// Columns follow the set's language order and rows cover the union of all
/// keys, both ascending. A key missing from a language yields an empty cell.
/// A set with zero languages yields a matrix with zero rows.
pub fn to_matrix_with_label(set: &DictionarySet, header_label: &str) -> Matrix {
    if set.is_empty() {
        return Matrix::new();
    }

    let languages: Vec<&str> = set.languages().collect();
    let keys = set.all_keys();

    let mut rows = Vec::with_capacity(keys.len() + 1);

    let mut header = Vec::with_capacity(languages.len() + 1);
    header.push(header_label.to_string());
    header.extend(languages.iter().map(|lang| lang.to_string()));
    rows.push(header);

    for key in keys {
        let mut row = Vec::with_capacity(languages.len() + 1);
        row.push(key.to_string());
        row.extend(
            languages
                .iter()
                .map(|lang| set.translation(lang, key).unwrap_or_default().to_string()),
        );
        rows.push(row);
    }

    Matrix { rows }
}

/// Rebuilds a [`DictionarySet`] from `matrix`.
///
/// Every cell of a data row becomes a translation, empty cells included: an
/// empty cell imports as an empty string, not as a missing key. Every header
/// language is present in the result even when it has no data rows.
///
/// Fails with [`Error::MalformedMatrix`] when the matrix has no header, when a
/// data row is not as wide as the header, when data rows come with no language
/// column to hold them, or when a language code or key is empty or repeated.
pub fn to_dictionary_set(matrix: &Matrix) -> Result<DictionarySet, Error> {
    let header = matrix
        .header()
        .ok_or_else(|| Error::malformed("matrix has no header row"))?;
    let width = header.len();
    let languages = matrix.languages();
    if languages.is_empty() && !matrix.data_rows().is_empty() {
        return Err(Error::malformed(
            "header has no language columns but data rows are present",
        ));
    }

    let mut set = DictionarySet::new();
    for (column, language) in languages.iter().enumerate() {
        if language.is_empty() {
            return Err(Error::malformed(format!(
                "header column {} has an empty language code",
                column + 1
            )));
        }
        if !set.add_language(language.as_str()) {
            return Err(Error::malformed(format!(
                "language `{}` appears more than once in the header",
                language
            )));
        }
    }

    let mut seen_keys = HashSet::new();
    for (index, row) in matrix.data_rows().iter().enumerate() {
        // Row numbers in messages count the header as row 1.
        let row_number = index + 2;
        if row.len() != width {
            return Err(Error::malformed(format!(
                "row {} has {} cells, header has {}",
                row_number,
                row.len(),
                width
            )));
        }

        let Some((key, values)) = row.split_first() else {
            continue;
        };
        if key.is_empty() {
            return Err(Error::malformed(format!("row {} has an empty key", row_number)));
        }
        if !seen_keys.insert(key.as_str()) {
            return Err(Error::malformed(format!(
                "key `{}` appears more than once (row {})",
                key, row_number
            )));
        }

        for (language, value) in languages.iter().zip(values) {
            set.add_translation(language.as_str(), key.as_str(), value.as_str());
        }
    }

    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Dictionary;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    fn scenario_set() -> DictionarySet {
        let mut set = DictionarySet::new();
        set.add_translation("en", "hello", "Hello");
        set.add_translation("fr", "hello", "Bonjour");
        set.add_translation("fr", "bye", "Au revoir");
        set
    }

    fn find_row<'a>(matrix: &'a Matrix, key: &str) -> &'a [String] {
        matrix
            .data_rows()
            .iter()
            .find(|r| r[0] == key)
            .unwrap_or_else(|| panic!("no row for key {key}"))
    }

    #[test]
    fn test_to_matrix_scenario() {
        let matrix = to_matrix(&scenario_set());

        let header = matrix.header().unwrap();
        assert_eq!(header[0], DEFAULT_HEADER_LABEL);
        assert_eq!(matrix.languages().len(), 2);
        assert!(matrix.languages().contains(&"en".to_string()));
        assert!(matrix.languages().contains(&"fr".to_string()));
        assert_eq!(matrix.data_rows().len(), 2);

        let en = matrix.languages().iter().position(|l| l == "en").unwrap() + 1;
        let fr = matrix.languages().iter().position(|l| l == "fr").unwrap() + 1;

        let hello = find_row(&matrix, "hello");
        assert_eq!(hello[en], "Hello");
        assert_eq!(hello[fr], "Bonjour");

        let bye = find_row(&matrix, "bye");
        assert_eq!(bye[en], "");
        assert_eq!(bye[fr], "Au revoir");
    }

    #[test]
    fn test_to_matrix_orders_columns_and_rows() {
        let matrix = to_matrix(&scenario_set());
        assert_eq!(
            matrix.rows(),
            &[
                row(&[DEFAULT_HEADER_LABEL, "en", "fr"]),
                row(&["bye", "", "Au revoir"]),
                row(&["hello", "Hello", "Bonjour"]),
            ]
        );
    }

    #[test]
    fn test_to_matrix_empty_set_has_no_rows() {
        let matrix = to_matrix(&DictionarySet::new());
        assert!(matrix.is_empty());
        assert!(matrix.header().is_none());
        assert!(matrix.languages().is_empty());
    }

    #[test]
    fn test_to_matrix_languages_without_keys_is_header_only() {
        let mut set = DictionarySet::new();
        set.insert_dictionary("en", Dictionary::new());
        set.insert_dictionary("fr", Dictionary::new());

        let matrix = to_matrix(&set);
        assert_eq!(matrix.rows(), &[row(&[DEFAULT_HEADER_LABEL, "en", "fr"])]);
    }

    #[test]
    fn test_to_matrix_shape() {
        let mut set = scenario_set();
        set.add_translation("de", "only_de", "Nur");
        let matrix = to_matrix(&set);

        assert_eq!(matrix.len(), 1 + set.all_keys().len());
        for r in matrix.rows() {
            assert_eq!(r.len(), 1 + set.len());
        }
    }

    #[test]
    fn test_to_matrix_custom_label() {
        let matrix = to_matrix_with_label(&scenario_set(), "key");
        assert_eq!(matrix.header().unwrap()[0], "key");
    }

    #[test]
    fn test_to_dictionary_set_reads_positionally() {
        let matrix = Matrix::from_rows(vec![
            row(&["code \\ language", "fr", "en"]),
            row(&["hello", "Bonjour", "Hello"]),
        ]);
        let set = to_dictionary_set(&matrix).unwrap();
        assert_eq!(set.translation("fr", "hello"), Some("Bonjour"));
        assert_eq!(set.translation("en", "hello"), Some("Hello"));
    }

    #[test]
    fn test_to_dictionary_set_empty_cell_is_present() {
        let set = to_dictionary_set(&to_matrix(&scenario_set())).unwrap();
        assert_eq!(set.translation("en", "bye"), Some(""));
        assert!(set.dictionary("en").unwrap().contains_key("bye"));
        assert_eq!(set.translation("fr", "bye"), Some("Au revoir"));
    }

    #[test]
    fn test_to_dictionary_set_header_only() {
        let matrix = Matrix::from_rows(vec![row(&["code \\ language", "en", "fr"])]);
        let set = to_dictionary_set(&matrix).unwrap();
        assert_eq!(set.languages().collect::<Vec<_>>(), vec!["en", "fr"]);
        assert!(set.all_keys().is_empty());
    }

    #[test]
    fn test_to_dictionary_set_rejects_keys_without_languages() {
        let matrix = Matrix::from_rows(vec![
            row(&["code \\ language"]),
            row(&["hello"]),
            row(&["bye"]),
        ]);
        let err = to_dictionary_set(&matrix).unwrap_err();
        assert!(matches!(err, Error::MalformedMatrix(_)));
    }

    #[test]
    fn test_to_dictionary_set_label_only_header_without_rows() {
        let matrix = Matrix::from_rows(vec![row(&["code \\ language"])]);
        let set = to_dictionary_set(&matrix).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_to_dictionary_set_rejects_empty_matrix() {
        let err = to_dictionary_set(&Matrix::new()).unwrap_err();
        assert!(matches!(err, Error::MalformedMatrix(_)));
    }

    #[test]
    fn test_to_dictionary_set_rejects_short_row() {
        let matrix = Matrix::from_rows(vec![
            row(&["code \\ language", "en", "fr"]),
            row(&["hello", "Hello"]),
        ]);
        let err = to_dictionary_set(&matrix).unwrap_err();
        assert!(matches!(err, Error::MalformedMatrix(_)));
        assert!(err.to_string().contains("row 2"));
    }

    #[test]
    fn test_to_dictionary_set_rejects_long_row() {
        let matrix = Matrix::from_rows(vec![
            row(&["code \\ language", "en"]),
            row(&["hello", "Hello", "extra"]),
        ]);
        assert!(matches!(
            to_dictionary_set(&matrix),
            Err(Error::MalformedMatrix(_))
        ));
    }

    #[test]
    fn test_to_dictionary_set_rejects_duplicate_language() {
        let matrix = Matrix::from_rows(vec![
            row(&["code \\ language", "en", "en"]),
            row(&["hello", "Hello", "Hi"]),
        ]);
        let err = to_dictionary_set(&matrix).unwrap_err();
        assert!(err.to_string().contains("`en`"));
    }

    #[test]
    fn test_to_dictionary_set_rejects_empty_language() {
        let matrix = Matrix::from_rows(vec![row(&["code \\ language", "en", ""])]);
        assert!(matches!(
            to_dictionary_set(&matrix),
            Err(Error::MalformedMatrix(_))
        ));
    }

    #[test]
    fn test_to_dictionary_set_rejects_empty_key() {
        let matrix = Matrix::from_rows(vec![
            row(&["code \\ language", "en"]),
            row(&["", "Hello"]),
        ]);
        assert!(matches!(
            to_dictionary_set(&matrix),
            Err(Error::MalformedMatrix(_))
        ));
    }

    #[test]
    fn test_to_dictionary_set_rejects_duplicate_key() {
        let matrix = Matrix::from_rows(vec![
            row(&["code \\ language", "en"]),
            row(&["hello", "Hello"]),
            row(&["hello", "Hi"]),
        ]);
        let err = to_dictionary_set(&matrix).unwrap_err();
        assert!(err.to_string().contains("row 3"));
    }

    #[test]
    fn test_conversion_traits() {
        let set = scenario_set();
        let matrix = Matrix::from(&set);
        let back = DictionarySet::try_from(&matrix).unwrap();
        assert_eq!(back.translation("fr", "hello"), Some("Bonjour"));
        assert_eq!(back.translation("en", "bye"), Some(""));
    }
}
