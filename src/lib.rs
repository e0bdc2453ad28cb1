#![forbid(unsafe_code)]
//! Convert Android string resources to a translation spreadsheet and back.
//!
//! An Android `res` directory holds one `values-<lang>/strings.xml` per
//! language. stringsheet reads those into a [`DictionarySet`]
//! (language → key → text), flattens it into a [`Matrix`] whose rows are keys
//! and whose columns are languages, and writes that matrix as CSV. The reverse
//! path rebuilds the directory from an edited CSV.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use stringsheet::{Codec, ConvertOptions};
//!
//! let codec = Codec::with_options(ConvertOptions::new().with_overwrite(true));
//! codec.xml_to_csv("app/src/main/res", "translations.csv")?;
//! // ... translators edit translations.csv ...
//! codec.csv_to_xml("translations.csv", "app/src/main/res")?;
//! # Ok::<(), stringsheet::Error>(())
//! ```
//!
//! The transposition itself works on in-memory values only:
//!
//! ```rust
//! use stringsheet::{DictionarySet, to_dictionary_set, to_matrix};
//!
//! let mut set = DictionarySet::new();
//! set.add_translation("en", "hello", "Hello");
//! set.add_translation("fr", "hello", "Bonjour");
//! set.add_translation("fr", "bye", "Au revoir");
//!
//! let matrix = to_matrix(&set);
//! assert_eq!(matrix.rows()[1], ["bye", "", "Au revoir"]);
//!
//! let back = to_dictionary_set(&matrix)?;
//! assert_eq!(back.translation("en", "bye"), Some(""));
//! # Ok::<(), stringsheet::Error>(())
//! ```

pub mod codec;
pub mod error;
pub mod formats;
pub mod matrix;
pub mod options;
pub mod res_dir;
pub mod traits;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    codec::{Codec, ConversionSummary, convert_csv_to_xml, convert_xml_to_csv},
    error::Error,
    matrix::{DEFAULT_HEADER_LABEL, Matrix, to_dictionary_set, to_matrix, to_matrix_with_label},
    options::{ConvertOptions, ResLayout},
    types::{Dictionary, DictionarySet},
};
