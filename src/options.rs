//! Naming conventions and switches shared by every conversion.

use crate::{formats::csv::DEFAULT_DELIMITER, matrix::DEFAULT_HEADER_LABEL};

/// Prefix of the per-language folders inside an Android `res` directory.
pub const DEFAULT_VALUES_PREFIX: &str = "values-";

/// File holding the string resources inside each language folder.
pub const DEFAULT_STRINGS_FILENAME: &str = "strings.xml";

/// How language folders are laid out inside a resource directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResLayout {
    /// Folder name prefix; the rest of the folder name is the language code.
    pub values_prefix: String,
    /// Resource file name inside each language folder.
    pub strings_filename: String,
    /// Language stored in the unsuffixed folder (the prefix without its
    /// trailing `-`, e.g. `values`). When unset that folder is ignored.
    pub default_language: Option<String>,
}

impl Default for ResLayout {
    fn default() -> Self {
        Self {
            values_prefix: DEFAULT_VALUES_PREFIX.to_string(),
            strings_filename: DEFAULT_STRINGS_FILENAME.to_string(),
            default_language: None,
        }
    }
}

impl ResLayout {
    /// Folder name of `language`.
    pub fn folder_name(&self, language: &str) -> String {
        if self.default_language.as_deref() == Some(language) {
            self.default_folder_name().to_string()
        } else {
            format!("{}{}", self.values_prefix, language)
        }
    }

    /// Language stored in the folder called `folder`, if it is a language folder.
    pub fn language_of(&self, folder: &str) -> Option<String> {
        if let Some(default) = &self.default_language {
            if folder == self.default_folder_name() {
                return Some(default.clone());
            }
        }
        folder
            .strip_prefix(self.values_prefix.as_str())
            .map(str::to_string)
    }

    fn default_folder_name(&self) -> &str {
        self.values_prefix
            .strip_suffix('-')
            .unwrap_or(&self.values_prefix)
    }
}

/// Options for [`crate::Codec`] conversions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    pub layout: ResLayout,
    /// CSV field separator.
    pub delimiter: u8,
    /// Text of the first header cell.
    pub header_label: String,
    /// Whether existing output folders and files may be replaced.
    pub overwrite: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            layout: ResLayout::default(),
            delimiter: DEFAULT_DELIMITER,
            header_label: DEFAULT_HEADER_LABEL.to_string(),
            overwrite: false,
        }
    }
}

impl ConvertOptions {
    /// Creates default convert options.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_layout(mut self, layout: ResLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_values_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.layout.values_prefix = prefix.into();
        self
    }

    pub fn with_strings_filename(mut self, filename: impl Into<String>) -> Self {
        self.layout.strings_filename = filename.into();
        self
    }

    pub fn with_default_language(mut self, language: Option<String>) -> Self {
        self.layout.default_language = language;
        self
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_header_label(mut self, label: impl Into<String>) -> Self {
        self.header_label = label.into();
        self
    }

    /// Enables/disables replacing existing output.
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }
}
