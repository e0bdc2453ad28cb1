//! Conversion settings: `stringsheet.toml` plus command-line overrides.
//!
//! Precedence is flags, then the config file, then the library defaults.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use stringsheet::ConvertOptions;
use tracing::debug;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "stringsheet.toml";

/// Contents of a config file. Every field is optional.
///
/// ```toml
/// values_prefix = "values-"
/// strings_filename = "strings.xml"
/// default_language = "en"
/// delimiter = ";"
/// header_label = "key"
/// overwrite = true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub values_prefix: Option<String>,
    pub strings_filename: Option<String>,
    pub default_language: Option<String>,
    pub delimiter: Option<char>,
    pub header_label: Option<String>,
    pub overwrite: Option<bool>,
}

/// Flags shared by the conversion commands.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct Overrides {
    /// Prefix of the per-language folders [default: values-]
    #[arg(long)]
    pub values_prefix: Option<String>,

    /// Resource file inside each language folder [default: strings.xml]
    #[arg(long = "strings-file")]
    pub strings_filename: Option<String>,

    /// Language stored in the unsuffixed `values` folder (ignored when unset)
    #[arg(long)]
    pub default_language: Option<String>,

    /// CSV field delimiter [default: ,]
    #[arg(long)]
    pub delimiter: Option<char>,

    /// Text of the first header cell [default: "code \ language"]
    #[arg(long)]
    pub header_label: Option<String>,

    /// Replace existing output folders and files
    #[arg(long, overrides_with = "no_overwrite")]
    pub overwrite: bool,

    /// Refuse to replace existing output, even if the config file allows it
    #[arg(long, overrides_with = "overwrite")]
    pub no_overwrite: bool,
}

impl Overrides {
    /// `Some` when either `--overwrite` or `--no-overwrite` was given.
    pub fn overwrite_flag(&self) -> Option<bool> {
        if self.no_overwrite {
            Some(false)
        } else if self.overwrite {
            Some(true)
        } else {
            None
        }
    }
}

impl FileConfig {
    pub fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| format!("Invalid config: {}", e))
    }
}

/// Loads `explicit` if given, else `stringsheet.toml` in `dir` if it exists.
pub fn load_config(explicit: Option<&Path>, dir: &Path) -> Result<FileConfig, String> {
    let path: PathBuf = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let candidate = dir.join(DEFAULT_CONFIG_FILE);
            if !candidate.is_file() {
                return Ok(FileConfig::default());
            }
            candidate
        }
    };

    debug!("loading config from {}", path.display());
    let content = fs::read_to_string(&path)
        .map_err(|e| format!("Cannot read config {}: {}", path.display(), e))?;
    FileConfig::parse(&content)
}

/// Layers `overrides` on top of `file` on top of the library defaults.
pub fn resolve_options(file: FileConfig, overrides: &Overrides) -> Result<ConvertOptions, String> {
    let mut options = ConvertOptions::new();

    if let Some(prefix) = overrides.values_prefix.clone().or(file.values_prefix) {
        options = options.with_values_prefix(prefix);
    }
    if let Some(filename) = overrides.strings_filename.clone().or(file.strings_filename) {
        options = options.with_strings_filename(filename);
    }
    let default_language = overrides.default_language.clone().or(file.default_language);
    options = options.with_default_language(default_language);
    if let Some(delimiter) = overrides.delimiter.or(file.delimiter) {
        options = options.with_delimiter(delimiter_byte(delimiter)?);
    }
    if let Some(label) = overrides.header_label.clone().or(file.header_label) {
        options = options.with_header_label(label);
    }
    let overwrite = overrides
        .overwrite_flag()
        .or(file.overwrite)
        .unwrap_or(false);

    Ok(options.with_overwrite(overwrite))
}

fn delimiter_byte(delimiter: char) -> Result<u8, String> {
    if delimiter.is_ascii() {
        Ok(delimiter as u8)
    } else {
        Err(format!(
            "Delimiter must be a single ASCII character, got '{}'",
            delimiter
        ))
    }
}
