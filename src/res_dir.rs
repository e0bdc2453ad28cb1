//! Reading and writing an Android `res` directory: one folder per language,
//! each holding one strings file.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use tracing::{debug, warn};

use crate::{
    error::Error,
    formats::AndroidStringsFormat,
    options::ResLayout,
    traits::Parser,
    types::{Dictionary, DictionarySet},
};

/// Reads every language folder directly under `path`.
///
/// Folders that are not language folders are ignored, as are language folders
/// without a strings file (e.g. `values-v21` holding only styles).
pub fn read_res_dir<P: AsRef<Path>>(path: P, layout: &ResLayout) -> Result<DictionarySet, Error> {
    let path = path.as_ref();
    let mut set = DictionarySet::new();

    for entry in fs::read_dir(path)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let folder = entry.file_name();
        let Some(folder) = folder.to_str() else {
            continue;
        };
        let Some(language) = layout.language_of(folder) else {
            continue;
        };
        if language.is_empty() {
            warn!("skipping `{}`: folder name has no language code", folder);
            continue;
        }

        let file = entry.path().join(&layout.strings_filename);
        if !file.is_file() {
            debug!("skipping `{}`: no {}", folder, layout.strings_filename);
            continue;
        }

        debug!("reading {} as `{}`", file.display(), language);
        let dictionary = Dictionary::from(AndroidStringsFormat::read_from(&file)?);
        set.insert_dictionary(language, dictionary);
    }

    Ok(set)
}

/// Writes one language folder and strings file per language of `set` under
/// `path`, creating `path` if needed.
///
/// Without `overwrite`, an existing `path`, language folder, or strings file
/// is an [`Error::AlreadyExists`]. A language code that is empty or could
/// name a path outside `path` is an [`Error::InvalidLanguage`], reported
/// before anything is written. Returns the written files.
pub fn write_res_dir<P: AsRef<Path>>(
    path: P,
    set: &DictionarySet,
    layout: &ResLayout,
    overwrite: bool,
) -> Result<Vec<PathBuf>, Error> {
    let path = path.as_ref();
    for language in set.languages() {
        check_language(language)?;
    }
    ensure_dir(path, overwrite)?;

    let mut written = Vec::with_capacity(set.len());
    for (language, dictionary) in set.iter() {
        let folder = path.join(layout.folder_name(language));
        ensure_dir(&folder, overwrite)?;

        let file = folder.join(&layout.strings_filename);
        if !overwrite && file.exists() {
            return Err(Error::AlreadyExists(file));
        }

        debug!("writing {} entries to {}", dictionary.len(), file.display());
        AndroidStringsFormat::from(dictionary).write_to(&file)?;
        written.push(file);
    }

    Ok(written)
}

fn check_language(language: &str) -> Result<(), Error> {
    let unsafe_char = |c: char| matches!(c, '/' | '\\' | '\0');
    if language.is_empty() || language.contains("..") || language.contains(unsafe_char) {
        return Err(Error::InvalidLanguage(language.to_string()));
    }
    Ok(())
}

fn ensure_dir(path: &Path, overwrite: bool) -> Result<(), Error> {
    match fs::create_dir(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            if overwrite && path.is_dir() {
                Ok(())
            } else {
                Err(Error::AlreadyExists(path.to_path_buf()))
            }
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            fs::create_dir_all(path)?;
            Ok(())
        }
        Err(e) => Err(Error::Io(e)),
    }
}
