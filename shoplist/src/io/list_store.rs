//! Whole-list persistence to a single JSON file.
//!
//! Every load reads the full file and every save rewrites it. There is no
//! caching and no locking: two concurrent read-modify-write cycles race and
//! the last save wins.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::core::invariants::validate_invariants;
use crate::io::config::CorruptPolicy;
use crate::list::ShoppingList;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("read list {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("parse list {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid list {}: {}", .path.display(), .errors.join("; "))]
    Invalid { path: PathBuf, errors: Vec<String> },
    #[error("serialize list: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("write list {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    /// True if the file exists but its content is not a well-formed list.
    pub fn is_corrupt(&self) -> bool {
        matches!(self, StoreError::Decode { .. } | StoreError::Invalid { .. })
    }
}

/// JSON-file backed list store.
#[derive(Debug, Clone)]
pub struct ListStore {
    path: PathBuf,
    on_corrupt: CorruptPolicy,
}

impl ListStore {
    pub fn new(path: impl Into<PathBuf>, on_corrupt: CorruptPolicy) -> Self {
        Self {
            path: path.into(),
            on_corrupt,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Where a corrupt list file is moved under [`CorruptPolicy::Reset`].
    ///
    /// Earlier backups are never replaced: if `<file>.corrupt` is taken the
    /// first free `<file>.corrupt.N` is used instead.
    pub fn corrupt_path(&self) -> PathBuf {
        let base = with_suffix(&self.path, ".corrupt");
        let mut candidate = base.clone();
        let mut n = 1u32;
        while candidate.exists() {
            candidate = with_suffix(&base, &format!(".{}", n));
            n += 1;
        }
        candidate
    }

    /// Load the whole list.
    ///
    /// A missing or blank file is an empty list, never an error.
    pub fn load(&self) -> Result<ShoppingList, StoreError> {
        debug!(path = %self.path.display(), "loading list");
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "list file missing, starting empty");
                return Ok(ShoppingList::new());
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        if contents.trim().is_empty() {
            return Ok(ShoppingList::new());
        }

        match self.decode(&contents) {
            Ok(list) => {
                debug!(items = list.len(), "list loaded");
                Ok(list)
            }
            Err(err) => match self.on_corrupt {
                CorruptPolicy::Fail => Err(err),
                CorruptPolicy::Reset => {
                    let aside = self.corrupt_path();
                    warn!(
                        path = %self.path.display(),
                        moved_to = %aside.display(),
                        error = %err,
                        "list file is corrupt, resetting to an empty list"
                    );
                    fs::rename(&self.path, &aside).map_err(|source| StoreError::Write {
                        path: aside.clone(),
                        source,
                    })?;
                    Ok(ShoppingList::new())
                }
            },
        }
    }

    /// Overwrite the file with `list` (pretty JSON, temp file + rename).
    pub fn save(&self, list: &ShoppingList) -> Result<(), StoreError> {
        debug!(path = %self.path.display(), items = list.len(), "writing list");
        let mut buf = serde_json::to_string_pretty(list).map_err(StoreError::Encode)?;
        buf.push('\n');
        self.write_atomic(&buf)
    }

    fn decode(&self, contents: &str) -> Result<ShoppingList, StoreError> {
        let list: ShoppingList =
            serde_json::from_str(contents).map_err(|source| StoreError::Decode {
                path: self.path.clone(),
                source,
            })?;
        let errors = validate_invariants(&list);
        if !errors.is_empty() {
            return Err(StoreError::Invalid {
                path: self.path.clone(),
                errors,
            });
        }
        Ok(list)
    }

    fn write_atomic(&self, contents: &str) -> Result<(), StoreError> {
        let write_err = |path: &Path| {
            let path = path.to_path_buf();
            move |source: io::Error| StoreError::Write { path, source }
        };
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(write_err(parent))?;
            }
        }
        let tmp_path = with_suffix(&self.path, ".tmp");
        fs::write(&tmp_path, contents).map_err(write_err(&tmp_path))?;
        fs::rename(&tmp_path, &self.path).map_err(write_err(&self.path))?;
        Ok(())
    }
}

fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("list"));
    name.push(suffix);
    path.with_file_name(name)
}
