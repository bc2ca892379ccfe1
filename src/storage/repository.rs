//! JSON-file repository of named timers and global defaults

use std::{
    cmp::Ordering,
    collections::BTreeMap,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::StorageError;
use crate::state::{Defaults, TimerOptions};

const APP_DIR: &str = "stimer";
const STORE_FILENAME: &str = "stimer.json";

/// On-disk layout of the timer store
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Store {
    pub defaults: Defaults,
    pub timers: BTreeMap<String, TimerOptions>,
}

/// Repository of saved timers backed by one JSON file.
///
/// Every operation reads and rewrites the whole file.
#[derive(Debug, Clone)]
pub struct Repository {
    path: PathBuf,
}

impl Repository {
    /// Open a repository at the given file path. The file is created lazily.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default store location under the user's configuration directory
    pub fn default_path() -> Result<PathBuf, StorageError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR).join(STORE_FILENAME))
            .ok_or(StorageError::NoConfigDir)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the store, failing on I/O or decoding problems.
    ///
    /// A missing file is an empty store.
    pub fn read(&self) -> Result<Store, StorageError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Timer store {} does not exist yet", self.path.display());
                return Ok(Store::default());
            }
            Err(source) => {
                return Err(StorageError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        if contents.trim().is_empty() {
            return Ok(Store::default());
        }

        serde_json::from_str(&contents).map_err(|source| StorageError::Decode {
            path: self.path.clone(),
            source,
        })
    }

    /// Read the store, treating any storage failure as an empty store
    pub fn load_store(&self) -> Store {
        self.read().unwrap_or_else(|e| {
            warn!("{:#}; treating timer store as empty", anyhow::Error::new(e));
            Store::default()
        })
    }

    /// Replace the store file with `store`
    pub fn write(&self, store: &Store) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| StorageError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let contents = serde_json::to_string_pretty(store).map_err(StorageError::Encode)?;
        fs::write(&self.path, contents).map_err(|source| StorageError::Write {
            path: self.path.clone(),
            source,
        })
    }

    /// Global defaults
    pub fn defaults(&self) -> Defaults {
        self.load_store().defaults
    }

    /// Replace the global defaults
    pub fn set_defaults(&self, defaults: Defaults) -> Result<(), StorageError> {
        let mut store = self.load_store();
        store.defaults = defaults;
        self.write(&store)
    }

    /// Load a saved timer by name, `None` if it does not exist
    pub fn load(&self, name: &str) -> Option<TimerOptions> {
        let mut store = self.load_store();
        let options = store.timers.remove(name);
        if options.is_none() {
            debug!("Timer {} not found in store", name);
        }
        options
    }

    /// All saved timers, numeric names first in numeric order
    pub fn list(&self) -> Vec<(String, TimerOptions)> {
        let mut timers: Vec<_> = self.load_store().timers.into_iter().collect();
        timers.sort_by(|(a, _), (b, _)| compare_names(a, b));
        timers
    }

    /// Save a timer under its own name, or under the next free number when
    /// it has none.
    ///
    /// When the name is already taken `confirm_overwrite` is asked first; a
    /// refusal leaves the store untouched and returns `Ok(None)`.
    pub fn save<F>(&self, options: &TimerOptions, confirm_overwrite: F) -> Result<Option<String>, StorageError>
    where
        F: FnOnce(&str) -> bool,
    {
        let mut store = self.load_store();

        let name = match &options.name {
            Some(name) => {
                if store.timers.contains_key(name) && !confirm_overwrite(name) {
                    info!("Timer {} kept, overwrite declined", name);
                    return Ok(None);
                }
                name.clone()
            }
            None => next_name(store.timers.keys().map(String::as_str)),
        };

        let record = TimerOptions {
            name: Some(name.clone()),
            ..options.clone()
        };
        store.timers.insert(name.clone(), record);
        self.write(&store)?;

        info!("Timer {} saved to {}", name, self.path.display());
        Ok(Some(name))
    }

    /// Remove a saved timer. Returns whether it existed.
    pub fn remove(&self, name: &str) -> Result<bool, StorageError> {
        let mut store = self.load_store();
        if store.timers.remove(name).is_none() {
            return Ok(false);
        }
        self.write(&store)?;
        info!("Timer {} removed", name);
        Ok(true)
    }
}

/// Smallest positive integer not already used as a timer name
pub fn next_name<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    let mut numbers: Vec<u64> = names
        .into_iter()
        .filter(|name| !name.is_empty() && name.bytes().all(|b| b.is_ascii_digit()))
        .filter_map(|name| name.parse().ok())
        .collect();
    numbers.sort_unstable();

    let mut candidate = 1;
    for number in numbers {
        if number == candidate {
            candidate += 1;
        }
    }
    candidate.to_string()
}

fn compare_names(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}
