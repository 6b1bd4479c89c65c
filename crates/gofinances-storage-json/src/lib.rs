//! gofinances-storage-json
//!
//! Filesystem-backed [`KeyValueStore`]: one JSON object mapping keys to string values.

use std::{
    collections::BTreeMap,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
    sync::Mutex,
};

use gofinances_core::{storage::KeyValueStore, CoreError, TRANSACTIONS_KEY_PREFIX};
use tracing::{debug, warn};

const STORE_FILE: &str = "storage.json";
const TMP_SUFFIX: &str = "tmp";

/// Key-value store persisted as a single JSON document.
///
/// Every `get` reads the file so callers always see the latest snapshot; `set`
/// rewrites it through a temporary file and a rename. A file that is not a JSON
/// object reads as empty, but `set` refuses to replace it.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn open(path: PathBuf) -> Result<Self, CoreError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(Self {
            path,
            write_lock: Mutex::new(()),
        })
    }

    /// Opens `storage.json` inside `dir`.
    pub fn in_dir(dir: &Path) -> Result<Self, CoreError> {
        Self::open(dir.join(STORE_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn keys(&self) -> Result<Vec<String>, CoreError> {
        Ok(self.read_entries_lenient()?.into_keys().collect())
    }

    /// Users that have a stored transaction list.
    pub fn users(&self) -> Result<Vec<String>, CoreError> {
        Ok(self
            .keys()?
            .into_iter()
            .filter_map(|key| key.strip_prefix(TRANSACTIONS_KEY_PREFIX).map(str::to_string))
            .collect())
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>, CoreError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let data = fs::read_to_string(&self.path)?;
        if data.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&data).map_err(|err| {
            warn!(path = %self.path.display(), error = %err, "store file is not a JSON object");
            CoreError::Serde(err.to_string())
        })
    }

    fn read_entries_lenient(&self) -> Result<BTreeMap<String, String>, CoreError> {
        match self.read_entries() {
            Err(CoreError::Serde(_)) => Ok(BTreeMap::new()),
            other => other,
        }
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        Ok(self.read_entries_lenient()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CoreError> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| CoreError::Storage("store write lock poisoned".into()))?;
        let mut entries = self.read_entries()?;
        entries.insert(key.to_string(), value.to_string());
        let json = serde_json::to_string_pretty(&entries)
            .map_err(|err| CoreError::Serde(err.to_string()))?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), key, "store updated");
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
