use crate::core::{Store, UserRecord};
use crate::utils::error::{AppError, Result};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Values are kept serialized, exactly as a browser origin store would hold them.
type Entries = BTreeMap<String, String>;

/// On-disk origin document. Values are read loosely so one bad entry only
/// affects its own key.
type Document = BTreeMap<String, Value>;

fn decode(key: &str, raw: &str) -> Result<UserRecord> {
    serde_json::from_str(raw).map_err(|e| {
        tracing::debug!("Failed to decode record '{}': {}", key, e);
        AppError::MalformedRecord {
            key: key.to_string(),
        }
    })
}

fn decode_value(key: &str, value: &Value) -> Result<UserRecord> {
    match value {
        Value::String(raw) => decode(key, raw),
        other => decode(key, &other.to_string()),
    }
}

/// In-process store, mostly for tests and dry runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Entries,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` verbatim, bypassing serialization.
    pub fn insert_raw(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Store for MemoryStore {
    fn has(&self, key: &str) -> Result<bool> {
        Ok(self.entries.contains_key(key))
    }

    fn get(&self, key: &str) -> Result<Option<UserRecord>> {
        self.entries
            .get(key)
            .map(|raw| decode(key, raw))
            .transpose()
    }

    fn put(&mut self, key: &str, record: &UserRecord) -> Result<()> {
        let raw = serde_json::to_string(record)?;
        self.entries.insert(key.to_string(), raw);
        Ok(())
    }
}

/// File-backed store: one JSON document per origin at `<base_path>/<origin>.json`.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
    origin: String,
}

impl LocalStorage {
    pub fn new(base_path: String, origin: String) -> Self {
        Self { base_path, origin }
    }

    pub fn file_path(&self) -> PathBuf {
        Path::new(&self.base_path).join(format!("{}.json", self.origin))
    }

    fn load(&self) -> Result<Document> {
        let path = self.file_path();
        if !path.exists() {
            return Ok(Document::new());
        }

        tracing::debug!("Reading store file: {}", path.display());
        let data = fs::read(&path)?;
        if data.is_empty() {
            return Ok(Document::new());
        }
        Ok(serde_json::from_slice(&data)?)
    }

    /// Writes a sibling temp file and renames it over the document.
    fn save(&self, document: &Document) -> Result<()> {
        let path = self.file_path();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = path.with_extension("json.tmp");
        let data = serde_json::to_vec_pretty(document)?;
        fs::write(&tmp_path, data)?;
        fs::rename(&tmp_path, &path)?;
        tracing::debug!("Wrote {} entries to {}", document.len(), path.display());
        Ok(())
    }
}

impl Store for LocalStorage {
    fn has(&self, key: &str) -> Result<bool> {
        Ok(self.load()?.contains_key(key))
    }

    fn get(&self, key: &str) -> Result<Option<UserRecord>> {
        self.load()?
            .get(key)
            .map(|value| decode_value(key, value))
            .transpose()
    }

    fn put(&mut self, key: &str, record: &UserRecord) -> Result<()> {
        let mut document = self.load()?;
        document.insert(key.to_string(), Value::String(serde_json::to_string(record)?));
        self.save(&document)
    }
}
