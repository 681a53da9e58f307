//! Best-score persistence.
//!
//! The store is a tiny key-value capability: one key per difficulty tier,
//! holding the lowest move count ever achieved on that tier. Values are kept
//! as decimal strings on disk. A missing key means "no record yet".

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::StoreError;
use crate::types::Difficulty;

/// Keyed storage for best scores.
pub trait ScoreStore {
    fn get(&self, key: &str) -> Result<Option<u32>, StoreError>;
    fn set(&mut self, key: &str, moves: u32) -> Result<(), StoreError>;
}

/// In-memory store; nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    values: HashMap<String, u32>,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, key: &str, moves: u32) -> Self {
        self.values.insert(key.to_string(), moves);
        self
    }
}

impl ScoreStore for MemoryScoreStore {
    fn get(&self, key: &str) -> Result<Option<u32>, StoreError> {
        Ok(self.values.get(key).copied())
    }

    fn set(&mut self, key: &str, moves: u32) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), moves);
        Ok(())
    }
}

/// JSON-file store: `{"memoryGameBestScoreEasy": "6", ...}`.
///
/// The whole file is loaded on open and rewritten on every `set`.
#[derive(Debug, Clone)]
pub struct FileScoreStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileScoreStore {
    /// Open the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(text) if text.trim().is_empty() => BTreeMap::new(),
            Ok(text) => parse_values(&text)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        debug!(path = %path.display(), entries = values.len(), "opened score file");
        Ok(Self { path, values })
    }

    /// Open the store, starting empty if the file is unreadable or corrupt.
    pub fn open_or_empty(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match Self::open(&path) {
            Ok(store) => store,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "score file unusable, starting empty");
                Self {
                    path,
                    values: BTreeMap::new(),
                }
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `values` to disk. `self.values` is untouched, so callers commit
    /// only after this succeeds.
    fn persist(&self, values: &BTreeMap<String, String>) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(values)?;
        let tmp = self.path.with_extension("json.tmp");
        {
            let mut file = fs::File::create(&tmp)?;
            file.write_all(json.as_bytes())?;
            file.sync_all()?;
        }
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

/// A value as found on disk. Scores are written as decimal strings, but bare
/// JSON numbers are accepted too. Numbers that are not move counts (negative,
/// fractional) are kept as text and reported as invalid when read.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StoredValue {
    Text(String),
    Number(serde_json::Number),
}

impl From<StoredValue> for String {
    fn from(value: StoredValue) -> Self {
        match value {
            StoredValue::Text(s) => s,
            StoredValue::Number(n) => n.to_string(),
        }
    }
}

fn parse_values(text: &str) -> Result<BTreeMap<String, String>, StoreError> {
    let raw: BTreeMap<String, StoredValue> = serde_json::from_str(text)?;
    Ok(raw.into_iter().map(|(k, v)| (k, v.into())).collect())
}

impl ScoreStore for FileScoreStore {
    fn get(&self, key: &str) -> Result<Option<u32>, StoreError> {
        match self.values.get(key) {
            None => Ok(None),
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .map(Some)
                .map_err(|_| StoreError::InvalidValue {
                    key: key.to_string(),
                    value: raw.clone(),
                }),
        }
    }

    fn set(&mut self, key: &str, moves: u32) -> Result<(), StoreError> {
        let mut values = self.values.clone();
        values.insert(key.to_string(), moves.to_string());
        self.persist(&values)?;
        self.values = values;
        Ok(())
    }
}

/// Applies the best-score rule on top of a store.
///
/// Store failures never reach the caller: reads degrade to "no record" and
/// failed writes report "not recorded".
#[derive(Debug, Clone)]
pub struct BestScores<S> {
    store: S,
}

impl<S: ScoreStore> BestScores<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn get(&self, difficulty: Difficulty) -> Option<u32> {
        let key = difficulty.best_score_key();
        match self.store.get(key) {
            Ok(v) => v,
            Err(e) => {
                warn!(key, error = %e, "ignoring unreadable best score");
                None
            }
        }
    }

    /// Store `moves` if there is no record or it beats the record strictly.
    ///
    /// Returns true when the record was written.
    pub fn record(&mut self, difficulty: Difficulty, moves: u32) -> bool {
        if self.get(difficulty).is_some_and(|best| moves >= best) {
            return false;
        }

        let key = difficulty.best_score_key();
        match self.store.set(key, moves) {
            Ok(()) => true,
            Err(e) => {
                warn!(key, moves, error = %e, "failed to persist best score");
                false
            }
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }
}
