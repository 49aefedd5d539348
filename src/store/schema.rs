use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::store::word_store::{WordRecord, WordStore};

const SCHEMA_VERSION: u32 = 1;

/// On-disk shape of the word collection: a map from chapter name to its
/// ordered word list, plus the id allocation watermark.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StoreData {
    pub schema_version: u32,
    #[serde(default = "default_next_id")]
    pub next_id: u64,
    #[serde(default)]
    pub chapters: IndexMap<String, Vec<WordRecord>>,
}

fn default_next_id() -> u64 {
    1
}

impl Default for StoreData {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            next_id: default_next_id(),
            chapters: IndexMap::new(),
        }
    }
}

impl StoreData {
    /// Check if loaded data has a stale schema version and needs reset.
    pub fn needs_reset(&self) -> bool {
        self.schema_version != SCHEMA_VERSION
    }

    pub fn into_store(self) -> WordStore {
        WordStore::new(self.chapters, self.next_id)
    }

    pub fn from_store(store: &WordStore) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            next_id: store.next_id(),
            chapters: store.chapters().clone(),
        }
    }
}
