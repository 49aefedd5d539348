use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::import::ParsedWord;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WordRecord {
    pub id: u64,
    pub term: String,
    pub translation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>,
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub next_review: Option<NaiveDate>,
    #[serde(default)]
    pub last_reviewed: Option<NaiveDate>,
}

/// The word collection: a name-keyed, insertion-ordered map of chapters.
///
/// All persistent mutable state lives here; the scheduler produces updated
/// records and `update` is the single write path for them. Ids are assigned
/// from a persisted counter so they are never reused, even after deletions.
#[derive(Clone, Debug)]
pub struct WordStore {
    chapters: IndexMap<String, Vec<WordRecord>>,
    next_id: u64,
}

impl Default for WordStore {
    fn default() -> Self {
        Self {
            chapters: IndexMap::new(),
            next_id: 1,
        }
    }
}

impl WordStore {
    pub fn new(chapters: IndexMap<String, Vec<WordRecord>>, next_id: u64) -> Self {
        let max_id = chapters
            .values()
            .flatten()
            .map(|w| w.id)
            .max()
            .unwrap_or(0);
        Self {
            chapters,
            next_id: next_id.max(max_id + 1),
        }
    }

    /// Import parsed words as a new chapter with fresh ids and zeroed
    /// scheduling state. A chapter with the same name is replaced.
    pub fn add_chapter(&mut self, name: String, words: Vec<ParsedWord>) -> usize {
        let records: Vec<WordRecord> = words
            .into_iter()
            .map(|w| {
                let id = self.next_id;
                self.next_id += 1;
                WordRecord {
                    id,
                    term: w.term,
                    translation: w.translation,
                    pronunciation: w.pronunciation,
                    level: 0,
                    next_review: None,
                    last_reviewed: None,
                }
            })
            .collect();
        let count = records.len();
        self.chapters.insert(name, records);
        count
    }

    /// Insert pre-built records, replacing any chapter with the same name.
    /// The id counter is bumped past the highest inserted id.
    pub fn insert_chapter(&mut self, name: String, words: Vec<WordRecord>) {
        let max_id = words.iter().map(|w| w.id).max().unwrap_or(0);
        self.next_id = self.next_id.max(max_id + 1);
        self.chapters.insert(name, words);
    }

    pub fn delete_chapter(&mut self, name: &str) -> bool {
        self.chapters.shift_remove(name).is_some()
    }

    pub fn get(&self, id: u64) -> Option<&WordRecord> {
        self.all_words().find(|w| w.id == id)
    }

    /// Replace the stored record with the same id. Returns false if the id
    /// is no longer in the store (e.g. its chapter was deleted mid-session).
    pub fn update(&mut self, record: WordRecord) -> bool {
        for words in self.chapters.values_mut() {
            if let Some(slot) = words.iter_mut().find(|w| w.id == record.id) {
                *slot = record;
                return true;
            }
        }
        false
    }

    pub fn chapter_names(&self) -> impl Iterator<Item = &str> {
        self.chapters.keys().map(String::as_str)
    }

    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }

    pub fn words_of(&self, name: &str) -> Option<&[WordRecord]> {
        self.chapters.get(name).map(Vec::as_slice)
    }

    pub fn all_words(&self) -> impl Iterator<Item = &WordRecord> {
        self.chapters.values().flatten()
    }

    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    pub fn chapters(&self) -> &IndexMap<String, Vec<WordRecord>> {
        &self.chapters
    }

    pub fn next_id(&self) -> u64 {
        self.next_id
    }
}
