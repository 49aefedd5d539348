use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;

use crate::store::schema::StoreData;
use crate::store::word_store::WordStore;

pub struct JsonStore {
    base_dir: PathBuf,
}

impl JsonStore {
    pub fn new() -> Result<Self> {
        let base_dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("vocadr");
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    pub fn with_base_dir(base_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    fn file_path(&self) -> PathBuf {
        self.base_dir.join("chapters.json")
    }

    /// Load the word collection. Absent, unparseable, or stale-schema files
    /// all yield an empty store; a flashcard collection is not worth
    /// refusing to start over.
    pub fn load(&self) -> WordStore {
        let path = self.file_path();
        if !path.exists() {
            return WordStore::default();
        }
        let data: StoreData = fs::read_to_string(&path)
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default();
        if data.needs_reset() {
            return WordStore::default();
        }
        data.into_store()
    }

    /// Atomic save: write to a .tmp sibling, fsync, rename over the target.
    pub fn save(&self, store: &WordStore) -> Result<()> {
        let path = self.file_path();
        let tmp_path = path.with_extension("tmp");

        let json = serde_json::to_string_pretty(&StoreData::from_store(store))?;
        let mut file = fs::File::create(&tmp_path)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;

        fs::rename(&tmp_path, &path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::import::ParsedWord;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn make_test_store() -> (TempDir, JsonStore) {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::with_base_dir(dir.path().to_path_buf()).unwrap();
        (dir, store)
    }

    fn sample_words() -> Vec<ParsedWord> {
        vec![
            ParsedWord {
                term: "cat".to_string(),
                translation: "chat".to_string(),
                pronunciation: Some("ka".to_string()),
            },
            ParsedWord {
                term: "dog".to_string(),
                translation: "chien".to_string(),
                pronunciation: None,
            },
        ]
    }

    #[test]
    fn test_load_missing_file_yields_empty_store() {
        let (_dir, store) = make_test_store();
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_save_load_round_trip() {
        let (_dir, json_store) = make_test_store();

        let mut words = WordStore::default();
        words.add_chapter("Chapter 1".to_string(), sample_words());
        let mut updated = words.words_of("Chapter 1").unwrap()[0].clone();
        updated.level = 3;
        updated.next_review = NaiveDate::from_ymd_opt(2026, 4, 1);
        updated.last_reviewed = NaiveDate::from_ymd_opt(2026, 3, 25);
        words.update(updated.clone());

        json_store.save(&words).unwrap();
        let loaded = json_store.load();

        assert_eq!(loaded.chapter_count(), 1);
        assert_eq!(loaded.get(updated.id), Some(&updated));
        assert_eq!(loaded.next_id(), words.next_id());
        let dog = &loaded.words_of("Chapter 1").unwrap()[1];
        assert_eq!(dog.term, "dog");
        assert_eq!(dog.pronunciation, None);
    }

    #[test]
    fn test_load_corrupt_file_yields_empty_store() {
        let (dir, json_store) = make_test_store();
        fs::write(dir.path().join("chapters.json"), "{ not json").unwrap();
        assert!(json_store.load().is_empty());
    }

    #[test]
    fn test_load_stale_schema_resets() {
        let (dir, json_store) = make_test_store();
        fs::write(
            dir.path().join("chapters.json"),
            r#"{"schema_version": 99, "next_id": 5, "chapters": {}}"#,
        )
        .unwrap();
        assert!(json_store.load().is_empty());
    }

    #[test]
    fn test_save_leaves_no_tmp_file() {
        let (dir, json_store) = make_test_store();
        json_store.save(&WordStore::default()).unwrap();
        assert!(dir.path().join("chapters.json").exists());
        assert!(!dir.path().join("chapters.tmp").exists());
    }
}
