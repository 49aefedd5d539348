use chrono::NaiveDate;

use crate::store::word_store::{WordRecord, WordStore};

/// All words across the store that are due on or before `today`.
///
/// Never-studied words (`next_review == None`) are excluded. Order is
/// chapter order then within-chapter order, not urgency.
pub fn due_words(store: &WordStore, today: NaiveDate) -> Vec<WordRecord> {
    store
        .all_words()
        .filter(|w| matches!(w.next_review, Some(d) if d <= today))
        .cloned()
        .collect()
}

/// Words trailing the chapter's current best level.
///
/// Weakness is relative to the chapter, not an absolute cutoff: in a
/// brand-new chapter (max level 0) every word counts as weak, otherwise
/// only words strictly below the max.
pub fn weak_words(words: &[WordRecord]) -> Vec<WordRecord> {
    let max_level = words.iter().map(|w| w.level).max().unwrap_or(0);
    let threshold = if max_level == 0 { 1 } else { max_level };
    words
        .iter()
        .filter(|w| w.level < threshold)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn word(id: u64, level: u32, next_review: Option<NaiveDate>) -> WordRecord {
        WordRecord {
            id,
            term: format!("term{id}"),
            translation: format!("trans{id}"),
            pronunciation: None,
            level,
            next_review,
            last_reviewed: None,
        }
    }

    #[test]
    fn test_due_excludes_unstudied_and_future() {
        let today = date(2026, 3, 10);
        let mut store = WordStore::default();
        store.insert_chapter(
            "Chapter 1".to_string(),
            vec![
                word(1, 1, Some(date(2026, 3, 9))),
                word(2, 0, None),
                word(3, 2, Some(date(2026, 3, 11))),
                word(4, 1, Some(today)),
            ],
        );

        let due: Vec<u64> = due_words(&store, today).iter().map(|w| w.id).collect();
        assert_eq!(due, vec![1, 4]);
    }

    #[test]
    fn test_due_spans_chapters_in_store_order() {
        let today = date(2026, 3, 10);
        let mut store = WordStore::default();
        store.insert_chapter("Chapter 2".to_string(), vec![word(5, 1, Some(today))]);
        store.insert_chapter("Chapter 1".to_string(), vec![word(6, 1, Some(today))]);

        let due: Vec<u64> = due_words(&store, today).iter().map(|w| w.id).collect();
        assert_eq!(due, vec![5, 6]);
    }

    #[test]
    fn test_due_empty_store_is_empty() {
        let store = WordStore::default();
        assert!(due_words(&store, date(2026, 3, 10)).is_empty());
    }

    #[test]
    fn test_weak_all_new_chapter_returns_everything() {
        let words = vec![word(1, 0, None), word(2, 0, None), word(3, 0, None)];
        assert_eq!(weak_words(&words).len(), 3);
    }

    #[test]
    fn test_weak_trailing_words_only() {
        let words = vec![
            word(1, 0, None),
            word(2, 0, None),
            word(3, 3, None),
            word(4, 3, None),
        ];
        let weak: Vec<u64> = weak_words(&words).iter().map(|w| w.id).collect();
        assert_eq!(weak, vec![1, 2]);
    }

    #[test]
    fn test_weak_excludes_words_at_max() {
        let words = vec![word(1, 2, None), word(2, 5, None), word(3, 4, None)];
        let weak: Vec<u64> = weak_words(&words).iter().map(|w| w.id).collect();
        assert_eq!(weak, vec![1, 3]);
    }

    #[test]
    fn test_weak_empty_slice_is_empty() {
        assert!(weak_words(&[]).is_empty());
    }
}
