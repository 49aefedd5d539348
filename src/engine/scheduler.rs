use chrono::{Duration, NaiveDate};

use crate::store::word_store::WordRecord;

/// Review intervals in days, indexed by the word's level before the update.
pub const INTERVALS: [i64; 6] = [1, 3, 7, 14, 30, 60];

pub fn interval_days(level: u32) -> i64 {
    INTERVALS.get(level as usize).copied().unwrap_or(60)
}

/// Compute a word's next level and review date from a pass/fail answer.
///
/// Result-producing: the input record is never mutated, so the store stays
/// the single mutation authority. A correct answer on a word already
/// reviewed today is a no-op (a word cannot level up twice in one calendar
/// day), but an incorrect answer always resets the level, even after a
/// same-day success.
pub fn apply_answer(word: &WordRecord, correct: bool, today: NaiveDate) -> WordRecord {
    if correct && word.last_reviewed == Some(today) {
        return word.clone();
    }

    let mut updated = word.clone();
    if correct {
        updated.next_review = Some(today + Duration::days(interval_days(word.level)));
        updated.level = word.level + 1;
    } else {
        updated.level = 0;
        updated.next_review = Some(today + Duration::days(1));
    }
    updated.last_reviewed = Some(today);
    updated
}
