use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::engine::scheduler;
use crate::store::word_store::{WordRecord, WordStore};

/// One ephemeral run through a shuffled list of words.
///
/// `items` is a frozen snapshot taken at session start; undo restores the
/// store from it. Everything shown to the user comes from the live store
/// instead, looked up by id, so levels and dates stay current.
pub struct StudySession {
    label: String,
    retry: bool,
    pub items: Vec<WordRecord>,
    pub position: usize,
    pub wrong: Vec<WordRecord>,
    pub flipped: bool,
    pub finished: bool,
}

impl StudySession {
    pub fn start(label: String, items: Vec<WordRecord>, rng: &mut impl Rng) -> Self {
        let mut items = items;
        items.shuffle(rng);
        Self {
            label,
            retry: false,
            items,
            position: 0,
            wrong: Vec::new(),
            flipped: false,
            finished: false,
        }
    }

    /// Session title, with a single "(retry)" marker on wrong-word reruns.
    pub fn display_label(&self) -> String {
        if self.retry {
            format!("{} (retry)", self.label)
        } else {
            self.label.clone()
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Frozen snapshot of the card under the cursor.
    pub fn current(&self) -> Option<&WordRecord> {
        self.items.get(self.position)
    }

    pub fn flip(&mut self) {
        self.flipped = !self.flipped;
    }

    /// Grade the current card and advance.
    ///
    /// An incorrect answer records the card in the wrong set (deduped by
    /// id). The scheduling update runs against the live store record; a
    /// word deleted mid-session is skipped, never a crash.
    pub fn answer(&mut self, correct: bool, store: &mut WordStore, today: NaiveDate) {
        if self.finished {
            return;
        }
        let Some(snapshot) = self.items.get(self.position).cloned() else {
            return;
        };

        if !correct && !self.wrong.iter().any(|w| w.id == snapshot.id) {
            self.wrong.push(snapshot.clone());
        }

        if let Some(live) = store.get(snapshot.id).cloned() {
            let updated = scheduler::apply_answer(&live, correct, today);
            store.update(updated);
        }

        if self.position + 1 < self.items.len() {
            self.flipped = false;
            self.position += 1;
        } else {
            self.finished = true;
        }
    }

    /// Revert the most recent answer and step back to that card.
    ///
    /// The store record is restored to the session-start snapshot, not
    /// merely re-leveled, and the card leaves the wrong set if it had just
    /// entered it. The cursor does not advance past the final card, so
    /// after the finishing answer the card to revert is the one under the
    /// cursor, not its predecessor. On the first card this is a no-op.
    pub fn undo(&mut self, store: &mut WordStore) {
        if self.finished {
            self.finished = false;
        } else if self.position > 0 {
            self.position -= 1;
        } else {
            return;
        }
        let snapshot = self.items[self.position].clone();
        self.wrong.retain(|w| w.id != snapshot.id);
        store.update(snapshot);
        self.flipped = false;
    }

    /// Restart over the wrong-word subset only.
    pub fn retry_wrong(&mut self, rng: &mut impl Rng) {
        let mut items = std::mem::take(&mut self.wrong);
        items.shuffle(rng);
        self.items = items;
        self.position = 0;
        self.flipped = false;
        self.finished = false;
        self.retry = true;
    }
}
