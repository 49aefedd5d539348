use std::time::{Duration, Instant};

use chrono::{Local, NaiveDate};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::config::Config;
use crate::engine::selector;
use crate::session::study::StudySession;
use crate::store::json_store::JsonStore;
use crate::store::word_store::WordStore;
use crate::ui::components::chapter_list::ChapterRow;
use crate::ui::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppScreen {
    ChapterList,
    Study,
    SessionResult,
}

pub struct App {
    pub screen: AppScreen,
    pub config: Config,
    pub theme: &'static Theme,
    pub words: WordStore,
    pub session: Option<StudySession>,
    pub store: Option<JsonStore>,
    pub should_quit: bool,
    pub chapter_selected: usize,
    pub confirm_delete: bool,
    conceal_until: Option<Instant>,
    rng: SmallRng,
}

impl App {
    pub fn new() -> Self {
        let config = Config::load().unwrap_or_default();
        let loaded_theme = Theme::load(&config.theme).unwrap_or_default();
        let theme: &'static Theme = Box::leak(Box::new(loaded_theme));

        let store = match config.data_dir() {
            Some(dir) => JsonStore::with_base_dir(dir).ok(),
            None => JsonStore::new().ok(),
        };
        let words = store
            .as_ref()
            .map(|s| s.load())
            .unwrap_or_default();

        Self {
            screen: AppScreen::ChapterList,
            config,
            theme,
            words,
            session: None,
            store,
            should_quit: false,
            chapter_selected: 0,
            confirm_delete: false,
            conceal_until: None,
            rng: SmallRng::from_entropy(),
        }
    }

    pub fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    /// Chapter names in display order: ascending by the numeric substring
    /// in the label, non-numeric labels first.
    pub fn sorted_chapter_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.words.chapter_names().map(String::from).collect();
        names.sort_by_key(|n| numeric_label_key(n));
        names
    }

    pub fn chapter_rows(&self, today: NaiveDate) -> Vec<ChapterRow> {
        self.sorted_chapter_names()
            .into_iter()
            .map(|name| {
                let words = self.words.words_of(&name).unwrap_or(&[]);
                let due_count = words
                    .iter()
                    .filter(|w| matches!(w.next_review, Some(d) if d <= today))
                    .count();
                ChapterRow {
                    word_count: words.len(),
                    due_count,
                    name,
                }
            })
            .collect()
    }

    pub fn due_total(&self, today: NaiveDate) -> usize {
        selector::due_words(&self.words, today).len()
    }

    fn selected_chapter_name(&self) -> Option<String> {
        self.sorted_chapter_names().get(self.chapter_selected).cloned()
    }

    pub fn chapter_select_next(&mut self) {
        let count = self.words.chapter_count();
        if count > 0 {
            self.chapter_selected = (self.chapter_selected + 1) % count;
        }
    }

    pub fn chapter_select_prev(&mut self) {
        let count = self.words.chapter_count();
        if count > 0 {
            self.chapter_selected = self.chapter_selected.checked_sub(1).unwrap_or(count - 1);
        }
    }

    pub fn start_chapter_study(&mut self) {
        let Some(name) = self.selected_chapter_name() else {
            return;
        };
        let items = self.words.words_of(&name).map(|w| w.to_vec()).unwrap_or_default();
        self.start_session(name, items);
    }

    pub fn start_due_review(&mut self) {
        let items = selector::due_words(&self.words, Self::today());
        if items.is_empty() {
            return;
        }
        let label = format!("Due today ({} words)", items.len());
        self.start_session(label, items);
    }

    pub fn start_weak_drill(&mut self) {
        let Some(name) = self.selected_chapter_name() else {
            return;
        };
        let items = self
            .words
            .words_of(&name)
            .map(selector::weak_words)
            .unwrap_or_default();
        if items.is_empty() {
            return;
        }
        self.start_session(format!("{name} — weak words"), items);
    }

    fn start_session(&mut self, label: String, items: Vec<crate::store::word_store::WordRecord>) {
        if items.is_empty() {
            return;
        }
        self.session = Some(StudySession::start(label, items, &mut self.rng));
        self.conceal_until = None;
        self.screen = AppScreen::Study;
    }

    pub fn flip_card(&mut self) {
        if self.card_concealed() {
            return;
        }
        if let Some(ref mut session) = self.session {
            session.flip();
        }
    }

    pub fn answer(&mut self, correct: bool) {
        if self.card_concealed() {
            return;
        }
        let Some(ref mut session) = self.session else {
            return;
        };
        session.answer(correct, &mut self.words, Self::today());
        let finished = session.finished;
        self.save_words();

        if finished {
            self.screen = AppScreen::SessionResult;
        } else {
            // Brief blank between cards so the reset flip state is visible
            self.conceal_until =
                Some(Instant::now() + Duration::from_millis(self.config.reveal_delay_ms));
        }
    }

    pub fn undo(&mut self) {
        let Some(ref mut session) = self.session else {
            return;
        };
        if session.position == 0 && !session.finished {
            return;
        }
        session.undo(&mut self.words);
        self.save_words();
        self.conceal_until = None;
        self.screen = AppScreen::Study;
    }

    pub fn retry_wrong(&mut self) {
        let Some(ref mut session) = self.session else {
            return;
        };
        if session.wrong.is_empty() {
            return;
        }
        session.retry_wrong(&mut self.rng);
        self.conceal_until = None;
        self.screen = AppScreen::Study;
    }

    pub fn abandon_session(&mut self) {
        self.session = None;
        self.conceal_until = None;
        self.screen = AppScreen::ChapterList;
    }

    pub fn delete_selected_chapter(&mut self) {
        if let Some(name) = self.selected_chapter_name() {
            self.words.delete_chapter(&name);
            self.save_words();
        }
        let count = self.words.chapter_count();
        if count == 0 {
            self.chapter_selected = 0;
        } else {
            self.chapter_selected = self.chapter_selected.min(count - 1);
        }
    }

    pub fn card_concealed(&self) -> bool {
        self.conceal_until.is_some_and(|t| Instant::now() < t)
    }

    fn save_words(&self) {
        // Fire-and-forget; a failed write never interrupts the session
        if let Some(ref store) = self.store {
            let _ = store.save(&self.words);
        }
    }
}

/// Sort key for chapter labels: the first run of digits, or 0 when absent.
/// "Chapter 2" sorts before "Chapter 10"; plain labels group at the front.
pub fn numeric_label_key(label: &str) -> u64 {
    let digits: String = label
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}
