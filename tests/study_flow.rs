//! End-to-end flow over import, scheduling, selection, sessions, and
//! persistence, using a temp data directory.

use chrono::{Duration, NaiveDate};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tempfile::TempDir;

use vocadr::engine::{scheduler, selector};
use vocadr::import;
use vocadr::session::study::StudySession;
use vocadr::store::json_store::JsonStore;
use vocadr::store::word_store::WordStore;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn seeded_store() -> WordStore {
    let mut store = WordStore::default();
    let words = import::parse_word_list(
        "apple|pomme\nhouse[haus]|maison\nrun|courir|to move fast\n\nbroken line\n",
    );
    store.add_chapter("Chapter 1".to_string(), words);
    store
}

#[test]
fn import_builds_fresh_records() {
    let store = seeded_store();
    let words = store.words_of("Chapter 1").unwrap();

    assert_eq!(words.len(), 3);
    assert_eq!(words[1].term, "house");
    assert_eq!(words[1].pronunciation.as_deref(), Some("haus"));
    assert_eq!(words[2].translation, "courir|to move fast");
    assert!(words.iter().all(|w| w.level == 0 && w.next_review.is_none()));
}

#[test]
fn study_day_then_review_day() {
    let mut store = seeded_store();
    let day1 = date(2026, 3, 10);

    // Day 1: study the whole chapter, miss one word.
    let items = store.words_of("Chapter 1").unwrap().to_vec();
    let mut rng = SmallRng::seed_from_u64(42);
    let mut session = StudySession::start("Chapter 1".to_string(), items, &mut rng);

    session.answer(true, &mut store, day1);
    session.answer(false, &mut store, day1);
    session.answer(true, &mut store, day1);
    assert!(session.finished);
    assert_eq!(session.wrong.len(), 1);

    // Nothing is due on day 1 itself.
    assert!(selector::due_words(&store, day1).is_empty());

    // Level 0 words come back after one day whether passed or failed,
    // but only the passed ones reached level 1.
    let day2 = day1 + Duration::days(1);
    let due = selector::due_words(&store, day2);
    assert_eq!(due.len(), 3);
    let missed_id = session.wrong[0].id;
    assert_eq!(store.get(missed_id).unwrap().level, 0);

    // Day 2: everything answered correctly. The level 1 words jump three
    // days ahead, the recovered word only one.
    for word in due {
        let live = store.get(word.id).unwrap().clone();
        store.update(scheduler::apply_answer(&live, true, day2));
    }

    let day3 = day2 + Duration::days(1);
    let due: Vec<u64> = selector::due_words(&store, day3).iter().map(|w| w.id).collect();
    assert_eq!(due, vec![missed_id]);

    let day5 = day2 + Duration::days(3);
    assert_eq!(selector::due_words(&store, day5).len(), 3);
}

#[test]
fn same_day_redrill_cannot_double_level() {
    let mut store = seeded_store();
    let today = date(2026, 3, 10);

    let items = store.words_of("Chapter 1").unwrap().to_vec();
    let mut rng = SmallRng::seed_from_u64(4);
    let mut session = StudySession::start("Chapter 1".to_string(), items.clone(), &mut rng);
    session.answer(true, &mut store, today);
    session.answer(true, &mut store, today);
    session.answer(true, &mut store, today);

    // A second full pass the same day leaves every word at level 1.
    let mut session = StudySession::start("Chapter 1".to_string(), items, &mut rng);
    session.answer(true, &mut store, today);
    session.answer(true, &mut store, today);
    session.answer(true, &mut store, today);

    assert!(store.all_words().all(|w| w.level == 1));
}

#[test]
fn weak_words_track_the_chapter_leader() {
    let mut store = seeded_store();
    let today = date(2026, 3, 10);

    // Everything is new, so the whole chapter counts as weak.
    let chapter = store.words_of("Chapter 1").unwrap().to_vec();
    assert_eq!(selector::weak_words(&chapter).len(), 3);

    // Push one word ahead over three days.
    let leader_id = chapter[0].id;
    let mut day = today;
    for _ in 0..3 {
        let leader = store.get(leader_id).unwrap().clone();
        store.update(scheduler::apply_answer(&leader, true, day));
        day += Duration::days(1);
    }

    let chapter = store.words_of("Chapter 1").unwrap();
    let weak = selector::weak_words(chapter);
    assert_eq!(weak.len(), 2);
    assert!(weak.iter().all(|w| w.id != leader_id));
}

#[test]
fn undo_survives_persistence_round_trip() {
    let dir = TempDir::new().unwrap();
    let json_store = JsonStore::with_base_dir(dir.path().to_path_buf()).unwrap();

    let mut store = seeded_store();
    let today = date(2026, 3, 10);

    let items = store.words_of("Chapter 1").unwrap().to_vec();
    let mut rng = SmallRng::seed_from_u64(8);
    let mut session = StudySession::start("Chapter 1".to_string(), items, &mut rng);

    let first = session.current().unwrap().clone();
    session.answer(false, &mut store, today);
    json_store.save(&store).unwrap();

    session.undo(&mut store);
    json_store.save(&store).unwrap();

    let reloaded = json_store.load();
    assert_eq!(reloaded.get(first.id), Some(&first));
}

#[test]
fn retry_loop_narrows_to_missed_words() {
    let mut store = seeded_store();
    let today = date(2026, 3, 10);

    let items = store.words_of("Chapter 1").unwrap().to_vec();
    let mut rng = SmallRng::seed_from_u64(13);
    let mut session = StudySession::start("Chapter 1".to_string(), items, &mut rng);

    session.answer(false, &mut store, today);
    session.answer(false, &mut store, today);
    session.answer(true, &mut store, today);

    session.retry_wrong(&mut rng);
    assert_eq!(session.display_label(), "Chapter 1 (retry)");
    assert_eq!(session.len(), 2);

    session.answer(true, &mut store, today);
    session.answer(false, &mut store, today);
    assert!(session.finished);
    assert_eq!(session.wrong.len(), 1);

    session.retry_wrong(&mut rng);
    assert_eq!(session.display_label(), "Chapter 1 (retry)");
    assert_eq!(session.len(), 1);
}
