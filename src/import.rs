use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedWord {
    pub term: String,
    pub translation: String,
    pub pronunciation: Option<String>,
}

/// Parse a pipe-delimited word list.
///
/// One word per line, `term|translation`. The translation keeps any further
/// `|` verbatim. A trailing `[...]` on the term is split off as the
/// pronunciation. Blank lines and lines without a separator are skipped;
/// partial success is normal.
pub fn parse_word_list(text: &str) -> Vec<ParsedWord> {
    text.lines()
        .filter_map(|line| {
            if line.trim().is_empty() {
                return None;
            }
            let (term, translation) = line.split_once('|')?;
            let (term, pronunciation) = split_pronunciation(term.trim());
            Some(ParsedWord {
                term,
                translation: translation.trim().to_string(),
                pronunciation,
            })
        })
        .collect()
}

/// Split a trailing bracketed suffix, e.g. `猫[ねこ]` -> (`猫`, `ねこ`).
fn split_pronunciation(term: &str) -> (String, Option<String>) {
    if let Some(stripped) = term.strip_suffix(']') {
        if let Some((head, pron)) = stripped.rsplit_once('[') {
            let head = head.trim();
            if !head.is_empty() {
                return (head.to_string(), Some(pron.to_string()));
            }
        }
    }
    (term.to_string(), None)
}

pub fn read_word_list(path: &Path) -> Result<Vec<ParsedWord>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read word list {}", path.display()))?;
    Ok(parse_word_list(&text))
}

/// Default label for the next imported chapter: "Chapter N".
pub fn default_chapter_label(existing_chapters: usize) -> String {
    format!("Chapter {}", existing_chapters + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_lines() {
        let words = parse_word_list("cat|chat\ndog|chien\n");
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].term, "cat");
        assert_eq!(words[0].translation, "chat");
        assert_eq!(words[0].pronunciation, None);
    }

    #[test]
    fn test_blank_and_separator_less_lines_skipped() {
        let words = parse_word_list("cat|chat\n\n   \nno separator here\ndog|chien\n");
        let terms: Vec<&str> = words.iter().map(|w| w.term.as_str()).collect();
        assert_eq!(terms, vec!["cat", "dog"]);
    }

    #[test]
    fn test_translation_keeps_extra_pipes() {
        let words = parse_word_list("run|courir|to move fast");
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].translation, "courir|to move fast");
    }

    #[test]
    fn test_pronunciation_bracket_extracted() {
        let words = parse_word_list("猫[ねこ]|cat");
        assert_eq!(words[0].term, "猫");
        assert_eq!(words[0].pronunciation, Some("ねこ".to_string()));
    }

    #[test]
    fn test_bracket_only_term_kept_verbatim() {
        // No head before the bracket: nothing sensible to strip.
        let words = parse_word_list("[abc]|cat");
        assert_eq!(words[0].term, "[abc]");
        assert_eq!(words[0].pronunciation, None);
    }

    #[test]
    fn test_fields_are_trimmed() {
        let words = parse_word_list("  cat  |  chat  ");
        assert_eq!(words[0].term, "cat");
        assert_eq!(words[0].translation, "chat");
    }

    #[test]
    fn test_empty_input_is_empty() {
        assert!(parse_word_list("").is_empty());
    }

    #[test]
    fn test_default_chapter_label() {
        assert_eq!(default_chapter_label(0), "Chapter 1");
        assert_eq!(default_chapter_label(3), "Chapter 4");
    }
}
