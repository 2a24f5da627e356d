use std::sync::OnceLock;

use regex::Regex;

pub fn valid_word_char(ch: char) -> bool {
    ch.is_alphabetic() || ch == '\'' || ch == '-'
}

fn word_pattern() -> &'static Regex {
    static WORD: OnceLock<Regex> = OnceLock::new();
    WORD.get_or_init(|| Regex::new(r"[A-Za-z][A-Za-z'\-]*").unwrap())
}

/// Candidate vocabulary words in a chunk of document text. Words start
/// with a letter, so digit runs never make it into the index.
pub fn extract_words(text: &str, min_len: usize) -> Vec<String> {
    word_pattern()
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .filter(|w| w.chars().count() >= min_len)
        .collect()
}

/// The partial word immediately left of the cursor, empty when the cursor
/// does not touch a word.
pub fn word_prefix(current_line: &str, character: usize) -> String {
    let line: Vec<char> = current_line.chars().collect();
    let upto = character.min(line.len());
    let start = line[..upto]
        .iter()
        .rposition(|&ch| !valid_word_char(ch))
        .map(|i| i + 1)
        .unwrap_or(0);
    line[start..upto].iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_prefix() {
        assert_eq!("piz", word_prefix("order a piz", 11));
        assert_eq!("piz", word_prefix("order a pizza", 11));
        assert_eq!("", word_prefix("order a ", 8));
        assert_eq!("don'", word_prefix("i don't", 6));
        assert_eq!("well-kn", word_prefix("a well-known", 9));
    }

    #[test]
    fn test_word_prefix_at_line_edges() {
        assert_eq!("dog", word_prefix("dog", 3));
        assert_eq!("", word_prefix("dog", 0));
        assert_eq!("", word_prefix("", 0));
        // cursor past the end clamps to the line
        assert_eq!("dog", word_prefix("dog", 40));
    }

    #[test]
    fn test_extract_words() {
        let words = extract_words("The quick brown fox, 42 foxes!", 2);
        assert_eq!(vec!["The", "quick", "brown", "fox", "foxes"], words);
    }

    #[test]
    fn test_extract_words_min_len() {
        let words = extract_words("a be sea", 3);
        assert_eq!(vec!["sea"], words);
    }

    #[test]
    fn test_extract_words_skips_digit_runs() {
        let words = extract_words("route 66 to x21", 1);
        assert_eq!(vec!["route", "to", "x"], words);
    }
}
