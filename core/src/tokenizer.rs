use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

lazy_static! {
    static ref WORD_RE: Regex = Regex::new(r"\b\w+\b").expect("valid regex");
    static ref STOP_WORDS: HashSet<&'static str> = {
        let words: &[&str] = &[
            "the", "a", "an", "is", "are", "was", "were", "in", "on",
            "at", "to", "for", "of", "and", "or", "not", "it", "this",
        ];
        words.iter().copied().collect()
    };
}

pub fn is_stopword(token: &str) -> bool { STOP_WORDS.contains(token) }

/// Split text into word tokens (alphanumeric/underscore runs).
///
/// Stopwords are kept in the stream; the index filters them out later so a
/// document's token count still covers every word of its content.
pub fn tokenize(text: &str) -> Vec<String> {
    WORD_RE.find_iter(text).map(|m| m.as_str().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_tokenize() {
        let toks = tokenize("hello, cruel_world - again!");
        assert_eq!(toks, vec!["hello", "cruel_world", "again"]);
    }

    #[test]
    fn stopwords_stay_in_the_stream() {
        let toks = tokenize("the cat sat on the mat");
        assert_eq!(toks.len(), 6);
        assert!(is_stopword("the"));
        assert!(!is_stopword("cat"));
    }
}
