//! Text matching helpers used by the classifier and the keyword filter.

/// Check whether any of `phrases` occurs in `text` as a case-insensitive
/// substring. An empty phrase list matches nothing.
pub fn is_any_in_text(text: &str, phrases: &[&str]) -> bool {
    let text = text.to_lowercase();
    phrases
        .iter()
        .any(|phrase| text.contains(&phrase.to_lowercase()))
}

/// Check whether any of `words` appears in `text` as a case-insensitive whole
/// word. Alphanumeric runs are treated as tokens, so a keyword only matches
/// when its occurrence is not embedded in a longer token ("ham" must not
/// match inside "shampoo"). An empty word list matches nothing.
pub fn is_any_whole_word_in_text<S: AsRef<str>>(text: &str, words: &[S]) -> bool {
    let text = text.to_lowercase();
    words
        .iter()
        .any(|word| contains_whole_word(&text, &word.as_ref().to_lowercase()))
}

/// Find `word` in `text` at a position where the characters on both sides are
/// not alphanumeric (or where the text begins/ends). Both inputs are expected
/// to be lowercased already.
fn contains_whole_word(text: &str, word: &str) -> bool {
    if word.is_empty() {
        return false;
    }

    let mut search_from = 0;
    while let Some(offset) = text[search_from..].find(word) {
        let begin = search_from + offset;
        let end = begin + word.len();

        let bounded_before = text[..begin]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let bounded_after = text[end..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());
        if bounded_before && bounded_after {
            return true;
        }

        // Step past the first matched character and keep scanning
        let step = text[begin..].chars().next().map_or(1, char::len_utf8);
        search_from = begin + step;
    }

    false
}
