use crate::matching::{is_any_in_text, is_any_whole_word_in_text};

#[test]
fn test_substring_match_is_case_insensitive() {
    assert!(is_any_in_text("BUY 1 GET 1 FREE this week", &["buy 1 get 1 free"]));
    assert!(is_any_in_text("buy one get one free", &["Buy One Get One Free"]));
}

#[test]
fn test_substring_match_any_of_several_phrases() {
    let phrases = ["alpha", "beta"];
    assert!(is_any_in_text("contains beta somewhere", &phrases));
    assert!(!is_any_in_text("contains gamma only", &phrases));
}

#[test]
fn test_empty_phrase_set_matches_nothing() {
    assert!(!is_any_in_text("any text at all", &[]));
    assert!(!is_any_whole_word_in_text::<&str>("any text at all", &[]));
}

#[test]
fn test_whole_word_does_not_match_inside_longer_token() {
    assert!(!is_any_whole_word_in_text("shampoo deal", &["ham"]));
    assert!(!is_any_whole_word_in_text("hammer time", &["ham"]));
}

#[test]
fn test_whole_word_matches_standalone_token() {
    assert!(is_any_whole_word_in_text("ham special", &["ham"]));
    assert!(is_any_whole_word_in_text("Smoked Ham", &["ham"]));
    assert!(is_any_whole_word_in_text("ham", &["ham"]));
    assert!(is_any_whole_word_in_text("deal: ham, sliced", &["ham"]));
}

#[test]
fn test_whole_word_later_occurrence_still_found() {
    // First occurrence is embedded, second is a standalone token
    assert!(is_any_whole_word_in_text("shampoo and ham", &["ham"]));
}

#[test]
fn test_whole_word_multi_word_keyword() {
    assert!(is_any_whole_word_in_text("Premium Ice Cream Tub", &["ice cream"]));
    assert!(!is_any_whole_word_in_text("Premium Ice Creamery Tub", &["ice cream"]));
}

#[test]
fn test_whole_word_digit_boundary() {
    // Digits are part of a token, so "ham" embedded against a digit is not a word
    assert!(!is_any_whole_word_in_text("ham5 pack", &["ham"]));
}
