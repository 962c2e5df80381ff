//! Keyword filtering and publish-text rendering.

use crate::bogos::BogoItem;
use crate::matching::is_any_whole_word_in_text;

/// Keep only the items whose name matches one of the keywords as a whole
/// word, and render each survivor into a publish-ready line:
/// `"{name} is {label} {dates}"`, wrapped by the prefix/postfix when those
/// are non-empty. Input order is preserved.
pub fn filter_prettify_items(
    bogo_items: &[BogoItem],
    keywords: &[String],
    prefix: &str,
    postfix: &str,
) -> Vec<String> {
    let mut results = Vec::new();
    for item in bogo_items {
        if !is_any_whole_word_in_text(&item.name, keywords) {
            continue;
        }

        let mut text = format!(
            "{} is {} {}",
            item.name,
            item.kind.label(),
            item.effective_dates
        );
        if !prefix.is_empty() {
            text = format!("{} {}", prefix, text);
        }
        if !postfix.is_empty() {
            text = format!("{} {}", text, postfix);
        }
        results.push(text);
    }

    results
}
