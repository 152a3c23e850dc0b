//! Match scoring between a query and a record's searchable text.
//!
//! Bonuses are additive: a record that equals the query also starts with it
//! and contains it, so an exact match scores at least 175 before word bonuses.

use std::collections::HashMap;

/// Text equals the query.
pub const EXACT_MATCH_BONUS: u32 = 100;

/// Text starts with the query.
pub const PREFIX_MATCH_BONUS: u32 = 50;

/// Text contains the query anywhere.
pub const SUBSTRING_MATCH_BONUS: u32 = 25;

/// A query word equals a text word.
pub const WORD_MATCH_BONUS: u32 = 15;

/// A text word contains a query word without equalling it.
pub const PARTIAL_WORD_MATCH_BONUS: u32 = 5;

/// Score `query` against `text`.
///
/// Both sides are lowercased and trimmed. Returns 0 when nothing matches or
/// when either side is blank. The score saturates at `u32::MAX`.
///
/// # Example
///
/// ```
/// use care_portal_search::search::calculate_match_score;
///
/// // prefix (50) + substring (25) + word "jane" (15)
/// assert_eq!(calculate_match_score("Jane Doe", "jane"), 90);
/// assert_eq!(calculate_match_score("Jane Doe", "xyz"), 0);
/// ```
pub fn calculate_match_score(text: &str, query: &str) -> u32 {
    let text = text.trim().to_lowercase();
    let query = query.trim().to_lowercase();

    if query.is_empty() || text.is_empty() {
        return 0;
    }

    let mut score: u32 = 0;

    if text == query {
        score = score.saturating_add(EXACT_MATCH_BONUS);
    }
    if text.starts_with(&query) {
        score = score.saturating_add(PREFIX_MATCH_BONUS);
    }
    if text.contains(&query) {
        score = score.saturating_add(SUBSTRING_MATCH_BONUS);
    }

    // Each occurrence of a text word scores, so equal words are counted
    let mut text_words: HashMap<&str, u32> = HashMap::new();
    for word in text.split_whitespace() {
        let count = text_words.entry(word).or_insert(0);
        *count = count.saturating_add(1);
    }

    for query_word in query.split_whitespace() {
        for (text_word, &count) in &text_words {
            let bonus = if *text_word == query_word {
                WORD_MATCH_BONUS
            } else if text_word.contains(query_word) {
                PARTIAL_WORD_MATCH_BONUS
            } else {
                continue;
            };
            score = score.saturating_add(bonus.saturating_mul(count));
        }
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_stacks_all_bonuses() {
        // exact + prefix + substring + two word matches
        assert_eq!(calculate_match_score("Jane Doe", "jane doe"), 205);
    }

    #[test]
    fn test_prefix_match() {
        assert_eq!(calculate_match_score("Jane Doe", "jane"), 90);
    }

    #[test]
    fn test_substring_with_word_match() {
        assert_eq!(calculate_match_score("Jane Doe", "doe"), 40);
    }

    #[test]
    fn test_partial_word_match() {
        // substring + "jane" contains "an"
        assert_eq!(calculate_match_score("Jane Doe", "an"), 30);
    }

    #[test]
    fn test_word_match_without_substring() {
        // "jane smith" is not a substring, only the "jane" word pair scores
        assert_eq!(calculate_match_score("Jane Doe", "jane smith"), 15);
    }

    #[test]
    fn test_repeated_text_words_each_score() {
        assert_eq!(calculate_match_score("test test", "test"), 50 + 25 + 15 + 15);
    }

    #[test]
    fn test_case_and_whitespace_insensitive() {
        assert_eq!(
            calculate_match_score("  BLOOD Test  ", "  blood "),
            calculate_match_score("blood test", "blood")
        );
    }

    #[test]
    fn test_no_match() {
        assert_eq!(calculate_match_score("Jane Doe", "xyz"), 0);
    }

    #[test]
    fn test_blank_inputs_score_zero() {
        assert_eq!(calculate_match_score("Jane Doe", ""), 0);
        assert_eq!(calculate_match_score("Jane Doe", "   "), 0);
        assert_eq!(calculate_match_score("", "jane"), 0);
    }

    #[test]
    fn test_internal_spacing_is_significant_for_exact_match() {
        // Text assembled with an empty middle field keeps a double space
        assert_eq!(calculate_match_score("jane  doe", "jane doe"), 15 + 15);
    }

    #[test]
    fn test_long_inputs_saturate() {
        let text = "a ".repeat(17_000);
        assert_eq!(calculate_match_score(&text, &text), u32::MAX);
    }
}
