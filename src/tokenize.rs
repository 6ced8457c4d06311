//! Metadata-to-term normalization.
//!
//! One fixed tokenizer for the whole pipeline: term frequencies, document
//! frequencies, and query vectors all see the same token stream, so corpus
//! statistics stay comparable.

/// Tokens shorter than this are dropped ("a", "of", "AI"-style fragments).
pub const MIN_TOKEN_LEN: usize = 3;

/// Normalize raw text into index terms.
///
/// - lowercases the input
/// - maps every character that is not alphanumeric, `_`, or whitespace to a space
/// - splits on whitespace runs
/// - drops tokens shorter than [`MIN_TOKEN_LEN`] characters
///
/// "Alphanumeric" is deliberately Unicode-wide (`char::is_alphanumeric`), not
/// ASCII-only: accented names in article metadata stay intact as terms.
///
/// Order is preserved (it only affects frequency counting). Empty input yields
/// an empty vector; there are no failure modes.
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '_' || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    normalized
        .split_whitespace()
        .filter(|t| t.chars().count() >= MIN_TOKEN_LEN)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_strips_punctuation() {
        assert_eq!(
            tokenize("VIT's Latest AI-Research, 2025!"),
            vec!["vit", "latest", "research", "2025"]
        );
    }

    #[test]
    fn drops_short_tokens() {
        // "ai" and "of" are below the length floor; "lab" survives.
        assert_eq!(tokenize("AI lab of note"), vec!["lab", "note"]);
    }

    #[test]
    fn unicode_letters_are_word_characters() {
        assert_eq!(tokenize("Café Münster"), vec!["café", "münster"]);
    }

    #[test]
    fn keeps_underscores_as_word_characters() {
        assert_eq!(tokenize("snake_case stays"), vec!["snake_case", "stays"]);
    }

    #[test]
    fn empty_and_all_short_inputs_yield_nothing() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("a an it of 12 !!").is_empty());
    }

    #[test]
    fn idempotent_on_already_normalized_text() {
        let once = tokenize("campus festival clubs");
        let again = tokenize(&once.join(" "));
        assert_eq!(once, again);
    }

    #[test]
    fn order_is_preserved() {
        assert_eq!(
            tokenize("research breakthrough research"),
            vec!["research", "breakthrough", "research"]
        );
    }
}
