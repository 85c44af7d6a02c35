/// Lowercase `text` and drop ASCII punctuation.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_ascii_punctuation())
        .flat_map(char::to_lowercase)
        .collect()
}

/// True when every character of a non-empty token is alphabetic.
pub fn is_alpha_word(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphabetic)
}
