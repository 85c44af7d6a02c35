fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Estimate the syllables in an English word from its vowel groups.
///
/// A word with at least one letter has at least one syllable; a token with no
/// letters (a number, say) has none.
pub fn syllables(word: &str) -> usize {
    let letters: Vec<char> = word
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect();
    if letters.is_empty() {
        return 0;
    }

    let mut count = 0usize;
    let mut prev_vowel = false;
    for &c in &letters {
        let vowel = is_vowel(c);
        if vowel && !prev_vowel {
            count += 1;
        }
        prev_vowel = vowel;
    }

    let n = letters.len();
    if n > 2 && letters[n - 1] == 'e' {
        let before = letters[n - 2];
        let consonant_le = before == 'l' && !is_vowel(letters[n - 3]);
        if !consonant_le && !is_vowel(before) {
            count = count.saturating_sub(1);
        }
    } else if n > 3 && letters[n - 2] == 'e' && matches!(letters[n - 1], 's' | 'd') {
        let before = letters[n - 3];
        let voiced = match letters[n - 1] {
            'd' => matches!(before, 't' | 'd'),
            _ => matches!(before, 's' | 'x' | 'z' | 'c' | 'g' | 'h'),
        };
        if !voiced && !is_vowel(before) {
            count = count.saturating_sub(1);
        }
    }

    count.max(1)
}
