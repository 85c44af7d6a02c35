use std::collections::HashMap;
use std::sync::LazyLock;

const IRREGULAR: &[(&str, &str)] = &[
    ("am", "be"), ("is", "be"), ("are", "be"), ("was", "be"), ("were", "be"), ("been", "be"),
    ("being", "be"), ("has", "have"), ("had", "have"), ("having", "have"), ("does", "do"),
    ("did", "do"), ("done", "do"), ("went", "go"), ("gone", "go"), ("goes", "go"),
    ("made", "make"), ("said", "say"), ("came", "come"), ("found", "find"),
    ("thought", "think"), ("brought", "bring"), ("bought", "buy"), ("felt", "feel"),
    ("left", "leave"), ("kept", "keep"), ("knew", "know"), ("known", "know"),
    ("wrote", "write"), ("written", "write"), ("spoke", "speak"), ("spoken", "speak"),
    ("began", "begin"), ("begun", "begin"), ("took", "take"), ("taken", "take"),
    ("gave", "give"), ("given", "give"), ("saw", "see"), ("seen", "see"), ("ran", "run"),
    ("got", "get"), ("told", "tell"), ("stood", "stand"), ("held", "hold"), ("sat", "sit"),
    ("met", "meet"), ("paid", "pay"), ("sent", "send"), ("built", "build"), ("lost", "lose"),
    ("meant", "mean"), ("taught", "teach"), ("caught", "catch"), ("fought", "fight"),
    ("sought", "seek"), ("became", "become"), ("ate", "eat"), ("eaten", "eat"),
    ("drove", "drive"), ("driven", "drive"), ("chose", "choose"), ("chosen", "choose"),
    ("using", "use"), ("used", "use"), ("uses", "use"), ("men", "man"), ("women", "woman"),
    ("children", "child"), ("mice", "mouse"), ("feet", "foot"), ("teeth", "tooth"),
    ("geese", "goose"), ("people", "person"), ("lives", "life"), ("wives", "wife"),
    ("knives", "knife"), ("leaves", "leaf"), ("wolves", "wolf"), ("halves", "half"),
    ("selves", "self"), ("data", "datum"), ("criteria", "criterion"), ("analyses", "analysis"),
    ("better", "good"), ("best", "good"), ("worse", "bad"), ("worst", "bad"),
];

/// Words whose suffix looks inflectional but is not.
const INVARIANT: &[&str] = &[
    "hundred", "sacred", "naked", "wicked", "kindred", "thing", "nothing", "something",
    "anything", "everything", "morning", "evening", "king", "ring", "sing", "spring", "string",
    "during", "ceiling", "news", "series", "species", "always", "perhaps", "towards", "afterwards",
    "mathematics", "physics", "ethics", "politics", "economics", "lens", "bus", "gas", "yes",
    "this", "thus", "was", "has", "his", "its",
];

static IRREGULAR_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| IRREGULAR.iter().copied().collect());

fn is_vowel(c: u8) -> bool {
    matches!(c, b'a' | b'e' | b'i' | b'o' | b'u')
}

/// Rule-based English lemmatizer.
///
/// Irregular forms come from a table; regular plurals and `-ing`/`-ed` verb
/// forms are stripped by suffix rules. Input is lowercased first. Words shorter
/// than four letters come back unchanged apart from case.
pub fn lemmatize(word: &str) -> String {
    let lower = word.to_lowercase();
    if let Some(base) = IRREGULAR_MAP.get(lower.as_str()) {
        return (*base).to_string();
    }
    if lower.chars().count() < 4 || !lower.is_ascii() || INVARIANT.contains(&lower.as_str()) {
        return lower;
    }
    strip_suffix(&lower).unwrap_or(lower)
}

fn strip_suffix(word: &str) -> Option<String> {
    if let Some(stem) = word.strip_suffix("ies")
        && stem.len() >= 2
    {
        return Some(format!("{stem}y"));
    }
    if let Some(stem) = word.strip_suffix("ied")
        && stem.len() >= 2
    {
        return Some(format!("{stem}y"));
    }
    if let Some(stem) = word.strip_suffix("sses") {
        return Some(format!("{stem}ss"));
    }
    for suffix in ["xes", "ches", "shes", "zes"] {
        if let Some(stem) = word.strip_suffix(suffix) {
            return Some(format!("{stem}{}", &suffix[..suffix.len() - 2]));
        }
    }
    if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
        return None;
    }
    if let Some(stem) = word.strip_suffix('s') {
        return Some(stem.to_string());
    }
    if let Some(stem) = word.strip_suffix("ing") {
        return verb_stem(stem);
    }
    if !word.ends_with("eed")
        && let Some(stem) = word.strip_suffix("ed")
    {
        return verb_stem(stem);
    }
    None
}

/// Repair a stem left by removing `-ing` or `-ed`: undouble a final consonant
/// after a single short vowel (`runn` -> `run`, but `add` stays) and restore a
/// silent `e` on short consonant-vowel-consonant stems (`mak` -> `make`).
fn verb_stem(stem: &str) -> Option<String> {
    let bytes = stem.as_bytes();
    if bytes.len() < 3 || !bytes.iter().copied().any(is_vowel) {
        return None;
    }
    let n = bytes.len();
    let last = bytes[n - 1];
    let doubled = n >= 4
        && last == bytes[n - 2]
        && !is_vowel(last)
        && !matches!(last, b'f' | b'l' | b's' | b'z')
        && is_vowel(bytes[n - 3])
        && !is_vowel(bytes[n - 4]);
    if doubled {
        return Some(stem[..n - 1].to_string());
    }
    let cvc = n == 3
        && !is_vowel(bytes[0])
        && is_vowel(bytes[1])
        && !is_vowel(last)
        && !matches!(last, b'w' | b'x' | b'y');
    if cvc {
        return Some(format!("{stem}e"));
    }
    Some(stem.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regular_plurals_are_singularized() {
        for (word, lemma) in [
            ("dogs", "dog"),
            ("studies", "study"),
            ("classes", "class"),
            ("boxes", "box"),
            ("churches", "church"),
            ("status", "status"),
            ("analysis", "analysis"),
        ] {
            assert_eq!(lemmatize(word), lemma, "{word}");
        }
    }

    #[test]
    fn verb_forms_are_reduced() {
        for (word, lemma) in [
            ("running", "run"),
            ("walking", "walk"),
            ("making", "make"),
            ("stopped", "stop"),
            ("baked", "bake"),
            ("tried", "try"),
            ("falling", "fall"),
            ("reading", "read"),
        ] {
            assert_eq!(lemmatize(word), lemma, "{word}");
        }
    }

    #[test]
    fn genuine_double_consonants_survive() {
        for (word, lemma) in [
            ("added", "add"),
            ("adding", "add"),
            ("nodded", "nod"),
            ("stopped", "stop"),
            ("sniffed", "sniff"),
            ("embedded", "embed"),
        ] {
            assert_eq!(lemmatize(word), lemma, "{word}");
        }
    }

    #[test]
    fn irregular_forms_use_the_table() {
        assert_eq!(lemmatize("Children"), "child");
        assert_eq!(lemmatize("went"), "go");
        assert_eq!(lemmatize("better"), "good");
    }

    #[test]
    fn short_and_invariant_words_are_unchanged() {
        assert_eq!(lemmatize("Cat"), "cat");
        assert_eq!(lemmatize("gas"), "gas");
        assert_eq!(lemmatize("morning"), "morning");
        assert_eq!(lemmatize("speed"), "speed");
    }
}
