use unicode_segmentation::UnicodeSegmentation;

const TERMINATORS: [char; 3] = ['.', '!', '?'];
const CLOSERS: [char; 7] = ['"', '\'', ')', ']', '}', '\u{201D}', '\u{2019}'];
const OPENERS: [char; 6] = ['"', '\'', '(', '[', '\u{201C}', '\u{2018}'];

/// Lowercased (without the trailing period) tokens that never end a sentence.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "vs", "etc", "e.g", "i.e", "cf",
    "al", "approx", "dept", "est", "fig", "inc", "ltd", "co", "corp", "no", "vol", "gen", "col",
    "lt", "sgt", "capt", "rev", "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept",
    "oct", "nov", "dec", "u.s", "u.k",
];

/// Word tokens per UAX #29. Tokens without an alphanumeric character are dropped.
pub fn words(text: &str) -> Vec<&str> {
    text.split_word_bounds()
        .filter(|token| token.chars().any(char::is_alphanumeric))
        .collect()
}

/// Paragraphs separated by one or more blank lines, trimmed.
pub fn paragraphs(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start: Option<usize> = None;
    let mut end = 0;
    let mut offset = 0;

    for line in text.split_inclusive('\n') {
        let line_start = offset;
        offset += line.len();
        if line.trim().is_empty() {
            if let Some(begin) = start.take() {
                push_trimmed(&mut out, &text[begin..end]);
            }
        } else {
            start.get_or_insert(line_start);
            end = offset;
        }
    }
    if let Some(begin) = start {
        push_trimmed(&mut out, &text[begin..end]);
    }
    out
}

/// Rule-based sentence segmentation. A blank line always ends a sentence.
pub fn sentences(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    for block in paragraphs(text) {
        split_block(block, &mut out);
    }
    out
}

fn split_block<'a>(block: &'a str, out: &mut Vec<&'a str>) {
    let chars: Vec<(usize, char)> = block.char_indices().collect();
    let mut start = 0;
    let mut i = 0;

    while i < chars.len() {
        let (pos, c) = chars[i];
        if !TERMINATORS.contains(&c) {
            i += 1;
            continue;
        }

        let mut j = i;
        while j < chars.len() && TERMINATORS.contains(&chars[j].1) {
            j += 1;
        }
        let single_period = c == '.' && j == i + 1;
        while j < chars.len() && CLOSERS.contains(&chars[j].1) {
            j += 1;
        }
        let end = chars.get(j).map_or(block.len(), |(p, _)| *p);

        if single_period && is_abbreviation(&block[start..pos], &block[end..]) {
            i = j;
            continue;
        }
        if starts_new_sentence(&chars[j..]) {
            push_trimmed(out, &block[start..end]);
            start = end;
        }
        i = j;
    }
    push_trimmed(out, &block[start..]);
}

/// The remainder after a terminator begins a new sentence when it is empty,
/// or whitespace followed by an uppercase letter, digit, or opening quote.
fn starts_new_sentence(rest: &[(usize, char)]) -> bool {
    let Some((_, first)) = rest.first() else {
        return true;
    };
    if !first.is_whitespace() {
        return false;
    }
    match rest.iter().map(|(_, c)| *c).find(|c| !c.is_whitespace()) {
        None => true,
        Some(next) => next.is_uppercase() || next.is_ascii_digit() || OPENERS.contains(&next),
    }
}

/// `before` ends just ahead of a single period; `after` follows it.
/// A lone capital letter only counts as an initial inside a run of initials
/// (`J. R. Tolkien`), so `vitamin C. It` still splits.
fn is_abbreviation(before: &str, after: &str) -> bool {
    let mut tokens = before
        .rsplit(char::is_whitespace)
        .map(|t| t.trim_start_matches(|c: char| OPENERS.contains(&c)));
    let token = tokens.next().unwrap_or_default();
    if token.is_empty() {
        return false;
    }
    let mut letters = token.chars();
    if let (Some(only), None) = (letters.next(), letters.next())
        && only.is_alphabetic()
    {
        let prev_is_initial = tokens.next().is_some_and(is_initial);
        let next_is_initial = after.split_whitespace().next().is_some_and(is_initial);
        return only.is_uppercase() && (prev_is_initial || next_is_initial);
    }
    let lower = token.to_lowercase();
    ABBREVIATIONS.contains(&lower.as_str())
}

/// A single capital letter followed by a period, e.g. `R.`.
fn is_initial(token: &str) -> bool {
    let mut chars = token.chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some(letter), Some('.'), None) if letter.is_uppercase()
    )
}

fn push_trimmed<'a>(out: &mut Vec<&'a str>, piece: &'a str) {
    let piece = piece.trim();
    if !piece.is_empty() {
        out.push(piece);
    }
}
