use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Coarse Universal Dependencies part-of-speech tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tag {
    Noun,
    Propn,
    Verb,
    Aux,
    Adj,
    Adv,
    Pron,
    Det,
    Adp,
    Cconj,
    Sconj,
    Part,
    Num,
    Intj,
    X,
}

impl Tag {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Noun => "NOUN",
            Self::Propn => "PROPN",
            Self::Verb => "VERB",
            Self::Aux => "AUX",
            Self::Adj => "ADJ",
            Self::Adv => "ADV",
            Self::Pron => "PRON",
            Self::Det => "DET",
            Self::Adp => "ADP",
            Self::Cconj => "CCONJ",
            Self::Sconj => "SCONJ",
            Self::Part => "PART",
            Self::Num => "NUM",
            Self::Intj => "INTJ",
            Self::X => "X",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Assigns one tag per token of a single sentence.
pub trait Tagger {
    fn tag(&self, tokens: &[&str]) -> Vec<Tag>;
}

const CLOSED_CLASS: &[(Tag, &[&str])] = &[
    (
        Tag::Det,
        &[
            "the", "a", "an", "this", "that", "these", "those", "every", "each", "some", "any",
            "no", "all", "both", "either", "neither", "another", "such", "whatever",
        ],
    ),
    (
        Tag::Pron,
        &[
            "i", "me", "you", "he", "she", "it", "we", "they", "him", "her", "us", "them", "my",
            "your", "his", "its", "our", "their", "mine", "yours", "hers", "ours", "theirs",
            "myself", "yourself", "himself", "herself", "itself", "ourselves", "yourselves",
            "themselves", "who", "whom", "whose", "what", "which", "something", "nothing",
            "anything", "everything", "someone", "anyone", "everyone", "nobody", "somebody",
            "everybody", "one",
        ],
    ),
    (
        Tag::Aux,
        &[
            "be", "am", "is", "are", "was", "were", "been", "being", "have", "has", "had", "do",
            "does", "did", "will", "would", "shall", "should", "can", "could", "may", "might",
            "must", "cannot",
        ],
    ),
    (
        Tag::Adp,
        &[
            "of", "in", "on", "at", "by", "for", "with", "about", "against", "between", "into",
            "through", "during", "before", "after", "above", "below", "to", "from", "up", "down",
            "out", "off", "over", "under", "around", "across", "among", "behind", "beside",
            "beyond", "near", "toward", "towards", "upon", "within", "without", "via", "onto",
        ],
    ),
    (Tag::Cconj, &["and", "or", "but", "nor", "yet", "plus"]),
    (
        Tag::Sconj,
        &[
            "because", "although", "though", "if", "while", "whereas", "unless", "until",
            "whether", "than", "as", "since", "so",
        ],
    ),
    (Tag::Part, &["not", "n't", "'s"]),
    (
        Tag::Adv,
        &[
            "very", "too", "also", "just", "only", "never", "always", "often", "sometimes", "now",
            "then", "here", "there", "again", "already", "still", "even", "quite", "rather",
            "almost", "soon", "perhaps", "however", "really", "well", "ever", "once", "today",
            "tomorrow", "yesterday", "why", "how", "when", "where", "much", "more", "most",
            "less", "least", "away", "back",
        ],
    ),
    (
        Tag::Intj,
        &["oh", "ah", "wow", "hey", "yes", "hello", "ouch", "alas", "oops", "hmm", "okay"],
    ),
    (
        Tag::Num,
        &[
            "zero", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
            "eleven", "twelve", "twenty", "thirty", "hundred", "thousand", "million", "billion",
        ],
    ),
];

/// Subject pronouns; an unknown word right after one is read as a verb.
const SUBJECTS: &[&str] = &["i", "you", "he", "she", "it", "we", "they", "who"];

/// Adverbs in `-ly` that are really adjectives or nouns.
const LY_EXCEPTIONS: &[&str] = &[
    "family", "only", "early", "likely", "friendly", "lovely", "lonely", "ugly", "holy",
    "silly", "daily", "weekly", "monthly", "yearly", "july", "italy", "supply", "reply",
    "apply", "fly", "rely", "ally", "belly", "jelly", "bully", "lily", "assembly", "anomaly",
];

const ADJ_SUFFIXES: &[&str] = &["ous", "ful", "ive", "able", "ible", "ical", "less", "ish"];
const NOUN_SUFFIXES: &[&str] = &[
    "tion", "sion", "ment", "ness", "ity", "ship", "ance", "ence", "ism", "ist", "hood", "dom",
];
const VERB_SUFFIXES: &[&str] = &["ize", "ise", "ify", "ing", "ed"];

static CLOSED_MAP: LazyLock<HashMap<&'static str, Tag>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    for (tag, words) in CLOSED_CLASS {
        for word in *words {
            map.entry(*word).or_insert(*tag);
        }
    }
    map
});

/// Closed-class lexicons, suffix rules and one token of left context.
#[derive(Debug, Default, Clone, Copy)]
pub struct RuleTagger;

impl RuleTagger {
    pub fn new() -> Self {
        Self
    }

    fn tag_one(&self, token: &str, index: usize, prev: Option<(&str, Tag)>) -> Tag {
        if token.chars().all(|c| c.is_ascii_digit() || c == ',' || c == '.') {
            return Tag::Num;
        }
        if !token.chars().any(char::is_alphabetic) {
            return Tag::X;
        }

        let lower = token.to_lowercase();
        if let Some(tag) = CLOSED_MAP.get(lower.as_str()) {
            return *tag;
        }
        if lower.ends_with("n't") {
            return Tag::Aux;
        }

        let capitalized = token.chars().next().is_some_and(char::is_uppercase);
        if capitalized && index > 0 {
            return Tag::Propn;
        }

        let prev_tag = prev.map(|(_, tag)| tag);
        let after_subject = prev.is_some_and(|(word, _)| SUBJECTS.contains(&word));
        let after_to = prev.is_some_and(|(word, _)| word == "to");

        if after_subject || after_to || prev_tag == Some(Tag::Aux) {
            if lower.ends_with("ly") && !LY_EXCEPTIONS.contains(&lower.as_str()) {
                return Tag::Adv;
            }
            if ends_with_any(&lower, ADJ_SUFFIXES) && prev_tag == Some(Tag::Aux) {
                return Tag::Adj;
            }
            return Tag::Verb;
        }

        if lower.len() > 4 && lower.ends_with("ly") && !LY_EXCEPTIONS.contains(&lower.as_str()) {
            return Tag::Adv;
        }
        if ends_with_any(&lower, NOUN_SUFFIXES) {
            return Tag::Noun;
        }
        if lower.len() > 4 && ends_with_any(&lower, ADJ_SUFFIXES) {
            return Tag::Adj;
        }
        if lower.len() > 4 && ends_with_any(&lower, VERB_SUFFIXES) {
            return match prev_tag {
                Some(Tag::Det) | Some(Tag::Adj) | Some(Tag::Adp) => Tag::Noun,
                _ => Tag::Verb,
            };
        }
        Tag::Noun
    }
}

fn ends_with_any(word: &str, suffixes: &[&str]) -> bool {
    suffixes.iter().any(|suffix| word.ends_with(suffix))
}

impl Tagger for RuleTagger {
    fn tag(&self, tokens: &[&str]) -> Vec<Tag> {
        let mut tags = Vec::with_capacity(tokens.len());
        let mut prev: Option<(String, Tag)> = None;
        for (index, token) in tokens.iter().enumerate() {
            let tag = self.tag_one(
                token,
                index,
                prev.as_ref().map(|(word, tag)| (word.as_str(), *tag)),
            );
            prev = Some((token.to_lowercase(), tag));
            tags.push(tag);
        }
        tags
    }
}
