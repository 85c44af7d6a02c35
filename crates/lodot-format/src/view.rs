use std::fmt;

use lodot_types::{
    AnalysisReceipt, CompositionReport, Focus, LexiconReport, NgramReport, PosReport,
    ReadabilityReport, SentimentReport, TextStats, WordFrequencyReport,
};

use crate::fmt_f64;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Value {
    Int(usize),
    Float(f64),
    Text(String),
}

impl Value {
    pub(crate) fn is_numeric(&self) -> bool {
        !matches!(self, Self::Text(_))
    }

    /// Display form with line breaks folded into spaces, for row-per-line writers.
    pub(crate) fn one_line(&self) -> String {
        match self {
            Self::Text(s) => s.replace("\r\n", " ").replace(['\n', '\r'], " "),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(v) => f.write_str(&fmt_f64(*v)),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Self::Int(n)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Table {
    /// snake_case caption, also the RDF dimension group.
    pub caption: &'static str,
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<Value>>,
    /// Column written as the RDF dimension value, keyed by column 0.
    /// `None` keeps the table out of the graph.
    pub rdf_value: Option<usize>,
}

#[derive(Debug, Clone)]
pub(crate) struct SectionView {
    pub focus: Focus,
    pub scalars: Vec<(&'static str, Value)>,
    pub tables: Vec<Table>,
}

impl SectionView {
    pub(crate) fn heading(&self) -> String {
        self.focus.title().to_uppercase()
    }
}

pub(crate) fn section_views(receipt: &AnalysisReceipt) -> Vec<SectionView> {
    receipt
        .present_focuses()
        .into_iter()
        .filter_map(|focus| section_view(receipt, focus))
        .collect()
}

fn section_view(receipt: &AnalysisReceipt, focus: Focus) -> Option<SectionView> {
    let (scalars, tables) = match focus {
        Focus::Text => (text_scalars(receipt.text.as_ref()?), Vec::new()),
        Focus::Words => words_view(receipt.words.as_ref()?),
        Focus::Pos => pos_view(receipt.pos.as_ref()?),
        Focus::Composition => (composition_scalars(receipt.composition.as_ref()?), Vec::new()),
        Focus::Read => (readability_scalars(receipt.readability.as_ref()?), Vec::new()),
        Focus::Sent => sentiment_view(receipt.sentiment.as_ref()?),
        Focus::Lexicon => lexicon_view(receipt.lexicon.as_ref()?),
        Focus::Ngrams => ngram_view(receipt.ngrams.as_ref()?),
    };
    Some(SectionView {
        focus,
        scalars,
        tables,
    })
}

fn text_scalars(s: &TextStats) -> Vec<(&'static str, Value)> {
    vec![
        ("character_count", s.character_count.into()),
        ("character_per_word", s.character_per_word.into()),
        ("average_word_length", s.average_word_length.into()),
        ("syllable_count", s.syllable_count.into()),
        ("syllables_per_word", s.syllables_per_word.into()),
        ("word_count", s.word_count.into()),
        ("unique_word_count", s.unique_word_count.into()),
        ("type_token_ratio", s.type_token_ratio.into()),
        ("paragraph_count", s.paragraph_count.into()),
        ("words_per_paragraph", s.words_per_paragraph.into()),
        ("sentences_per_paragraph", s.sentences_per_paragraph.into()),
        ("sentence_count", s.sentence_count.into()),
        ("words_per_sentence", s.words_per_sentence.into()),
    ]
}

fn words_view(w: &WordFrequencyReport) -> (Vec<(&'static str, Value)>, Vec<Table>) {
    let table = Table {
        caption: "top_words",
        headers: vec!["Word", "Count", "Freq"],
        rows: w
            .rows
            .iter()
            .map(|r| vec![r.word.as_str().into(), r.count.into(), r.freq.into()])
            .collect(),
        rdf_value: Some(1),
    };
    (
        vec![
            ("total_words", w.total_words.into()),
            ("distinct_words", w.distinct_words.into()),
        ],
        vec![table],
    )
}

fn pos_view(p: &PosReport) -> (Vec<(&'static str, Value)>, Vec<Table>) {
    let table = Table {
        caption: "tags",
        headers: vec!["Tag", "Count", "Freq"],
        rows: p
            .rows
            .iter()
            .map(|r| vec![r.tag.as_str().into(), r.count.into(), r.freq.into()])
            .collect(),
        rdf_value: Some(1),
    };
    (vec![("total_tokens", p.total_tokens.into())], vec![table])
}

fn composition_scalars(c: &CompositionReport) -> Vec<(&'static str, Value)> {
    vec![
        ("adjectives", c.adjectives.into()),
        ("adverbs", c.adverbs.into()),
        ("conjunctions", c.conjunctions.into()),
        ("determiners", c.determiners.into()),
        ("nouns", c.nouns.into()),
        ("proper_nouns", c.proper_nouns.into()),
        ("prepositions", c.prepositions.into()),
        ("pronouns", c.pronouns.into()),
        ("verbs", c.verbs.into()),
    ]
}

fn readability_scalars(r: &ReadabilityReport) -> Vec<(&'static str, Value)> {
    vec![
        ("flesch_reading_ease", r.flesch_reading_ease.into()),
        ("flesch_kincaid_grade", r.flesch_kincaid_grade.into()),
        ("gunning_fog", r.gunning_fog.into()),
        ("smog_index", r.smog_index.into()),
        ("automated_readability_index", r.automated_readability_index.into()),
        ("coleman_liau_index", r.coleman_liau_index.into()),
        ("linsear_write_formula", r.linsear_write_formula.into()),
        ("difficult_words", r.difficult_words.into()),
        ("text_standard", r.text_standard.as_str().into()),
        ("reading_time_min", r.reading_time_min.into()),
        ("speaking_time_min", r.speaking_time_min.into()),
    ]
}

fn sentiment_view(s: &SentimentReport) -> (Vec<(&'static str, Value)>, Vec<Table>) {
    let table = Table {
        caption: "sentences",
        headers: vec!["Id", "Sentence", "Polarity", "Subjectivity", "Label"],
        rows: s
            .sentences
            .iter()
            .map(|row| {
                vec![
                    row.id.into(),
                    row.content.as_str().into(),
                    row.polarity.into(),
                    row.subjectivity.into(),
                    row.label.as_str().into(),
                ]
            })
            .collect(),
        rdf_value: Some(2),
    };
    let paragraphs = Table {
        caption: "paragraphs",
        headers: vec![
            "Id",
            "Polarity",
            "Subjectivity",
            "Label",
            "Neg",
            "Neu",
            "Pos",
            "Compound",
        ],
        rows: s
            .paragraphs
            .iter()
            .map(|row| {
                vec![
                    row.id.into(),
                    row.polarity.into(),
                    row.subjectivity.into(),
                    row.label.as_str().into(),
                    row.breakdown.neg.into(),
                    row.breakdown.neu.into(),
                    row.breakdown.pos.into(),
                    row.breakdown.compound.into(),
                ]
            })
            .collect(),
        rdf_value: Some(7),
    };
    (
        vec![
            ("polarity", s.overall.polarity.into()),
            ("subjectivity", s.overall.subjectivity.into()),
            ("label", s.overall.label.as_str().into()),
        ],
        vec![paragraphs, table],
    )
}

fn lexicon_view(l: &LexiconReport) -> (Vec<(&'static str, Value)>, Vec<Table>) {
    let table = Table {
        caption: "entries",
        headers: vec!["Word", "Occurrences", "Frequency (%)", "POS Tag", "Lemma", "Senses"],
        rows: l
            .entries
            .iter()
            .map(|e| {
                vec![
                    e.word.as_str().into(),
                    e.occurrences.into(),
                    e.frequency_percent.into(),
                    e.pos_tag.as_str().into(),
                    e.lemma.as_str().into(),
                    e.senses.join("; ").into(),
                ]
            })
            .collect(),
        rdf_value: None,
    };
    (vec![("entry_count", l.entries.len().into())], vec![table])
}

fn ngram_view(n: &NgramReport) -> (Vec<(&'static str, Value)>, Vec<Table>) {
    let table = |caption, header, rows: &[lodot_types::NgramRow]| Table {
        caption,
        headers: vec![header, "Count"],
        rows: rows
            .iter()
            .map(|r| vec![r.gram.as_str().into(), r.count.into()])
            .collect(),
        rdf_value: Some(1),
    };
    (
        Vec::new(),
        vec![
            table("bigrams", "Bigram", &n.bigrams),
            table("trigrams", "Trigram", &n.trigrams),
        ],
    )
}
