use lodot_text::{RuleTagger, Tag, Tagger, is_alpha_word, is_stopword, lemmatize};

/// Shared document state. Segmentation, syllables, tags and lemmas are
/// computed once here and read by every analysis module.
#[derive(Debug, Clone)]
pub struct TextAnalyzer<'a> {
    text: &'a str,
    words: Vec<&'a str>,
    alpha_words: Vec<String>,
    sentences: Vec<&'a str>,
    paragraphs: Vec<&'a str>,
    syllables: Vec<usize>,
    tagged: Vec<(&'a str, Tag)>,
    lemmas: Vec<String>,
}

impl<'a> TextAnalyzer<'a> {
    /// Analyze `text` with the rule-based tagger.
    pub fn new(text: &'a str) -> Self {
        Self::with_tagger(text, &RuleTagger::new())
    }

    pub fn with_tagger(text: &'a str, tagger: &dyn Tagger) -> Self {
        let words = lodot_text::words(text);
        let alpha_words: Vec<String> = words
            .iter()
            .filter(|w| is_alpha_word(w))
            .map(|w| w.to_lowercase())
            .collect();
        let sentences = lodot_text::sentences(text);
        let paragraphs = lodot_text::paragraphs(text);
        let syllables = words.iter().map(|w| lodot_text::syllables(w)).collect();

        let mut tagged = Vec::with_capacity(words.len());
        for sentence in &sentences {
            let tokens = lodot_text::words(sentence);
            let tags = tagger.tag(&tokens);
            tagged.extend(tokens.into_iter().zip(tags));
        }

        let lemmas = alpha_words
            .iter()
            .filter(|w| !is_stopword(w))
            .map(|w| lemmatize(w))
            .collect();

        Self {
            text,
            words,
            alpha_words,
            sentences,
            paragraphs,
            syllables,
            tagged,
            lemmas,
        }
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Word tokens, punctuation excluded.
    pub fn words(&self) -> &[&'a str] {
        &self.words
    }

    /// Lowercased words made only of letters.
    pub fn alpha_words(&self) -> &[String] {
        &self.alpha_words
    }

    pub fn sentences(&self) -> &[&'a str] {
        &self.sentences
    }

    pub fn paragraphs(&self) -> &[&'a str] {
        &self.paragraphs
    }

    /// Syllables per entry of [`Self::words`].
    pub fn syllables(&self) -> &[usize] {
        &self.syllables
    }

    pub fn syllable_count(&self) -> usize {
        self.syllables.iter().sum()
    }

    /// Word tokens paired with their part-of-speech tag, in document order.
    pub fn tagged(&self) -> &[(&'a str, Tag)] {
        &self.tagged
    }

    /// Tagged tokens restricted to alphabetic words.
    pub fn tagged_alpha(&self) -> impl Iterator<Item = &(&'a str, Tag)> {
        self.tagged.iter().filter(|(token, _)| is_alpha_word(token))
    }

    /// Content-word lemmas: alphabetic, stopwords removed, lemmatized.
    pub fn lemmas(&self) -> &[String] {
        &self.lemmas
    }

    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}
