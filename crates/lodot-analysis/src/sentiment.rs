use anyhow::Result;
use lodot_math::{mean, ratio, round_f64};
use lodot_text::{LexiconScorer, PolarityScorer};
use lodot_types::{
    Focus, ParagraphSentiment, PolarityScore, SentenceSentiment, SentimentBreakdown,
    SentimentLabel, SentimentReport,
};

use crate::analyzer::TextAnalyzer;
use crate::module::{AnalysisModule, ModuleOptions, Section};

/// Document, per-paragraph and per-sentence polarity. The scorer is pluggable.
#[derive(Debug, Default, Clone)]
pub struct SentimentModule<S = LexiconScorer> {
    scorer: S,
}

impl SentimentModule<LexiconScorer> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: PolarityScorer> SentimentModule<S> {
    pub fn with_scorer(scorer: S) -> Self {
        Self { scorer }
    }

    pub(crate) fn build(&self, doc: &TextAnalyzer<'_>, threshold: f64) -> SentimentReport {
        let overall = self.scorer.score(doc.text());
        let polarity = round_f64(overall.polarity, 3);
        let overall = PolarityScore {
            polarity,
            subjectivity: round_f64(overall.subjectivity, 3),
            label: SentimentLabel::from_polarity(polarity, threshold),
        };

        let sentences = doc
            .sentences()
            .iter()
            .enumerate()
            .map(|(idx, sentence)| {
                let score = self.scorer.score(sentence);
                let polarity = round_f64(score.polarity, 3);
                SentenceSentiment {
                    id: idx + 1,
                    content: (*sentence).to_string(),
                    polarity,
                    subjectivity: round_f64(score.subjectivity, 3),
                    label: SentimentLabel::from_polarity(polarity, threshold),
                }
            })
            .collect();

        let paragraphs = doc
            .paragraphs()
            .iter()
            .enumerate()
            .map(|(idx, paragraph)| self.paragraph(idx + 1, paragraph, threshold))
            .collect();

        SentimentReport {
            overall,
            sentences,
            paragraphs,
        }
    }

    /// The paragraph label follows the compound score, the mean polarity of
    /// its sentences.
    fn paragraph(&self, id: usize, paragraph: &str, threshold: f64) -> ParagraphSentiment {
        let score = self.scorer.score(paragraph);
        let polarities: Vec<f64> = lodot_text::sentences(paragraph)
            .iter()
            .map(|sentence| self.scorer.score(sentence).polarity)
            .collect();

        let mut counts = [0usize; 3];
        for polarity in &polarities {
            let slot = match SentimentLabel::from_polarity(round_f64(*polarity, 3), threshold) {
                SentimentLabel::Negative => 0,
                SentimentLabel::Neutral => 1,
                SentimentLabel::Positive => 2,
            };
            counts[slot] += 1;
        }
        let compound = round_f64(mean(&polarities), 3);

        ParagraphSentiment {
            id,
            polarity: round_f64(score.polarity, 3),
            subjectivity: round_f64(score.subjectivity, 3),
            label: SentimentLabel::from_polarity(compound, threshold),
            breakdown: SentimentBreakdown {
                neg: ratio(counts[0], polarities.len(), 3),
                neu: ratio(counts[1], polarities.len(), 3),
                pos: ratio(counts[2], polarities.len(), 3),
                compound,
            },
        }
    }
}

impl<S: PolarityScorer> AnalysisModule for SentimentModule<S> {
    fn focus(&self) -> Focus {
        Focus::Sent
    }

    fn description(&self) -> &'static str {
        "Polarity and subjectivity for the document, each paragraph and each sentence"
    }

    fn analyze(&self, doc: &TextAnalyzer<'_>, opts: &ModuleOptions) -> Result<Section> {
        Ok(Section::Sent(self.build(doc, opts.sentiment_threshold)))
    }
}

#[cfg(test)]
mod tests {
    use lodot_text::Polarity;

    use super::*;

    #[test]
    fn sentences_are_labelled_individually() {
        let doc = TextAnalyzer::new("I love this wonderful place. The food was terrible. We left.");
        let report = SentimentModule::new().build(&doc, 0.05);

        assert_eq!(report.sentences.len(), 3);
        assert_eq!(report.sentences[0].id, 1);
        assert_eq!(report.sentences[0].label, SentimentLabel::Positive);
        assert_eq!(report.sentences[1].label, SentimentLabel::Negative);
        assert_eq!(report.sentences[2].label, SentimentLabel::Neutral);
        assert_eq!(report.sentences[2].polarity, 0.0);
        assert_eq!(report.overall.polarity, 0.167);
        assert_eq!(report.overall.label, SentimentLabel::Positive);
    }

    #[test]
    fn paragraphs_carry_sentence_breakdown() {
        let doc = TextAnalyzer::new(
            "I love this wonderful place. The food was terrible. We left.\n\nWhat a happy day.",
        );
        let report = SentimentModule::new().build(&doc, 0.05);

        assert_eq!(report.paragraphs.len(), 2);
        let first = &report.paragraphs[0];
        assert_eq!(first.id, 1);
        assert_eq!(first.breakdown.neg, 0.333);
        assert_eq!(first.breakdown.neu, 0.333);
        assert_eq!(first.breakdown.pos, 0.333);
        let expected = round_f64(
            mean(&[
                report.sentences[0].polarity,
                report.sentences[1].polarity,
                report.sentences[2].polarity,
            ]),
            3,
        );
        assert!((first.breakdown.compound - expected).abs() < 0.002);
        assert_eq!(
            first.label,
            SentimentLabel::from_polarity(first.breakdown.compound, 0.05)
        );

        let second = &report.paragraphs[1];
        assert_eq!(second.id, 2);
        assert_eq!(second.breakdown.pos, 1.0);
        assert_eq!(second.breakdown.neg, 0.0);
        assert_eq!(second.label, SentimentLabel::Positive);
    }

    struct Fixed(f64);

    impl PolarityScorer for Fixed {
        fn score(&self, _text: &str) -> Polarity {
            Polarity {
                polarity: self.0,
                subjectivity: 0.123456,
            }
        }
    }

    #[test]
    fn custom_scorer_values_are_rounded() {
        let doc = TextAnalyzer::new("Anything.");
        let report = SentimentModule::with_scorer(Fixed(-0.04999)).build(&doc, 0.05);
        assert_eq!(report.overall.polarity, -0.05);
        assert_eq!(report.overall.subjectivity, 0.123);
        assert_eq!(report.overall.label, SentimentLabel::Neutral);
        assert_eq!(report.paragraphs[0].breakdown.compound, -0.05);
        assert_eq!(report.paragraphs[0].breakdown.neu, 1.0);
    }
}
