//! End-to-end rendering of analyzed receipts.
//!
//! Covers:
//! - Every writer covers every present section
//! - JSON output parses back into the receipt shape
//! - Turtle provenance and lexicon triples
//! - Visualization availability per focus

use lodot_analysis::{AnalysisContext, AnalysisRequest, Glossary, ModuleOptions, analyze};
use lodot_format::{VizOutput, frequency_series, render, supports_viz, visualize};
use lodot_types::{AnalysisArgsMeta, AnalysisReceipt, Focus, ReportFormat, VizKind};
use std::collections::BTreeMap;

// ─── Helpers ────────────────────────────────────────────────────────────────

const ESSAY: &str = "The cat sat on the mat. The cat was happy.\n\n\
The dog barked at the cat. Nobody liked the dog.";

fn receipt_for(focus: &[Focus]) -> AnalysisReceipt {
    receipt_of(ESSAY, focus)
}

fn receipt_of(text: &str, focus: &[Focus]) -> AnalysisReceipt {
    let mut senses = BTreeMap::new();
    senses.insert("cat".to_string(), vec!["a small domesticated feline".to_string()]);
    let options = ModuleOptions {
        glossary: Glossary::new(senses),
        ..ModuleOptions::default()
    };
    let req = AnalysisRequest {
        focus: focus.to_vec(),
        options,
        args: AnalysisArgsMeta {
            focus: focus.iter().map(|f| f.as_str().to_string()).collect(),
            output: "stream".to_string(),
            top: 20,
            lexicon_top: 50,
            ngram_top: 10,
        },
    };
    analyze(AnalysisContext::new(text, vec!["essay.txt".to_string()]), req).unwrap()
}

// ─── Writers ────────────────────────────────────────────────────────────────

#[test]
fn given_text_section_when_rendered_as_txt_then_heading_and_items_appear() {
    let receipt = receipt_for(&[Focus::Text]);

    let txt = render(&receipt, ReportFormat::Txt).unwrap();

    assert!(txt.contains("LODOT REPORT FOR essay.txt"));
    assert!(txt.contains("TEXT STATISTICS:"));
    assert!(txt.contains("- Word Count: 20"));
    assert!(txt.contains("---"));
}

#[test]
fn given_words_section_when_rendered_as_md_then_table_is_emitted() {
    let receipt = receipt_for(&[Focus::Words]);

    let md = render(&receipt, ReportFormat::Md).unwrap();

    assert!(md.starts_with("# LODOT REPORT FOR essay.txt"));
    assert!(md.contains("## WORD FREQUENCIES"));
    assert!(md.contains("### Top Words"));
    assert!(md.contains("|Word|Count|Freq|"));
    assert!(md.contains("|the|"));
}

#[test]
fn given_every_focus_when_rendered_then_each_writer_names_each_section() {
    let receipt = receipt_for(Focus::all());

    let stream = render(&receipt, ReportFormat::Stream).unwrap();
    let txt = render(&receipt, ReportFormat::Txt).unwrap();
    let md = render(&receipt, ReportFormat::Md).unwrap();
    let ttl = render(&receipt, ReportFormat::Ttl).unwrap();

    for focus in Focus::all() {
        let heading = focus.title().to_uppercase();
        assert!(stream.contains(&format!("{}:\n", focus.as_str())), "stream lacks {focus:?}");
        assert!(txt.contains(&format!("{heading}:")), "txt lacks {focus:?}");
        assert!(md.contains(&format!("## {heading}")), "md lacks {focus:?}");
        assert!(ttl.contains(&format!("/activity/{}>", focus.as_str())), "ttl lacks {focus:?}");
    }
}

#[test]
fn given_receipt_when_rendered_as_json_then_it_parses_with_sections() {
    let receipt = receipt_for(&[Focus::Text, Focus::Sent]);

    let json = render(&receipt, ReportFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["mode"], "analyze");
    assert_eq!(value["status"], "complete");
    assert!(value["text"].is_object());
    assert!(value["sentiment"]["sentences"].is_array());
    assert!(value.get("pos").is_none());
}

#[test]
fn given_two_paragraphs_when_sentiment_rendered_then_every_writer_lists_them() {
    let receipt = receipt_for(&[Focus::Sent]);
    assert_eq!(receipt.sentiment.as_ref().unwrap().paragraphs.len(), 2);

    let stream = render(&receipt, ReportFormat::Stream).unwrap();
    let txt = render(&receipt, ReportFormat::Txt).unwrap();
    let md = render(&receipt, ReportFormat::Md).unwrap();
    let ttl = render(&receipt, ReportFormat::Ttl).unwrap();
    let json = render(&receipt, ReportFormat::Json).unwrap();

    assert!(stream.contains("  paragraphs:\n"));
    assert!(stream.contains("    - id=2, polarity="));
    assert!(stream.contains("compound="));
    assert!(txt.contains("Paragraphs:\n"));
    assert!(txt.contains("Compound"));
    assert!(md.contains("### Paragraphs"));
    assert!(md.contains("|Id|Polarity|Subjectivity|Label|Neg|Neu|Pos|Compound|"));
    assert!(ttl.contains("/dimension/sent/paragraphs/1> prov:value"));
    assert!(ttl.contains("/dimension/sent/paragraphs/2> prov:value"));
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["sentiment"]["paragraphs"][1]["id"], 2);
    assert!(value["sentiment"]["paragraphs"][0]["breakdown"]["neu"].is_number());
}

#[test]
fn given_sentence_with_line_break_when_rendered_then_each_row_stays_on_one_line() {
    let receipt = receipt_of("The cat sat\non the mat. It was happy.", &[Focus::Sent]);
    assert!(receipt.sentiment.as_ref().unwrap().sentences[0].content.contains('\n'));

    let stream = render(&receipt, ReportFormat::Stream).unwrap();
    let txt = render(&receipt, ReportFormat::Txt).unwrap();
    let md = render(&receipt, ReportFormat::Md).unwrap();

    assert!(stream.contains("    - id=1, sentence=The cat sat on the mat., polarity="));
    assert!(
        txt.lines()
            .any(|l| l.trim_start().starts_with("1  The cat sat on the mat."))
    );
    assert!(md.contains("|1|The cat sat on the mat.|"));
    assert!(!txt.lines().any(|l| l.starts_with("on the mat.")));
}

// ─── Turtle ─────────────────────────────────────────────────────────────────

#[test]
fn given_text_section_when_rendered_as_ttl_then_provenance_is_linked() {
    let receipt = receipt_for(&[Focus::Text]);

    let ttl = render(&receipt, ReportFormat::Ttl).unwrap();

    assert!(ttl.contains("@prefix prov: <http://www.w3.org/ns/prov#> ."));
    assert!(ttl.contains("a foaf:Document"));
    assert!(ttl.contains("<http://example.org/lodot> a prov:Agent ."));
    assert!(ttl.contains("a prov:Activity"));
    assert!(ttl.contains("prov:used <http://example.org/document/"));
    assert!(ttl.contains("/dimension/text/word_count> prov:value 20 ."));
}

#[test]
fn given_glossary_sense_when_lexicon_rendered_as_ttl_then_sense_is_attached() {
    let receipt = receipt_for(&[Focus::Lexicon]);

    let ttl = render(&receipt, ReportFormat::Ttl).unwrap();

    assert!(ttl.contains("<http://example.org/lexicon/cat> a ontolex:LexicalEntry"));
    assert!(ttl.contains("ontolex:writtenRep \"cat\"@en"));
    assert!(ttl.contains("a ontolex:LexicalSense"));
    assert!(ttl.contains("rdf:value \"a small domesticated feline\"@en"));
}

// ─── Visualization ──────────────────────────────────────────────────────────

#[test]
fn given_non_frequency_focus_when_visualized_then_nothing_is_produced() {
    let receipt = receipt_for(&[Focus::Text, Focus::Read]);

    assert!(!supports_viz(Focus::Text));
    assert!(visualize(&receipt, Focus::Text, VizKind::Plot).is_none());
    assert!(visualize(&receipt, Focus::Read, VizKind::Table).is_none());
}

#[test]
fn given_absent_section_when_visualized_then_nothing_is_produced() {
    let receipt = receipt_for(&[Focus::Text]);

    assert!(visualize(&receipt, Focus::Words, VizKind::Table).is_none());
}

#[test]
fn given_words_when_plotted_then_top_word_has_full_bar() {
    let receipt = receipt_for(&[Focus::Words]);

    let Some(VizOutput::Text(plot)) = visualize(&receipt, Focus::Words, VizKind::Plot) else {
        panic!("expected text plot");
    };

    let top = plot.lines().nth(1).unwrap();
    assert!(top.starts_with("the"));
    assert_eq!(top.matches('#').count(), 60);
}

#[test]
fn given_pos_when_imaged_then_svg_file_is_named_after_module() {
    let receipt = receipt_for(&[Focus::Pos]);

    let Some(VizOutput::Svg { file_name, content }) =
        visualize(&receipt, Focus::Pos, VizKind::Image)
    else {
        panic!("expected svg");
    };

    assert_eq!(file_name, "pos_freq.svg");
    assert!(content.starts_with("<svg"));
    assert!(content.contains("DET"));
}

#[test]
fn given_ngrams_when_series_built_then_bigrams_and_trigrams_are_separate() {
    let receipt = receipt_for(&[Focus::Ngrams]);

    let series = frequency_series(&receipt, Focus::Ngrams);

    assert_eq!(series.len(), 2);
    assert_eq!(series[0].title, "Bigram frequencies");
    assert_eq!(series[0].rows[0].0, "the cat");
    let share: f64 = series[0].rows.iter().map(|(_, _, f)| f).sum();
    assert!((share - 100.0).abs() < 0.1);
}

#[test]
fn given_ngrams_when_series_built_then_each_share_is_rounded_to_two_places() {
    let receipt = receipt_for(&[Focus::Ngrams]);
    let grams = &receipt.ngrams.as_ref().unwrap().bigrams;
    let total: usize = grams.iter().map(|g| g.count).sum();

    let series = frequency_series(&receipt, Focus::Ngrams);

    for ((_, count, freq), gram) in series[0].rows.iter().zip(grams) {
        assert_eq!(*count, gram.count);
        let expected = (gram.count as f64 / total as f64 * 100.0 * 100.0).round() / 100.0;
        assert_eq!(*freq, expected);
    }
}
