//! RDF Turtle writer.
//!
//! The document is a `foaf:Document` and the tool a `prov:Agent`. Each
//! section becomes a `prov:Activity` that used the document and generated one
//! dimension per metric, each carrying a `prov:value`. Lexicon entries are
//! additionally described with OntoLex-Lemon.

use lodot_types::{AnalysisReceipt, LexiconReport};

use crate::view::{Value, section_views};

const BASE: &str = "http://example.org";

const PREFIXES: &[(&str, &str)] = &[
    ("foaf", "http://xmlns.com/foaf/0.1/"),
    ("prov", "http://www.w3.org/ns/prov#"),
    ("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#"),
    ("xsd", "http://www.w3.org/2001/XMLSchema#"),
    ("ontolex", "http://www.w3.org/ns/lemon/ontolex#"),
    ("lexinfo", "http://www.lexinfo.net/ontology/2.0/lexinfo#"),
];

pub(crate) fn render_turtle(receipt: &AnalysisReceipt) -> String {
    let mut out = String::new();
    for (prefix, iri) in PREFIXES {
        out.push_str(&format!("@prefix {prefix}: <{iri}> .\n"));
    }
    out.push('\n');

    let document = document_iri(&receipt.source.hash);
    let agent = format!("{BASE}/{}", receipt.tool.name);

    out.push_str(&format!(
        "<{document}> a foaf:Document ;\n    foaf:name {} .\n\n",
        string_literal(&receipt.source.display_name())
    ));
    out.push_str(&format!("<{agent}> a prov:Agent .\n"));

    for section in section_views(receipt) {
        let focus = section.focus.as_str();
        let activity = format!("{document}/activity/{focus}");
        let mut dimensions: Vec<(String, &Value)> = section
            .scalars
            .iter()
            .map(|(key, value)| (format!("{document}/dimension/{focus}/{key}"), value))
            .collect();
        for table in &section.tables {
            let Some(value_col) = table.rdf_value else {
                continue;
            };
            for row in &table.rows {
                if let (Some(key), Some(value)) = (row.first(), row.get(value_col)) {
                    dimensions.push((
                        format!(
                            "{document}/dimension/{focus}/{}/{}",
                            table.caption,
                            iri_segment(&key.to_string())
                        ),
                        value,
                    ));
                }
            }
        }

        out.push_str(&format!(
            "\n<{activity}> a prov:Activity ;\n    prov:used <{document}> ;\n    prov:wasAssociatedWith <{agent}>"
        ));
        if dimensions.is_empty() {
            out.push_str(" .\n");
        } else {
            let generated: Vec<String> = dimensions.iter().map(|(iri, _)| format!("<{iri}>")).collect();
            out.push_str(&format!(
                " ;\n    prov:generated {} .\n",
                generated.join(",\n        ")
            ));
        }
        for (iri, value) in &dimensions {
            out.push_str(&format!("<{iri}> prov:value {} .\n", literal(value)));
        }
    }

    if let Some(lexicon) = &receipt.lexicon {
        out.push_str(&lexicon_entries(lexicon));
    }
    out
}

fn lexicon_entries(lexicon: &LexiconReport) -> String {
    let mut out = String::new();
    for entry in &lexicon.entries {
        let word = format!("{BASE}/lexicon/{}", iri_segment(&entry.lemma));
        let form = format!("{word}-form");
        out.push_str(&format!(
            "\n<{word}> a ontolex:LexicalEntry ;\n    ontolex:lexicalForm <{form}> ;\n    lexinfo:partOfSpeech {}^^xsd:string",
            string_literal(&entry.pos_tag)
        ));
        let senses: Vec<String> = (0..entry.senses.len())
            .map(|i| format!("<{word}-sense-{i}>"))
            .collect();
        if !senses.is_empty() {
            out.push_str(&format!(" ;\n    ontolex:sense {}", senses.join(", ")));
        }
        out.push_str(" .\n");
        out.push_str(&format!(
            "<{form}> a ontolex:Form ;\n    ontolex:writtenRep {}@en .\n",
            string_literal(&entry.word)
        ));
        for (i, sense) in entry.senses.iter().enumerate() {
            out.push_str(&format!(
                "<{word}-sense-{i}> a ontolex:LexicalSense ;\n    ontolex:context <{word}-context-{i}> .\n"
            ));
            out.push_str(&format!(
                "<{word}-context-{i}> rdf:value {}@en .\n",
                string_literal(sense)
            ));
        }
    }
    out
}

/// Stable per-content document IRI.
fn document_iri(hash: &str) -> String {
    match hash.get(..16) {
        Some(short) if !short.is_empty() => format!("{BASE}/document/{short}"),
        _ => format!("{BASE}/document"),
    }
}

/// Percent-encode everything outside unreserved IRI characters.
fn iri_segment(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        if c.is_alphanumeric() || matches!(c, '-' | '_' | '.' | '~') {
            out.push(c);
        } else {
            let mut buf = [0u8; 4];
            for byte in c.encode_utf8(&mut buf).bytes() {
                out.push_str(&format!("%{byte:02X}"));
            }
        }
    }
    out
}

fn literal(value: &Value) -> String {
    match value {
        Value::Int(_) => value.to_string(),
        Value::Float(v) if v.is_finite() => value.to_string(),
        other => string_literal(&other.to_string()),
    }
}

fn string_literal(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 2);
    out.push('"');
    for c in raw.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out.push('"');
    out
}
