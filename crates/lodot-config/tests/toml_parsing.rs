//! `lodot.toml` parsing tests.

use std::io::Write;

use lodot_config::TomlConfig;
use tempfile::NamedTempFile;

#[test]
fn analyze_section_and_profiles_parse() {
    let config = TomlConfig::parse(
        r#"
[analyze]
focus = ["text", "read"]
output = "md"
top = 20
reading_wpm = 240
glossary = "senses.toml"

[view.brief]
focus = ["text"]
output = "txt"
"#,
    )
    .expect("valid TOML");

    assert_eq!(
        config.analyze.focus,
        Some(vec!["text".to_string(), "read".to_string()])
    );
    assert_eq!(config.analyze.output.as_deref(), Some("md"));
    assert_eq!(config.analyze.top, Some(20));
    assert_eq!(config.analyze.reading_wpm, Some(240.0));
    assert_eq!(config.analyze.glossary.as_deref(), Some("senses.toml"));

    let brief = config.profile("brief").expect("brief profile");
    assert_eq!(brief.focus, Some(vec!["text".to_string()]));
    assert_eq!(brief.output.as_deref(), Some("txt"));
    assert_eq!(brief.top, None);
}

#[test]
fn empty_document_yields_defaults() {
    let config = TomlConfig::parse("").expect("empty TOML");

    assert!(config.analyze.focus.is_none());
    assert!(config.view.is_empty());
}

#[test]
fn missing_profile_is_none() {
    let config = TomlConfig::parse("[view.brief]\noutput = \"txt\"\n").expect("valid TOML");
    assert!(config.profile("deep").is_none());
}

#[test]
fn wrong_value_type_is_an_error() {
    assert!(TomlConfig::parse("[analyze]\ntop = \"many\"\n").is_err());
}

#[test]
fn from_file_reads_disk() {
    let mut file = NamedTempFile::new().expect("temp file");
    writeln!(file, "[analyze]\nngram_top = 3").expect("write");

    let config = TomlConfig::from_file(file.path()).expect("load");
    assert_eq!(config.analyze.ngram_top, Some(3));
}

#[test]
fn from_file_maps_parse_errors_to_invalid_data() {
    let mut file = NamedTempFile::new().expect("temp file");
    writeln!(file, "[analyze\n").expect("write");

    let err = TomlConfig::from_file(file.path()).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
}
