//! Integration tests for loading configuration files.

use std::io::Write;

use folio::analysis::token_filter::stop::StopWordList;
use folio::prelude::*;
use tempfile::NamedTempFile;

fn config_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_config_file_drives_cleaning() -> Result<()> {
    let file = config_file(
        r#"{
            "clean": {
                "strip_stage_directions": true,
                "extra_stopwords": ["Thou", "hath", "lord"],
                "min_token_length": 4
            },
            "fetch": { "timeout_secs": 5 }
        }"#,
    );

    let config = FolioConfig::from_file(file.path())?;
    assert_eq!(config.fetch.timeout_secs, 5);
    assert!(config.clean.extra_stopwords.contains("thou"));

    let tokens = TextCleaner::new(config.clean)?.clean(
        "HECTOR.\nThou hath my lord's word, my lord, and ten Greeks more.\n[Exit.]",
    )?;
    assert_eq!(tokens, vec!["word", "greek"]);
    Ok(())
}

#[test]
fn test_empty_config_file_uses_defaults() -> Result<()> {
    let file = config_file("{}");
    let config = FolioConfig::from_file(file.path())?;
    assert_eq!(config, FolioConfig::default());
    Ok(())
}

#[test]
fn test_unknown_base_list() {
    let file = config_file(r#"{"clean": {"base_stopwords": "klingon"}}"#);
    assert!(matches!(
        FolioConfig::from_file(file.path()),
        Err(FolioError::Config(_))
    ));
}

#[test]
fn test_no_base_list_keeps_function_words() -> Result<()> {
    let file = config_file(r#"{"clean": {"base_stopwords": "none", "lemmatize": false}}"#);
    let config = FolioConfig::from_file(file.path())?;
    assert_eq!(config.clean.base_stopwords, StopWordList::None);

    let tokens = clean("The walls of Troy", &config.clean)?;
    assert_eq!(tokens, vec!["the", "walls", "of", "troy"]);
    Ok(())
}

#[test]
fn test_invalid_values_are_rejected() {
    let file = config_file(r#"{"clean": {"min_token_length": 0}}"#);
    assert!(matches!(
        FolioConfig::from_file(file.path()),
        Err(FolioError::InvalidArgument(_))
    ));
}

#[test]
fn test_missing_file() {
    assert!(matches!(
        FolioConfig::from_file("/nonexistent/folio.json"),
        Err(FolioError::Io(_))
    ));
}
