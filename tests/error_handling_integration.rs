use prosegauge::{AnalysisConfig, AnalysisError, TextAnalyzer};
use std::path::PathBuf;
use tempfile::TempDir;

fn config_in(dir: &TempDir) -> AnalysisConfig {
    let positive = dir.path().join("positive.txt");
    let negative = dir.path().join("negative.txt");
    std::fs::write(&positive, "good\n").unwrap();
    std::fs::write(&negative, "bad\n").unwrap();
    AnalysisConfig {
        positive_dictionary_path: positive,
        negative_dictionary_path: negative,
        custom_stopword_folder: None,
        encodings: vec!["utf-8".to_string()],
    }
}

#[test]
fn test_undecodable_stopword_file_names_the_file() {
    let dir = TempDir::new().unwrap();
    let mut config = config_in(&dir);

    let folder = dir.path().join("stopwords");
    std::fs::create_dir(&folder).unwrap();
    let broken = folder.join("broken.txt");
    std::fs::write(&broken, b"\xFF\xFE\x00garbage").unwrap();
    config.custom_stopword_folder = Some(folder);

    let err = TextAnalyzer::from_config(&config).err().expect("must fail");
    match err {
        AnalysisError::ResourceDecode { path, encodings } => {
            assert_eq!(path, broken);
            assert_eq!(encodings, vec!["utf-8"]);
        }
        other => panic!("expected ResourceDecode, got {other:?}"),
    }
    // The message itself names the file for operators reading logs
    let dir2 = TempDir::new().unwrap();
    let mut config2 = config_in(&dir2);
    let folder2 = dir2.path().join("stopwords");
    std::fs::create_dir(&folder2).unwrap();
    std::fs::write(folder2.join("broken.txt"), b"\xFF\xFE").unwrap();
    config2.custom_stopword_folder = Some(folder2.clone());
    let message = TextAnalyzer::from_config(&config2).err().unwrap().to_string();
    assert!(message.contains("broken.txt"));
    assert!(message.contains("utf-8"));
}

#[test]
fn test_utf16_bom_stopword_file_is_not_sniffed() {
    // The configured encoding governs decoding: a stopword file opening with
    // a UTF-16 byte-order mark must fail under a utf-8-only configuration,
    // not decode as UTF-16 and pollute the stopword set
    let dir = TempDir::new().unwrap();
    let mut config = config_in(&dir);

    let folder = dir.path().join("stopwords");
    std::fs::create_dir(&folder).unwrap();
    let bom_file = folder.join("bom.txt");
    std::fs::write(&bom_file, b"\xFF\xFEt\x00h\x00e\x00").unwrap();
    config.custom_stopword_folder = Some(folder);

    let err = TextAnalyzer::from_config(&config).err().expect("must fail");
    match err {
        AnalysisError::ResourceDecode { path, encodings } => {
            assert_eq!(path, bom_file);
            assert_eq!(encodings, vec!["utf-8"]);
        }
        other => panic!("expected ResourceDecode, got {other:?}"),
    }
}

#[test]
fn test_default_latin1_spelling_decodes_dictionaries() {
    // The original config files spell the fallback "latin-1"; that label must
    // reach a real decoder even though it is not a WHATWG name
    let dir = TempDir::new().unwrap();
    let mut config = config_in(&dir);
    std::fs::write(&config.positive_dictionary_path, b"caf\xE9\n").unwrap();
    config.encodings = vec!["utf-8".to_string(), "latin-1".to_string()];

    let analyzer = TextAnalyzer::from_config(&config).expect("fallback must engage");
    let record = analyzer.analyze("Meet at the café.");
    assert_eq!(record.positive_score, 1);
}

#[test]
fn test_missing_dictionary_is_access_error() {
    let dir = TempDir::new().unwrap();
    let mut config = config_in(&dir);
    config.positive_dictionary_path = PathBuf::from("no/such/positive.txt");

    let err = TextAnalyzer::from_config(&config).err().expect("must fail");
    assert!(matches!(err, AnalysisError::ResourceAccess { .. }));
}

#[test]
fn test_missing_stopword_folder_is_access_error() {
    let dir = TempDir::new().unwrap();
    let mut config = config_in(&dir);
    config.custom_stopword_folder = Some(PathBuf::from("no/such/folder"));

    let err = TextAnalyzer::from_config(&config).err().expect("must fail");
    assert!(matches!(err, AnalysisError::ResourceAccess { .. }));
}

#[test]
fn test_unknown_encoding_label_is_rejected() {
    let dir = TempDir::new().unwrap();
    let mut config = config_in(&dir);
    config.encodings = vec!["klingon-8".to_string()];

    let err = TextAnalyzer::from_config(&config).err().expect("must fail");
    assert!(matches!(err, AnalysisError::UnknownEncoding(label) if label == "klingon-8"));
}

#[test]
fn test_absent_stopword_folder_is_valid() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    assert!(config.custom_stopword_folder.is_none());
    let analyzer = TextAnalyzer::from_config(&config).expect("no folder is fine");
    let record = analyzer.analyze("A good day.");
    assert_eq!(record.positive_score, 1);
}

#[test]
fn test_empty_stopword_folder_is_valid() {
    let dir = TempDir::new().unwrap();
    let mut config = config_in(&dir);
    let folder = dir.path().join("stopwords");
    std::fs::create_dir(&folder).unwrap();
    config.custom_stopword_folder = Some(folder);

    let analyzer = TextAnalyzer::from_config(&config).expect("empty folder is fine");
    let record = analyzer.analyze("A bad day.");
    assert_eq!(record.negative_score, 1);
}
