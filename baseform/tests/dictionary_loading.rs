use std::io::Write;
use std::path::PathBuf;

use baseform::dictionary::{DictionaryConfig, LemmaDictionary, LoadError, LoadReport};

fn sample_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/de-lemma-sample.txt")
}

#[test]
fn loads_sample_word_list() {
    let dict = LemmaDictionary::open(sample_path(), &DictionaryConfig::default()).unwrap();

    assert_eq!(dict.len(), 27);
    assert_eq!(
        dict.report(),
        &LoadReport {
            lines: 29,
            pairs: 28,
            duplicates: 1,
            malformed: 0,
        }
    );
    assert_eq!(dict.lemma("Ökosteuern"), Some("Ökosteuer"));
    assert_eq!(dict.lookup("Sucht").unwrap(), &["Sucht", "suchen"]);
}

#[test]
fn malformed_lines_are_skipped() {
    let mut tmp = tempfile::NamedTempFile::new().unwrap();
    tmp.write_all(b"Autos\tAuto\r\n").unwrap();
    tmp.write_all(b"nur-ein-feld\r\n").unwrap();
    tmp.write_all(b"\r\n").unwrap();
    tmp.write_all(b"Nudeln\tNudel\tNudeln\n").unwrap();
    tmp.write_all(b"\xFF\xFE\tkaputt\n").unwrap();
    tmp.write_all(b"  gekostet\tkosten  \n").unwrap();
    tmp.write_all(b"\tleer\n").unwrap();
    tmp.write_all(b"hat\thaben").unwrap();
    tmp.flush().unwrap();

    let dict =
        LemmaDictionary::open(tmp.path(), &DictionaryConfig::with_delimiter('\t')).unwrap();

    let surfaces = ["Autos", "gekostet", "hat"];
    assert_eq!(dict.len(), surfaces.len());
    for surface in surfaces {
        assert!(dict.contains(surface), "missing {}", surface);
    }
    assert_eq!(dict.lemma("gekostet"), Some("kosten"));
    assert!(!dict.contains("Nudeln"));
    assert_eq!(dict.report().lines, 8);
    assert_eq!(dict.report().malformed, 4);
}

#[test]
fn missing_resource_is_a_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.txt");

    let err = LemmaDictionary::open(&path, &DictionaryConfig::default()).unwrap_err();
    match err {
        LoadError::NotFound(p) => assert_eq!(p, path),
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn directory_is_not_a_dictionary() {
    let dir = tempfile::tempdir().unwrap();
    assert!(LemmaDictionary::open(dir.path(), &DictionaryConfig::default()).is_err());
}

#[test]
fn loading_is_deterministic() {
    let a = LemmaDictionary::open(sample_path(), &DictionaryConfig::default()).unwrap();
    let b = LemmaDictionary::open(sample_path(), &DictionaryConfig::default()).unwrap();

    for word in ["Sucht", "hat", "die", "Autos", "Fahrrad"] {
        assert_eq!(a.lookup(word), b.lookup(word));
    }
    assert_eq!(a.report(), b.report());
}
