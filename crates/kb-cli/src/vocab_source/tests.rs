use std::fs;

use super::*;

#[test]
fn parses_entries_in_order() {
    let text = "cat\t10\ncar\t20\ncart\t5\n";
    let terms = parse_vocabulary(text).unwrap();
    assert_eq!(
        terms,
        vec![
            WeightedTerm::new("cat", 10),
            WeightedTerm::new("car", 20),
            WeightedTerm::new("cart", 5),
        ]
    );
}

#[test]
fn skips_comments_and_blank_lines() {
    let text = "# English starter list\n\nthe\t100\n   \n# end\n";
    let terms = parse_vocabulary(text).unwrap();
    assert_eq!(terms, vec![WeightedTerm::new("the", 100)]);
}

#[test]
fn tolerates_crlf_and_padding() {
    let terms = parse_vocabulary("año\t 3\r\ncalle \t50\r\n").unwrap();
    assert_eq!(
        terms,
        vec![WeightedTerm::new("año", 3), WeightedTerm::new("calle", 50)]
    );
}

#[test]
fn missing_tab_reports_line() {
    let err = parse_vocabulary("ok\t1\nbroken 2\n").unwrap_err();
    match err {
        VocabSourceError::Parse { line, .. } => assert_eq!(line, 2),
        other => panic!("expected Parse, got {other:?}"),
    }
}

#[test]
fn negative_weight_rejected() {
    let err = parse_vocabulary("word\t-4\n").unwrap_err();
    assert!(err.to_string().starts_with("line 1: invalid weight"));
}

#[test]
fn empty_term_rejected() {
    let err = parse_vocabulary("\t4\n").unwrap_err();
    assert!(err.to_string().contains("empty term"));
}

#[test]
fn read_language_uses_file_stem() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("español.tsv");
    fs::write(&path, "casa\t8\ncalle\t9\n").unwrap();

    let lang = read_language(&path).unwrap();
    assert_eq!(lang.name, "español");
    assert_eq!(lang.vocabulary.len(), 2);
}

#[test]
fn read_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_vocabulary(&dir.path().join("missing.tsv")).unwrap_err();
    assert!(matches!(err, VocabSourceError::Io(_)));
}
