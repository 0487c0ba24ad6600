//! Unit tests for classification and cursor behaviour.

use rstest::rstest;

use super::{Cursor, TokenKind, classify, unquote};

fn kinds(raw: &str, separator: &str) -> Vec<(TokenKind, String, bool)> {
    classify(raw, separator, false, 1)
        .tokens()
        .map(|token| (token.kind(), token.key().to_owned(), token.no_value()))
        .collect()
}

#[rstest]
#[case("--name", TokenKind::LongOption, "name")]
#[case("-x", TokenKind::ShortOption, "x")]
#[case("value", TokenKind::PositionalValue, "")]
#[case("--", TokenKind::Sentinel, "")]
#[case("-", TokenKind::MalformedOption, "")]
#[case("---name", TokenKind::MalformedOption, "")]
#[case("--=oops", TokenKind::MalformedOption, "")]
#[case("-ab=1", TokenKind::MalformedOption, "")]
fn classifies_single_tokens(#[case] raw: &str, #[case] kind: TokenKind, #[case] key: &str) {
    assert_eq!(kinds(raw, "="), vec![(kind, key.to_owned(), false)]);
}

#[test]
fn long_option_with_separator_fuses_value() {
    let classification = classify("--name='Ann Lee'", "=", false, 3);
    let option = classification.tokens().next().expect("option token");
    assert_eq!(option.raw(), "--name");
    assert_eq!(option.source(), "--name='Ann Lee'");
    let value = option.fused_value().expect("fused value");
    assert_eq!(value.kind(), TokenKind::PositionalValue);
    assert_eq!(value.raw(), "'Ann Lee'");
    assert_eq!(value.value_text(), "Ann Lee");
    assert_eq!(value.sequence(), 3);
}

#[test]
fn custom_separator_is_honoured() {
    assert_eq!(
        kinds("--level:3", ":"),
        vec![(TokenKind::LongOption, "level".to_owned(), false)]
    );
    assert_eq!(
        kinds("--level=3", ":"),
        vec![(TokenKind::LongOption, "level=3".to_owned(), false)]
    );
}

#[test]
fn short_option_may_fuse_value() {
    let classification = classify("-o=out.txt", "=", false, 1);
    let option = classification.tokens().next().expect("option token");
    assert_eq!(option.key(), "o");
    assert_eq!(option.fused_value().map(|v| v.raw()), Some("out.txt"));
}

#[test]
fn short_cluster_marks_all_but_last() {
    assert_eq!(
        kinds("-abc", "="),
        vec![
            (TokenKind::ShortOption, "a".to_owned(), true),
            (TokenKind::ShortOption, "b".to_owned(), true),
            (TokenKind::ShortOption, "c".to_owned(), false),
        ]
    );
}

#[rstest]
#[case("--name")]
#[case("-abc")]
#[case("--")]
fn only_values_mode_forces_positionals(#[case] raw: &str) {
    let classification = classify(raw, "=", true, 1);
    assert_eq!(classification.len(), 1);
    assert!(
        classification
            .tokens()
            .all(|token| token.kind() == TokenKind::PositionalValue && token.raw() == raw)
    );
}

#[rstest]
#[case("--name=Ann")]
#[case("-xyz")]
#[case("'quoted'")]
fn classification_is_idempotent(#[case] raw: &str) {
    assert_eq!(classify(raw, "=", false, 4), classify(raw, "=", false, 4));
}

#[rstest]
#[case("'a'", "a")]
#[case("\"a b\"", "a b")]
#[case("'", "'")]
#[case("'a\"", "'a\"")]
#[case("plain", "plain")]
fn unquote_strips_one_matching_pair(#[case] raw: &str, #[case] expected: &str) {
    assert_eq!(unquote(raw), expected);
}

#[test]
fn sequence_counts_arguments_not_cluster_members() {
    let mut cursor = Cursor::new(["-ab", "file"], "=");
    let seqs: Vec<_> = std::iter::from_fn(|| cursor.next())
        .map(|token| (token.raw().to_owned(), token.sequence()))
        .collect();
    assert_eq!(
        seqs,
        [("-a".to_owned(), 1), ("-b".to_owned(), 1), ("file".to_owned(), 2)]
    );
}

#[test]
fn rollback_is_one_level_only() {
    let mut cursor = Cursor::new(["a", "b", "c"], "=");
    assert!(!cursor.rollback());
    cursor.next();
    cursor.next();
    assert!(cursor.rollback());
    assert!(!cursor.rollback());
    assert_eq!(cursor.next().map(|t| t.raw().to_owned()).as_deref(), Some("b"));
    assert_eq!(cursor.next().map(|t| t.raw().to_owned()).as_deref(), Some("c"));
    assert_eq!(cursor.sequence(), 3);
}

#[test]
fn fused_value_is_read_next_and_can_be_skipped() {
    let mut cursor = Cursor::new(["--name=Ann", "--flag=on", "rest"], "=");
    let name = cursor.next().expect("name option");
    assert_eq!(name.key(), "name");
    assert_eq!(cursor.known_option_argument().map(|t| t.raw()), Some("Ann"));
    assert_eq!(cursor.next().map(|t| t.raw().to_owned()).as_deref(), Some("Ann"));
    assert!(cursor.known_option_argument().is_none());

    cursor.next();
    assert_eq!(cursor.skip_known_option_argument().map(|t| t.raw().to_owned()).as_deref(), Some("on"));
    assert_eq!(cursor.next().map(|t| t.raw().to_owned()).as_deref(), Some("rest"));
}

#[test]
fn rolled_back_option_restores_its_fused_value() {
    let mut cursor = Cursor::new(["--flag=on"], "=");
    cursor.next();
    cursor.skip_known_option_argument();
    cursor.rollback();
    cursor.next();
    assert_eq!(cursor.known_option_argument().map(|t| t.raw()), Some("on"));
}

#[test]
fn sentinel_switches_to_values() {
    let mut cursor = Cursor::new(["--", "--name", "-x"], "=");
    assert_eq!(cursor.next().map(|t| t.kind()), Some(TokenKind::Sentinel));
    assert!(cursor.only_values());
    assert_eq!(cursor.next().map(|t| t.kind()), Some(TokenKind::PositionalValue));
    assert_eq!(cursor.next().map(|t| t.kind()), Some(TokenKind::PositionalValue));
    assert!(cursor.next().is_none());
}

#[test]
fn remaining_renders_unread_state() {
    let mut cursor = Cursor::new(["-abc", "--name=Ann", "tail"], "=");
    cursor.next();
    assert_eq!(cursor.clone().into_remaining(), ["-b", "-c", "--name=Ann", "tail"]);

    cursor.next();
    cursor.next();
    cursor.next();
    cursor.rollback();
    assert_eq!(cursor.into_remaining(), ["--name=Ann", "tail"]);
}
