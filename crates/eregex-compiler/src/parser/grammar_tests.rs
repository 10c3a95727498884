use eregex_bytecode::RegexOptions;

use crate::test_utils::{dump_pattern, dump_pattern_with, min_len};

#[test]
fn ordinary_run_is_one_string() {
    insta::assert_snapshot!(dump_pattern("abc"), @r#"
    [header]
    groups = 0
    named = 0
    min_len = 3
    options = none

    [literals]
    L0 "abc"

    [code]
      00  Compare      string "abc"
      06  Exit
    "#);
}

#[test]
fn repetition_binds_to_last_character() {
    insta::assert_snapshot!(dump_pattern("ab*"), @r"
    [header]
    groups = 0
    named = 0
    min_len = 1
    options = none

    [code]
      00  Compare      char 'a'
      05  ForkJump     +7 [&14]
      07  Compare      char 'b'
      12  Jump         -9 [&05]
      14  Exit
    ");
}

#[test]
fn alternation() {
    insta::assert_snapshot!(dump_pattern("a|bc"), @r#"
    [header]
    groups = 0
    named = 0
    min_len = 1
    options = none

    [literals]
    L0 "bc"

    [code]
      00  ForkJump     +7 [&09]
      02  Compare      char 'a'
      07  Jump         +6 [&15]
      09  Compare      string "bc"
      15  Exit
    "#);
}

#[test]
fn numbered_and_named_groups() {
    insta::assert_snapshot!(dump_pattern("(a)(?<x>b)"), @r#"
    [header]
    groups = 1
    named = 1
    min_len = 2
    options = none

    [literals]
    L0 "x"

    [code]
      00  SaveLeftCaptureGroup #0
      02  Compare      char 'a'
      07  SaveRightCaptureGroup #0
      09  SaveLeftNamedCaptureGroup "x"
      12  Compare      char 'b'
      17  SaveRightNamedCaptureGroup "x"
      20  Exit
    "#);
}

#[test]
fn lazy_plus_forks_back_with_low_priority() {
    insta::assert_snapshot!(dump_pattern("a+?"), @r"
    [header]
    groups = 0
    named = 0
    min_len = 1
    options = none

    [code]
      00  Compare      char 'a'
      05  ForkJump     -7 [&00]
      07  Exit
    ");
}

#[test]
fn bounded_repetition() {
    insta::assert_snapshot!(dump_pattern("a{2,3}"), @r"
    [header]
    groups = 0
    named = 0
    min_len = 2
    options = none

    [code]
      00  Compare      char 'a'
      05  Compare      char 'a'
      10  ForkJump     +5 [&17]
      12  Compare      char 'a'
      17  Exit
    ");
}

#[test]
fn anchors_and_any() {
    insta::assert_snapshot!(dump_pattern("^a.$"), @r"
    [header]
    groups = 0
    named = 0
    min_len = 2
    options = none

    [code]
      00  CheckBegin
      01  Compare      char 'a'
      06  Compare      any
      10  CheckEnd
      11  Exit
    ");
}

#[test]
fn no_sub_expressions_drops_group_saves() {
    insta::assert_snapshot!(dump_pattern_with("(a)", RegexOptions::NO_SUB_EXPRESSIONS), @r"
    [header]
    groups = 0
    named = 0
    min_len = 1
    options = no_subexpr

    [code]
      00  Compare      char 'a'
      05  Exit
    ");
}

#[test]
fn escape_is_literal() {
    let out = dump_pattern(r"\.\n");
    assert!(out.contains("char '.'"), "{out}");
    assert!(out.contains("char 'n'"), "{out}");
}

#[test]
fn group_ids_follow_open_parens() {
    let out = dump_pattern("((a)(b))");
    let saves: Vec<_> = out
        .lines()
        .filter(|l| l.contains("SaveLeftCaptureGroup"))
        .map(|l| l.trim_start().split_once("  ").map(|(_, rest)| rest.to_string()))
        .collect();
    assert_eq!(
        saves,
        vec![
            Some("SaveLeftCaptureGroup #0".to_string()),
            Some("SaveLeftCaptureGroup #1".to_string()),
            Some("SaveLeftCaptureGroup #2".to_string()),
        ]
    );
}

#[test]
fn non_capturing_group_has_no_saves() {
    let out = dump_pattern("(?:ab)+");
    assert!(!out.contains("Save"), "{out}");
    assert!(out.contains("groups = 0"), "{out}");
}

#[test]
fn zero_repetition_is_empty() {
    let out = dump_pattern("a{0}b");
    assert!(!out.contains("char 'a'"), "{out}");
    assert!(out.contains("char 'b'"), "{out}");
}

#[test]
fn minimum_lengths() {
    assert_eq!(min_len("abc"), 3);
    assert_eq!(min_len("a|bc"), 1);
    assert_eq!(min_len("a*b"), 1);
    assert_eq!(min_len("(ab){2,3}"), 4);
    assert_eq!(min_len("(ab){2,}"), 4);
    assert_eq!(min_len("a{0}"), 0);
    assert_eq!(min_len("x?y+"), 1);
    assert_eq!(min_len("é"), 2);
    assert_eq!(min_len("[é]"), 1);
    assert_eq!(min_len("[^a]"), 1);
    assert_eq!(min_len("^$"), 0);
}

#[test]
fn lexically_special_characters_are_ordinary_outside_brackets() {
    let out = dump_pattern("a,b-c:d=e/f");
    assert!(out.contains(r#"string "a,b-c:d=e/f""#), "{out}");
}
