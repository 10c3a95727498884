use indoc::indoc;

use crate::{Colors, Error, ErrorKind, Match, MatchPolicy, Regex, RegexOptions, RuntimeError};

#[test]
fn new_compiles_with_defaults() {
    let re = Regex::new("a(b)c").unwrap();

    assert_eq!(re.pattern(), "a(b)c");
    assert_eq!(re.captures_len(), 1);
    assert_eq!(re.policy(), MatchPolicy::LeftmostFirst);
    assert_eq!(re.limits().get_exec_fuel(), 1_000_000);
    assert_eq!(re.program().options(), RegexOptions::NONE);
}

#[test]
fn compile_error_is_wrapped() {
    let err = Regex::new("a{2,1}").unwrap_err();

    let Error::Compile(compile) = &err else {
        panic!("expected a compile error, got {err:?}");
    };
    assert_eq!(compile.kind(), ErrorKind::InvalidBraceContent);
    assert_eq!(compile.span(), 1..6);
    assert_eq!(err.to_string(), "invalid content inside braces at position 1");
}

#[test]
fn runtime_error_is_wrapped() {
    let re = Regex::builder("(a|b)*c").exec_fuel(5).build().unwrap();

    let err = re.matches("ababab", RegexOptions::NONE).unwrap_err();
    assert_eq!(err, Error::Runtime(RuntimeError::ExecFuelExhausted(5)));
}

#[test]
fn matches_is_anchored_at_start() {
    let re = Regex::new("b+").unwrap();

    assert!(!re.matches("abb", RegexOptions::NONE).unwrap().success);
    assert_eq!(
        re.matches("bbc", RegexOptions::NONE).unwrap().matches,
        vec![Match::new(0, 2)]
    );
}

#[test]
fn search_finds_every_match() {
    let re = Regex::new("[0-9]+").unwrap();
    let subject = "a1 b22 c333";

    let result = re.search(subject, RegexOptions::NONE).unwrap();
    let found: Vec<&[u8]> = result
        .matches
        .iter()
        .map(|m| m.slice(subject.as_bytes()))
        .collect();
    assert_eq!(found, vec![&b"1"[..], b"22", b"333"]);
}

#[test]
fn has_match() {
    let re = Regex::new("(x)y").unwrap();

    assert_eq!(re.has_match("xy", RegexOptions::NONE), Ok(true));
    assert_eq!(re.has_match("yx", RegexOptions::NONE), Ok(false));
}

#[test]
fn compile_options_apply_to_every_call() {
    let re = Regex::compile("(a)b", RegexOptions::NO_SUB_EXPRESSIONS).unwrap();

    let result = re.matches("ab", RegexOptions::NONE).unwrap();
    assert_eq!(re.captures_len(), 0);
    assert_eq!(result.capture_group_matches, vec![Vec::<Option<Match>>::new()]);
}

#[test]
fn search_drops_compiled_line_exclusions() {
    let both = RegexOptions::MATCH_NOT_BEGIN_OF_LINE | RegexOptions::MATCH_NOT_END_OF_LINE;
    let re = Regex::compile("^a$", both).unwrap();

    let result = re.search("a", RegexOptions::NONE).unwrap();
    assert_eq!(result.matches, vec![Match::new(0, 1)]);
}

#[test]
fn longest_policy() {
    let first = Regex::new("a|ab").unwrap();
    let longest = Regex::builder("a|ab").longest().build().unwrap();

    let span = |re: &Regex| re.matches("ab", RegexOptions::NONE).unwrap().matches;
    assert_eq!(span(&first), vec![Match::new(0, 1)]);
    assert_eq!(span(&longest), vec![Match::new(0, 2)]);
}

#[test]
fn fork_limit_from_builder() {
    let re = Regex::builder("a*").fork_limit(2).build().unwrap();

    let err = re.matches("aaa", RegexOptions::NONE).unwrap_err();
    assert_eq!(err, Error::Runtime(RuntimeError::ForkLimitExceeded(2)));
}

#[test]
fn group_names_in_pattern_order() {
    let re = Regex::new("(?<year>[0-9]+)-(?<month>[0-9]+)").unwrap();

    assert_eq!(re.group_names().collect::<Vec<_>>(), vec!["year", "month"]);

    let result = re.matches("2024-05", RegexOptions::NONE).unwrap();
    let named = &result.named_capture_group_matches[0];
    assert_eq!(named["year"], Match::new(0, 4));
    assert_eq!(named["month"], Match::new(5, 7));
}

#[test]
fn dump() {
    let re = Regex::new("a|b").unwrap();

    insta::assert_snapshot!(re.dump(Colors::OFF), @r"
    [header]
    groups = 0
    named = 0
    min_len = 1
    options = none

    [code]
      00  ForkJump     +7 [&09]
      02  Compare      char 'a'
      07  Jump         +5 [&14]
      09  Compare      char 'b'
      14  Exit
    ");
}

#[test]
fn trace_returns_lines_and_outcome() {
    let re = Regex::new("ab").unwrap();

    let (lines, outcome) = re.trace("ab", RegexOptions::NONE, Colors::OFF);
    assert!(outcome.unwrap().success);
    assert_eq!(
        lines.join("\n"),
        indoc! {r#"
            attempt @0
              00  sp=0  Compare      string "ab"
              06  sp=2  Exit
            match 0..2"#}
    );
}

#[test]
fn result_serializes_to_json() {
    let re = Regex::new("(a)").unwrap();
    let result = re.matches("a", RegexOptions::NONE).unwrap();

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["matches"][0]["end"], 1);
    assert_eq!(json["capture_group_matches"][0][0]["start"], 0);
}
