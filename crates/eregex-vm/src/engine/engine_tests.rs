//! VM execution tests, compiling patterns with the real compiler.

use indexmap::IndexMap;

use eregex_bytecode::{Program, RegexOptions};

use super::{FuelLimits, Match, MatchPolicy, RegexResult, RuntimeError, VM};

fn program(pattern: &str) -> Program {
    eregex_compiler::compile(pattern, RegexOptions::NONE)
        .unwrap_or_else(|e| panic!("{pattern:?} failed to compile: {e}"))
}

/// Overall spans of `matches` at offset 0.
fn first(pattern: &str, subject: &str) -> Option<(usize, usize)> {
    let program = program(pattern);
    let result = VM::new(&program)
        .matches(subject, RegexOptions::NONE)
        .expect("execution failed");
    result.first().map(|m| (m.start, m.end))
}

/// Overall spans of every `search` match.
fn all(pattern: &str, subject: &str) -> Vec<(usize, usize)> {
    let program = program(pattern);
    let result = VM::new(&program)
        .search(subject, RegexOptions::NONE)
        .expect("execution failed");
    result.matches.iter().map(|m| (m.start, m.end)).collect()
}

fn groups(pattern: &str, subject: &str) -> Vec<Option<(usize, usize)>> {
    let program = program(pattern);
    let result = VM::new(&program)
        .matches(subject, RegexOptions::NONE)
        .expect("execution failed");
    assert!(result.success, "{pattern:?} did not match {subject:?}");
    result.capture_group_matches[0]
        .iter()
        .map(|g| g.map(|m| (m.start, m.end)))
        .collect()
}

// Repetition

#[test]
fn greedy_star_takes_everything() {
    assert_eq!(first("a*", "aaa"), Some((0, 3)));
}

#[test]
fn lazy_star_takes_nothing() {
    assert_eq!(first("a*?", "aaa"), Some((0, 0)));
}

#[test]
fn lazy_plus_takes_one() {
    assert_eq!(first("a+?", "aaa"), Some((0, 1)));
    assert_eq!(first("a+", "aaa"), Some((0, 3)));
}

#[test]
fn optional() {
    assert_eq!(first("ab?c", "ac"), Some((0, 2)));
    assert_eq!(first("ab?c", "abc"), Some((0, 3)));
    assert_eq!(first("ab??", "ab"), Some((0, 1)));
}

#[test]
fn lazy_star_extends_when_forced() {
    assert_eq!(first("a*?b", "aaab"), Some((0, 4)));
}

#[test]
fn bounded_repetition() {
    assert_eq!(first("a{2,4}", "aaa"), Some((0, 3)));
    assert_eq!(first("a{2,4}", "a"), None);
    assert_eq!(first("a{2,4}", "aaaaa"), Some((0, 4)));
    assert_eq!(first("a{3}", "aaaa"), Some((0, 3)));
    assert_eq!(first("a{2,}", "aaaaa"), Some((0, 5)));
    assert_eq!(first("a{0,2}b", "aab"), Some((0, 3)));
}

#[test]
fn repetition_applies_to_last_character() {
    assert_eq!(first("ab+", "abbb"), Some((0, 4)));
    assert_eq!(first("ab+", "abab"), Some((0, 2)));
}

#[test]
fn multibyte_literal_repeats_as_a_whole() {
    assert_eq!(first("é+", "ééx"), Some((0, 4)));
}

// Alternation and policy

#[test]
fn alternation_prefers_left_branch() {
    assert_eq!(first("a|ab", "ab"), Some((0, 1)));
    assert_eq!(first("ab|a", "ab"), Some((0, 2)));
    assert_eq!(first("x|y|z", "z"), Some((0, 1)));
}

#[test]
fn leftmost_longest_explores_alternatives() {
    let program = program("a|ab|abc?");
    let vm = VM::builder(&program)
        .policy(MatchPolicy::LeftmostLongest)
        .build();
    let result = vm.matches("abcd", RegexOptions::NONE).unwrap();
    assert_eq!(result.first(), Some(Match::new(0, 3)));
}

#[test]
fn leftmost_longest_keeps_groups_of_the_winner() {
    let program = program("(a)|(ab)");
    let vm = VM::builder(&program)
        .policy(MatchPolicy::LeftmostLongest)
        .build();
    let result = vm.matches("ab", RegexOptions::NONE).unwrap();
    assert_eq!(
        result.capture_group_matches,
        vec![vec![None, Some(Match::new(0, 2))]]
    );
}

// Brackets

#[test]
fn bracket_range() {
    for subject in ["a", "b", "c"] {
        assert_eq!(first("[a-c]", subject), Some((0, 1)), "{subject}");
    }
    assert_eq!(first("[a-c]", "d"), None);
}

#[test]
fn negated_bracket() {
    for subject in ["a", "b", "c"] {
        assert_eq!(first("[^a-c]", subject), None, "{subject}");
    }
    assert_eq!(first("[^a-c]", "d"), Some((0, 1)));
    assert_eq!(first("[^a-c]", ""), None);
}

#[test]
fn hyphen_literal_at_edges() {
    assert_eq!(first("[-ac]", "-"), Some((0, 1)));
    assert_eq!(first("[ac-]", "-"), Some((0, 1)));
    assert_eq!(first("[ac-]", "b"), None);
}

#[test]
fn character_classes() {
    assert_eq!(first("[[:digit:]]+", "123x"), Some((0, 3)));
    assert_eq!(first("[[:space:]]", "\x0b"), Some((0, 1)));
    assert_eq!(first("[[:upper:][:digit:]]+", "A1b"), Some((0, 2)));
    assert_eq!(first("[^[:alpha:]]", "a"), None);
}

#[test]
fn any_and_escapes() {
    assert_eq!(first(".", "\n"), Some((0, 1)));
    assert_eq!(first(r"\.", "."), Some((0, 1)));
    assert_eq!(first(r"\.", "x"), None);
    assert_eq!(first(r"a\*", "a*"), Some((0, 2)));
}

#[test]
fn byte_subjects() {
    let program = program(".a");
    let result = VM::new(&program)
        .matches(b"\xffa".as_slice(), RegexOptions::NONE)
        .unwrap();
    assert_eq!(result.first(), Some(Match::new(0, 2)));
}

// Groups

#[test]
fn numbered_groups() {
    assert_eq!(groups("(a)(b)", "ab"), vec![Some((0, 1)), Some((1, 2))]);
}

#[test]
fn non_capturing_group_is_not_numbered() {
    assert_eq!(groups("(?:a)(b)", "ab"), vec![Some((1, 2))]);
}

#[test]
fn group_outside_the_match_path_is_none() {
    assert_eq!(groups("(a)|b", "b"), vec![None]);
}

#[test]
fn repeated_group_keeps_last_iteration() {
    assert_eq!(groups("(a|b)+", "ab"), vec![Some((1, 2))]);
}

#[test]
fn nested_groups() {
    assert_eq!(
        groups("((a)b)", "ab"),
        vec![Some((0, 2)), Some((0, 1))]
    );
}

#[test]
fn failed_branch_does_not_leak_groups() {
    assert_eq!(groups("(a)x|ab", "ab"), vec![None]);
}

#[test]
fn named_groups() {
    let program = program("(?<x>a)");
    let result = VM::new(&program).matches("a", RegexOptions::NONE).unwrap();
    assert_eq!(
        result.named_capture_group_matches,
        vec![IndexMap::from([("x".to_string(), Match::new(0, 1))])]
    );
    assert!(result.capture_group_matches[0].is_empty());
}

#[test]
fn named_group_not_taken_is_absent() {
    let program = program("(?<x>a)|(?<y>b)");
    let result = VM::new(&program).matches("b", RegexOptions::NONE).unwrap();
    assert_eq!(
        result.named_capture_group_matches,
        vec![IndexMap::from([("y".to_string(), Match::new(0, 1))])]
    );
}

#[test]
fn skip_sub_expr_results_drops_groups() {
    let program = program("(a)(?<n>b)");
    let result = VM::new(&program)
        .matches("ab", RegexOptions::SKIP_SUB_EXPR_RESULTS)
        .unwrap();
    assert!(result.success);
    assert!(result.capture_group_matches.is_empty());
    assert!(result.named_capture_group_matches.is_empty());
}

// Anchors

#[test]
fn begin_anchor() {
    assert_eq!(all("^a", "ab"), vec![(0, 1)]);
    assert_eq!(all("^a", "ba"), vec![]);
}

#[test]
fn end_anchor() {
    assert_eq!(all("a$", "aa"), vec![(1, 2)]);
    assert_eq!(all("a$", "ab"), vec![]);
}

#[test]
fn not_begin_of_line() {
    let program = program("^a");
    let vm = VM::new(&program);
    let result = vm
        .matches("a", RegexOptions::MATCH_NOT_BEGIN_OF_LINE)
        .unwrap();
    assert!(!result.success);
}

#[test]
fn not_end_of_line() {
    let program = program("a$");
    let vm = VM::new(&program);
    let result = vm.search("a", RegexOptions::MATCH_NOT_END_OF_LINE).unwrap();
    assert!(!result.success);
}

#[test]
fn search_clears_both_line_flags() {
    let program = program("^a$");
    let both = RegexOptions::MATCH_NOT_BEGIN_OF_LINE | RegexOptions::MATCH_NOT_END_OF_LINE;
    let result = VM::new(&program).search("a", both).unwrap();
    assert!(result.success);
}

#[test]
fn search_clears_line_flags_from_the_program() {
    let both = RegexOptions::MATCH_NOT_BEGIN_OF_LINE | RegexOptions::MATCH_NOT_END_OF_LINE;
    let compiled = eregex_compiler::compile("^a$", both).unwrap();
    let vm = VM::new(&compiled);
    assert!(vm.search("a", RegexOptions::NONE).unwrap().success);
    assert!(!vm.matches("a", RegexOptions::NONE).unwrap().success);

    let half = eregex_compiler::compile("^a$", RegexOptions::MATCH_NOT_BEGIN_OF_LINE).unwrap();
    let result = VM::new(&half)
        .search("a", RegexOptions::MATCH_NOT_END_OF_LINE)
        .unwrap();
    assert!(result.success);
}

// Entry points

#[test]
fn matches_is_anchored_at_offset_zero() {
    assert_eq!(first("b", "ab"), None);
    assert_eq!(first("a", "ab"), Some((0, 1)));
}

#[test]
fn search_collects_non_overlapping_matches() {
    assert_eq!(all("a", "banana"), vec![(1, 2), (3, 4), (5, 6)]);
    assert_eq!(all("ana", "banana"), vec![(1, 4)]);
}

#[test]
fn search_steps_past_empty_matches() {
    assert_eq!(all("x*", "ab"), vec![(0, 0), (1, 1), (2, 2)]);
    assert_eq!(all("a*", "baa"), vec![(0, 0), (1, 3), (3, 3)]);
}

#[test]
fn search_result_shape() {
    let program = program("(a)");
    let result = VM::new(&program).search("aa", RegexOptions::NONE).unwrap();
    assert!(result.success);
    assert_eq!(result.count, 2);
    assert_eq!(result.capture_group_matches.len(), 2);
    assert_eq!(result.capture_group_matches[1], vec![Some(Match::new(1, 2))]);
}

#[test]
fn short_subjects_skip_execution() {
    let program = program("abc");
    let result = VM::new(&program).search("ab", RegexOptions::NONE).unwrap();
    assert_eq!(result, RegexResult::default());
    assert_eq!(result.operations, 0);
}

#[test]
fn has_match() {
    let program = program("a+");
    let vm = VM::new(&program);
    assert_eq!(vm.has_match("aa", RegexOptions::NONE), Ok(true));
    assert_eq!(vm.has_match("ba", RegexOptions::NONE), Ok(false));
}

#[test]
fn operations_are_counted() {
    let program = program("ab");
    let result = VM::new(&program).matches("ab", RegexOptions::NONE).unwrap();
    // Compare, Exit
    assert_eq!(result.operations, 2);
}

#[test]
fn matching_is_deterministic() {
    let program = program("(a|ab)(c|bcd)(d*)");
    let vm = VM::new(&program);
    let a = vm.search("abcdabcd", RegexOptions::NONE).unwrap();
    let b = vm.search("abcdabcd", RegexOptions::NONE).unwrap();
    assert_eq!(a, b);
}

// Limits

#[test]
fn nested_unbounded_repetition_hits_the_fork_limit() {
    let program = program("(a*)*");
    let subject = "a".repeat(64);
    let result = VM::new(&program).matches(&subject, RegexOptions::NONE);
    assert_eq!(result, Err(RuntimeError::ForkLimitExceeded(5000)));
}

#[test]
fn exec_fuel_is_enforced() {
    let program = program("a*");
    let vm = VM::builder(&program)
        .limits(FuelLimits::new().exec_fuel(10))
        .build();
    let result = vm.matches("a".repeat(20), RegexOptions::NONE);
    assert_eq!(result, Err(RuntimeError::ExecFuelExhausted(10)));
}

#[test]
fn fork_limit_is_configurable() {
    let program = program("a*");
    let vm = VM::builder(&program).fork_limit(3).build();
    assert_eq!(
        vm.matches("aaaa", RegexOptions::NONE),
        Err(RuntimeError::ForkLimitExceeded(3))
    );
    assert!(vm.matches("aa", RegexOptions::NONE).is_ok());
}

#[test]
fn long_greedy_run_needs_a_larger_fork_limit() {
    let program = program("a*");
    let subject = "a".repeat(6000);

    let result = VM::new(&program).matches(&subject, RegexOptions::NONE);
    assert_eq!(result, Err(RuntimeError::ForkLimitExceeded(5000)));

    let vm = VM::builder(&program).fork_limit(10_000).build();
    let result = vm.matches(&subject, RegexOptions::NONE).unwrap();
    assert_eq!(result.first(), Some(Match::new(0, 6000)));
}

#[test]
fn limits_defaults() {
    let limits = FuelLimits::default();
    assert_eq!(limits.get_exec_fuel(), 1_000_000);
    assert_eq!(limits.get_fork_limit(), 5000);
}

// Serialization

#[test]
fn result_serializes_to_json() {
    let program = program("(?<word>a)(b)");
    let result = VM::new(&program).matches("ab", RegexOptions::NONE).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["success"], true);
    assert_eq!(json["count"], 1);
    assert_eq!(json["matches"][0]["start"], 0);
    assert_eq!(json["matches"][0]["end"], 2);
    assert_eq!(json["capture_group_matches"][0][0]["start"], 1);
    assert_eq!(json["named_capture_group_matches"][0]["word"]["end"], 1);
}
