use eregex_bytecode::{Colors, RegexOptions};

use super::{MatchPolicy, PrintTracer, VM};

fn trace(pattern: &str, subject: &str, policy: MatchPolicy) -> String {
    let program = eregex_compiler::compile(pattern, RegexOptions::NONE).unwrap();
    let vm = VM::builder(&program).policy(policy).build();
    let mut tracer = PrintTracer::new(&program, Colors::OFF);
    vm.execute_with(subject.as_bytes(), RegexOptions::NONE, &mut tracer)
        .unwrap();
    tracer.into_lines().join("\n")
}

#[test]
fn alternation_backtracks_into_right_branch() {
    insta::assert_snapshot!(trace("a|b", "b", MatchPolicy::LeftmostFirst), @r"
    attempt @0
      00  sp=0  ForkJump     +7 [&09]
          fork  &09
      02  sp=0  Compare      char 'a'
          fail  sp=0
          back  &09 sp=0
      09  sp=0  Compare      char 'b'
      14  sp=1  Exit
    match 0..1
    ");
}

#[test]
fn longest_policy_reports_candidates() {
    insta::assert_snapshot!(trace("a|ab", "ab", MatchPolicy::LeftmostLongest), @r#"
    attempt @0
      00  sp=0  ForkJump     +7 [&09]
          fork  &09
      02  sp=0  Compare      char 'a'
      07  sp=1  Jump         +6 [&15]
      15  sp=1  Exit
          candidate 0..1
          back  &09 sp=0
      09  sp=0  Compare      string "ab"
      15  sp=2  Exit
    match 0..2
    "#);
}

#[test]
fn no_match_has_no_accept_line() {
    let out = trace("a", "b", MatchPolicy::LeftmostFirst);
    assert!(out.ends_with("fail  sp=0"), "{out}");
    assert!(!out.contains("match"), "{out}");
}

#[test]
fn colored_trace() {
    let program = eregex_compiler::compile("a", RegexOptions::NONE).unwrap();
    let mut tracer = PrintTracer::new(&program, Colors::ON);
    VM::new(&program)
        .execute_with(b"a", RegexOptions::NONE, &mut tracer)
        .unwrap();
    assert_eq!(tracer.lines()[0], "\x1b[34mattempt @0\x1b[0m");
    assert!(tracer.lines().iter().any(|l| l.contains("\x1b[32mmatch 0..1")));
}
