use eregex_lib::{Regex, RegexOptions};

use super::exec::render_result;
use super::run_common::{MatchFlags, compile_options};

fn flags() -> MatchFlags {
    MatchFlags {
        global: false,
        not_bol: false,
        not_eol: false,
        longest: false,
        fuel: 1_000_000,
        fork_limit: 5000,
    }
}

#[test]
fn pretty_json() {
    let regex = Regex::new("(a)|b").unwrap();
    let result = regex.search("ab", RegexOptions::NONE).unwrap();

    insta::assert_snapshot!(render_result(&result, true).unwrap(), @r#"
    {
      "success": true,
      "count": 2,
      "matches": [
        {
          "start": 0,
          "end": 1
        },
        {
          "start": 1,
          "end": 2
        }
      ],
      "capture_group_matches": [
        [
          {
            "start": 0,
            "end": 1
          }
        ],
        [
          null
        ]
      ],
      "named_capture_group_matches": [
        {},
        {}
      ],
      "operations": 11
    }
    "#);
}

#[test]
fn compact_json_for_no_match() {
    let regex = Regex::new("abc").unwrap();
    let result = regex.matches("ab", RegexOptions::NONE).unwrap();

    assert_eq!(
        render_result(&result, false).unwrap(),
        r#"{"success":false,"count":0,"matches":[],"capture_group_matches":[],"named_capture_group_matches":[],"operations":0}"#
    );
}

#[test]
fn flags_to_options() {
    assert_eq!(flags().options(), RegexOptions::NONE);

    let anchors = MatchFlags {
        not_bol: true,
        not_eol: true,
        ..flags()
    };
    assert_eq!(
        anchors.options(),
        RegexOptions::MATCH_NOT_BEGIN_OF_LINE | RegexOptions::MATCH_NOT_END_OF_LINE
    );

    let global = MatchFlags {
        global: true,
        ..flags()
    };
    assert!(!global.options().contains(RegexOptions::GLOBAL));
}

#[test]
fn longest_flag_selects_policy() {
    let longest = MatchFlags {
        longest: true,
        ..flags()
    };
    assert_eq!(flags().policy(), eregex_lib::MatchPolicy::LeftmostFirst);
    assert_eq!(longest.policy(), eregex_lib::MatchPolicy::LeftmostLongest);
}

#[test]
fn no_subexpr_compile_option() {
    assert_eq!(compile_options(false), RegexOptions::NONE);
    assert_eq!(compile_options(true), RegexOptions::NO_SUB_EXPRESSIONS);
}
