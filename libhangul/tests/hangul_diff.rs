//! Integration tests for Hangul diffing.
//!
//! Covers:
//! - decomposition of syllables, jamo and opaque characters
//! - per-position classification (equal / intermediate / unequal)
//! - liaison lookahead into the untruncated reference
//! - segment invariants (concatenation, maximal runs, tail handling)

use libhangul::{decompose, diff, diff_window, joined_text, Classification, Segment};

fn seg(text: &str, state: Classification) -> Segment {
    Segment::new(text.to_string(), state)
}

// (typed, reference, full_reference)
const CASES: &[(&str, &str, &str)] = &[
    ("가", "가", "가"),
    ("ㅇ", "아", "아"),
    ("나", "가", "가"),
    ("가나", "가", "가"),
    ("머", "먹", "먹고"),
    ("안녀", "안녕", "안녕하세요"),
    ("안녕하세요", "안녕하세요", "안녕하세요"),
    ("하", "한국어", "한국어"),
    ("한국", "한", "한"),
    ("가ab", "가ac", "가ac"),
    ("hello 세상", "hello 세상", "hello 세상"),
    ("나가나다라", "가나다", "가나다"),
    ("읽고", "일고", "일고"),
    ("ㄱㄴㄷ", "가나다라마", "가나다라마바"),
    ("닭고기", "닭고기", "닭고기"),
    ("다고", "닭고기", "닭고기"),
];

#[test]
fn decompose_known_characters() {
    assert!(decompose('a').is_empty());
    assert!(decompose('1').is_empty());
    assert_eq!(decompose('가'), vec!['ㄱ', 'ㅏ']);
    assert_eq!(decompose('값'), vec!['ㄱ', 'ㅏ', 'ㅂ', 'ㅅ']);
    assert_eq!(decompose('ㅇ'), vec!['ㅇ']);
}

#[test]
fn identical_syllable_is_equal() {
    assert_eq!(diff("가", "가", "가", true), vec![seg("가", Classification::Equal)]);
}

#[test]
fn leading_consonant_alone_is_intermediate() {
    // ['ㅇ'] is a prefix of ['ㅇ','ㅏ'] and 아 has no trailing consonant
    assert_eq!(
        diff("ㅇ", "아", "아", true),
        vec![seg("ㅇ", Classification::Intermediate)]
    );
}

#[test]
fn different_leading_consonant_is_unequal() {
    assert_eq!(diff("나", "가", "가", true), vec![seg("나", Classification::Unequal)]);
}

#[test]
fn typed_longer_than_reference_ends_with_unequal_tail() {
    let segs = diff("가나", "가", "가", true);
    assert_eq!(
        segs,
        vec![seg("가", Classification::Equal), seg("나", Classification::Unequal)]
    );
}

#[test]
fn reference_longer_than_typed_ends_with_reference_tail() {
    let segs = diff("가", "가나다", "가나다", true);
    assert_eq!(
        segs,
        vec![seg("가", Classification::Equal), seg("나다", Classification::Unequal)]
    );
}

#[test]
fn empty_inputs_give_empty_result() {
    assert!(diff("", "가", "가", true).is_empty());
    assert!(diff("가", "", "", true).is_empty());
    assert!(diff("", "", "", false).is_empty());
}

#[test]
fn liaison_consonant_moved_to_next_syllable_is_equal() {
    // 먹 = ㅁㅓㄱ; 고 starts with ㄱ, so typing 머 is on track for 머고 → 먹고
    assert_eq!(diff("머", "먹", "먹고", true), vec![seg("머", Classification::Equal)]);
    // 닭 = ㄷㅏㄹㄱ; 고 starts with ㄱ
    assert_eq!(diff("달", "닭", "닭고기", true), vec![seg("달", Classification::Equal)]);
    // shorter prefixes take the same branch
    assert_eq!(diff("ㅁ", "먹", "먹고", true), vec![seg("ㅁ", Classification::Equal)]);
}

#[test]
fn liaison_mismatch_is_unequal() {
    // 어 starts with ㅇ, not ㄱ
    assert_eq!(diff("머", "먹", "먹어", true), vec![seg("머", Classification::Unequal)]);
    // 하 starts with ㅎ, not the ㅇ of 녕
    assert_eq!(
        diff("안녀", "안녕", "안녕하세요", true),
        vec![seg("안", Classification::Equal), seg("녀", Classification::Unequal)]
    );
}

#[test]
fn liaison_needs_a_next_reference_character() {
    // No character after 먹: plain prefix check
    assert_eq!(
        diff("머", "먹", "먹", true),
        vec![seg("머", Classification::Intermediate)]
    );
}

#[test]
fn liaison_ignores_opaque_next_character() {
    assert_eq!(diff("머", "먹", "먹!", true), vec![seg("머", Classification::Unequal)]);
}

#[test]
fn typed_spelling_longer_is_intermediate_without_lookahead() {
    // 안 = ㅇㅏㄴ extends 아 = ㅇㅏ
    assert_eq!(diff("안", "아", "아", true), vec![seg("안", Classification::Intermediate)]);
    assert_eq!(diff("읽", "일", "일", true), vec![seg("읽", Classification::Intermediate)]);
}

#[test]
fn compound_compatibility_jamo_is_atomic() {
    // ㄲ is one component, while 까 spells as ㄱㄱㅏ
    assert_eq!(diff("ㄲ", "까", "까", true), vec![seg("ㄲ", Classification::Unequal)]);
    assert_eq!(diff("ㄱ", "까", "까", true), vec![seg("ㄱ", Classification::Intermediate)]);
}

#[test]
fn opaque_characters_compare_literally() {
    assert_eq!(
        diff("가ab", "가ac", "가ac", true),
        vec![seg("가a", Classification::Equal), seg("b", Classification::Unequal)]
    );
    assert_eq!(
        diff("a", "가", "가", true),
        vec![seg("a", Classification::Unequal)]
    );
}

#[test]
fn runs_restart_with_reference_when_not_preserving_typed() {
    assert_eq!(
        diff("한구", "한국", "한국말", false),
        vec![seg("한", Classification::Equal), seg("국", Classification::Unequal)]
    );
    assert_eq!(
        diff("한구", "한국", "한국말", true),
        vec![seg("한", Classification::Equal), seg("구", Classification::Unequal)]
    );
}

#[test]
fn concatenation_reproduces_inputs() {
    for &(typed, reference, full) in CASES {
        let segs = diff(typed, reference, full, true);
        let typed_len = typed.chars().count();
        let reference_len = reference.chars().count();
        let compared = typed_len.min(reference_len);

        let expected: String = if typed_len >= reference_len {
            typed.to_string()
        } else {
            typed.chars().chain(reference.chars().skip(compared)).collect()
        };
        assert_eq!(joined_text(&segs), expected, "case {typed:?} / {reference:?}");

        if typed_len >= reference_len {
            // the longer input is reproduced exactly
            assert_eq!(joined_text(&segs), typed);
        }
    }
}

#[test]
fn adjacent_segments_never_share_state() {
    for preserve_typed in [true, false] {
        for &(typed, reference, full) in CASES {
            let segs = diff(typed, reference, full, preserve_typed);
            assert!(segs.iter().all(|s| !s.text.is_empty()));
            for pair in segs.windows(2) {
                assert_ne!(
                    pair[0].state, pair[1].state,
                    "case {typed:?} / {reference:?}: {segs:?}"
                );
            }
        }
    }
}

#[test]
fn tail_joins_trailing_unequal_run() {
    // 하 vs 한 is unequal (next 국 does not start with ㄴ), then the tail follows
    assert_eq!(
        diff("하", "한국어", "한국어", true),
        vec![seg("하국어", Classification::Unequal)]
    );
}

#[test]
fn diff_window_uses_full_text_for_lookahead() {
    let full = "먹고 싶다";
    assert_eq!(diff_window("머", full, true), vec![seg("머", Classification::Equal)]);
    assert_eq!(
        diff_window("먹고", full, true),
        vec![seg("먹고", Classification::Equal)]
    );
    assert_eq!(
        diff_window("먹고 싶", full, true),
        vec![seg("먹고 싶", Classification::Equal)]
    );
    // typed past the end of the text
    assert_eq!(
        diff_window("먹고 싶다요", full, true),
        vec![seg("먹고 싶다", Classification::Equal), seg("요", Classification::Unequal)]
    );
}

#[test]
fn typing_keystroke_by_keystroke() {
    let full = "가나다";
    // Each entry is what the input box shows after a keystroke
    let steps = [
        ("ㄱ", Classification::Intermediate),
        ("가", Classification::Equal),
        ("가ㄴ", Classification::Intermediate),
        ("가나", Classification::Equal),
        ("가나ㄷ", Classification::Intermediate),
        ("가나다", Classification::Equal),
    ];
    for (typed, expected) in steps {
        let segs = diff_window(typed, full, true);
        assert_eq!(segs.last().map(|s| s.state), Some(expected), "after {typed:?}");
    }
}

#[test]
fn lookahead_applies_to_any_shorter_prefix() {
    // While composing 한 (ㅎㅏㄴ) with 국 ahead, the partial input is judged by
    // the liaison rule: ㄴ does not start 국, so it reads as a mismatch.
    let full = "한국어";
    for typed in ["ㅎ", "하"] {
        let segs = diff_window(typed, full, true);
        assert_eq!(segs, vec![seg(typed, Classification::Unequal)], "after {typed:?}");
    }
    assert_eq!(diff_window("한", full, true), vec![seg("한", Classification::Equal)]);
    assert_eq!(
        diff_window("한구", full, true),
        vec![seg("한", Classification::Equal), seg("구", Classification::Unequal)]
    );
}
