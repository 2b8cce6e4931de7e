/*!
Hangul decomposition - `libhangul/src/hangul.rs`

Purpose
-------
- Spell a Hangul character as the compatibility jamo a learner types on a
  dubeolsik-style keyboard, one keystroke per component.
- Compound letters (ㄲ, ㅘ, ㄳ, ...) are spelled as the two characters typed
  for them (ㄱㄱ, ㅗㅏ, ㄱㅅ) rather than as conjoining jamo, so the spelling
  lines up with what the user actually presses.

Unicode blocks
--------------
- Hangul Syllables U+AC00..=U+D7A3: decomposed through the standard index
  arithmetic (`S = L * 588 + V * 28 + T`).
- Hangul Compatibility Jamo U+3131..=U+3163: a standalone jamo is its own
  single-component spelling.
- Everything else is opaque and spells as an empty sequence.
*/

use libtyping_core::Decomposer;

/// First composed syllable '가'
pub const S_BASE: u32 = 0xAC00;
/// Number of leading consonants (choseong)
pub const L_COUNT: usize = 19;
/// Number of vowels (jungseong)
pub const V_COUNT: usize = 21;
/// Number of trailing consonants (jongseong), including "none" at index 0
pub const T_COUNT: usize = 28;
/// Syllables per leading consonant
pub const N_COUNT: usize = V_COUNT * T_COUNT;
/// Number of composed syllables
pub const S_COUNT: usize = L_COUNT * N_COUNT;

/// First compatibility jamo 'ㄱ'
pub const COMPAT_JAMO_START: u32 = 0x3131;
/// Last modern compatibility vowel 'ㅣ'
pub const COMPAT_JAMO_END: u32 = 0x3163;

const LEADING: [&str; L_COUNT] = [
    "ㄱ", "ㄱㄱ", "ㄴ", "ㄷ", "ㄷㄷ", "ㄹ", "ㅁ", "ㅂ", "ㅂㅂ", "ㅅ", "ㅅㅅ", "ㅇ", "ㅈ", "ㅈㅈ",
    "ㅊ", "ㅋ", "ㅌ", "ㅍ", "ㅎ",
];

const VOWELS: [&str; V_COUNT] = [
    "ㅏ", "ㅐ", "ㅑ", "ㅒ", "ㅓ", "ㅔ", "ㅕ", "ㅖ", "ㅗ", "ㅗㅏ", "ㅗㅐ", "ㅗㅣ", "ㅛ", "ㅜ",
    "ㅜㅓ", "ㅜㅔ", "ㅜㅣ", "ㅠ", "ㅡ", "ㅡㅣ", "ㅣ",
];

// Index 0 is "no trailing consonant" and is never emitted.
const TRAILING: [&str; T_COUNT] = [
    "", "ㄱ", "ㄱㄱ", "ㄱㅅ", "ㄴ", "ㄴㅈ", "ㄴㅎ", "ㄷ", "ㄹ", "ㄹㄱ", "ㄹㅁ", "ㄹㅂ", "ㄹㅅ",
    "ㄹㅌ", "ㄹㅍ", "ㄹㅎ", "ㅁ", "ㅂ", "ㅂㅅ", "ㅅ", "ㅅㅅ", "ㅇ", "ㅈ", "ㅊ", "ㅋ", "ㅌ",
    "ㅍ", "ㅎ",
];

/// Whether `ch` is a composed Hangul syllable (U+AC00..=U+D7A3).
pub fn is_syllable(ch: char) -> bool {
    (ch as u32).wrapping_sub(S_BASE) < S_COUNT as u32
}

/// Whether `ch` is a standalone compatibility jamo (U+3131..=U+3163).
pub fn is_compatibility_jamo(ch: char) -> bool {
    (COMPAT_JAMO_START..=COMPAT_JAMO_END).contains(&(ch as u32))
}

/// Split a composed syllable into (leading, vowel, trailing) table indices.
///
/// Trailing index 0 means the syllable has no trailing consonant. Returns
/// `None` for anything outside the syllable block.
pub fn syllable_indices(ch: char) -> Option<(usize, usize, usize)> {
    if !is_syllable(ch) {
        return None;
    }
    let mut index = (ch as u32 - S_BASE) as usize;
    let leading = index / N_COUNT;
    index %= N_COUNT;
    let vowel = index / T_COUNT;
    let trailing = index % T_COUNT;
    Some((leading, vowel, trailing))
}

fn table_entry<const N: usize>(table: &[&'static str; N], idx: usize) -> &'static str {
    assert!(idx < N, "jamo table index {} out of range 0..{}", idx, N);
    table[idx]
}

/// Spell `ch` as the compatibility jamo typed to produce it.
///
/// - compatibility jamo: `[ch]`
/// - composed syllable: leading + vowel + trailing (if any), compounds as
///   two characters
/// - anything else: empty (opaque)
///
/// ```
/// use libhangul::decompose;
///
/// assert_eq!(decompose('값'), vec!['ㄱ', 'ㅏ', 'ㅂ', 'ㅅ']);
/// assert!(decompose('a').is_empty());
/// ```
pub fn decompose(ch: char) -> Vec<char> {
    if is_compatibility_jamo(ch) {
        return vec![ch];
    }
    let Some((leading, vowel, trailing)) = syllable_indices(ch) else {
        return Vec::new();
    };

    let mut spelling: Vec<char> = table_entry(&LEADING, leading).chars().collect();
    spelling.extend(table_entry(&VOWELS, vowel).chars());
    if trailing != 0 {
        spelling.extend(table_entry(&TRAILING, trailing).chars());
    }
    spelling
}

/// [`Decomposer`] for Hangul text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HangulDecomposer;

impl Decomposer for HangulDecomposer {
    fn decompose(&self, ch: char) -> Vec<char> {
        decompose(ch)
    }
}
