//! Simulación BPE-like para el método `subword`.
//!
//! No es un tokenizer real: aplica reglas fijas (palabras comunes, prefijos,
//! sufijos, bisección) que imitan cómo se ven los tokens de un modelo real.

use std::collections::HashSet;

use once_cell::sync::Lazy;

use super::splitter::{split_segments, Segment};
use crate::constants::{AFFIX_MARGIN, COMMON_WORDS, EMOJI_RANGES, PREFIXES, ROOT_BISECT_THRESHOLD, SHORT_WORD_MAX_LEN,
                       SUFFIXES};

static COMMON: Lazy<HashSet<&'static str>> = Lazy::new(|| COMMON_WORDS.iter().copied().collect());

pub fn is_emoji(c: char) -> bool {
    let cp = c as u32;
    EMOJI_RANGES.iter().any(|&(lo, hi)| (lo..=hi).contains(&cp))
}

pub fn is_common_word(word: &str) -> bool {
    COMMON.contains(word.to_lowercase().as_str())
}

/// Compara `chars` con un afijo ASCII ignorando mayúsculas.
fn eq_ignore_case(chars: &[char], affix: &str) -> bool {
    chars.len() == affix.len() && chars.iter().zip(affix.chars()).all(|(c, a)| c.to_lowercase().eq(std::iter::once(a)))
}

/// Divide el texto completo en piezas `subword`, en orden de emisión.
pub fn subword_pieces(text: &str) -> Vec<String> {
    let mut pieces = Vec::new();
    for seg in split_segments(text) {
        match seg {
            // en tokenizers reales el espacio suele ir pegado a la palabra siguiente;
            // aquí se deja visible como token propio
            Segment::Whitespace(ws) => pieces.push(ws.to_string()),
            Segment::Punct(p) => pieces.push(p.to_string()),
            Segment::Text(t) => split_text_with_emoji(t, &mut pieces),
        }
    }
    pieces
}

/// Aísla cada emoji y pasa el texto que lo rodea por `split_word`.
fn split_text_with_emoji(segment: &str, out: &mut Vec<String>) {
    let mut start = 0;
    for (i, c) in segment.char_indices() {
        if is_emoji(c) {
            if i > start {
                split_word(&segment[start..i], out);
            }
            out.push(c.to_string());
            start = i + c.len_utf8();
        }
    }
    if start < segment.len() {
        split_word(&segment[start..], out);
    }
}

/// Parte una palabra plana: atajo común/corta, prefijo, sufijo y bisección de la raíz.
pub fn split_word(word: &str, out: &mut Vec<String>) {
    let chars: Vec<char> = word.chars().collect();
    if is_common_word(word) || chars.len() <= SHORT_WORD_MAX_LEN {
        out.push(word.to_string());
        return;
    }

    let mut rest: &[char] = &chars;

    if let Some(prefix) = PREFIXES.iter()
                                  .find(|p| rest.len() > p.len() + AFFIX_MARGIN && eq_ignore_case(&rest[..p.len()], p))
    {
        out.push(rest[..prefix.len()].iter().collect());
        rest = &rest[prefix.len()..];
    }

    let mut suffix: Option<String> = None;
    if let Some(suf) = SUFFIXES.iter()
                               .find(|s| rest.len() > s.len() + AFFIX_MARGIN && eq_ignore_case(&rest[rest.len() - s.len()..], s))
    {
        let cut = rest.len() - suf.len();
        suffix = Some(rest[cut..].iter().collect());
        rest = &rest[..cut];
    }

    if !rest.is_empty() {
        if rest.len() > ROOT_BISECT_THRESHOLD {
            let mid = rest.len().div_ceil(2);
            out.push(rest[..mid].iter().collect());
            out.push(rest[mid..].iter().collect());
        } else {
            out.push(rest.iter().collect());
        }
    }

    if let Some(s) = suffix {
        out.push(s);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(w: &str) -> Vec<String> {
        let mut out = Vec::new();
        split_word(w, &mut out);
        out
    }

    #[test]
    fn prefix_root_and_suffix() {
        assert_eq!(word("unbelievable"), vec!["un", "believ", "able"]);
        assert_eq!(word("unhelpful"), vec!["un", "help", "ful"]);
    }

    #[test]
    fn suffix_only() {
        assert_eq!(word("pricing"), vec!["pric", "ing"]);
    }

    #[test]
    fn long_root_is_bisected_with_extra_char_first() {
        assert_eq!(word("ChatGPT"), vec!["Chat", "GPT"]);
        assert_eq!(word("abcdefgh"), vec!["abcd", "efgh"]);
    }

    #[test]
    fn affix_matching_ignores_case_but_keeps_it() {
        assert_eq!(word("UNBELIEVABLE"), vec!["UN", "BELIEV", "ABLE"]);
    }

    #[test]
    fn affix_needs_margin() {
        // 5 > 2 + 2: el prefijo sí se separa
        assert_eq!(word("redo"), vec!["redo"]);
        assert_eq!(word("reads"), vec!["re", "ads"]);
    }

    #[test]
    fn emoji_ranges() {
        assert!(is_emoji('👋'));
        assert!(is_emoji('☀'));
        assert!(is_emoji('✂'));
        assert!(!is_emoji('a'));
        assert!(!is_emoji('é'));
    }

    #[test]
    fn common_words_lookup_is_case_insensitive() {
        assert!(is_common_word("The"));
        assert!(is_common_word("HELLO"));
        assert!(!is_common_word("believable"));
    }
}
