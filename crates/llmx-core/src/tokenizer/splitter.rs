//! Splitter compartido por los métodos `word` y `subword`.
//!
//! Parte el texto en tramos de tres clases: texto plano, corridas de espacio
//! en blanco y signos de puntuación sueltos. Los delimitadores se conservan;
//! cada método decide qué hacer con ellos.
//!
//! "Espacio en blanco" es el conjunto de `\s` en expresiones regulares
//! ECMAScript: incluye U+FEFF (BOM) y excluye U+0085 (NEL), al revés que
//! `char::is_whitespace`.

use crate::constants::PUNCTUATION;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Tramo sin espacios ni puntuación.
    Text(&'a str),
    /// Corrida maximal de espacio en blanco (uno o más caracteres).
    Whitespace(&'a str),
    /// Un único signo de puntuación.
    Punct(&'a str),
}

impl<'a> Segment<'a> {
    pub fn as_str(&self) -> &'a str {
        match self {
            Segment::Text(s) | Segment::Whitespace(s) | Segment::Punct(s) => s,
        }
    }
}

pub fn is_space(c: char) -> bool {
    match c {
        '\u{FEFF}' => true,
        '\u{0085}' => false,
        _ => c.is_whitespace(),
    }
}

/// Vacío o sólo espacio en blanco.
pub fn is_blank(text: &str) -> bool {
    text.chars().all(is_space)
}

pub fn is_punctuation(c: char) -> bool {
    PUNCTUATION.contains(&c)
}

/// Recorre `text` y devuelve sus tramos en orden. Concatenarlos reconstruye
/// `text` exactamente; nunca hay tramos vacíos.
pub fn split_segments(text: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut text_start: Option<usize> = None;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if is_space(c) {
            if let Some(s) = text_start.take() {
                out.push(Segment::Text(&text[s..i]));
            }
            let mut end = i + c.len_utf8();
            while let Some(&(j, n)) = chars.peek() {
                if !is_space(n) {
                    break;
                }
                end = j + n.len_utf8();
                chars.next();
            }
            out.push(Segment::Whitespace(&text[i..end]));
        } else if is_punctuation(c) {
            if let Some(s) = text_start.take() {
                out.push(Segment::Text(&text[s..i]));
            }
            out.push(Segment::Punct(&text[i..i + c.len_utf8()]));
        } else if text_start.is_none() {
            text_start = Some(i);
        }
    }
    if let Some(s) = text_start {
        out.push(Segment::Text(&text[s..]));
    }
    out
}
