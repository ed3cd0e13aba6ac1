//! Simulador de tokenización con tres métodos (`word`, `subword`,
//! `character`).
//!
//! Todas las funciones son puras y totales: cualquier entrada (incluida la
//! cadena vacía) produce una secuencia válida, posiblemente vacía. Las tablas
//! son constantes, así que es seguro llamar desde varios hilos a la vez.

mod method;
pub mod splitter;
pub mod subword;
mod token;

pub use method::{TokenizeMethod, UnknownMethod};
pub use token::{token_fingerprint, Token, TokenStats};

use splitter::{is_blank, split_segments, Segment};

/// Punto de entrada: despacha al método pedido.
pub fn tokenize(text: &str, method: TokenizeMethod) -> Vec<Token> {
    method.tokenize(text)
}

impl TokenizeMethod {
    pub fn tokenize(self, text: &str) -> Vec<Token> {
        match self {
            TokenizeMethod::Word => tokenize_word(text),
            TokenizeMethod::Subword => tokenize_subword(text),
            TokenizeMethod::Character => tokenize_character(text),
        }
    }
}

/// Palabras y signos de puntuación; los espacios se descartan.
pub fn tokenize_word(text: &str) -> Vec<Token> {
    if is_blank(text) {
        return Vec::new();
    }
    let pieces = split_segments(text).into_iter()
                                     .filter(|s| !matches!(s, Segment::Whitespace(_)))
                                     .map(|s| s.as_str().to_string())
                                     .collect();
    token::number(pieces)
}

/// Un token por code point.
pub fn tokenize_character(text: &str) -> Vec<Token> {
    token::number(text.chars().map(String::from).collect())
}

/// Simulación BPE-like. Los ids se renumeran al final, sea cual sea el número
/// de cortes internos.
pub fn tokenize_subword(text: &str) -> Vec<Token> {
    if is_blank(text) {
        return Vec::new();
    }
    token::number(subword::subword_pieces(text))
}

/// Tokeniza con los tres métodos y resume cada resultado.
pub fn compare_methods(text: &str) -> [TokenStats; 3] {
    TokenizeMethod::ALL.map(|m| TokenStats::from_tokens(m, text, &m.tokenize(text)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn word_method_drops_whitespace_keeps_punctuation() {
        let toks = tokenize("Hello,  world!", TokenizeMethod::Word);
        assert_eq!(texts(&toks), vec!["Hello", ",", "world", "!"]);
        assert_eq!(toks.iter().map(|t| t.id).collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn subword_keeps_whitespace_runs_as_tokens() {
        let toks = tokenize("a  b\nc", TokenizeMethod::Subword);
        assert_eq!(texts(&toks), vec!["a", "  ", "b", "\n", "c"]);
    }

    #[test]
    fn character_counts_code_points() {
        let toks = tokenize("añ👋", TokenizeMethod::Character);
        assert_eq!(texts(&toks), vec!["a", "ñ", "👋"]);
    }

    #[test]
    fn compare_reports_all_methods() {
        let stats = compare_methods("The cat sat.");
        assert_eq!(stats[0].method, TokenizeMethod::Word);
        assert_eq!(stats[0].token_count, 4);
        assert_eq!(stats[2].token_count, 12);
        assert_eq!(stats[2].chars_per_token, 1.0);
    }

    #[test]
    fn empty_text_stats_do_not_divide_by_zero() {
        let stats = compare_methods("");
        assert!(stats.iter().all(|s| s.token_count == 0 && s.chars_per_token == 0.0));
    }
}
