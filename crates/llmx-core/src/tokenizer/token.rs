use serde::{Deserialize, Serialize};
use serde_json::json;

use super::method::TokenizeMethod;
use crate::hashing::hash_value;

/// Un token producido por `tokenize`. `id` es la posición (0-based) dentro de
/// la secuencia de esa llamada, no un identificador global.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub id: usize,
}

impl Token {
    pub fn new(text: impl Into<String>, id: usize) -> Self {
        Self { text: text.into(), id }
    }

    /// Verdadero para tokens formados sólo por espacio en blanco.
    pub fn is_whitespace(&self) -> bool {
        !self.text.is_empty() && self.text.chars().all(super::splitter::is_space)
    }
}

/// Numera piezas en orden de emisión.
pub(crate) fn number(pieces: Vec<String>) -> Vec<Token> {
    pieces.into_iter().enumerate().map(|(id, text)| Token { text, id }).collect()
}

/// Fingerprint de una secuencia: igual para secuencias iguales (textos, ids y orden).
pub fn token_fingerprint(tokens: &[Token]) -> String {
    let arr: Vec<_> = tokens.iter().map(|t| json!({ "id": t.id, "text": t.text })).collect();
    hash_value(&json!(arr))
}

/// Resumen de una tokenización, usado para comparar métodos sobre un mismo texto.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenStats {
    pub method: TokenizeMethod,
    pub token_count: usize,
    pub char_count: usize,
    /// Caracteres por token; 0.0 si no hay tokens.
    pub chars_per_token: f64,
}

impl TokenStats {
    pub fn from_tokens(method: TokenizeMethod, text: &str, tokens: &[Token]) -> Self {
        let char_count = text.chars().count();
        let token_count = tokens.len();
        let chars_per_token = if token_count == 0 { 0.0 } else { char_count as f64 / token_count as f64 };
        Self { method, token_count, char_count, chars_per_token }
    }
}
