use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Estrategia de segmentación.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenizeMethod {
    Word,
    #[default]
    Subword,
    Character,
}

impl TokenizeMethod {
    pub const ALL: [TokenizeMethod; 3] = [TokenizeMethod::Word, TokenizeMethod::Subword, TokenizeMethod::Character];

    pub fn as_str(&self) -> &'static str {
        match self {
            TokenizeMethod::Word => "word",
            TokenizeMethod::Subword => "subword",
            TokenizeMethod::Character => "character",
        }
    }
}

impl fmt::Display for TokenizeMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tokenize method '{0}' (expected word, subword or character)")]
pub struct UnknownMethod(pub String);

impl FromStr for TokenizeMethod {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "word" => Ok(TokenizeMethod::Word),
            "subword" => Ok(TokenizeMethod::Subword),
            "character" | "char" => Ok(TokenizeMethod::Character),
            other => Err(UnknownMethod(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("Subword".parse::<TokenizeMethod>(), Ok(TokenizeMethod::Subword));
        assert_eq!("char".parse::<TokenizeMethod>(), Ok(TokenizeMethod::Character));
        assert!("bpe".parse::<TokenizeMethod>().is_err());
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&TokenizeMethod::Word).unwrap(), "\"word\"");
        assert_eq!(TokenizeMethod::default(), TokenizeMethod::Subword);
    }
}
