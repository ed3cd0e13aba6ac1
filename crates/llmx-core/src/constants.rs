//! Constantes del core.
//!
//! Las tablas del tokenizer son cerradas: cambiarlas cambia la salida de
//! `tokenize` y por tanto los fingerprints de secuencias ya mostradas.

/// Versión lógica del sequencer. Se incluye en el hash de la definición para
/// que un cambio incompatible invalide hashes anteriores.
pub const SEQUENCER_VERSION: &str = "P1.0";

/// Signos de puntuación que el splitter aísla como tokens propios.
pub const PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':', '\'', '"', '(', ')', '[', ']', '{', '}'];

/// Palabras frecuentes que nunca se parten en modo subword (se comparan en minúsculas).
pub const COMMON_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for",
    "of", "with", "by", "from", "as", "is", "was", "are", "were", "been",
    "be", "have", "has", "had", "do", "does", "did", "will", "would", "could",
    "should", "may", "might", "must", "shall", "can", "need", "dare", "ought",
    "used", "this", "that", "these", "those", "it", "its", "he", "she", "they",
    "we", "you", "i", "me", "him", "her", "us", "them", "my", "your", "his",
    "our", "their", "what", "which", "who", "whom", "whose", "where", "when",
    "why", "how", "all", "each", "every", "both", "few", "more", "most", "other",
    "some", "such", "no", "nor", "not", "only", "same", "so", "than", "too",
    "very", "just", "hello", "world", "hi", "yes", "please", "thank",
    "thanks", "sorry", "good", "great", "nice", "okay", "ok", "well", "now",
    "here", "there", "then", "today", "if", "else", "while", "let", "cat",
    "sat", "mat", "dog", "ran", "fast",
];

/// Prefijos conocidos, en orden de prueba (gana el primero que aplique).
pub const PREFIXES: &[&str] = &["un", "re", "pre", "dis", "mis", "non", "anti", "auto", "semi"];

/// Sufijos conocidos, en orden de prueba (gana el primero que aplique).
pub const SUFFIXES: &[&str] = &[
    "ing", "ed", "er", "est", "ly", "tion", "sion", "ness", "ment", "able", "ible", "ful", "less", "ous", "ive", "al",
    "ial",
];

/// Rangos de code points tratados como emoji (inclusivos).
pub const EMOJI_RANGES: &[(u32, u32)] = &[
    (0x1F300, 0x1F9FF),
    (0x2600, 0x26FF),
    (0x2700, 0x27BF),
    (0x1F600, 0x1F64F),
    (0x1F680, 0x1F6FF),
];

/// Palabras de hasta esta longitud (en caracteres) no se parten.
pub const SHORT_WORD_MAX_LEN: usize = 4;

/// Raíces más largas que esto se biseccionan.
pub const ROOT_BISECT_THRESHOLD: usize = 6;

/// Margen mínimo que debe quedar al separar un afijo (longitud del afijo + este valor).
pub const AFFIX_MARGIN: usize = 2;
