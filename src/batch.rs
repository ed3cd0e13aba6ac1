//! Tokenización de muchos textos en paralelo con rayon.
//!
//! El tokenizer es puro, así que cada línea se procesa de forma
//! independiente; el resultado conserva el orden de entrada.

use rayon::prelude::*;
use serde::Serialize;

use llmx_core::{token_fingerprint, tokenize, TokenStats, TokenizeMethod};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineReport {
    /// Número de línea, empezando en 1.
    pub line: usize,
    pub stats: TokenStats,
    pub fingerprint: String,
}

pub fn tokenize_lines<S>(lines: &[S], method: TokenizeMethod) -> Vec<LineReport>
    where S: AsRef<str> + Sync
{
    lines.par_iter()
         .enumerate()
         .map(|(i, line)| {
             let text = line.as_ref();
             let tokens = tokenize(text, method);
             LineReport { line: i + 1,
                          stats: TokenStats::from_tokens(method, text, &tokens),
                          fingerprint: token_fingerprint(&tokens) }
         })
         .collect()
}

/// Suma de tokens de todas las líneas.
pub fn total_tokens(reports: &[LineReport]) -> usize {
    reports.iter().map(|r| r.stats.token_count).sum()
}
