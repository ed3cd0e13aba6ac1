//! Streaming simulado.
//!
//! No hay modelo: la respuesta se elige por palabra clave del prompt y se
//! emite token a token con una pausa que crece con la temperatura,
//! `100 + U[0,1) * 100 * (1 + temperature)` milisegundos.

use std::time::Duration;

use chrono::{DateTime, Utc};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use llmx_core::Token;

const BASE_DELAY_MS: f64 = 100.0;
const JITTER_MS: f64 = 100.0;

const HAIKU: &[&str] = &["Silent", " ", "keys", " ", "click", " ", "soft", "\n", "Logic", " ", "flows", " ", "through",
                         " ", "tired", " ", "mind", "\n", "Bug", " ", "fixed", " ", "at", " ", "last"];

const QUANTUM: &[&str] = &["Quantum", " ", "computing", " ", "uses", " ", "qubits", " ", "that", " ", "can", " ", "be",
                           " ", "0", ",", " ", "1", ",", " ", "or", " ", "both", " ", "at", " ", "once", ".", " ",
                           "This", " ", "lets", " ", "them", " ", "solve", " ", "certain", " ", "problems", " ",
                           "much", " ", "faster", "."];

const JOKE: &[&str] = &["Why", " ", "do", " ", "programmers", " ", "prefer", " ", "dark", " ", "mode", "?", "\n",
                        "Because", " ", "light", " ", "attracts", " ", "bugs", "!"];

const MEANING: &[&str] = &["The", " ", "meaning", " ", "of", " ", "life", " ", "is", " ", "a", " ", "deeply", " ",
                           "personal", " ", "question", ".", " ", "Many", " ", "find", " ", "it", " ", "in", " ",
                           "connection", ",", " ", "growth", ",", " ", "and", " ", "purpose", "."];

const DEFAULT: &[&str] = &["I", "'", "m", " ", "an", " ", "AI", " ", "assistant", ".", " ", "I", " ", "process", " ",
                           "text", " ", "token", " ", "by", " ", "token", ",", " ", "predicting", " ", "what", " ",
                           "comes", " ", "next", "."];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptedResponse {
    Haiku,
    Quantum,
    Joke,
    Meaning,
    Default,
}

impl ScriptedResponse {
    /// Primera palabra clave contenida en el prompt (sin distinguir
    /// mayúsculas), en el orden haiku, quantum, joke, meaning.
    pub fn for_prompt(prompt: &str) -> Self {
        let lower = prompt.to_lowercase();
        [("haiku", Self::Haiku), ("quantum", Self::Quantum), ("joke", Self::Joke), ("meaning", Self::Meaning)]
            .into_iter()
            .find(|(keyword, _)| lower.contains(keyword))
            .map_or(Self::Default, |(_, response)| response)
    }

    pub fn tokens(&self) -> &'static [&'static str] {
        match self {
            Self::Haiku => HAIKU,
            Self::Quantum => QUANTUM,
            Self::Joke => JOKE,
            Self::Meaning => MEANING,
            Self::Default => DEFAULT,
        }
    }

    pub fn text(&self) -> String {
        self.tokens().concat()
    }
}

pub struct ScriptedResponder {
    temperature: f64,
    rng: StdRng,
}

impl ScriptedResponder {
    pub fn new(temperature: f64) -> Self {
        Self { temperature: temperature.max(0.0),
               rng: StdRng::from_entropy() }
    }

    /// Secuencia de pausas reproducible.
    pub fn with_seed(temperature: f64, seed: u64) -> Self {
        Self { temperature: temperature.max(0.0),
               rng: StdRng::seed_from_u64(seed) }
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Cota superior (exclusiva) de la pausa entre tokens.
    pub fn max_delay(&self) -> Duration {
        millis(BASE_DELAY_MS + JITTER_MS * (1.0 + self.temperature))
    }

    pub fn next_delay(&mut self) -> Duration {
        let jitter: f64 = self.rng.gen::<f64>() * JITTER_MS * (1.0 + self.temperature);
        millis(BASE_DELAY_MS + jitter)
    }

    /// Lanza la emisión en una tarea tokio. Un prompt en blanco no genera nada y devuelve `None`.
    /// Las pausas se sortean por adelantado, así que el responder queda libre.
    pub fn generate(&mut self, prompt: &str) -> Option<TokenStream> {
        if prompt.trim().is_empty() {
            return None;
        }
        let response = ScriptedResponse::for_prompt(prompt);
        let script: Vec<(Duration, Token)> = response.tokens()
                                                     .iter()
                                                     .enumerate()
                                                     .map(|(i, text)| (self.next_delay(), Token::new(*text, i)))
                                                     .collect();
        debug!("stream start response={response:?} tokens={}", script.len());

        let (tx, rx) = mpsc::channel(script.len().max(1));
        let task = tokio::spawn(async move {
            for (delay, token) in script {
                tokio::time::sleep(delay).await;
                if tx.send(token).await.is_err() {
                    break;
                }
            }
        });
        Some(TokenStream { response,
                           tokens: rx,
                           task,
                           started_at: Utc::now() })
    }
}

fn millis(ms: f64) -> Duration {
    Duration::from_micros((ms * 1000.0) as u64)
}

/// Tokens en curso. `stop` corta la emisión: no llega ningún token más.
pub struct TokenStream {
    response: ScriptedResponse,
    tokens: mpsc::Receiver<Token>,
    task: JoinHandle<()>,
    started_at: DateTime<Utc>,
}

impl TokenStream {
    pub fn response(&self) -> ScriptedResponse {
        self.response
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Siguiente token, o `None` cuando la emisión terminó o se detuvo.
    pub async fn next_token(&mut self) -> Option<Token> {
        self.tokens.recv().await
    }

    pub fn stop(&mut self) {
        self.task.abort();
        self.tokens.close();
        // descarta lo que ya estaba en el buffer
        while self.tokens.try_recv().is_ok() {}
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished() && self.tokens.is_empty()
    }

    pub async fn collect(mut self) -> Vec<Token> {
        let mut out = Vec::new();
        while let Some(token) = self.next_token().await {
            out.push(token);
        }
        out
    }
}

impl Drop for TokenStream {
    fn drop(&mut self) {
        self.task.abort();
    }
}
