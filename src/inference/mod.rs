//! Salida de modelo simulada: respuestas fijas emitidas token a token.

pub mod streaming;

pub use streaming::{ScriptedResponder, ScriptedResponse, TokenStream};
