//! llm-explainer
//!
//! Capa de aplicación sobre `llmx-core` y `llmx-catalog`:
//! - `config`: variables de entorno (`LLMX_*`) cargadas una vez.
//! - `presentation`: recorridos incluidos, carga desde JSON y un driver tokio
//!   que reproduce un recorrido con auto-avance.
//! - `endpoint`: lectura de retos con forma de respuesta HTTP.
//! - `inference`: salida de modelo simulada token a token.
//! - `batch`: tokenización paralela de muchas líneas.

pub mod batch;
pub mod config;
pub mod endpoint;
pub mod errors;
pub mod inference;
pub mod presentation;

pub use errors::AppError;
