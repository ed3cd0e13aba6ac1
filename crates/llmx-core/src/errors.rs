//! Errores del core. El tokenizer es total y no tiene errores; sólo la
//! construcción/validación de un flujo puede fallar.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum FlowError {
    #[error("invalid flow configuration: {0}")] InvalidConfiguration(String),
    #[error("invalid step '{id}': {reason}")] InvalidStep { id: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_step_message_names_the_step() {
        let e = FlowError::InvalidStep { id: "intro".into(), reason: "zoom must be > 0".into() };
        assert_eq!(e.to_string(), "invalid step 'intro': zoom must be > 0");
    }
}
