use log::error;
use serde::Serialize;
use serde_json::{json, Value};

use llmx_catalog::{ChallengeSource, ChallengesData, FileChallengeSource};

use crate::config::AppConfig;
use crate::errors::AppError;

/// Respuesta con forma HTTP: código de estado y cuerpo JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EndpointResponse {
    pub status: u16,
    pub body: Value,
}

impl EndpointResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Cuerpo de una respuesta exitosa interpretado como retos.
    pub fn challenges(&self) -> Option<ChallengesData> {
        if !self.is_success() {
            return None;
        }
        serde_json::from_value(self.body.clone()).ok()
    }
}

/// `GET` de retos: lee el documento de la fuente y lo devuelve parseado.
pub struct ChallengesEndpoint<S>
    where S: ChallengeSource
{
    source: S,
}

impl ChallengesEndpoint<FileChallengeSource> {
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(FileChallengeSource::new(config.challenges_path.clone()))
    }
}

impl<S> ChallengesEndpoint<S> where S: ChallengeSource
{
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub async fn get(&self) -> EndpointResponse {
        match self.load().await {
            Ok(body) => EndpointResponse { status: 200, body },
            Err(e) => {
                error!("Error loading challenges: {e}");
                EndpointResponse { status: 500,
                                   body: json!({ "error": "Failed to load challenges" }) }
            }
        }
    }

    async fn load(&self) -> Result<Value, AppError> {
        let data = self.source.load_challenges().await?;
        Ok(serde_json::to_value(data)?)
    }
}
