use thiserror::Error;

use llmx_catalog::CatalogError;
use llmx_core::FlowError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Error interno: {0}")]
    Internal(String),
    #[error("Error en IO: {0}")]
    Io(#[from] std::io::Error),
    #[error("Error de configuración: {0}")]
    Config(String),
    #[error("Error en la presentación: {0}")]
    Flow(#[from] FlowError),
    #[error("Error en el catálogo: {0}")]
    Catalog(#[from] CatalogError),
    #[error("JSON inválido: {0}")]
    Json(#[from] serde_json::Error),
}
