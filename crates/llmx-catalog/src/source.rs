//! Fuentes asíncronas del documento de retos.

use std::path::PathBuf;

use async_trait::async_trait;
use log::{debug, warn};

use crate::challenges::{parse_challenges, ChallengesData};
use crate::error::CatalogError;

#[async_trait]
pub trait ChallengeSource: Send + Sync {
    /// Devuelve el documento en bruto.
    async fn load(&self) -> Result<String, CatalogError>;

    async fn load_challenges(&self) -> Result<ChallengesData, CatalogError> {
        let raw = self.load().await?;
        let data = parse_challenges(&raw);
        debug!("parsed challenges: easy={} medium={} hard={}",
               data.easy.len(),
               data.medium.len(),
               data.hard.len());
        Ok(data)
    }
}

#[derive(Debug, Clone)]
pub struct FileChallengeSource {
    path: PathBuf,
}

impl FileChallengeSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[async_trait]
impl ChallengeSource for FileChallengeSource {
    async fn load(&self) -> Result<String, CatalogError> {
        tokio::fs::read_to_string(&self.path).await.map_err(|e| {
                                                        warn!("cannot read {}: {e}", self.path.display());
                                                        CatalogError::Load(format!("{}: {e}", self.path.display()))
                                                    })
    }
}

/// Documento en memoria; útil en tests y para retos empaquetados.
#[derive(Debug, Clone, Default)]
pub struct StaticChallengeSource {
    content: String,
}

impl StaticChallengeSource {
    pub fn new(content: impl Into<String>) -> Self {
        Self { content: content.into() }
    }
}

#[async_trait]
impl ChallengeSource for StaticChallengeSource {
    async fn load(&self) -> Result<String, CatalogError> {
        Ok(self.content.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_is_load_error() {
        let src = FileChallengeSource::new("/definitely/not/here/challenges.md");
        let err = src.load_challenges().await.unwrap_err();
        assert!(matches!(err, CatalogError::Load(_)));
    }

    #[tokio::test]
    async fn static_source_parses() {
        let src = StaticChallengeSource::new("### Hard\nTitle: LRU\nDescription: Build an LRU cache.\n");
        let data = src.load_challenges().await.unwrap();
        assert_eq!(data.hard.len(), 1);
        assert_eq!(data.hard[0].description, "Build an LRU cache.");
    }
}
