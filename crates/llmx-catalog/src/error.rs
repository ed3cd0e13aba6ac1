//! Errores del catálogo. El parser es tolerante y no falla; sólo la carga
//! del documento (I/O) o entradas de usuario inválidas producen error.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to load challenges: {0}")]
    Load(String),
    #[error("unknown difficulty '{0}' (expected easy, medium or hard)")]
    UnknownDifficulty(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_variant_from() {
        let err: CatalogError = std::io::Error::other("disk gone").into();
        assert_eq!(err.to_string(), "io error: disk gone");
    }
}
