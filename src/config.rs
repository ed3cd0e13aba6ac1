//! Configuración central de la aplicación.
//! Carga variables de entorno (.env) una sola vez y expone una estructura
//! inmutable (`CONFIG`). Los valores ausentes o mal formados caen a su
//! valor por defecto; `AppConfig::from_lookup` permite validarlos de forma
//! estricta.
use std::env;
use std::path::PathBuf;

use dotenvy::dotenv;
use log::warn;
use once_cell::sync::Lazy;

use llmx_core::TokenizeMethod;

use crate::errors::AppError;

pub const ENV_CHALLENGES_PATH: &str = "LLMX_CHALLENGES_PATH";
pub const ENV_DEFAULT_MODEL: &str = "LLMX_DEFAULT_MODEL";
pub const ENV_TOKEN_METHOD: &str = "LLMX_TOKEN_METHOD";
pub const ENV_PLAYBACK_SPEED: &str = "LLMX_PLAYBACK_SPEED";
pub const ENV_TEMPERATURE: &str = "LLMX_TEMPERATURE";

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Documento de retos leído por el endpoint.
    pub challenges_path: PathBuf,
    /// Modelo usado por `cost` cuando no se indica otro.
    pub default_model: String,
    pub token_method: TokenizeMethod,
    /// Multiplicador aplicado a la duración de los pasos con auto-avance.
    pub playback_speed: f64,
    /// Temperatura del streaming simulado, en [0, 2].
    pub temperature: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { challenges_path: PathBuf::from("challenges.md"),
               default_model: "gpt-5.1".to_string(),
               token_method: TokenizeMethod::Subword,
               playback_speed: 1.0,
               temperature: 0.7 }
    }
}

impl AppConfig {
    /// Lectura estricta: un valor presente pero inválido es un error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
        where F: Fn(&str) -> Option<String>
    {
        let mut cfg = Self::default();
        if let Some(path) = lookup(ENV_CHALLENGES_PATH) {
            cfg.challenges_path = PathBuf::from(path);
        }
        if let Some(model) = lookup(ENV_DEFAULT_MODEL) {
            cfg.default_model = model;
        }
        if let Some(method) = lookup(ENV_TOKEN_METHOD) {
            cfg.token_method = method.parse()
                                     .map_err(|e| AppError::Config(format!("{ENV_TOKEN_METHOD}: {e}")))?;
        }
        if let Some(speed) = lookup(ENV_PLAYBACK_SPEED) {
            cfg.playback_speed = parse_f64(ENV_PLAYBACK_SPEED, &speed)?;
            if cfg.playback_speed <= 0.0 {
                return Err(AppError::Config(format!("{ENV_PLAYBACK_SPEED} debe ser > 0")));
            }
        }
        if let Some(temp) = lookup(ENV_TEMPERATURE) {
            cfg.temperature = parse_f64(ENV_TEMPERATURE, &temp)?;
            if !(0.0..=2.0).contains(&cfg.temperature) {
                return Err(AppError::Config(format!("{ENV_TEMPERATURE} debe estar en [0, 2]")));
            }
        }
        Ok(cfg)
    }

    pub fn from_env() -> Result<Self, AppError> {
        Lazy::force(&DOTENV_LOADED);
        Self::from_lookup(|key| env::var(key).ok())
    }
}

fn parse_f64(key: &str, raw: &str) -> Result<f64, AppError> {
    raw.trim()
       .parse::<f64>()
       .ok()
       .filter(|v| v.is_finite())
       .ok_or_else(|| AppError::Config(format!("{key}: '{raw}' no es un número")))
}

/// Instancia global perezosa de configuración, evaluada una sola vez.
pub static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    AppConfig::from_env().unwrap_or_else(|e| {
                             warn!("{e}; usando configuración por defecto");
                             AppConfig::default()
                         })
});

/// Forzar carga temprana de .env desde aplicaciones externas si se desea.
pub fn init_dotenv() {
    Lazy::force(&DOTENV_LOADED);
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let cfg = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn overrides_are_applied() {
        let cfg = AppConfig::from_lookup(lookup(&[(ENV_TOKEN_METHOD, "char"),
                                                  (ENV_PLAYBACK_SPEED, "2"),
                                                  (ENV_DEFAULT_MODEL, "gpt-5-nano")])).unwrap();
        assert_eq!(cfg.token_method, TokenizeMethod::Character);
        assert_eq!(cfg.playback_speed, 2.0);
        assert_eq!(cfg.default_model, "gpt-5-nano");
    }

    #[test]
    fn invalid_values_are_config_errors() {
        for pairs in [[(ENV_TOKEN_METHOD, "bpe")], [(ENV_PLAYBACK_SPEED, "0")], [(ENV_TEMPERATURE, "tibio")]] {
            let err = AppConfig::from_lookup(lookup(&pairs)).unwrap_err();
            assert!(matches!(err, AppError::Config(_)));
        }
    }
}
