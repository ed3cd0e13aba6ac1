//! Pasos de una presentación y su definición inmutable.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::constants::SEQUENCER_VERSION;
use crate::errors::FlowError;
use crate::hashing::hash_value;

/// Un paso del recorrido guiado: qué se muestra, dónde se enfoca la cámara y
/// cuánto dura antes de avanzar solo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowStep {
    /// Único dentro de una lista de pasos.
    pub id: String,
    pub title: String,
    pub description: String,
    /// Factor de escala de la cámara (> 0).
    pub zoom: f64,
    /// Porcentaje 0-100.
    pub focus_x: f64,
    /// Porcentaje 0-100.
    pub focus_y: f64,
    /// Milisegundos antes del auto-avance; 0 = esperar al usuario.
    #[serde(rename = "duration")]
    pub duration_ms: u64,
    /// Elementos resaltados mientras el paso está activo.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlights: Option<Vec<String>>,
}

impl FlowStep {
    pub fn new(id: impl Into<String>, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { id: id.into(),
               title: title.into(),
               description: description.into(),
               zoom: 1.0,
               focus_x: 50.0,
               focus_y: 50.0,
               duration_ms: 0,
               highlights: None }
    }

    pub fn with_camera(mut self, zoom: f64, focus_x: f64, focus_y: f64) -> Self {
        self.zoom = zoom;
        self.focus_x = focus_x;
        self.focus_y = focus_y;
        self
    }

    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn with_highlights<I, S>(mut self, tags: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        self.highlights = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    /// Verdadero si el paso avanza solo cuando se reproduce.
    pub fn auto_advances(&self) -> bool {
        self.duration_ms > 0
    }

    pub fn highlights(&self) -> &[String] {
        self.highlights.as_deref().unwrap_or(&[])
    }

    pub fn is_highlighted(&self, tag: &str) -> bool {
        self.highlights().iter().any(|h| h == tag)
    }

    fn check(&self) -> Result<(), FlowError> {
        let invalid = |reason: &str| FlowError::InvalidStep { id: self.id.clone(), reason: reason.to_string() };
        if self.id.trim().is_empty() {
            return Err(invalid("id must not be empty"));
        }
        if !(self.zoom.is_finite() && self.zoom > 0.0) {
            return Err(invalid("zoom must be a finite number > 0"));
        }
        if !(0.0..=100.0).contains(&self.focus_x) || !(0.0..=100.0).contains(&self.focus_y) {
            return Err(invalid("focus must be within 0..=100"));
        }
        Ok(())
    }
}

/// Definición inmutable de un recorrido. Se comparte por `Arc`, así que
/// clonarla es barato y nunca copia los pasos.
#[derive(Debug, Clone)]
pub struct FlowDefinition {
    steps: Arc<[FlowStep]>,
    definition_hash: String,
}

impl FlowDefinition {
    /// Rechaza sólo la lista vacía; el resto de la aritmética de índices asume N >= 1.
    pub fn new(steps: Vec<FlowStep>) -> Result<Self, FlowError> {
        if steps.is_empty() {
            return Err(FlowError::InvalidConfiguration("step list must contain at least one step".into()));
        }
        let definition_hash = hash_value(&json!({
            "version": SEQUENCER_VERSION,
            "steps": serde_json::to_value(&steps).unwrap_or_default(),
        }));
        Ok(Self { steps: steps.into(), definition_hash })
    }

    /// Validación estricta para listas que vienen de fuera (archivos): ids
    /// únicos, zoom positivo y foco dentro de 0..=100.
    pub fn validate(&self) -> Result<(), FlowError> {
        let mut seen = HashSet::new();
        for step in self.steps.iter() {
            step.check()?;
            if !seen.insert(step.id.as_str()) {
                return Err(FlowError::InvalidStep { id: step.id.clone(), reason: "duplicate id".into() });
            }
        }
        Ok(())
    }

    pub fn steps(&self) -> &[FlowStep] {
        &self.steps
    }

    pub fn step(&self, index: usize) -> Option<&FlowStep> {
        self.steps.get(index)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Siempre `false`: `new` no acepta listas vacías.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.steps.len() - 1
    }

    pub fn definition_hash(&self) -> &str {
        &self.definition_hash
    }

    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.steps.iter().position(|s| s.id == id)
    }
}
