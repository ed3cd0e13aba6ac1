//! Carga de recorridos desde JSON.
//!
//! Acepta una lista de pasos o un objeto `{ "steps": [...] }`, con los
//! nombres de campo del formato de intercambio (`focusX`, `focusY`,
//! `duration`). Las listas que vienen de archivo se validan de forma estricta.

use std::path::Path;

use log::debug;
use serde::Deserialize;

use llmx_core::{FlowDefinition, FlowStep};

use crate::errors::AppError;

#[derive(Deserialize)]
#[serde(untagged)]
enum StepsDocument {
    List(Vec<FlowStep>),
    Wrapped { steps: Vec<FlowStep> },
}

pub fn parse_steps(json: &str) -> Result<FlowDefinition, AppError> {
    let steps = match serde_json::from_str::<StepsDocument>(json)? {
        StepsDocument::List(steps) | StepsDocument::Wrapped { steps } => steps,
    };
    let definition = FlowDefinition::new(steps)?;
    definition.validate()?;
    Ok(definition)
}

pub async fn load_steps(path: impl AsRef<Path>) -> Result<FlowDefinition, AppError> {
    let path = path.as_ref();
    let raw = tokio::fs::read_to_string(path).await?;
    let definition = parse_steps(&raw)?;
    debug!("loaded {} steps from {} hash={}",
           definition.len(),
           path.display(),
           definition.definition_hash());
    Ok(definition)
}

/// Divide cada duración por `speed` (2.0 = el doble de rápido). Los pasos
/// sin auto-avance no cambian y una duración positiva nunca baja a 0.
pub fn scale_durations(steps: Vec<FlowStep>, speed: f64) -> Vec<FlowStep> {
    if !(speed.is_finite() && speed > 0.0) || speed == 1.0 {
        return steps;
    }
    steps.into_iter()
         .map(|mut s| {
             if s.duration_ms > 0 {
                 s.duration_ms = ((s.duration_ms as f64 / speed).round() as u64).max(1);
             }
             s
         })
         .collect()
}

#[cfg(test)]
mod tests {
    use llmx_core::FlowError;

    use super::*;

    #[test]
    fn accepts_bare_list_and_wrapped_object() {
        let list = r#"[{"id":"a","title":"A","description":"","zoom":1,"focusX":10,"focusY":20,"duration":1500}]"#;
        let def = parse_steps(list).unwrap();
        assert_eq!(def.steps()[0].duration_ms, 1500);
        assert_eq!(def.steps()[0].focus_x, 10.0);

        let wrapped = format!(r#"{{"steps": {list}}}"#);
        assert_eq!(parse_steps(&wrapped).unwrap().definition_hash(), def.definition_hash());
    }

    #[test]
    fn empty_list_rejected() {
        let err = parse_steps("[]").unwrap_err();
        assert!(matches!(err, AppError::Flow(FlowError::InvalidConfiguration(_))));
    }

    #[test]
    fn duplicate_ids_rejected() {
        let json = r#"[
            {"id":"a","title":"A","description":"","zoom":1,"focusX":50,"focusY":50,"duration":0},
            {"id":"a","title":"B","description":"","zoom":1,"focusX":50,"focusY":50,"duration":0}
        ]"#;
        assert!(matches!(parse_steps(json), Err(AppError::Flow(FlowError::InvalidStep { .. }))));
    }

    #[test]
    fn malformed_json_is_json_error() {
        assert!(matches!(parse_steps("{steps"), Err(AppError::Json(_))));
    }

    #[test]
    fn scaling_keeps_manual_steps() {
        let steps = vec![FlowStep::new("a", "A", "").with_duration_ms(1000), FlowStep::new("b", "B", "")];
        let scaled = scale_durations(steps, 4.0);
        assert_eq!(scaled[0].duration_ms, 250);
        assert_eq!(scaled[1].duration_ms, 0);
        let tiny = scale_durations(vec![FlowStep::new("c", "C", "").with_duration_ms(1)], 10.0);
        assert_eq!(tiny[0].duration_ms, 1);
    }
}
