use serde::{Deserialize, Serialize};

use super::step::FlowStep;

/// Estado mutable del sequencer. Sólo cambia a través de las operaciones de
/// navegación; `current_index` siempre está en `[0, N-1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FlowState {
    pub current_index: usize,
    pub is_playing: bool,
    pub waiting_for_input: bool,
}

/// Vista de sólo lectura: estado + valores derivados + paso actual.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowSnapshot {
    pub current_step: usize,
    pub total_steps: usize,
    pub is_playing: bool,
    pub waiting_for_input: bool,
    pub is_first_step: bool,
    pub is_last_step: bool,
    /// Porcentaje en (0, 100].
    pub progress: f64,
    pub step: FlowStep,
}

/// `(index + 1) / total * 100`.
pub fn progress_percent(index: usize, total: usize) -> f64 {
    (index + 1) as f64 / total as f64 * 100.0
}
