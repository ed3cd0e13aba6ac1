//! Tipos de evento del sequencer y estructura `FlowEvent`.
//!
//! Rol en el flujo:
//! - Cada transición confirmada del `FlowSequencer` se anota en un `EventLog`
//!   append-only.
//! - El registro permite auditar una presentación (qué pasos se vieron, qué
//!   temporizadores se cancelaron) sin inspeccionar el estado mutable.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Origen de un cambio de paso.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepTrigger {
    /// Llamada directa a `next`/`previous`/`go_to_step`/`reset`.
    Manual,
    /// Atajo de teclado.
    Keyboard,
    /// Temporizador de auto-avance.
    AutoAdvance,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FlowEventKind {
    /// Primer evento de una sesión: fija el hash de la definición y el número de pasos.
    FlowInitialized { definition_hash: String, step_count: usize },
    /// Se notificó un cambio de paso (`from == to` es posible con `go_to_step`).
    StepChanged { from: usize, to: usize, step_id: String, trigger: StepTrigger },
    PlaybackStarted { step_index: usize },
    PlaybackPaused { step_index: usize },
    /// El auto-avance llegó al último paso y detuvo la reproducción.
    PlaybackFinished { step_index: usize },
    AutoAdvanceScheduled { step_index: usize, generation: u64, delay_ms: u64 },
    AutoAdvanceCancelled { step_index: usize, generation: u64 },
    AutoAdvanceFired { step_index: usize, generation: u64 },
}

impl FlowEventKind {
    /// Nombre corto de la variante (para logs).
    pub fn variant_name(&self) -> &'static str {
        match self {
            FlowEventKind::FlowInitialized { .. } => "FlowInitialized",
            FlowEventKind::StepChanged { .. } => "StepChanged",
            FlowEventKind::PlaybackStarted { .. } => "PlaybackStarted",
            FlowEventKind::PlaybackPaused { .. } => "PlaybackPaused",
            FlowEventKind::PlaybackFinished { .. } => "PlaybackFinished",
            FlowEventKind::AutoAdvanceScheduled { .. } => "AutoAdvanceScheduled",
            FlowEventKind::AutoAdvanceCancelled { .. } => "AutoAdvanceCancelled",
            FlowEventKind::AutoAdvanceFired { .. } => "AutoAdvanceFired",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowEvent {
    pub seq: u64, // asignado por el log (orden append)
    pub session_id: Uuid,
    pub kind: FlowEventKind,
    pub ts: DateTime<Utc>,
}
