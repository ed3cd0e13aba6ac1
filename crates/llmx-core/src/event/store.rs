use std::collections::HashMap;

use chrono::Utc;
use uuid::Uuid;

use super::{FlowEvent, FlowEventKind};

/// Registro de eventos append-only.
pub trait EventLog {
    /// Agrega un evento a partir de su kind y devuelve el evento completo (con seq y ts).
    fn append_kind(&mut self, session_id: Uuid, kind: FlowEventKind) -> FlowEvent;
    /// Lista eventos de una sesión (orden ascendente por seq).
    fn list(&self, session_id: Uuid) -> Vec<FlowEvent>;
}

#[derive(Debug, Default)]
pub struct InMemoryEventLog {
    pub inner: HashMap<Uuid, Vec<FlowEvent>>,
}

impl EventLog for InMemoryEventLog {
    fn append_kind(&mut self, session_id: Uuid, kind: FlowEventKind) -> FlowEvent {
        let vec = self.inner.entry(session_id).or_default();
        let seq = vec.len() as u64;
        let ev = FlowEvent { seq, session_id, kind, ts: Utc::now() };
        vec.push(ev.clone());
        ev
    }

    fn list(&self, session_id: Uuid) -> Vec<FlowEvent> {
        self.inner.get(&session_id).cloned().unwrap_or_default()
    }
}

/// Descarta todo; útil cuando no interesa auditar la sesión.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullEventLog;

impl EventLog for NullEventLog {
    fn append_kind(&mut self, session_id: Uuid, kind: FlowEventKind) -> FlowEvent {
        FlowEvent { seq: 0, session_id, kind, ts: Utc::now() }
    }

    fn list(&self, _session_id: Uuid) -> Vec<FlowEvent> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seq_is_per_session_and_ascending() {
        let mut log = InMemoryEventLog::default();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        log.append_kind(a, FlowEventKind::PlaybackStarted { step_index: 0 });
        log.append_kind(b, FlowEventKind::PlaybackStarted { step_index: 0 });
        let ev = log.append_kind(a, FlowEventKind::PlaybackPaused { step_index: 0 });
        assert_eq!(ev.seq, 1);
        assert_eq!(log.list(a).len(), 2);
        assert_eq!(log.list(b).len(), 1);
        assert!(log.list(Uuid::new_v4()).is_empty());
    }
}
