//! Auto-avance de un solo disparo.
//!
//! Invariante: como mucho hay un avance pendiente. Cada vez que se programa o
//! se cancela uno, la generación sube, de modo que un ticket viejo nunca
//! coincide con el pendiente actual y su disparo se ignora.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Identifica un avance programado concreto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AdvanceTicket {
    pub generation: u64,
    pub step_index: usize,
}

/// Avance pendiente con el tiempo que le falta para disparar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingAdvance {
    pub ticket: AdvanceTicket,
    pub delay: Duration,
    pub remaining: Duration,
}

#[derive(Debug, Default)]
pub(crate) struct AutoAdvanceTimer {
    generation: u64,
    pending: Option<PendingAdvance>,
}

impl AutoAdvanceTimer {
    pub(crate) fn pending(&self) -> Option<PendingAdvance> {
        self.pending
    }

    /// Cancela el pendiente (si hay) y devuelve su ticket.
    pub(crate) fn cancel(&mut self) -> Option<AdvanceTicket> {
        let prev = self.pending.take()?;
        self.generation += 1;
        Some(prev.ticket)
    }

    /// Programa un avance nuevo. Debe llamarse con el anterior ya cancelado.
    pub(crate) fn schedule(&mut self, step_index: usize, delay: Duration) -> AdvanceTicket {
        debug_assert!(self.pending.is_none(), "cancel-before-reschedule");
        self.generation += 1;
        let ticket = AdvanceTicket { generation: self.generation, step_index };
        self.pending = Some(PendingAdvance { ticket, delay, remaining: delay });
        ticket
    }

    /// Consume el pendiente si `ticket` es el vigente.
    pub(crate) fn take_if_current(&mut self, ticket: AdvanceTicket) -> bool {
        match self.pending {
            Some(p) if p.ticket == ticket => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    /// Descuenta tiempo del pendiente. Devuelve el ticket si venció y el
    /// tiempo sobrante después del vencimiento.
    pub(crate) fn elapse(&mut self, elapsed: Duration) -> Option<(AdvanceTicket, Duration)> {
        let p = self.pending.as_mut()?;
        if elapsed >= p.remaining {
            let leftover = elapsed - p.remaining;
            p.remaining = Duration::ZERO;
            Some((p.ticket, leftover))
        } else {
            p.remaining -= elapsed;
            None
        }
    }
}
