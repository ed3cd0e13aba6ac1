//! `FlowSequencer`: posición actual dentro de una lista inmutable de pasos.
//!
//! Toda mutación pasa por una transición que, si el estado cambió, cancela el
//! auto-avance pendiente antes de programar (quizá) uno nuevo. Así nunca hay
//! dos avances en vuelo para la misma visita de un paso.

use std::fmt;
use std::time::Duration;

use log::debug;
use uuid::Uuid;

use super::keyboard::{self, KeyDisposition, KeyEvent, NavAction};
use super::listener::StepListener;
use super::state::{progress_percent, FlowSnapshot, FlowState};
use super::step::{FlowDefinition, FlowStep};
use super::timer::{AdvanceTicket, AutoAdvanceTimer, PendingAdvance};
use crate::errors::FlowError;
use crate::event::{EventLog, FlowEvent, FlowEventKind, InMemoryEventLog, StepTrigger};

pub struct FlowSequencer<E = InMemoryEventLog>
    where E: EventLog
{
    definition: FlowDefinition,
    state: FlowState,
    timer: AutoAdvanceTimer,
    listener: Option<Box<dyn StepListener>>,
    event_log: E,
    session_id: Uuid,
}

impl FlowSequencer<InMemoryEventLog> {
    /// Sequencer sin observador y con log en memoria.
    pub fn new(steps: Vec<FlowStep>) -> Result<Self, FlowError> {
        Self::builder().steps(steps).build()
    }

    #[inline]
    pub fn builder() -> super::builder::FlowSequencerBuilder<InMemoryEventLog> {
        super::builder::FlowSequencerBuilder::new()
    }
}

impl<E> FlowSequencer<E> where E: EventLog
{
    pub(crate) fn from_parts(definition: FlowDefinition,
                             event_log: E,
                             listener: Option<Box<dyn StepListener>>,
                             session_id: Uuid)
                             -> Self {
        let mut seq = Self { definition,
                             state: FlowState::default(),
                             timer: AutoAdvanceTimer::default(),
                             listener,
                             event_log,
                             session_id };
        let hash = seq.definition.definition_hash().to_string();
        let step_count = seq.definition.len();
        seq.record(FlowEventKind::FlowInitialized { definition_hash: hash, step_count });
        seq
    }

    // ---- lectura ----

    pub fn definition(&self) -> &FlowDefinition {
        &self.definition
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn current_step(&self) -> usize {
        self.state.current_index
    }

    pub fn current_step_data(&self) -> &FlowStep {
        &self.definition.steps()[self.state.current_index]
    }

    pub fn total_steps(&self) -> usize {
        self.definition.len()
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing
    }

    pub fn waiting_for_input(&self) -> bool {
        self.state.waiting_for_input
    }

    pub fn is_first_step(&self) -> bool {
        self.state.current_index == 0
    }

    pub fn is_last_step(&self) -> bool {
        self.state.current_index == self.definition.last_index()
    }

    pub fn progress(&self) -> f64 {
        progress_percent(self.state.current_index, self.definition.len())
    }

    pub fn snapshot(&self) -> FlowSnapshot {
        FlowSnapshot { current_step: self.state.current_index,
                       total_steps: self.total_steps(),
                       is_playing: self.state.is_playing,
                       waiting_for_input: self.state.waiting_for_input,
                       is_first_step: self.is_first_step(),
                       is_last_step: self.is_last_step(),
                       progress: self.progress(),
                       step: self.current_step_data().clone() }
    }

    pub fn event_log(&self) -> &E {
        &self.event_log
    }

    /// Eventos de esta sesión.
    pub fn events(&self) -> Vec<FlowEvent> {
        self.event_log.list(self.session_id)
    }

    // ---- navegación ----

    /// Avanza uno; en el último paso no hace nada (no da la vuelta).
    pub fn next(&mut self) -> bool {
        self.next_with(StepTrigger::Manual)
    }

    /// Retrocede uno; en el paso 0 no hace nada.
    pub fn previous(&mut self) -> bool {
        self.previous_with(StepTrigger::Manual)
    }

    /// Salta al paso `step`, recortado a `[0, N-1]`. Devuelve el índice final.
    pub fn go_to_step(&mut self, step: i64) -> usize {
        let index = self.clamp(step);
        self.go_to(index, StepTrigger::Manual);
        index
    }

    /// `go_to_step(0)` y detiene la reproducción.
    pub fn reset(&mut self) {
        self.reset_with(StepTrigger::Manual)
    }

    pub fn play(&mut self) {
        let before = self.state;
        self.state.is_playing = true;
        self.state.waiting_for_input = false;
        if self.state != before {
            self.record(FlowEventKind::PlaybackStarted { step_index: self.state.current_index });
        }
        self.after_transition(before);
    }

    pub fn pause(&mut self) {
        let before = self.state;
        self.state.is_playing = false;
        if before.is_playing {
            self.record(FlowEventKind::PlaybackPaused { step_index: self.state.current_index });
        }
        self.after_transition(before);
    }

    pub fn apply(&mut self, action: NavAction) {
        self.apply_with(action, StepTrigger::Manual)
    }

    /// Despacha una tecla. Dentro de un campo de texto siempre devuelve `Ignored`.
    pub fn handle_key(&mut self, event: &KeyEvent) -> KeyDisposition {
        match keyboard::dispatch(event) {
            Some(action) => {
                self.apply_with(action, StepTrigger::Keyboard);
                KeyDisposition::Handled(action)
            }
            None => KeyDisposition::Ignored,
        }
    }

    // ---- auto-avance ----

    /// Avance programado actualmente, si lo hay.
    pub fn pending_advance(&self) -> Option<PendingAdvance> {
        self.timer.pending()
    }

    /// Dispara el avance identificado por `ticket`. Un ticket cancelado o ya
    /// consumido se ignora y devuelve `false`.
    pub fn fire(&mut self, ticket: AdvanceTicket) -> bool {
        if !self.timer.take_if_current(ticket) {
            debug!("fire:stale session={} generation={} step={}",
                   self.session_id, ticket.generation, ticket.step_index);
            return false;
        }
        self.record(FlowEventKind::AutoAdvanceFired { step_index: ticket.step_index,
                                                      generation: ticket.generation });
        if self.is_last_step() {
            let before = self.state;
            self.state.is_playing = false;
            self.record(FlowEventKind::PlaybackFinished { step_index: self.state.current_index });
            self.after_transition(before);
        } else {
            self.next_with(StepTrigger::AutoAdvance);
        }
        true
    }

    /// Reloj virtual: descuenta `elapsed` del avance pendiente y dispara los
    /// que venzan. Devuelve cuántos se dispararon.
    pub fn advance_clock(&mut self, mut elapsed: Duration) -> usize {
        let mut fired = 0;
        while let Some((ticket, leftover)) = self.timer.elapse(elapsed) {
            if self.fire(ticket) {
                fired += 1;
            }
            elapsed = leftover;
        }
        fired
    }

    // ---- internos ----

    fn clamp(&self, step: i64) -> usize {
        let last = self.definition.last_index() as i64;
        step.clamp(0, last) as usize
    }

    fn apply_with(&mut self, action: NavAction, trigger: StepTrigger) {
        match action {
            NavAction::Next => {
                self.next_with(trigger);
            }
            NavAction::Previous => {
                self.previous_with(trigger);
            }
            NavAction::Reset => self.reset_with(trigger),
            NavAction::Pause => self.pause(),
        }
    }

    fn next_with(&mut self, trigger: StepTrigger) -> bool {
        if self.state.current_index < self.definition.last_index() {
            self.go_to(self.state.current_index + 1, trigger);
            true
        } else {
            false
        }
    }

    fn previous_with(&mut self, trigger: StepTrigger) -> bool {
        if self.state.current_index > 0 {
            self.go_to(self.state.current_index - 1, trigger);
            true
        } else {
            false
        }
    }

    fn reset_with(&mut self, trigger: StepTrigger) {
        self.go_to(0, trigger);
        self.pause();
    }

    fn go_to(&mut self, index: usize, trigger: StepTrigger) {
        let before = self.state;
        self.state.current_index = index;
        self.state.waiting_for_input = true;
        let step_id = self.current_step_data().id.clone();
        debug!("go_to session={} from={} to={} trigger={:?}", self.session_id, before.current_index, index, trigger);
        self.record(FlowEventKind::StepChanged { from: before.current_index, to: index, step_id, trigger });
        if let Some(listener) = self.listener.as_mut() {
            listener.on_step_change(index, &self.definition.steps()[index]);
        }
        self.after_transition(before);
    }

    fn after_transition(&mut self, before: FlowState) {
        if self.state != before {
            self.reschedule();
        }
    }

    fn reschedule(&mut self) {
        if let Some(old) = self.timer.cancel() {
            self.record(FlowEventKind::AutoAdvanceCancelled { step_index: old.step_index,
                                                              generation: old.generation });
        }
        let step = self.current_step_data();
        if self.state.is_playing && !self.state.waiting_for_input && step.auto_advances() {
            let delay = step.duration();
            let ticket = self.timer.schedule(self.state.current_index, delay);
            self.record(FlowEventKind::AutoAdvanceScheduled { step_index: ticket.step_index,
                                                              generation: ticket.generation,
                                                              delay_ms: delay.as_millis() as u64 });
        }
    }

    fn record(&mut self, kind: FlowEventKind) {
        let ev = self.event_log.append_kind(self.session_id, kind);
        debug!("event session={} seq={} kind={}", self.session_id, ev.seq, ev.kind.variant_name());
    }
}

impl<E> fmt::Debug for FlowSequencer<E> where E: EventLog
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlowSequencer")
         .field("session_id", &self.session_id)
         .field("state", &self.state)
         .field("total_steps", &self.definition.len())
         .field("pending", &self.timer.pending())
         .finish_non_exhaustive()
    }
}
