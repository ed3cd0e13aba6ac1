//! Builder del sequencer: pasos (o definición ya construida), observador,
//! log de eventos e id de sesión.

use uuid::Uuid;

use super::listener::StepListener;
use super::sequencer::FlowSequencer;
use super::step::{FlowDefinition, FlowStep};
use crate::errors::FlowError;
use crate::event::{EventLog, InMemoryEventLog};

pub struct FlowSequencerBuilder<E = InMemoryEventLog>
    where E: EventLog
{
    steps: Option<Vec<FlowStep>>,
    definition: Option<FlowDefinition>,
    listener: Option<Box<dyn StepListener>>,
    event_log: E,
    session_id: Option<Uuid>,
}

impl FlowSequencerBuilder<InMemoryEventLog> {
    pub fn new() -> Self {
        Self { steps: None,
               definition: None,
               listener: None,
               event_log: InMemoryEventLog::default(),
               session_id: None }
    }
}

impl Default for FlowSequencerBuilder<InMemoryEventLog> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> FlowSequencerBuilder<E> where E: EventLog
{
    pub fn steps(mut self, steps: Vec<FlowStep>) -> Self {
        self.steps = Some(steps);
        self
    }

    /// Usa una definición ya construida (tiene prioridad sobre `steps`).
    pub fn definition(mut self, definition: FlowDefinition) -> Self {
        self.definition = Some(definition);
        self
    }

    /// Observador invocado en cada cambio de paso con `(index, step)`.
    pub fn on_step_change<F>(mut self, f: F) -> Self
        where F: FnMut(usize, &FlowStep) + Send + 'static
    {
        self.listener = Some(Box::new(f));
        self
    }

    pub fn listener(mut self, listener: Box<dyn StepListener>) -> Self {
        self.listener = Some(listener);
        self
    }

    pub fn event_log<L: EventLog>(self, event_log: L) -> FlowSequencerBuilder<L> {
        FlowSequencerBuilder { steps: self.steps,
                               definition: self.definition,
                               listener: self.listener,
                               event_log,
                               session_id: self.session_id }
    }

    pub fn session_id(mut self, session_id: Uuid) -> Self {
        self.session_id = Some(session_id);
        self
    }

    pub fn build(self) -> Result<FlowSequencer<E>, FlowError> {
        let definition = match (self.definition, self.steps) {
            (Some(def), _) => def,
            (None, Some(steps)) => FlowDefinition::new(steps)?,
            (None, None) => return Err(FlowError::InvalidConfiguration("no steps configured".into())),
        };
        let session_id = self.session_id.unwrap_or_else(Uuid::new_v4);
        Ok(FlowSequencer::from_parts(definition, self.event_log, self.listener, session_id))
    }
}
