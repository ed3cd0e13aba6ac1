//! Eventos del sequencer y trait `EventLog`.

mod store;
mod types;

pub use store::{EventLog, InMemoryEventLog, NullEventLog};
pub use types::{FlowEvent, FlowEventKind, StepTrigger};
