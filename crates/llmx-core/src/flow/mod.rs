//! Presentation flow: definición de pasos, sequencer, teclado y auto-avance.

pub mod builder;
pub mod keyboard;
mod listener;
pub mod sequencer;
mod state;
pub mod step;
mod timer;

pub use builder::FlowSequencerBuilder;
pub use keyboard::{FocusTarget, Key, KeyDisposition, KeyEvent, NavAction};
pub use listener::StepListener;
pub use sequencer::FlowSequencer;
pub use state::{FlowSnapshot, FlowState};
pub use step::{FlowDefinition, FlowStep};
pub use timer::{AdvanceTicket, PendingAdvance};
