//! llmx-core: tokenizer simulado y sequencer de presentaciones.
//!
//! Ambos componentes son deterministas y no hacen I/O. El tokenizer es una
//! función pura; el sequencer es una máquina de estados local que el llamador
//! posee (o que una única tarea posee en entornos multi-hilo).
pub mod constants;
pub mod errors;
pub mod event;
pub mod flow;
pub mod hashing;
pub mod tokenizer;

pub use errors::FlowError;
pub use event::{EventLog, FlowEvent, FlowEventKind, InMemoryEventLog, NullEventLog, StepTrigger};
pub use flow::{FlowDefinition, FlowSequencer, FlowSequencerBuilder, FlowSnapshot, FlowState, FlowStep, Key, KeyDisposition,
               KeyEvent, NavAction, StepListener};
pub use tokenizer::{compare_methods, token_fingerprint, tokenize, Token, TokenStats, TokenizeMethod};
