//! Presentaciones guiadas: recorridos incluidos, carga desde archivo, el
//! driver asíncrono que reproduce un recorrido y el bucle de entrenamiento.

pub mod builtin;
pub mod console;
pub mod driver;
pub mod loader;
pub mod training;

pub use builtin::Walkthrough;
pub use console::{parse_console_line, ConsoleCommand, CONSOLE_HELP};
pub use driver::{DriverCommand, DriverReply, PresentationDriver};
pub use loader::{load_steps, parse_steps, scale_durations};
pub use training::{TrainingCommand, TrainingDriver, TrainingLoop, TrainingPhase, TrainingSnapshot, TrainingSpeed,
                   TRAINING_PHASES};
