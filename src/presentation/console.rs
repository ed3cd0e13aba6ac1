//! Órdenes de texto para conducir una presentación desde un terminal.

use llmx_core::{Key, KeyEvent};

pub const CONSOLE_HELP: &str = "keys: Enter/n next, b previous, r reset, Escape pause, play, goto N, q quit";

#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleCommand {
    Quit,
    Play,
    Pause,
    GoTo(i64),
    Key(KeyEvent),
    /// Orden mal formada; la sesión sigue y se muestra la ayuda.
    Invalid,
}

/// Una línea vacía o `n` avanza; cualquier otra cosa se trata como nombre
/// de tecla.
pub fn parse_console_line(line: &str) -> ConsoleCommand {
    let line = line.trim();
    match line {
        "q" | "quit" => ConsoleCommand::Quit,
        "play" => ConsoleCommand::Play,
        "pause" => ConsoleCommand::Pause,
        "" | "n" => ConsoleCommand::Key(KeyEvent::new(Key::Enter)),
        _ => match line.strip_prefix("goto") {
            Some(rest) => rest.trim().parse().map_or(ConsoleCommand::Invalid, ConsoleCommand::GoTo),
            None => ConsoleCommand::Key(KeyEvent::new(Key::from_dom_name(line))),
        },
    }
}
