//! Atajos de teclado del modo presentación.
//!
//! Derecha/Espacio/Enter avanzan, Izquierda/Backspace/`b` retroceden, `r`
//! reinicia y Escape pausa. Con el foco dentro de un campo de texto no se
//! intercepta nada, para no secuestrar la escritura normal.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    ArrowRight,
    ArrowLeft,
    ArrowUp,
    ArrowDown,
    Space,
    Enter,
    Backspace,
    Escape,
    Char(char),
    Other(String),
}

impl Key {
    /// Traduce un nombre de tecla estilo DOM (`KeyboardEvent.key`).
    pub fn from_dom_name(name: &str) -> Key {
        match name {
            "ArrowRight" => Key::ArrowRight,
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowUp" => Key::ArrowUp,
            "ArrowDown" => Key::ArrowDown,
            " " | "Space" | "Spacebar" => Key::Space,
            "Enter" => Key::Enter,
            "Backspace" => Key::Backspace,
            "Escape" | "Esc" => Key::Escape,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => Key::Other(other.to_string()),
                }
            }
        }
    }
}

/// Dónde estaba el foco cuando llegó la tecla.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FocusTarget {
    #[default]
    Document,
    TextInput,
    TextArea,
}

impl FocusTarget {
    pub fn is_text_entry(&self) -> bool {
        matches!(self, FocusTarget::TextInput | FocusTarget::TextArea)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    pub key: Key,
    pub target: FocusTarget,
}

impl KeyEvent {
    pub fn new(key: Key) -> Self {
        Self { key, target: FocusTarget::Document }
    }

    pub fn in_text_field(key: Key) -> Self {
        Self { key, target: FocusTarget::TextInput }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavAction {
    Next,
    Previous,
    Reset,
    Pause,
}

/// Resultado de despachar una tecla. `Handled` equivale a consumir el evento
/// (preventDefault); `Ignored` lo deja pasar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisposition {
    Handled(NavAction),
    Ignored,
}

/// Mapa fijo tecla -> acción. Las letras distinguen mayúsculas.
pub fn action_for(key: &Key) -> Option<NavAction> {
    match key {
        Key::ArrowRight | Key::Space | Key::Enter => Some(NavAction::Next),
        Key::ArrowLeft | Key::Backspace | Key::Char('b') => Some(NavAction::Previous),
        Key::Char('r') => Some(NavAction::Reset),
        Key::Escape => Some(NavAction::Pause),
        Key::Char(' ') => Some(NavAction::Next),
        _ => None,
    }
}

/// Decide la acción para un evento, respetando la supresión en campos de texto.
pub fn dispatch(event: &KeyEvent) -> Option<NavAction> {
    if event.target.is_text_entry() {
        return None;
    }
    action_for(&event.key)
}
