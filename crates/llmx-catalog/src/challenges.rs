//! Documento de retos de código.
//!
//! Formato (texto plano tipo markdown):
//!
//! ```text
//! ### Easy
//! Title: FizzBuzz
//! Description: Print numbers 1..100,
//! replacing multiples of 3 and 5.
//!
//! ### Medium
//! ...
//! ```
//!
//! Las secciones son exactamente `Easy`, `Medium` y `Hard`. Una descripción
//! puede ocupar varias líneas y termina en una línea vacía, en el siguiente
//! `Title:` o en la siguiente sección. Todo lo anterior a la primera sección
//! se ignora.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Cabecera de sección en el documento.
    pub fn header(&self) -> &'static str {
        match self {
            Difficulty::Easy => "### Easy",
            Difficulty::Medium => "### Medium",
            Difficulty::Hard => "### Hard",
        }
    }

    fn from_header(line: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| line.trim() == d.header())
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
                        Difficulty::Easy => "easy",
                        Difficulty::Medium => "medium",
                        Difficulty::Hard => "hard",
                    })
    }
}

impl FromStr for Difficulty {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(CatalogError::UnknownDifficulty(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengesData {
    pub easy: Vec<Challenge>,
    pub medium: Vec<Challenge>,
    pub hard: Vec<Challenge>,
}

impl ChallengesData {
    pub fn get(&self, difficulty: Difficulty) -> &[Challenge] {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }

    fn get_mut(&mut self, difficulty: Difficulty) -> &mut Vec<Challenge> {
        match difficulty {
            Difficulty::Easy => &mut self.easy,
            Difficulty::Medium => &mut self.medium,
            Difficulty::Hard => &mut self.hard,
        }
    }

    pub fn len(&self) -> usize {
        self.easy.len() + self.medium.len() + self.hard.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Registro en construcción mientras se recorren las líneas.
#[derive(Default)]
struct Pending {
    title: String,
    description: String,
    in_description: bool,
}

impl Pending {
    fn flush(&mut self, section: Difficulty, out: &mut ChallengesData) {
        if !self.title.is_empty() {
            out.get_mut(section).push(Challenge { title: std::mem::take(&mut self.title),
                                                  description: self.description.trim().to_string() });
        }
        *self = Pending::default();
    }
}

/// Parser tolerante: nunca falla, las líneas que no encajan se ignoran.
pub fn parse_challenges(content: &str) -> ChallengesData {
    let mut out = ChallengesData::default();
    let mut section: Option<Difficulty> = None;
    let mut pending = Pending::default();

    for line in content.lines() {
        if let Some(next) = Difficulty::from_header(line) {
            if let Some(current) = section {
                pending.flush(current, &mut out);
            }
            section = Some(next);
            continue;
        }

        let Some(current) = section else { continue };

        if let Some(title) = line.strip_prefix("Title:") {
            pending.flush(current, &mut out);
            pending.title = title.trim().to_string();
            continue;
        }

        if let Some(desc) = line.strip_prefix("Description:") {
            pending.description = desc.trim().to_string();
            pending.in_description = true;
            continue;
        }

        if line.trim().is_empty() {
            pending.in_description = false;
        } else if pending.in_description {
            if !pending.description.is_empty() {
                pending.description.push('\n');
            }
            pending.description.push_str(line);
        }
    }

    if let Some(current) = section {
        pending.flush(current, &mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_parsing() {
        assert_eq!("Hard".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert!(matches!("expert".parse::<Difficulty>(), Err(CatalogError::UnknownDifficulty(_))));
        assert_eq!(Difficulty::Medium.to_string(), "medium");
    }

    #[test]
    fn header_match_trims_line() {
        assert_eq!(Difficulty::from_header("  ### Easy  "), Some(Difficulty::Easy));
        assert_eq!(Difficulty::from_header("### Expert"), None);
    }

    #[test]
    fn title_without_description() {
        let data = parse_challenges("### Easy\nTitle: Lonely\n");
        assert_eq!(data.easy, vec![Challenge { title: "Lonely".into(), description: String::new() }]);
    }
}
