//! Selección aleatoria de retos sin repetición dentro de cada dificultad.

use std::collections::{HashMap, HashSet};

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::challenges::{Challenge, ChallengesData, Difficulty};

/// Recuerda qué títulos se han servido ya por dificultad.
///
/// Cuando todos los retos de una dificultad están usados, el registro de esa
/// dificultad se vacía y se devuelve uno al azar del total; ese reto no se
/// anota, de modo que el ciclo siguiente puede repetirlo.
#[derive(Debug, Default, Clone)]
pub struct ChallengePicker {
    used: HashMap<Difficulty, HashSet<String>>,
}

impl ChallengePicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pick<R>(&mut self, data: &ChallengesData, difficulty: Difficulty, rng: &mut R) -> Option<Challenge>
        where R: Rng + ?Sized
    {
        let available = data.get(difficulty);
        if available.is_empty() {
            return None;
        }

        let used = self.used.entry(difficulty).or_default();
        let unused: Vec<&Challenge> = available.iter().filter(|c| !used.contains(&c.title)).collect();

        if unused.is_empty() {
            debug!("all {difficulty} challenges used, starting over");
            used.clear();
            return available.choose(rng).cloned();
        }

        let chosen = unused.choose(rng).map(|c| (*c).clone())?;
        used.insert(chosen.title.clone());
        Some(chosen)
    }

    pub fn used_count(&self, difficulty: Difficulty) -> usize {
        self.used.get(&difficulty).map_or(0, HashSet::len)
    }

    pub fn reset(&mut self) {
        self.used.clear();
    }
}
