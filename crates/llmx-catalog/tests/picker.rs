use std::collections::HashSet;

use llmx_catalog::{parse_challenges, ChallengePicker, ChallengesData, Difficulty};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn three_easy() -> ChallengesData {
    parse_challenges("### Easy\nTitle: A\nDescription: a\n\nTitle: B\nDescription: b\n\nTitle: C\nDescription: c\n")
}

#[test]
fn no_repeats_until_exhausted() {
    let data = three_easy();
    let mut picker = ChallengePicker::new();
    let mut rng = StdRng::seed_from_u64(7);

    let seen: HashSet<String> = (0..3).map(|_| picker.pick(&data, Difficulty::Easy, &mut rng).unwrap().title)
                                      .collect();
    assert_eq!(seen.len(), 3);
    assert_eq!(picker.used_count(Difficulty::Easy), 3);
}

#[test]
fn exhaustion_clears_used_set() {
    let data = three_easy();
    let mut picker = ChallengePicker::new();
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..3 {
        picker.pick(&data, Difficulty::Easy, &mut rng);
    }

    let fourth = picker.pick(&data, Difficulty::Easy, &mut rng);
    assert!(fourth.is_some());
    // el reto devuelto al reiniciar no queda anotado
    assert_eq!(picker.used_count(Difficulty::Easy), 0);
}

#[test]
fn empty_difficulty_returns_none() {
    let data = three_easy();
    let mut picker = ChallengePicker::new();
    let mut rng = StdRng::seed_from_u64(1);
    assert!(picker.pick(&data, Difficulty::Hard, &mut rng).is_none());
}

#[test]
fn difficulties_are_tracked_independently() {
    let data = parse_challenges("### Easy\nTitle: A\n### Medium\nTitle: M\n");
    let mut picker = ChallengePicker::new();
    let mut rng = StdRng::seed_from_u64(3);
    assert_eq!(picker.pick(&data, Difficulty::Easy, &mut rng).unwrap().title, "A");
    assert_eq!(picker.pick(&data, Difficulty::Medium, &mut rng).unwrap().title, "M");
    assert_eq!(picker.used_count(Difficulty::Easy), 1);
    assert_eq!(picker.used_count(Difficulty::Medium), 1);
}
