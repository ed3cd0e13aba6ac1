use std::time::Duration;

use llmx_core::{FlowEventKind, FlowSequencer, FlowStep};

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn timed(durations: &[u64]) -> FlowSequencer {
    let steps = durations.iter()
                         .enumerate()
                         .map(|(i, d)| FlowStep::new(format!("t{i}"), format!("Timed {i}"), "").with_duration_ms(*d))
                         .collect();
    FlowSequencer::new(steps).unwrap()
}

fn fired(seq: &FlowSequencer) -> usize {
    seq.events().iter().filter(|e| matches!(e.kind, FlowEventKind::AutoAdvanceFired { .. })).count()
}

#[test]
fn advance_fires_after_exact_duration() {
    let mut seq = timed(&[100, 100, 100]);
    seq.play();
    assert_eq!(seq.advance_clock(ms(99)), 0);
    assert_eq!(seq.current_step(), 0);
    assert_eq!(seq.advance_clock(ms(1)), 1);
    assert_eq!(seq.current_step(), 1);
}

#[test]
fn rapid_pause_play_yields_exactly_one_advance() {
    let mut seq = timed(&[100, 100, 100]);
    seq.play();
    for _ in 0..5 {
        seq.advance_clock(ms(30));
        seq.pause();
        seq.play();
    }
    // cada play reinicia la espera completa
    assert_eq!(seq.current_step(), 0);
    assert_eq!(seq.advance_clock(ms(99)), 0);
    assert_eq!(seq.advance_clock(ms(1)), 1);
    assert_eq!(seq.current_step(), 1);

    // next() deja el sequencer esperando input: no hay segundo avance
    assert!(seq.pending_advance().is_none());
    assert_eq!(seq.advance_clock(ms(1_000)), 0);
    assert_eq!(fired(&seq), 1);
}

#[test]
fn stale_ticket_after_pause_never_fires() {
    let mut seq = timed(&[100, 100]);
    seq.play();
    let stale = seq.pending_advance().unwrap().ticket;
    seq.pause();
    seq.play();
    assert!(!seq.fire(stale));
    assert_eq!(seq.current_step(), 0);
    let current = seq.pending_advance().unwrap().ticket;
    assert!(seq.fire(current));
    assert!(!seq.fire(current));
    assert_eq!(seq.current_step(), 1);
}

#[test]
fn manual_navigation_cancels_pending_advance() {
    let mut seq = timed(&[100, 100, 100]);
    seq.play();
    seq.advance_clock(ms(50));
    seq.next();
    assert!(seq.pending_advance().is_none());
    assert_eq!(seq.advance_clock(ms(500)), 0);
    assert_eq!(seq.current_step(), 1);
    assert!(seq.events().iter().any(|e| matches!(e.kind, FlowEventKind::AutoAdvanceCancelled { step_index: 0, .. })));
}

#[test]
fn zero_duration_waits_for_user() {
    let mut seq = timed(&[0, 100]);
    seq.play();
    assert!(seq.pending_advance().is_none());
    assert_eq!(seq.advance_clock(ms(10_000)), 0);
    assert_eq!(seq.current_step(), 0);
}

#[test]
fn last_step_stops_instead_of_advancing() {
    let mut seq = timed(&[100, 100]);
    seq.go_to_step(1);
    seq.play();
    assert_eq!(seq.advance_clock(ms(100)), 1);
    assert_eq!(seq.current_step(), 1);
    assert!(!seq.is_playing());
    assert!(seq.events().iter().any(|e| matches!(e.kind, FlowEventKind::PlaybackFinished { step_index: 1 })));
}

#[test]
fn at_most_one_pending_at_any_time() {
    let mut seq = timed(&[100, 200, 300]);
    seq.play();
    for i in 0..20 {
        match i % 4 {
            0 => seq.pause(),
            1 => seq.play(),
            2 => {
                seq.next();
                seq.play();
            }
            _ => {
                seq.advance_clock(ms(50));
            }
        }
        let scheduled = seq.events()
                           .iter()
                           .filter(|e| matches!(e.kind, FlowEventKind::AutoAdvanceScheduled { .. }))
                           .count();
        let closed = seq.events()
                        .iter()
                        .filter(|e| {
                            matches!(e.kind,
                                     FlowEventKind::AutoAdvanceCancelled { .. } | FlowEventKind::AutoAdvanceFired { .. })
                        })
                        .count();
        let outstanding = scheduled - closed;
        assert!(outstanding <= 1);
        assert_eq!(outstanding == 1, seq.pending_advance().is_some());
    }
}
