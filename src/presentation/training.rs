//! Bucle de entrenamiento: cuatro fases fijas que se repiten.
//!
//! A diferencia del sequencer de presentaciones, avanzar desde la última fase
//! vuelve a la primera; retroceder se queda en 0. En auto-play la fase avanza
//! cada `3000 / speed` ms, y el intervalo sólo se reinicia al activar el
//! auto-play o al cambiar la velocidad, no con la navegación manual.

use std::fmt;
use std::future::pending;
use std::str::FromStr;
use std::time::Duration;

use log::debug;
use serde::Serialize;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

use crate::errors::AppError;

const BASE_INTERVAL_MS: u64 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrainingPhase {
    pub title: &'static str,
    pub description: &'static str,
}

pub const TRAINING_PHASES: [TrainingPhase; 4] = [
    TrainingPhase { title: "Training Data", description: "Load a piece of training text" },
    TrainingPhase { title: "Predict", description: "Model predicts the next token" },
    TrainingPhase { title: "Compare", description: "Compare prediction to actual answer" },
    TrainingPhase { title: "Adjust", description: "Update model weights based on error" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum TrainingSpeed {
    #[default]
    X1,
    X2,
    X3,
}

impl TrainingSpeed {
    pub fn factor(&self) -> u64 {
        match self {
            TrainingSpeed::X1 => 1,
            TrainingSpeed::X2 => 2,
            TrainingSpeed::X3 => 3,
        }
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(BASE_INTERVAL_MS / self.factor())
    }
}

impl fmt::Display for TrainingSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x", self.factor())
    }
}

impl FromStr for TrainingSpeed {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_end_matches('x') {
            "1" => Ok(TrainingSpeed::X1),
            "2" => Ok(TrainingSpeed::X2),
            "3" => Ok(TrainingSpeed::X3),
            other => Err(AppError::Config(format!("velocidad '{other}' no válida (1, 2 o 3)"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingSnapshot {
    pub current_step: usize,
    pub is_auto_playing: bool,
    pub speed: TrainingSpeed,
    pub phase: TrainingPhase,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrainingLoop {
    current: usize,
    auto_playing: bool,
    speed: TrainingSpeed,
}

impl TrainingLoop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_step(&self) -> usize {
        self.current
    }

    pub fn phase(&self) -> TrainingPhase {
        TRAINING_PHASES[self.current]
    }

    pub fn is_auto_playing(&self) -> bool {
        self.auto_playing
    }

    pub fn speed(&self) -> TrainingSpeed {
        self.speed
    }

    /// Da la vuelta: tras la última fase viene la primera.
    pub fn next(&mut self) -> usize {
        self.current = (self.current + 1) % TRAINING_PHASES.len();
        self.current
    }

    /// Se queda en 0.
    pub fn back(&mut self) -> usize {
        self.current = self.current.saturating_sub(1);
        self.current
    }

    pub fn go_to(&mut self, step: usize) -> usize {
        self.current = step.min(TRAINING_PHASES.len() - 1);
        self.current
    }

    pub fn toggle_auto_play(&mut self) -> bool {
        self.auto_playing = !self.auto_playing;
        self.auto_playing
    }

    pub fn set_speed(&mut self, speed: TrainingSpeed) {
        self.speed = speed;
    }

    /// Periodo del auto-play, o `None` si está parado.
    pub fn tick_interval(&self) -> Option<Duration> {
        self.auto_playing.then(|| self.speed.interval())
    }

    pub fn snapshot(&self) -> TrainingSnapshot {
        TrainingSnapshot { current_step: self.current,
                           is_auto_playing: self.auto_playing,
                           speed: self.speed,
                           phase: self.phase() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainingCommand {
    Next,
    Back,
    GoTo(usize),
    ToggleAutoPlay,
    SetSpeed(TrainingSpeed),
}

struct Envelope {
    command: TrainingCommand,
    reply: oneshot::Sender<TrainingSnapshot>,
}

/// Tarea tokio dueña de un `TrainingLoop`, con el mismo esquema que
/// `PresentationDriver`: comandos por `mpsc`, vistas por `watch`.
pub struct TrainingDriver {
    commands: mpsc::Sender<Envelope>,
    snapshots: watch::Receiver<TrainingSnapshot>,
    task: JoinHandle<TrainingLoop>,
}

impl TrainingDriver {
    pub fn spawn(training: TrainingLoop) -> Self {
        let (commands, rx) = mpsc::channel(16);
        let (publisher, snapshots) = watch::channel(training.snapshot());
        let task = tokio::spawn(run(training, rx, publisher));
        Self { commands, snapshots, task }
    }

    pub fn snapshot(&self) -> TrainingSnapshot {
        *self.snapshots.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<TrainingSnapshot> {
        self.snapshots.clone()
    }

    pub async fn execute(&self, command: TrainingCommand) -> Result<TrainingSnapshot, AppError> {
        let (reply, response) = oneshot::channel();
        self.commands
            .send(Envelope { command, reply })
            .await
            .map_err(|_| AppError::Internal("training driver stopped".into()))?;
        response.await.map_err(|_| AppError::Internal("training driver dropped the reply".into()))
    }

    pub async fn shutdown(self) -> Result<TrainingLoop, AppError> {
        let Self { commands, task, .. } = self;
        drop(commands);
        task.await.map_err(|e| AppError::Internal(format!("training driver task failed: {e}")))
    }
}

fn start_interval(period: Duration) -> Interval {
    // el primer tick llega tras un periodo completo, no de inmediato
    let mut interval = interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    interval
}

async fn tick(interval: &mut Option<Interval>) {
    match interval {
        Some(interval) => {
            interval.tick().await;
        }
        None => pending::<()>().await,
    }
}

async fn run(mut training: TrainingLoop,
             mut commands: mpsc::Receiver<Envelope>,
             publisher: watch::Sender<TrainingSnapshot>)
             -> TrainingLoop {
    let mut interval: Option<Interval> = None;

    loop {
        tokio::select! {
            envelope = commands.recv() => {
                let Some(Envelope { command, reply }) = envelope else { break };
                let before = training.tick_interval();
                match command {
                    TrainingCommand::Next => {
                        training.next();
                    }
                    TrainingCommand::Back => {
                        training.back();
                    }
                    TrainingCommand::GoTo(step) => {
                        training.go_to(step);
                    }
                    TrainingCommand::ToggleAutoPlay => {
                        training.toggle_auto_play();
                    }
                    TrainingCommand::SetSpeed(speed) => training.set_speed(speed),
                }
                if training.tick_interval() != before {
                    interval = training.tick_interval().map(start_interval);
                }
                let snapshot = training.snapshot();
                publisher.send_replace(snapshot);
                let _ = reply.send(snapshot);
            }
            _ = tick(&mut interval) => {
                let step = training.next();
                debug!("training tick step={step}");
                publisher.send_replace(training.snapshot());
            }
        }
    }
    training
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_from_last_to_first() {
        let mut t = TrainingLoop::new();
        t.go_to(3);
        assert_eq!(t.next(), 0);
        assert_eq!(t.phase().title, "Training Data");
    }

    #[test]
    fn back_saturates_at_zero() {
        let mut t = TrainingLoop::new();
        assert_eq!(t.back(), 0);
        t.go_to(2);
        assert_eq!(t.back(), 1);
    }

    #[test]
    fn go_to_clamps() {
        let mut t = TrainingLoop::new();
        assert_eq!(t.go_to(10), 3);
    }

    #[test]
    fn interval_per_speed() {
        assert_eq!(TrainingSpeed::X1.interval(), Duration::from_millis(3000));
        assert_eq!(TrainingSpeed::X2.interval(), Duration::from_millis(1500));
        assert_eq!(TrainingSpeed::X3.interval(), Duration::from_millis(1000));
        assert_eq!("2x".parse::<TrainingSpeed>().unwrap(), TrainingSpeed::X2);
        assert!("4".parse::<TrainingSpeed>().is_err());
    }

    #[test]
    fn interval_only_while_auto_playing() {
        let mut t = TrainingLoop::new();
        assert_eq!(t.tick_interval(), None);
        t.toggle_auto_play();
        t.set_speed(TrainingSpeed::X3);
        assert_eq!(t.tick_interval(), Some(Duration::from_millis(1000)));
    }

    #[tokio::test(start_paused = true)]
    async fn auto_play_ticks_and_wraps() {
        let driver = TrainingDriver::spawn(TrainingLoop::new());
        driver.execute(TrainingCommand::SetSpeed(TrainingSpeed::X3)).await.unwrap();
        driver.execute(TrainingCommand::ToggleAutoPlay).await.unwrap();

        tokio::time::sleep(Duration::from_millis(999)).await;
        assert_eq!(driver.snapshot().current_step, 0);
        tokio::time::sleep(Duration::from_millis(3002)).await;
        // ticks en 1000, 2000, 3000 y 4000 ms: 0 -> 1 -> 2 -> 3 -> 0
        assert_eq!(driver.snapshot().current_step, 0);

        driver.execute(TrainingCommand::ToggleAutoPlay).await.unwrap();
        tokio::time::sleep(Duration::from_secs(10)).await;
        let training = driver.shutdown().await.unwrap();
        assert_eq!(training.current_step(), 0);
        assert!(!training.is_auto_playing());
    }

    #[tokio::test(start_paused = true)]
    async fn speed_change_restarts_interval() {
        let driver = TrainingDriver::spawn(TrainingLoop::new());
        driver.execute(TrainingCommand::ToggleAutoPlay).await.unwrap();
        tokio::time::sleep(Duration::from_millis(2000)).await;
        driver.execute(TrainingCommand::SetSpeed(TrainingSpeed::X2)).await.unwrap();

        tokio::time::sleep(Duration::from_millis(1499)).await;
        assert_eq!(driver.snapshot().current_step, 0);
        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(driver.snapshot().current_step, 1);
    }
}
