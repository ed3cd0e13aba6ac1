//! Ejecución asíncrona de un `FlowSequencer`.
//!
//! Una única tarea tokio es dueña del sequencer. Los comandos llegan por un
//! canal `mpsc` y cada uno recibe su respuesta por `oneshot`; las vistas se
//! publican en un canal `watch`. El auto-avance pendiente se espera con
//! `sleep_until` dentro del mismo `select!`, así que comandos y disparos nunca
//! se solapan y un ticket cancelado no llega a dispararse.

use log::{debug, info};
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};

use llmx_core::flow::AdvanceTicket;
use llmx_core::{EventLog, FlowSequencer, FlowSnapshot, KeyDisposition, KeyEvent};

use crate::errors::AppError;

const COMMAND_BUFFER: usize = 32;

#[derive(Debug, Clone, PartialEq)]
pub enum DriverCommand {
    Next,
    Previous,
    GoTo(i64),
    Reset,
    Play,
    Pause,
    Key(KeyEvent),
}

/// Resultado de un comando: vista posterior y, para teclas, cómo se trató.
#[derive(Debug, Clone, PartialEq)]
pub struct DriverReply {
    pub snapshot: FlowSnapshot,
    pub key: Option<KeyDisposition>,
}

struct Envelope {
    command: DriverCommand,
    reply: oneshot::Sender<DriverReply>,
}

pub struct PresentationDriver<E>
    where E: EventLog
{
    commands: mpsc::Sender<Envelope>,
    snapshots: watch::Receiver<FlowSnapshot>,
    task: JoinHandle<FlowSequencer<E>>,
}

impl<E> PresentationDriver<E> where E: EventLog + Send + 'static
{
    /// Lanza la tarea dueña del sequencer. Requiere un runtime tokio activo.
    pub fn spawn(sequencer: FlowSequencer<E>) -> Self {
        let (commands, rx) = mpsc::channel(COMMAND_BUFFER);
        let (publisher, snapshots) = watch::channel(sequencer.snapshot());
        info!("presentation driver start session={} steps={}",
              sequencer.session_id(),
              sequencer.total_steps());
        let task = tokio::spawn(run(sequencer, rx, publisher));
        Self { commands, snapshots, task }
    }

    /// Última vista publicada.
    pub fn snapshot(&self) -> FlowSnapshot {
        self.snapshots.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<FlowSnapshot> {
        self.snapshots.clone()
    }

    pub async fn execute(&self, command: DriverCommand) -> Result<DriverReply, AppError> {
        let (reply, response) = oneshot::channel();
        self.commands
            .send(Envelope { command, reply })
            .await
            .map_err(|_| AppError::Internal("presentation driver stopped".into()))?;
        response.await.map_err(|_| AppError::Internal("presentation driver dropped the reply".into()))
    }

    pub async fn next(&self) -> Result<FlowSnapshot, AppError> {
        Ok(self.execute(DriverCommand::Next).await?.snapshot)
    }

    pub async fn previous(&self) -> Result<FlowSnapshot, AppError> {
        Ok(self.execute(DriverCommand::Previous).await?.snapshot)
    }

    pub async fn go_to_step(&self, step: i64) -> Result<FlowSnapshot, AppError> {
        Ok(self.execute(DriverCommand::GoTo(step)).await?.snapshot)
    }

    pub async fn reset(&self) -> Result<FlowSnapshot, AppError> {
        Ok(self.execute(DriverCommand::Reset).await?.snapshot)
    }

    pub async fn play(&self) -> Result<FlowSnapshot, AppError> {
        Ok(self.execute(DriverCommand::Play).await?.snapshot)
    }

    pub async fn pause(&self) -> Result<FlowSnapshot, AppError> {
        Ok(self.execute(DriverCommand::Pause).await?.snapshot)
    }

    pub async fn handle_key(&self, event: KeyEvent) -> Result<KeyDisposition, AppError> {
        let reply = self.execute(DriverCommand::Key(event)).await?;
        Ok(reply.key.unwrap_or(KeyDisposition::Ignored))
    }

    /// Cierra el canal de comandos y devuelve el sequencer con su historial.
    /// Cualquier auto-avance pendiente se descarta.
    pub async fn shutdown(self) -> Result<FlowSequencer<E>, AppError> {
        let Self { commands, task, .. } = self;
        drop(commands);
        task.await.map_err(|e| AppError::Internal(format!("presentation driver task failed: {e}")))
    }
}

async fn run<E>(mut sequencer: FlowSequencer<E>,
                mut commands: mpsc::Receiver<Envelope>,
                publisher: watch::Sender<FlowSnapshot>)
                -> FlowSequencer<E>
    where E: EventLog
{
    // Plazo absoluto del ticket pendiente; se conserva mientras el ticket no cambie.
    let mut deadline: Option<(AdvanceTicket, Instant)> = None;

    loop {
        deadline = match (sequencer.pending_advance(), deadline) {
            (Some(p), Some((ticket, at))) if ticket == p.ticket => Some((ticket, at)),
            (Some(p), _) => Some((p.ticket, Instant::now() + p.remaining)),
            (None, _) => None,
        };
        let wake = deadline.map(|(_, at)| at);

        tokio::select! {
            envelope = commands.recv() => {
                let Some(Envelope { command, reply }) = envelope else { break };
                let key = apply(&mut sequencer, command);
                let snapshot = publish(&sequencer, &publisher);
                // el llamador pudo abandonar la espera; no es un error
                let _ = reply.send(DriverReply { snapshot, key });
            }
            _ = sleep_until(wake.unwrap_or_else(Instant::now)), if wake.is_some() => {
                if let Some((ticket, _)) = deadline.take() {
                    if sequencer.fire(ticket) {
                        publish(&sequencer, &publisher);
                    }
                }
            }
        }
    }

    debug!("presentation driver stop session={} step={}",
           sequencer.session_id(),
           sequencer.current_step());
    sequencer
}

fn apply<E>(sequencer: &mut FlowSequencer<E>, command: DriverCommand) -> Option<KeyDisposition>
    where E: EventLog
{
    match command {
        DriverCommand::Next => {
            sequencer.next();
        }
        DriverCommand::Previous => {
            sequencer.previous();
        }
        DriverCommand::GoTo(step) => {
            sequencer.go_to_step(step);
        }
        DriverCommand::Reset => sequencer.reset(),
        DriverCommand::Play => sequencer.play(),
        DriverCommand::Pause => sequencer.pause(),
        DriverCommand::Key(event) => return Some(sequencer.handle_key(&event)),
    }
    None
}

fn publish<E>(sequencer: &FlowSequencer<E>, publisher: &watch::Sender<FlowSnapshot>) -> FlowSnapshot
    where E: EventLog
{
    let snapshot = sequencer.snapshot();
    publisher.send_if_modified(|current| {
                 if *current == snapshot {
                     false
                 } else {
                     *current = snapshot.clone();
                     true
                 }
             });
    snapshot
}
