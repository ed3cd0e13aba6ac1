use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use log::info;
use tokio::io::{AsyncBufReadExt, BufReader};

use llmx_core::{FlowSequencer, FlowSnapshot, FlowStep, KeyDisposition};

use llm_explainer::config::CONFIG;
use llm_explainer::presentation::{load_steps, parse_console_line, scale_durations, ConsoleCommand, PresentationDriver,
                                  Walkthrough, CONSOLE_HELP};

#[derive(Args)]
pub struct PresentArgs {
    /// Built-in walkthrough: rag or mcp.
    #[arg(default_value = "rag")]
    walkthrough: Walkthrough,

    /// Load steps from a JSON file instead.
    #[arg(long)]
    file: Option<PathBuf>,

    /// Give manual steps this duration (ms) and start playing.
    #[arg(long)]
    auto_ms: Option<u64>,

    /// Playback speed multiplier. Defaults to LLMX_PLAYBACK_SPEED.
    #[arg(long)]
    speed: Option<f64>,
}

pub async fn run(args: PresentArgs) -> Result<()> {
    let mut steps = match &args.file {
        Some(path) => load_steps(path).await?.steps().to_vec(),
        None => args.walkthrough.steps(),
    };
    if let Some(ms) = args.auto_ms {
        steps = steps.into_iter()
                     .map(|s| if s.auto_advances() { s } else { s.with_duration_ms(ms) })
                     .collect();
    }
    let steps = scale_durations(steps, args.speed.unwrap_or(CONFIG.playback_speed));

    let sequencer = FlowSequencer::builder().steps(steps)
                                            .on_step_change(|i: usize, step: &FlowStep| {
                                                info!("step {i} -> {}", step.id)
                                            })
                                            .build()?;
    let driver = PresentationDriver::spawn(sequencer);
    print_snapshot(&driver.snapshot());
    println!("{CONSOLE_HELP}");

    let mut updates = driver.subscribe();
    let printer = tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let snapshot = updates.borrow_and_update().clone();
            print_snapshot(&snapshot);
        }
    });

    if args.auto_ms.is_some() {
        driver.play().await?;
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        match parse_console_line(&line) {
            ConsoleCommand::Quit => break,
            ConsoleCommand::Play => {
                driver.play().await?;
            }
            ConsoleCommand::Pause => {
                driver.pause().await?;
            }
            ConsoleCommand::GoTo(n) => {
                driver.go_to_step(n).await?;
            }
            ConsoleCommand::Key(event) => {
                if driver.handle_key(event).await? == KeyDisposition::Ignored {
                    println!("{CONSOLE_HELP}");
                }
            }
            ConsoleCommand::Invalid => println!("{CONSOLE_HELP}"),
        }
    }

    let sequencer = driver.shutdown().await?;
    printer.abort();
    info!("presentation finished with {} events", sequencer.events().len());
    Ok(())
}

fn print_snapshot(s: &FlowSnapshot) {
    println!("[{}/{}] {:>5.1}% {}{}", s.current_step + 1, s.total_steps, s.progress, s.step.title,
             if s.is_playing { "  (playing)" } else { "" });
    println!("    {}", s.step.description);
}
