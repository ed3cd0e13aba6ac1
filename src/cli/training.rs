use anyhow::{Context, Result};
use clap::Args;
use log::info;
use tokio::io::{AsyncBufReadExt, BufReader};

use llm_explainer::presentation::{TrainingCommand, TrainingDriver, TrainingLoop, TrainingSnapshot, TrainingSpeed,
                                  TRAINING_PHASES};

const TRAINING_HELP: &str = "commands: n (next), b (back), goto <1-4>, auto, speed <1|2|3>, q (quit)";

#[derive(Args)]
pub struct TrainingArgs {
    /// Auto-play speed: 1, 2 or 3.
    #[arg(long, default_value = "1")]
    speed: TrainingSpeed,

    /// Start with auto-play on.
    #[arg(long)]
    auto: bool,
}

pub async fn run(args: TrainingArgs) -> Result<()> {
    let driver = TrainingDriver::spawn(TrainingLoop::new());
    driver.execute(TrainingCommand::SetSpeed(args.speed)).await?;
    print_snapshot(&driver.snapshot());
    println!("{TRAINING_HELP}");

    let mut updates = driver.subscribe();
    let printer = tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let snapshot = *updates.borrow_and_update();
            print_snapshot(&snapshot);
        }
    });

    if args.auto {
        driver.execute(TrainingCommand::ToggleAutoPlay).await?;
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        let mut words = line.split_whitespace();
        let command = match (words.next(), words.next()) {
            (Some("q" | "quit"), _) => break,
            (None | Some("n" | "next"), _) => Some(TrainingCommand::Next),
            (Some("b" | "back"), _) => Some(TrainingCommand::Back),
            (Some("auto"), _) => Some(TrainingCommand::ToggleAutoPlay),
            (Some("goto"), Some(n)) => n.parse::<usize>()
                                        .ok()
                                        .filter(|n| (1..=TRAINING_PHASES.len()).contains(n))
                                        .map(|n| TrainingCommand::GoTo(n - 1)),
            (Some("speed"), Some(s)) => s.parse().ok().map(TrainingCommand::SetSpeed),
            _ => None,
        };
        match command {
            Some(command) => {
                driver.execute(command).await?;
            }
            None => println!("{TRAINING_HELP}"),
        }
    }

    let training = driver.shutdown().await?;
    printer.abort();
    info!("training loop stopped at step {}", training.current_step());
    Ok(())
}

fn print_snapshot(s: &TrainingSnapshot) {
    println!("[{}/{}] {} ({}){}", s.current_step + 1, TRAINING_PHASES.len(), s.phase.title, s.speed,
             if s.is_auto_playing { "  (auto)" } else { "" });
    println!("    {}", s.phase.description);
}
