use std::io::Write;

use anyhow::{bail, Result};
use clap::Args;

use llm_explainer::config::CONFIG;
use llm_explainer::inference::ScriptedResponder;

#[derive(Args)]
pub struct StreamArgs {
    prompt: String,

    /// Sampling temperature (0-2). Defaults to LLMX_TEMPERATURE.
    #[arg(short, long)]
    temperature: Option<f64>,

    /// Stop after this many tokens.
    #[arg(long)]
    max_tokens: Option<usize>,
}

pub async fn run(args: StreamArgs) -> Result<()> {
    let mut responder = ScriptedResponder::new(args.temperature.unwrap_or(CONFIG.temperature));
    let Some(mut stream) = responder.generate(&args.prompt) else {
        bail!("Prompt is empty");
    };

    let mut stdout = std::io::stdout();
    let mut emitted = 0;
    while let Some(token) = stream.next_token().await {
        write!(stdout, "{}", token.text)?;
        stdout.flush()?;
        emitted += 1;
        if args.max_tokens.is_some_and(|max| emitted >= max) {
            stream.stop();
            break;
        }
    }
    println!();
    Ok(())
}
