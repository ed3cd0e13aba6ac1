use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use llmx_core::{compare_methods, tokenize, TokenStats, TokenizeMethod};

use llm_explainer::batch::{tokenize_lines, total_tokens};
use llm_explainer::config::CONFIG;

#[derive(Args)]
pub struct TokenizeArgs {
    /// Text to tokenize. Ignored when --file is given.
    text: Option<String>,

    /// Tokenize each line of this file in parallel and print per-line stats.
    #[arg(long)]
    file: Option<PathBuf>,

    /// word, subword or character. Defaults to LLMX_TOKEN_METHOD.
    #[arg(short, long)]
    method: Option<TokenizeMethod>,

    /// Print JSON instead of a table.
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
pub struct CompareArgs {
    text: String,

    #[arg(long)]
    json: bool,
}

pub fn run(args: TokenizeArgs) -> Result<()> {
    let method = args.method.unwrap_or(CONFIG.token_method);

    if let Some(path) = &args.file {
        let content = std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
        let lines: Vec<&str> = content.lines().collect();
        let reports = tokenize_lines(&lines, method);
        if args.json {
            println!("{}", serde_json::to_string_pretty(&reports)?);
        } else {
            for r in &reports {
                println!("{:>5}  {:>5} tokens  {:>6.2} chars/token", r.line, r.stats.token_count, r.stats.chars_per_token);
            }
            println!("total: {} tokens in {} lines ({method})", total_tokens(&reports), reports.len());
        }
        return Ok(());
    }

    let text = args.text.context("Provide TEXT or --file")?;
    let tokens = tokenize(&text, method);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&tokens)?);
        return Ok(());
    }
    for t in &tokens {
        println!("{:>4}  {:?}", t.id, t.text);
    }
    print_stats(&TokenStats::from_tokens(method, &text, &tokens));
    Ok(())
}

pub fn compare(args: CompareArgs) -> Result<()> {
    let stats = compare_methods(&args.text);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        stats.iter().for_each(print_stats);
    }
    Ok(())
}

fn print_stats(stats: &TokenStats) {
    println!("{:<10} {:>5} tokens  {:>5} chars  {:>6.2} chars/token",
             stats.method.as_str(),
             stats.token_count,
             stats.char_count,
             stats.chars_per_token);
}
