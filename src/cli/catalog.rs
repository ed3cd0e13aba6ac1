use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;
use indexmap::IndexMap;

use llmx_catalog::{calculate_cost, compare_costs, format_cost, ChallengePicker, ChallengesData, Difficulty,
                   FileChallengeSource, ModelPricing, Provider, MODEL_PRICING};
use llmx_core::tokenize;

use llm_explainer::config::CONFIG;
use llm_explainer::endpoint::ChallengesEndpoint;

#[derive(Args)]
pub struct CostArgs {
    /// Input (prompt) tokens. Ignored when --text is given.
    #[arg(long, default_value_t = 0)]
    input: u64,

    /// Prompt text; input tokens are counted with LLMX_TOKEN_METHOD.
    #[arg(long)]
    text: Option<String>,

    /// Output (completion) tokens.
    #[arg(long, default_value_t = 0)]
    output: u64,

    /// Model id. Defaults to LLMX_DEFAULT_MODEL.
    #[arg(long)]
    model: Option<String>,
}

#[derive(Args)]
pub struct ModelsArgs {
    /// Show prices per million tokens instead of per thousand.
    #[arg(long)]
    per_million: bool,
}

#[derive(Args)]
pub struct ChallengesArgs {
    /// Challenge document. Defaults to LLMX_CHALLENGES_PATH.
    #[arg(long)]
    path: Option<PathBuf>,

    /// easy, medium or hard.
    #[arg(short, long)]
    difficulty: Option<Difficulty>,

    /// Pick this many random challenges, without repeats until exhausted.
    #[arg(long)]
    pick: Option<usize>,
}

pub fn cost(args: CostArgs) -> Result<()> {
    let model = args.model.unwrap_or_else(|| CONFIG.default_model.clone());
    let Some(pricing) = MODEL_PRICING.get(model.as_str()) else {
        bail!("Unknown model '{model}'. Run `models` to list them.");
    };
    let input = match &args.text {
        Some(text) => tokenize(text, CONFIG.token_method).len() as u64,
        None => args.input,
    };
    let c = calculate_cost(&model, input, args.output);
    println!("{} ({})", pricing.name, pricing.id);
    println!("  input  {:>10} tokens  {}", input, format_cost(c.input_cost));
    println!("  output {:>10} tokens  {}", args.output, format_cost(c.output_cost));
    println!("  total  {:>17}  {}", "", format_cost(c.total_cost));

    if input > 0 || args.output > 0 {
        println!("Same request on other models:");
        for other in compare_costs(&model, input, args.output) {
            let sign = if other.percent_diff > 0.0 { "+" } else { "" };
            println!("  {:<16} {:>10}  {sign}{:.0}%",
                     other.model.name,
                     format_cost(other.cost.total_cost),
                     other.percent_diff);
        }
    }
    Ok(())
}

pub fn models(args: ModelsArgs) -> Result<()> {
    let mut grouped: IndexMap<Provider, Vec<&ModelPricing>> = IndexMap::new();
    for m in MODEL_PRICING.values() {
        grouped.entry(m.provider).or_default().push(m);
    }
    let unit = if args.per_million { "1M" } else { "1K" };
    for (provider, models) in grouped {
        println!("{provider}");
        for m in models {
            let (input, output) = if args.per_million {
                (m.input_per_1m(), m.output_per_1m())
            } else {
                (m.input_per_1k, m.output_per_1k)
            };
            println!("  {:<16} in ${input}/{unit}  out ${output}/{unit}  {}", m.id, m.description);
        }
    }
    Ok(())
}

pub async fn challenges(args: ChallengesArgs) -> Result<()> {
    let path = args.path.unwrap_or_else(|| CONFIG.challenges_path.clone());
    let response = ChallengesEndpoint::new(FileChallengeSource::new(path)).get().await;
    let Some(data) = response.challenges() else {
        bail!("{}", response.body);
    };

    match (args.difficulty, args.pick) {
        (None, None) => println!("{}", serde_json::to_string_pretty(&response.body)?),
        (Some(difficulty), None) => print_section(&data, difficulty),
        (difficulty, Some(count)) => {
            let difficulty = difficulty.unwrap_or(Difficulty::Easy);
            let mut picker = ChallengePicker::new();
            let mut rng = rand::thread_rng();
            for _ in 0..count {
                let Some(c) = picker.pick(&data, difficulty, &mut rng) else {
                    bail!("No {difficulty} challenges available");
                };
                println!("# {}\n{}\n", c.title, c.description);
            }
        }
    }
    Ok(())
}

fn print_section(data: &ChallengesData, difficulty: Difficulty) {
    for c in data.get(difficulty) {
        println!("# {}\n{}\n", c.title, c.description);
    }
}
