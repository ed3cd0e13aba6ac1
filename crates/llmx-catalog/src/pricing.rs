//! Tabla de precios estática y estimación de coste por petición.
//!
//! Precios en USD por cada 1 000 tokens. El orden de la tabla es el de
//! presentación.

use std::fmt;

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    OpenAi,
    Anthropic,
    Google,
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
                        Provider::OpenAi => "openai",
                        Provider::Anthropic => "anthropic",
                        Provider::Google => "google",
                    })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelPricing {
    pub id: &'static str,
    pub name: &'static str,
    pub provider: Provider,
    pub input_per_1k: f64,
    pub output_per_1k: f64,
    pub description: &'static str,
}

impl ModelPricing {
    pub fn input_per_1m(&self) -> f64 {
        self.input_per_1k * 1000.0
    }

    pub fn output_per_1m(&self) -> f64 {
        self.output_per_1k * 1000.0
    }
}

const fn model(id: &'static str,
               name: &'static str,
               provider: Provider,
               input_per_1k: f64,
               output_per_1k: f64,
               description: &'static str)
               -> ModelPricing {
    ModelPricing { id,
                   name,
                   provider,
                   input_per_1k,
                   output_per_1k,
                   description }
}

pub static MODEL_PRICING: Lazy<IndexMap<&'static str, ModelPricing>> = Lazy::new(|| {
    [model("gpt-5.1", "GPT-5.1", Provider::OpenAi, 0.00125, 0.01, "Best for coding and agentic tasks"),
     model("gpt-5-mini", "GPT-5 mini", Provider::OpenAi, 0.00025, 0.002, "Faster, cheaper for well-defined tasks"),
     model("gpt-5-nano", "GPT-5 nano", Provider::OpenAi, 0.00005, 0.0004, "Fastest and cheapest, great for summarization"),
     model("gpt-5-pro", "GPT-5 pro", Provider::OpenAi, 0.015, 0.12, "Smartest and most precise model"),
     model("claude-opus-4.5",
           "Claude Opus 4.5",
           Provider::Anthropic,
           0.005,
           0.025,
           "Frontier performance, best for complex reasoning"),
     model("gemini-3-pro",
           "Gemini 3 Pro",
           Provider::Google,
           0.002,
           0.012,
           "Best for multimodal understanding and agentic tasks")].into_iter()
                                                                  .map(|m| (m.id, m))
                                                                  .collect()
});

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub input_cost: f64,
    pub output_cost: f64,
    pub total_cost: f64,
}

/// Modelo desconocido: coste cero en todas las partidas.
pub fn calculate_cost(model_id: &str, input_tokens: u64, output_tokens: u64) -> CostBreakdown {
    let Some(pricing) = MODEL_PRICING.get(model_id) else {
        return CostBreakdown::default();
    };
    let input_cost = input_tokens as f64 / 1000.0 * pricing.input_per_1k;
    let output_cost = output_tokens as f64 / 1000.0 * pricing.output_per_1k;
    CostBreakdown { input_cost,
                    output_cost,
                    total_cost: input_cost + output_cost }
}

/// Número de alternativas que muestra `compare_costs`.
pub const COMPARISON_LIMIT: usize = 4;

/// Una alternativa al modelo elegido para la misma petición.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostComparison {
    pub model: &'static ModelPricing,
    pub cost: CostBreakdown,
    /// `(otro - elegido) / elegido * 100`; 0 si el elegido no cuesta nada.
    pub percent_diff: f64,
}

/// Precio de la misma petición en los demás modelos, de más barato a más
/// caro (empates en orden de tabla), recortado a `COMPARISON_LIMIT`.
pub fn compare_costs(selected: &str, input_tokens: u64, output_tokens: u64) -> Vec<CostComparison> {
    let base = calculate_cost(selected, input_tokens, output_tokens).total_cost;
    let mut others: Vec<CostComparison> =
        MODEL_PRICING.values()
                     .filter(|m| m.id != selected)
                     .map(|model| {
                         let cost = calculate_cost(model.id, input_tokens, output_tokens);
                         let percent_diff =
                             if base > 0.0 { (cost.total_cost - base) / base * 100.0 } else { 0.0 };
                         CostComparison { model, cost, percent_diff }
                     })
                     .collect();
    others.sort_by(|a, b| a.cost.total_cost.total_cmp(&b.cost.total_cost));
    others.truncate(COMPARISON_LIMIT);
    others
}

pub fn format_cost(cost: f64) -> String {
    if cost == 0.0 {
        "$0.00".to_string()
    } else if cost < 0.0001 {
        format!("${cost:.6}")
    } else if cost < 0.01 {
        format!("${cost:.4}")
    } else {
        format!("${cost:.2}")
    }
}

pub fn models_by_provider(provider: Provider) -> Vec<&'static ModelPricing> {
    MODEL_PRICING.values().filter(|m| m.provider == provider).collect()
}
