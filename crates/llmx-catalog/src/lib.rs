//! llmx-catalog: datos estáticos que rodean al core.
//!
//! - `challenges`: formato de texto de los retos de código, su parser y las
//!   fuentes desde donde se cargan.
//! - `picker`: selección aleatoria sin repetición por dificultad.
//! - `pricing`: tabla de precios por modelo y estimación de coste.
pub mod challenges;
pub mod error;
pub mod picker;
pub mod pricing;
pub mod source;

pub use challenges::{parse_challenges, Challenge, ChallengesData, Difficulty};
pub use error::CatalogError;
pub use picker::ChallengePicker;
pub use pricing::{calculate_cost, compare_costs, format_cost, models_by_provider, CostBreakdown, CostComparison, ModelPricing,
                  Provider, COMPARISON_LIMIT, MODEL_PRICING};
pub use source::{ChallengeSource, FileChallengeSource, StaticChallengeSource};
