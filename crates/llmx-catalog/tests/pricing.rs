use llmx_catalog::{calculate_cost, compare_costs, format_cost, models_by_provider, Provider, COMPARISON_LIMIT, MODEL_PRICING};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-12
}

#[test]
fn cost_is_tokens_over_thousand_times_price() {
    let c = calculate_cost("gpt-5.1", 2000, 500);
    assert!(close(c.input_cost, 0.0025));
    assert!(close(c.output_cost, 0.005));
    assert!(close(c.total_cost, 0.0075));
}

#[test]
fn unknown_model_costs_nothing() {
    let c = calculate_cost("gpt-2", 1_000_000, 1_000_000);
    assert_eq!(c.total_cost, 0.0);
    assert_eq!(c.input_cost, 0.0);
    assert_eq!(c.output_cost, 0.0);
}

#[test]
fn format_cost_precision_bands() {
    assert_eq!(format_cost(0.0), "$0.00");
    assert_eq!(format_cost(0.00005), "$0.000050");
    assert_eq!(format_cost(0.0075), "$0.0075");
    assert_eq!(format_cost(1.5), "$1.50");
}

#[test]
fn provider_filter() {
    let openai: Vec<_> = models_by_provider(Provider::OpenAi).iter().map(|m| m.id).collect();
    assert_eq!(openai, vec!["gpt-5.1", "gpt-5-mini", "gpt-5-nano", "gpt-5-pro"]);
    assert_eq!(models_by_provider(Provider::Anthropic).len(), 1);
    assert_eq!(models_by_provider(Provider::Google)[0].name, "Gemini 3 Pro");
    assert_eq!(MODEL_PRICING.len(), 6);
}

#[test]
fn comparison_is_cheapest_first_and_cut_to_four() {
    let others = compare_costs("gpt-5.1", 1000, 1000);
    let ids: Vec<_> = others.iter().map(|c| c.model.id).collect();
    assert_eq!(others.len(), COMPARISON_LIMIT);
    // gpt-5-pro es el más caro y queda fuera
    assert_eq!(ids, vec!["gpt-5-nano", "gpt-5-mini", "gemini-3-pro", "claude-opus-4.5"]);
    assert!(others.windows(2).all(|w| w[0].cost.total_cost <= w[1].cost.total_cost));
}

#[test]
fn comparison_percentages_are_relative_to_selected() {
    let others = compare_costs("gpt-5.1", 1000, 1000);
    assert!((others[0].percent_diff - -96.0).abs() < 1e-9);
    assert!((others[1].percent_diff - -80.0).abs() < 1e-9);
    assert!((others[3].percent_diff - 166.666_666_666_666_66).abs() < 1e-6);
}

#[test]
fn zero_cost_request_has_zero_percentages() {
    let others = compare_costs("gpt-5.1", 0, 0);
    assert!(others.iter().all(|c| c.percent_diff == 0.0 && c.cost.total_cost == 0.0));
    // empates en orden de tabla
    let ids: Vec<_> = others.iter().map(|c| c.model.id).collect();
    assert_eq!(ids, vec!["gpt-5-mini", "gpt-5-nano", "gpt-5-pro", "claude-opus-4.5"]);
}

#[test]
fn unknown_selected_model_compares_against_zero() {
    let others = compare_costs("gpt-2", 5000, 0);
    assert_eq!(others.len(), COMPARISON_LIMIT);
    assert!(others.iter().all(|c| c.percent_diff == 0.0));
    assert_eq!(others[0].model.id, "gpt-5-nano");
}
