#![forbid(unsafe_code)]

mod support;
use support::*;

use serde_json::json;

#[test]
fn generate_sequence_is_deterministic_on_the_wire() {
    let mut server = Server::start();
    let args = json!({ "seed": "Alpha", "label": "X", "length": 144 });
    let first = server.call("gen-1", "generate_sequence", args.clone());
    let second = server.call("gen-2", "generate_sequence", args);

    let a = result(&first).get("sequence").and_then(|v| v.as_str()).expect("sequence");
    let b = result(&second).get("sequence").and_then(|v| v.as_str()).expect("sequence");
    assert_eq!(a, b);
    assert_eq!(a.chars().count(), 144);
    assert_eq!(
        result(&first).get("length").and_then(|v| v.as_u64()),
        Some(144)
    );
}

#[test]
fn generated_sequence_scores_inside_the_bounds() {
    let mut server = Server::start();
    let generated = server.call(
        "gen-3",
        "generate_sequence",
        json!({ "seed": "Alpha", "label": "Gateway" }),
    );
    let sequence = result(&generated)
        .get("sequence")
        .and_then(|v| v.as_str())
        .expect("sequence")
        .to_string();

    let scored = server.call(
        "score-1",
        "score_sequence",
        json!({ "sequence": sequence, "windowSizes": [12, 24, 36, 72] }),
    );
    let overall = result(&scored).get("overall").and_then(|v| v.as_f64()).expect("overall");
    assert!((0.777..=1.0).contains(&overall), "overall {overall}");
    let windows = result(&scored).get("windows").and_then(|v| v.as_array()).expect("windows");
    assert_eq!(windows.len(), 4);
}

#[test]
fn constant_sequence_scores_exactly_one() {
    let mut server = Server::start();
    let scored = server.call(
        "score-2",
        "score_sequence",
        json!({ "sequence": "A".repeat(144), "windowSizes": [144] }),
    );
    let overall = result(&scored).get("overall").and_then(|v| v.as_f64()).expect("overall");
    assert!((overall - 1.0).abs() < 1e-9, "overall {overall}");
}

#[test]
fn oversized_windows_are_an_argument_error() {
    let mut server = Server::start();
    let response = server.call(
        "score-3",
        "score_sequence",
        json!({ "sequence": "ABAB", "windowSizes": [3, 3] }),
    );
    assert_eq!(error_kind(&response), Some("InvalidArgumentError"));
    assert!(error_message(&response).contains("windowSizes"));
}

#[test]
fn contraction_trajectory_converges_toward_one() {
    let mut server = Server::start();
    let response = server.call(
        "iter-1",
        "iterate_contraction",
        json!({ "initial": 0.5, "iterations": 50, "k": 1.618 }),
    );
    let trajectory = result(&response)
        .get("trajectory")
        .and_then(|v| v.as_array())
        .expect("trajectory");
    assert_eq!(trajectory.len(), 51);
    let values = trajectory
        .iter()
        .map(|v| v.as_f64().expect("number"))
        .collect::<Vec<_>>();
    for pair in values.windows(2) {
        assert!(pair[1] > pair[0], "not strictly increasing: {pair:?}");
    }
    let final_value = result(&response)
        .get("finalValue")
        .and_then(|v| v.as_f64())
        .expect("finalValue");
    assert!(final_value > 0.999_999);
}

#[test]
fn growth_at_zero_elapsed_is_baseline_times_multiplier() {
    let mut server = Server::start();
    let response = server.call(
        "grow-1",
        "evaluate_growth",
        json!({
            "baseline": 144000.0,
            "growthBase": 1.618,
            "characteristicTime": 144.0,
            "multiplier": 3.0,
            "elapsedTime": 0.0
        }),
    );
    let amplified = result(&response)
        .get("amplifiedValue")
        .and_then(|v| v.as_f64())
        .expect("amplifiedValue");
    assert!((amplified - 432_000.0).abs() < 1e-6);
    assert_eq!(
        result(&response).get("logScale").and_then(|v| v.as_bool()),
        Some(false)
    );
}

#[test]
fn growth_overflow_degrades_to_log_scale() {
    let mut server = Server::start();
    let response = server.call(
        "grow-2",
        "evaluate_growth",
        json!({
            "baseline": 1e10,
            "growthBase": 10.0,
            "characteristicTime": 1.0,
            "multiplier": 2.0,
            "elapsedTime": 1000.0
        }),
    );
    assert_eq!(
        result(&response).get("logScale").and_then(|v| v.as_bool()),
        Some(true)
    );
    let magnitude = result(&response)
        .get("log10Amplified")
        .and_then(|v| v.as_f64())
        .expect("log10Amplified");
    assert!((magnitude - (1010.0 + 2.0f64.log10())).abs() < 1e-6);
}

#[test]
fn growth_without_elapsed_or_epoch_is_rejected() {
    let mut server = Server::start();
    let response = server.call(
        "grow-3",
        "evaluate_growth",
        json!({
            "baseline": 1.0,
            "growthBase": 2.0,
            "characteristicTime": 1.0,
            "multiplier": 1.0
        }),
    );
    assert_eq!(error_kind(&response), Some("InvalidArgumentError"));
    let message = error_message(&response);
    assert!(message.contains("elapsedTime"), "{message}");
    assert!(message.contains("epoch"), "{message}");
}

#[test]
fn convergence_clamps_on_both_sides() {
    let mut server = Server::start();
    let before = server.call(
        "conv-1",
        "compute_convergence",
        json!({
            "epochStart": "2025-01-01T00:00:00Z",
            "epochEnd": "2025-01-11T00:00:00Z",
            "now": "2024-12-01T00:00:00Z"
        }),
    );
    assert_eq!(result(&before).get("daysElapsed").and_then(|v| v.as_i64()), Some(0));
    assert_eq!(
        result(&before).get("fractionComplete").and_then(|v| v.as_f64()),
        Some(0.0)
    );

    let after = server.call(
        "conv-2",
        "compute_convergence",
        json!({
            "epochStart": "2025-01-01T00:00:00Z",
            "epochEnd": "2025-01-11T00:00:00Z",
            "now": "2025-03-01T00:00:00Z"
        }),
    );
    assert_eq!(result(&after).get("daysRemaining").and_then(|v| v.as_i64()), Some(0));
    assert_eq!(
        result(&after).get("fractionComplete").and_then(|v| v.as_f64()),
        Some(1.0)
    );
}

#[test]
fn convergence_trace_is_daily_and_bounded() {
    let mut server = Server::start();
    let response = server.call(
        "conv-3",
        "compute_convergence",
        json!({
            "epochStart": "2025-01-01T00:00:00Z",
            "epochEnd": "2025-01-11T00:00:00Z",
            "now": "2025-01-04T12:00:00Z",
            "includeTrace": true
        }),
    );
    let trace = result(&response).get("trace").and_then(|v| v.as_array()).expect("trace");
    assert_eq!(trace.len(), 4);
    assert_eq!(trace[0].get("day").and_then(|v| v.as_i64()), Some(0));
}

#[test]
fn inverted_anchors_are_rejected() {
    let mut server = Server::start();
    let response = server.call(
        "conv-4",
        "compute_convergence",
        json!({
            "epochStart": "2025-01-11T00:00:00Z",
            "epochEnd": "2025-01-01T00:00:00Z"
        }),
    );
    assert_eq!(error_kind(&response), Some("InvalidArgumentError"));
    assert!(error_message(&response).contains("epochEnd"));
}

#[test]
fn bridge_document_is_complete_and_validated() {
    let mut server = Server::start();
    let response = server.call("bridge-1", "build_bridge", json!({ "label": "Gateway" }));
    let doc = result(&response);
    assert_eq!(doc.get("validated").and_then(|v| v.as_bool()), Some(true));
    assert_eq!(
        doc.get("sequence").and_then(|s| s.get("length")).and_then(|v| v.as_u64()),
        Some(144)
    );
    let overall = doc
        .get("coherence")
        .and_then(|c| c.get("overall"))
        .and_then(|v| v.as_f64())
        .expect("coherence.overall");
    assert!((0.777..=1.0).contains(&overall));
    assert!(doc.get("growth").and_then(|g| g.get("elapsedDays")).is_some());

    // Same label and default seed: the sequence leg is reproducible.
    let again = server.call("bridge-2", "build_bridge", json!({ "label": "Gateway" }));
    assert_eq!(
        doc.get("sequence").and_then(|s| s.get("symbols")),
        result(&again).get("sequence").and_then(|s| s.get("symbols"))
    );
}
