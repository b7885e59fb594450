mod common;

use std::time::Duration;

use tokio::time::Instant;
use usekit::config::SimulationConfig;
use usekit::simulate::{run_scenario, Scenario, StepOutcome};
use usekit::ui::promise::PromisePhase;

#[tokio::test(start_paused = true)]
async fn demo_scenario_shows_latest_wins_and_retry() {
    let scenario = Scenario::load_from(&common::demo_path("latest_wins.toml")).unwrap();
    let report = run_scenario(&scenario, &SimulationConfig::default())
        .await
        .unwrap();

    let outcomes: Vec<_> = report.steps.iter().map(|s| s.outcome.clone()).collect();
    assert_eq!(
        outcomes,
        vec![
            // Superseded after the reset, but its caller still gets 42.
            StepOutcome::Resolved { value: 42 },
            StepOutcome::RetryRejected,
            StepOutcome::Dropped,
            StepOutcome::Applied,
            StepOutcome::Resolved { value: 99 },
            StepOutcome::Rejected {
                error: "attempt 1 failed".to_string()
            },
            StepOutcome::Resolved { value: 7 },
        ]
    );

    assert_eq!(report.name.as_deref(), Some("latest wins"));
    assert_eq!(report.final_state.phase, PromisePhase::Succeeded);
    assert_eq!(report.final_state.value, Some(7));
    assert_eq!(report.final_state.error, None);
    assert!(!report.final_state.loading);
}

#[tokio::test(start_paused = true)]
async fn stale_failure_does_not_reach_state() {
    let scenario = Scenario::from_toml_str(
        r#"
        [[steps]]
        action = "call"
        at_ms = 0
        delay_ms = 100
        value = 1
        fail_attempts = 1

        [[steps]]
        action = "reset"
        at_ms = 10

        [[steps]]
        action = "call"
        at_ms = 20
        delay_ms = 10
        value = 3
        "#,
    )
    .unwrap();

    let report = run_scenario(&scenario, &SimulationConfig::default())
        .await
        .unwrap();

    assert_eq!(
        report.steps[0].outcome,
        StepOutcome::Rejected {
            error: "attempt 1 failed".to_string()
        }
    );
    assert_eq!(report.final_state.value, Some(3));
    assert_eq!(report.final_state.error, None);
}

#[tokio::test(start_paused = true)]
async fn failed_retry_is_swallowed() {
    let scenario = Scenario::from_toml_str(
        r#"
        [[steps]]
        action = "call"
        at_ms = 0
        delay_ms = 5
        value = 1
        fail_attempts = 2

        [[steps]]
        action = "retry"
        at_ms = 50
        "#,
    )
    .unwrap();

    let report = run_scenario(&scenario, &SimulationConfig::default())
        .await
        .unwrap();

    assert_eq!(report.steps[1].outcome, StepOutcome::Swallowed);
    assert_eq!(report.final_state.phase, PromisePhase::Failed);
    assert_eq!(report.final_state.error.as_deref(), Some("attempt 2 failed"));
}

#[tokio::test(start_paused = true)]
async fn set_value_then_reset() {
    let scenario = Scenario::from_toml_str(
        r#"
        [[steps]]
        action = "set_value"
        at_ms = 0
        value = 5

        [[steps]]
        action = "reset"
        at_ms = 1

        [[steps]]
        action = "reset"
        at_ms = 2
        "#,
    )
    .unwrap();

    let report = run_scenario(&scenario, &SimulationConfig::default())
        .await
        .unwrap();

    assert!(report.steps.iter().all(|s| s.outcome == StepOutcome::Applied));
    assert_eq!(report.final_state.phase, PromisePhase::Idle);
}

#[tokio::test(start_paused = true)]
async fn missing_delay_uses_configured_default() {
    let scenario = Scenario::from_toml_str(
        r#"
        [[steps]]
        action = "call"
        at_ms = 0
        value = 8
        "#,
    )
    .unwrap();
    let config = SimulationConfig {
        default_delay_ms: 500,
    };

    let started = Instant::now();
    let report = run_scenario(&scenario, &config).await.unwrap();

    assert!(started.elapsed() >= Duration::from_millis(500));
    assert_eq!(report.final_state.value, Some(8));
}

#[tokio::test(start_paused = true)]
async fn json_report_uses_snake_case_tags() {
    let scenario = Scenario::load_from(&common::demo_path("latest_wins.toml")).unwrap();
    let report = run_scenario(&scenario, &SimulationConfig::default())
        .await
        .unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["steps"][1]["outcome"], "retry_rejected");
    assert_eq!(json["steps"][1]["action"], "retry");
    assert_eq!(json["steps"][4]["value"], 99);
    assert_eq!(json["final_state"]["phase"], "succeeded");
}

#[test]
fn text_report_lists_every_step() {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .start_paused(true)
        .build()
        .unwrap();
    let scenario = Scenario::load_from(&common::demo_path("latest_wins.toml")).unwrap();
    let report = rt
        .block_on(run_scenario(&scenario, &SimulationConfig::default()))
        .unwrap();

    let text = report.to_string();
    assert!(text.starts_with("scenario: latest wins"));
    assert!(text.contains("dropped"));
    assert!(text.contains("retry rejected"));
    assert!(text.ends_with("final: phase=Succeeded loading=false value=7 error=-"));
}
