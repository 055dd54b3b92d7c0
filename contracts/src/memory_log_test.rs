use super::*;
use crate::Method;

fn sample_log_json() -> Value {
    serde_json::json!({
        "id": "log-1",
        "memory_id": "mem-9",
        "memory_layer": "long_term",
        "action": "update",
        "reason": "user corrected a fact",
        "metadata": { "source": "chat" },
        "reward": null,
        "outcome": null,
        "evaluated_at": null,
        "created_at": "2026-10-01T12:00:00"
    })
}

#[test]
fn list_sends_only_set_filters() {
    let request = list(&LogListParams {
        action: Some("update".to_owned()),
        skip_evaluated: Some(true),
        limit: Some(20),
        offset: Some(40),
        ..LogListParams::default()
    })
    .expect("request");

    assert_eq!(request.method(), Method::Get);
    assert_eq!(request.path(), "/api/logs/memory");
    assert_eq!(
        request.query(),
        &[
            ("action".to_owned(), "update".to_owned()),
            ("limit".to_owned(), "20".to_owned()),
            ("offset".to_owned(), "40".to_owned()),
            ("skip_evaluated".to_owned(), "true".to_owned()),
        ]
    );
}

#[test]
fn detail_renders_log_id() {
    let request = detail("log-42").expect("request");
    assert_eq!(request.path(), "/api/logs/log-42");
    assert!(request.query().is_empty());
}

#[test]
fn detail_rejects_empty_id() {
    assert!(detail("").is_err());
}

#[test]
fn detail_rejects_id_that_would_change_route() {
    assert!(matches!(
        detail("a/b?x=1"),
        Err(ContractError::InvalidPathParam { .. })
    ));
}

#[test]
fn stats_forwards_days_when_given() {
    assert_eq!(
        stats(Some(7)).expect("request").query(),
        &[("days".to_owned(), "7".to_owned())]
    );
    assert!(stats(None).expect("request").query().is_empty());
}

#[test]
fn evaluate_posts_log_id_body() {
    let request = evaluate("log-1").expect("request");
    assert_eq!(request.method(), Method::Post);
    assert_eq!(request.path(), "/api/rl/reward/calculate");
    assert_eq!(request.body(), Some(&serde_json::json!({ "log_id": "log-1" })));
}

#[test]
fn batch_evaluate_body_omits_unset_fields() {
    let request = batch_evaluate(&BatchEvaluateParams {
        limit: Some(50),
        days_threshold: None,
    })
    .expect("request");
    assert_eq!(request.path(), "/api/rl/reward/evaluate");
    assert_eq!(request.body(), Some(&serde_json::json!({ "limit": 50 })));
}

#[test]
fn memory_log_decodes_pending_record() {
    let log: MemoryLog = serde_json::from_value(sample_log_json()).expect("log");
    assert_eq!(log.memory_layer, "long_term");
    assert!(!log.is_evaluated());
    assert!(log.outcome.is_null());
}

#[test]
fn memory_log_tolerates_missing_optional_fields() {
    let log: MemoryLog = serde_json::from_value(serde_json::json!({
        "id": "log-2",
        "memory_id": "mem-1",
        "memory_layer": "short_term",
        "action": "create",
        "reward": 0.75,
        "evaluated_at": "2026-10-02T08:00:00",
        "created_at": "2026-10-01T08:00:00"
    }))
    .expect("log");
    assert!(log.is_evaluated());
    assert!(log.reason.is_empty());
    assert!(log.metadata.is_null());
}

#[test]
fn log_list_page_decodes() {
    let page: Page<MemoryLog> =
        serde_json::from_value(serde_json::json!({ "data": [sample_log_json()], "total": 31 }))
            .expect("page");
    assert_eq!(page.total, 31);
    assert_eq!(page.data[0].id, "log-1");
}

#[test]
fn log_stats_decodes_action_counts() {
    let stats: LogStats = serde_json::from_value(serde_json::json!({
        "total_logs": 10,
        "evaluated_logs": 6,
        "pending_logs": 4,
        "average_reward": 0.42,
        "action_counts": { "create": 7, "delete": 3 }
    }))
    .expect("stats");
    assert_eq!(stats.pending_logs, 4);
    assert_eq!(stats.action_counts.get("create"), Some(&7));
}

#[test]
fn reward_calculation_allows_null_reward() {
    let calc: RewardCalculation = serde_json::from_value(serde_json::json!({
        "log_id": "log-1",
        "reward": null,
        "outcome": null,
        "calculated_at": "2026-10-03T00:00:00"
    }))
    .expect("calculation");
    assert!(calc.reward.is_none());
}

#[test]
fn memory_log_reads_null_reason_as_empty() {
    let mut json = sample_log_json();
    json["reason"] = Value::Null;
    let log: MemoryLog = serde_json::from_value(json).expect("log");
    assert_eq!(log.reason, "");
}
