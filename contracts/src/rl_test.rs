use super::*;
use crate::Method;

#[test]
fn samples_forwards_reward_range() {
    let request = samples(&SampleListParams {
        entity_type: Some("memory".to_owned()),
        min_reward: Some(-0.5),
        max_reward: Some(1.0),
        limit: Some(50),
        ..SampleListParams::default()
    })
    .expect("request");

    assert_eq!(request.method(), Method::Get);
    assert_eq!(request.path(), "/api/rl/training/samples");
    assert_eq!(
        request.query(),
        &[
            ("entity_type".to_owned(), "memory".to_owned()),
            ("limit".to_owned(), "50".to_owned()),
            ("max_reward".to_owned(), "1.0".to_owned()),
            ("min_reward".to_owned(), "-0.5".to_owned()),
        ]
    );
}

#[test]
fn checkpoints_without_filters_sends_no_query() {
    let request = checkpoints(&CheckpointListParams::default()).expect("request");
    assert_eq!(request.path(), "/api/rl/model/checkpoints");
    assert!(request.query().is_empty());
}

#[test]
fn download_renders_checkpoint_id() {
    let request = download("ck-7").expect("request");
    assert_eq!(request.path(), "/api/rl/model/checkpoint/ck-7/download");
}

#[test]
fn download_rejects_empty_id() {
    assert!(download("").is_err());
}

#[test]
fn save_sends_empty_body_when_metrics_absent() {
    let request = save(None).expect("request");
    assert_eq!(request.method(), Method::Post);
    assert_eq!(request.body(), Some(&serde_json::json!({})));
}

#[test]
fn save_forwards_metrics() {
    let metrics = serde_json::json!({ "loss": 0.12 });
    let request = save(Some(&metrics)).expect("request");
    assert_eq!(
        request.body(),
        Some(&serde_json::json!({ "metrics": { "loss": 0.12 } }))
    );
}

#[test]
fn load_posts_without_body() {
    let request = load().expect("request");
    assert_eq!(request.method(), Method::Post);
    assert_eq!(request.path(), "/api/rl/model/load");
    assert!(request.body().is_none());
}

#[test]
fn train_body_contains_only_set_fields() {
    let request = train(&TrainParams {
        epochs: Some(5),
        save_checkpoint: Some(false),
        ..TrainParams::default()
    })
    .expect("request");
    assert_eq!(
        request.body(),
        Some(&serde_json::json!({ "epochs": 5, "save_checkpoint": false }))
    );
}

#[test]
fn reward_statistics_forwards_action_and_days() {
    let request = reward_statistics(&RewardStatisticsParams {
        action: Some("create".to_owned()),
        days: Some(14),
    })
    .expect("request");
    assert_eq!(request.path(), "/api/rl/reward/statistics");
    assert_eq!(
        request.query(),
        &[
            ("action".to_owned(), "create".to_owned()),
            ("days".to_owned(), "14".to_owned()),
        ]
    );
}

#[test]
fn pipeline_is_a_get_with_query_flags() {
    let request = pipeline(&PipelineParams {
        days: Some(3),
        train: Some(false),
    })
    .expect("request");
    assert_eq!(request.method(), Method::Get);
    assert_eq!(request.path(), "/api/rl/pipeline/run");
    assert!(request.body().is_none());
    assert_eq!(
        request.query(),
        &[
            ("days".to_owned(), "3".to_owned()),
            ("train".to_owned(), "false".to_owned()),
        ]
    );
}

#[test]
fn pipeline_result_decodes_skipped_training() {
    let run: PipelineRun = serde_json::from_value(serde_json::json!({
        "reward_evaluation": { "evaluated": 12 },
        "training": null
    }))
    .expect("decode");
    assert_eq!(run.reward_evaluation, Some(serde_json::json!({ "evaluated": 12 })));
    assert!(run.training.is_none());
}

#[test]
fn feedback_posts_outcome() {
    let outcome = serde_json::json!({ "recalled": true });
    let request = feedback("mem-3", &outcome).expect("request");
    assert_eq!(request.path(), "/api/rl/extractor/feedback");
    assert_eq!(
        request.body(),
        Some(&serde_json::json!({ "memory_id": "mem-3", "actual_outcome": { "recalled": true } }))
    );
}

#[test]
fn training_sample_page_decodes_backend_shape() {
    let page: Page<TrainingSample> = serde_json::from_value(serde_json::json!({
        "count": 2,
        "samples": [{
            "id": "s-1",
            "log_id": "log-1",
            "entity_id": "mem-1",
            "entity_type": "memory",
            "state": { "layer": "short_term" },
            "action": "promote",
            "reward": 0.8,
            "next_state": { "layer": "long_term" },
            "done": true,
            "created_at": "2026-10-01T00:00:00"
        }]
    }))
    .expect("page");
    assert_eq!(page.total, 2);
    assert!(page.data[0].done);
}

#[test]
fn checkpoint_decodes_without_created_at() {
    let checkpoint: ModelCheckpoint = serde_json::from_value(serde_json::json!({
        "id": "ck-1",
        "model_name": "memory_policy",
        "version": "v3",
        "model_data": {},
        "metrics": null
    }))
    .expect("checkpoint");
    assert!(checkpoint.created_at.is_none());
    assert_eq!(checkpoint.version, "v3");
}

#[test]
fn model_stats_allows_missing_version() {
    let stats: ModelStats = serde_json::from_value(serde_json::json!({
        "model_name": "memory_policy",
        "model_version": null,
        "samples_count_last_30_days": 120,
        "average_reward": 0.31,
        "checkpoints_count": 4,
        "current_weights": { "create": 0.2 }
    }))
    .expect("stats");
    assert!(stats.model_version.is_none());
    assert_eq!(stats.checkpoints_count, 4);
}

#[test]
fn health_decodes() {
    let health: RlHealth = serde_json::from_value(serde_json::json!({
        "status": "healthy",
        "model_loaded": true,
        "model_version": "v3"
    }))
    .expect("health");
    assert!(health.model_loaded);
}

#[test]
fn extractor_statistics_decodes_disabled_shape() {
    let stats: ExtractorStatistics = serde_json::from_value(serde_json::json!({
        "enabled": false,
        "message": "RL extraction disabled"
    }))
    .expect("stats");
    assert!(!stats.enabled);
    assert!(stats.temperature.is_none());
}
