use std::collections::BTreeMap;

use super::*;

fn stats(total: u64, evaluated: u64, counts: &[(&str, u64)]) -> LogStats {
    LogStats {
        total_logs: total,
        evaluated_logs: evaluated,
        pending_logs: total - evaluated,
        average_reward: 0.25,
        action_counts: counts
            .iter()
            .map(|(k, v)| ((*k).to_owned(), *v))
            .collect::<BTreeMap<_, _>>(),
    }
}

#[test]
fn ranked_actions_orders_by_count_then_name() {
    let rows = ranked_actions(&stats(10, 5, &[("read", 2), ("write", 5), ("delete", 2)]));
    assert_eq!(
        rows,
        vec![
            ("write".to_owned(), 5),
            ("delete".to_owned(), 2),
            ("read".to_owned(), 2)
        ]
    );
}

#[test]
fn evaluated_percent_rounds_and_handles_empty() {
    assert_eq!(evaluated_percent(&stats(3, 1, &[])), "33%");
    assert_eq!(evaluated_percent(&stats(0, 0, &[])), format::MISSING);
}

#[test]
fn health_label_mentions_model_state() {
    let mut health = RlHealth {
        status: "healthy".to_owned(),
        model_loaded: true,
        model_version: "v3".to_owned(),
    };
    assert_eq!(health_label(&health), "healthy (model v3)");
    health.model_loaded = false;
    assert_eq!(health_label(&health), "healthy (no model loaded)");
}
