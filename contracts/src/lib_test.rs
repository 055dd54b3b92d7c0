use std::collections::HashSet;

use super::*;

#[test]
fn endpoint_names_are_unique() {
    let names: HashSet<_> = ENDPOINTS.iter().map(|endpoint| endpoint.name).collect();
    assert_eq!(names.len(), ENDPOINTS.len());
}

#[test]
fn endpoint_paths_live_under_api_prefix() {
    for endpoint in ENDPOINTS {
        assert!(
            endpoint.path.starts_with("/api/"),
            "{} has path {}",
            endpoint.name,
            endpoint.path
        );
    }
}

#[test]
fn every_template_renders_with_its_own_params() {
    for endpoint in ENDPOINTS {
        let args: Vec<(&str, &str)> = endpoint
            .path_params()
            .into_iter()
            .map(|param| (param, "x"))
            .collect();
        let path = endpoint.render_path(&args).expect("render");
        assert!(!path.contains('{'), "{} left a placeholder", endpoint.name);
    }
}

#[test]
fn find_endpoint_matches_by_name() {
    let endpoint = find_endpoint("rl.health").expect("health endpoint");
    assert_eq!(endpoint.method, Method::Get);
    assert_eq!(endpoint.path, "/api/rl/health");
    assert!(find_endpoint("rl.unknown").is_none());
}

#[test]
fn table_covers_both_clients() {
    let logs = ENDPOINTS.iter().filter(|e| e.name.starts_with("logs.")).count();
    let rl = ENDPOINTS.iter().filter(|e| e.name.starts_with("rl.")).count();
    assert_eq!(logs, 5);
    assert_eq!(rl, 12);
}
