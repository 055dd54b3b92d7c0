use super::*;

static DETAIL: Endpoint = Endpoint::get("test.detail", "/api/things/{thing_id}");
static NESTED: Endpoint = Endpoint::get("test.nested", "/api/a/{outer}/b/{inner}/download");
static PLAIN: Endpoint = Endpoint::post("test.plain", "/api/plain");

#[derive(Serialize)]
struct Filters {
    #[serde(skip_serializing_if = "Option::is_none")]
    action: Option<String>,
    limit: Option<u32>,
    skip: bool,
    min: Option<f64>,
}

#[test]
fn method_names_are_uppercase() {
    assert_eq!(Method::Get.as_str(), "GET");
    assert_eq!(Method::Post.to_string(), "POST");
}

#[test]
fn path_params_lists_placeholders_in_order() {
    assert_eq!(NESTED.path_params(), vec!["outer", "inner"]);
    assert!(PLAIN.path_params().is_empty());
}

#[test]
fn render_path_substitutes_placeholders() {
    let path = NESTED
        .render_path(&[("inner", "2"), ("outer", "1")])
        .expect("render");
    assert_eq!(path, "/api/a/1/b/2/download");
}

#[test]
fn render_path_without_placeholders_is_identity() {
    assert_eq!(PLAIN.render_path(&[]).expect("render"), "/api/plain");
}

#[test]
fn render_path_reports_missing_param() {
    let err = DETAIL.render_path(&[]).expect_err("missing param");
    match err {
        ContractError::MissingPathParam { endpoint, param } => {
            assert_eq!(endpoint, "test.detail");
            assert_eq!(param, "thing_id");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn render_path_treats_empty_value_as_missing() {
    assert!(DETAIL.render_path(&[("thing_id", "")]).is_err());
}

#[test]
fn render_path_rejects_values_that_escape_the_segment() {
    for value in ["a/b", "a?x=1", "a#frag"] {
        let err = DETAIL
            .render_path(&[("thing_id", value)])
            .expect_err("reserved character");
        match err {
            ContractError::InvalidPathParam {
                endpoint,
                param,
                value: rejected,
            } => {
                assert_eq!(endpoint, "test.detail");
                assert_eq!(param, "thing_id");
                assert_eq!(rejected, value);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}

#[test]
fn render_path_keeps_other_punctuation() {
    let path = DETAIL
        .render_path(&[("thing_id", "log-1_a.b:c")])
        .expect("render");
    assert!(path.ends_with("/log-1_a.b:c"), "{path}");
}

#[test]
fn query_pairs_omits_none_and_formats_scalars() {
    let pairs = query_pairs(&Filters {
        action: None,
        limit: Some(20),
        skip: true,
        min: Some(0.5),
    })
    .expect("pairs");
    assert_eq!(
        pairs,
        vec![
            ("limit".to_owned(), "20".to_owned()),
            ("min".to_owned(), "0.5".to_owned()),
            ("skip".to_owned(), "true".to_owned()),
        ]
    );
}

#[test]
fn query_pairs_passes_strings_raw() {
    let pairs = query_pairs(&Filters {
        action: Some("a b&c".to_owned()),
        limit: None,
        skip: false,
        min: None,
    })
    .expect("pairs");
    assert!(pairs.contains(&("action".to_owned(), "a b&c".to_owned())));
}

#[test]
fn query_pairs_of_unit_is_empty() {
    assert!(query_pairs(&()).expect("pairs").is_empty());
}

#[test]
fn query_pairs_rejects_non_object() {
    let err = query_pairs(&[1, 2, 3]).expect_err("array is not a query");
    assert!(matches!(err, ContractError::QueryShape));
}

#[test]
fn api_request_carries_rendered_parts() {
    let request = ApiRequest::<Value>::new(&DETAIL, &[("thing_id", "t-1")])
        .expect("request")
        .with_params(&DaysWindow { days: Some(7) })
        .expect("params");
    assert_eq!(request.method(), Method::Get);
    assert_eq!(request.path(), "/api/things/t-1");
    assert_eq!(request.query(), &[("days".to_owned(), "7".to_owned())]);
    assert!(request.body().is_none());
    assert_eq!(request.endpoint().name, "test.detail");
}

#[test]
fn api_request_body_is_serialized_json() {
    let request = ApiRequest::<Value>::new(&PLAIN, &[])
        .expect("request")
        .with_body(&serde_json::json!({ "log_id": "l-1" }))
        .expect("body");
    assert_eq!(request.body(), Some(&serde_json::json!({ "log_id": "l-1" })));
}

#[test]
fn untyped_keeps_request_parts() {
    let request = ApiRequest::<Page<String>>::new(&PLAIN, &[])
        .expect("request")
        .with_body(&serde_json::json!({ "x": 1 }))
        .expect("body")
        .untyped();
    assert_eq!(request.path(), "/api/plain");
    assert_eq!(request.body(), Some(&serde_json::json!({ "x": 1 })));
}

#[test]
fn debug_output_names_endpoint() {
    let request = ApiRequest::<Value>::new(&PLAIN, &[]).expect("request");
    let rendered = format!("{request:?}");
    assert!(rendered.contains("test.plain"));
}

#[test]
fn page_accepts_dashboard_spelling() {
    let page: Page<u32> =
        serde_json::from_value(serde_json::json!({ "data": [1, 2], "total": 9 })).expect("page");
    assert_eq!(page.data, vec![1, 2]);
    assert_eq!(page.total, 9);
}

#[test]
fn page_accepts_sample_route_spelling() {
    let page: Page<u32> =
        serde_json::from_value(serde_json::json!({ "samples": [3], "count": 120 })).expect("page");
    assert_eq!(page.data, vec![3]);
    assert_eq!(page.total, 120);
}

#[test]
fn page_total_defaults_to_zero() {
    let page: Page<u32> = serde_json::from_value(serde_json::json!({ "data": [] })).expect("page");
    assert_eq!(page.total, 0);
}

#[test]
fn days_window_omits_absent_days() {
    assert!(query_pairs(&DaysWindow::default()).expect("pairs").is_empty());
}
