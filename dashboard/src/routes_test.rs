use super::*;

#[test]
fn root_redirects_to_dashboard() {
    assert_eq!(
        lookup("/").map(|route| route.target),
        Some(RouteTarget::Redirect("/dashboard"))
    );
    assert_eq!(resolve("/"), Some(View::Dashboard));
}

#[test]
fn every_view_resolves_from_its_path() {
    for view in nav_views() {
        assert_eq!(resolve(view.path()), Some(view), "{}", view.name());
    }
}

#[test]
fn table_has_five_entries_and_one_redirect() {
    assert_eq!(ROUTES.len(), 5);
    let redirects = ROUTES
        .iter()
        .filter(|route| matches!(route.target, RouteTarget::Redirect(_)))
        .count();
    assert_eq!(redirects, 1);
}

#[test]
fn nav_views_follow_table_order() {
    let views: Vec<_> = nav_views().collect();
    assert_eq!(
        views,
        vec![View::Dashboard, View::WhyLog, View::RlSamples, View::RlCheckpoints]
    );
}

#[test]
fn trailing_slash_is_ignored() {
    assert_eq!(resolve("/rl/samples/"), Some(View::RlSamples));
}

#[test]
fn unknown_and_partial_paths_do_not_resolve() {
    assert_eq!(resolve("/rl"), None);
    assert_eq!(resolve("/why-log/extra"), None);
    assert_eq!(resolve("/Dashboard"), None);
    assert_eq!(resolve(""), None);
}

#[test]
fn route_names_match_router_names() {
    assert_eq!(View::Dashboard.name(), "Dashboard");
    assert_eq!(View::WhyLog.name(), "WhyLog");
    assert_eq!(View::RlSamples.name(), "RLSamples");
    assert_eq!(View::RlCheckpoints.name(), "RLCheckpoints");
}

#[test]
fn table_paths_match_view_paths() {
    for route in ROUTES {
        if let RouteTarget::View(view) = route.target {
            assert_eq!(route.path, view.path());
        }
    }
}
