//! Static route table.
//!
//! `app::App` declares the matching `leptos_router` routes; this table is the
//! data the navigation bar and path resolution are built from. Matching is by
//! path literal only.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Routed views.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum View {
    Dashboard,
    WhyLog,
    RlSamples,
    RlCheckpoints,
}

impl View {
    /// Route name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::WhyLog => "WhyLog",
            Self::RlSamples => "RLSamples",
            Self::RlCheckpoints => "RLCheckpoints",
        }
    }

    /// Navigation label.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::WhyLog => "Why Log",
            Self::RlSamples => "RL Samples",
            Self::RlCheckpoints => "RL Checkpoints",
        }
    }

    /// Canonical path.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Dashboard => DASHBOARD_PATH,
            Self::WhyLog => "/why-log",
            Self::RlSamples => "/rl/samples",
            Self::RlCheckpoints => "/rl/checkpoints",
        }
    }
}

/// What a path maps to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteTarget {
    View(View),
    Redirect(&'static str),
}

/// One row of [`ROUTES`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDef {
    pub path: &'static str,
    pub target: RouteTarget,
}

pub const DASHBOARD_PATH: &str = "/dashboard";

pub const ROUTES: &[RouteDef] = &[
    RouteDef {
        path: "/",
        target: RouteTarget::Redirect(DASHBOARD_PATH),
    },
    RouteDef {
        path: DASHBOARD_PATH,
        target: RouteTarget::View(View::Dashboard),
    },
    RouteDef {
        path: "/why-log",
        target: RouteTarget::View(View::WhyLog),
    },
    RouteDef {
        path: "/rl/samples",
        target: RouteTarget::View(View::RlSamples),
    },
    RouteDef {
        path: "/rl/checkpoints",
        target: RouteTarget::View(View::RlCheckpoints),
    },
];

/// Views in navigation order.
pub fn nav_views() -> impl Iterator<Item = View> {
    ROUTES.iter().filter_map(|route| match route.target {
        RouteTarget::View(view) => Some(view),
        RouteTarget::Redirect(_) => None,
    })
}

/// Table entry for `path`. A single trailing slash is ignored.
#[must_use]
pub fn lookup(path: &str) -> Option<&'static RouteDef> {
    let path = match path.strip_suffix('/') {
        Some(trimmed) if !trimmed.is_empty() => trimmed,
        _ => path,
    };
    ROUTES.iter().find(|route| route.path == path)
}

/// View rendered for `path`, following redirects.
#[must_use]
pub fn resolve(path: &str) -> Option<View> {
    let mut route = lookup(path)?;
    // Bounded by table size so a redirect cycle cannot spin.
    for _ in 0..ROUTES.len() {
        match route.target {
            RouteTarget::View(view) => return Some(view),
            RouteTarget::Redirect(to) => route = lookup(to)?,
        }
    }
    None
}
