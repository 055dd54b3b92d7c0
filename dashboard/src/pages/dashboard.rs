//! Overview page: log stats, model stats, RL health.
//!
//! SYSTEM CONTEXT
//! ==============
//! The landing route (`/` redirects here). Three independent requests are
//! issued on mount; each card renders its own loading and error state so one
//! failing endpoint does not blank the page.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use contracts::memory_log::{self, LogStats};
use contracts::rl::{self, ModelStats, RlHealth};
use leptos::prelude::*;

use crate::components::status_line::{ErrorLine, LoadingLine};
use crate::pages::{Load, load_slot, spawn_fetch};
use crate::util::format;

/// Window for the log statistics card.
pub const STATS_WINDOW_DAYS: u32 = 30;

/// `(action, count)` rows, most frequent first, ties by name.
pub(crate) fn ranked_actions(stats: &LogStats) -> Vec<(String, u64)> {
    let mut rows: Vec<_> = stats
        .action_counts
        .iter()
        .map(|(action, count)| (action.clone(), *count))
        .collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    rows
}

/// Share of evaluated logs as a whole percentage.
pub(crate) fn evaluated_percent(stats: &LogStats) -> String {
    if stats.total_logs == 0 {
        return format::MISSING.to_owned();
    }
    #[allow(clippy::cast_precision_loss)]
    let share = stats.evaluated_logs as f64 / stats.total_logs as f64 * 100.0;
    format!("{share:.0}%")
}

pub(crate) fn health_label(health: &RlHealth) -> String {
    if health.model_loaded {
        format!("{} (model {})", health.status, health.model_version)
    } else {
        format!("{} (no model loaded)", health.status)
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let log_stats: Load<LogStats> = load_slot();
    let model_stats: Load<ModelStats> = load_slot();
    let health: Load<RlHealth> = load_slot();

    let refresh = move || {
        spawn_fetch(log_stats, || memory_log::stats(Some(STATS_WINDOW_DAYS)));
        spawn_fetch(model_stats, || rl::statistics(Some(STATS_WINDOW_DAYS)));
        spawn_fetch(health, rl::health);
    };
    refresh();

    view! {
        <div class="page dashboard-page">
            <header class="page__header">
                <h1>"Dashboard"</h1>
                <button class="btn" on:click=move |_| refresh()>"Refresh"</button>
            </header>
            <div class="dashboard-page__cards">
                <section class="card">
                    <h2>{format!("Memory logs ({STATS_WINDOW_DAYS} days)")}</h2>
                    {move || match log_stats.get() {
                        None => view! { <LoadingLine/> }.into_any(),
                        Some(Err(error)) => view! { <ErrorLine error=error/> }.into_any(),
                        Some(Ok(stats)) => log_stats_card(&stats).into_any(),
                    }}
                </section>
                <section class="card">
                    <h2>"Model"</h2>
                    {move || match model_stats.get() {
                        None => view! { <LoadingLine/> }.into_any(),
                        Some(Err(error)) => view! { <ErrorLine error=error/> }.into_any(),
                        Some(Ok(stats)) => model_stats_card(&stats).into_any(),
                    }}
                </section>
                <section class="card">
                    <h2>"RL service"</h2>
                    {move || match health.get() {
                        None => view! { <LoadingLine/> }.into_any(),
                        Some(Err(error)) => view! { <ErrorLine error=error/> }.into_any(),
                        Some(Ok(h)) => view! { <p class="card__value">{health_label(&h)}</p> }.into_any(),
                    }}
                </section>
            </div>
        </div>
    }
}

fn log_stats_card(stats: &LogStats) -> impl IntoView {
    let actions = ranked_actions(stats)
        .into_iter()
        .map(|(action, count)| view! { <li><span>{action}</span>" "<b>{count}</b></li> })
        .collect_view();

    view! {
        <dl class="card__grid">
            <dt>"Total"</dt><dd>{stats.total_logs}</dd>
            <dt>"Evaluated"</dt><dd>{stats.evaluated_logs}" ("{evaluated_percent(stats)}")"</dd>
            <dt>"Pending"</dt><dd>{stats.pending_logs}</dd>
            <dt>"Average reward"</dt><dd>{format::reward(Some(stats.average_reward))}</dd>
        </dl>
        <ul class="card__list">{actions}</ul>
    }
}

fn model_stats_card(stats: &ModelStats) -> impl IntoView {
    view! {
        <dl class="card__grid">
            <dt>"Name"</dt><dd>{stats.model_name.clone()}</dd>
            <dt>"Version"</dt><dd>{stats.model_version.clone().unwrap_or_else(|| format::MISSING.to_owned())}</dd>
            <dt>"Checkpoints"</dt><dd>{stats.checkpoints_count}</dd>
            <dt>"Average reward"</dt><dd>{format::reward(Some(stats.average_reward))}</dd>
        </dl>
        <pre class="card__json">{format::pretty_json(&stats.current_weights)}</pre>
    }
}
