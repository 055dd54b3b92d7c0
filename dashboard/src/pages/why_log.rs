//! Memory-log browser with filters, paging, and per-row reward evaluation.
//!
//! DESIGN
//! ======
//! The list refetches whenever the filters or the page position change. Only
//! `limit`/`offset` are tracked (through a memo) so recording the response
//! total on the pager does not trigger another fetch. Evaluating a row runs
//! the reward calculation and then reloads the current page.

#[cfg(test)]
#[path = "why_log_test.rs"]
mod why_log_test;

use contracts::Page;
use contracts::memory_log::{self, LogListParams, MemoryLog};
use leptos::prelude::*;

use crate::components::pager_controls::PagerControls;
use crate::components::status_line::{EmptyLine, ErrorLine, LoadingLine};
use crate::pages::{Load, load_slot, non_blank, spawn_fetch};
use crate::state::pager::Pager;
use crate::util::format;

pub const LAYERS: &[&str] = &["profile", "event"];
pub const ACTIONS: &[&str] = &["insert", "update", "delete", "ignore", "query"];

/// Filter form values; blank strings mean "any".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LogFilters {
    pub action: String,
    pub layer: String,
    pub skip_evaluated: bool,
}

impl LogFilters {
    pub fn to_params(&self, pager: Pager) -> LogListParams {
        LogListParams {
            memory_id: None,
            memory_layer: non_blank(&self.layer),
            action: non_blank(&self.action),
            skip_evaluated: self.skip_evaluated.then_some(true),
            limit: Some(pager.limit),
            offset: Some(pager.offset),
        }
    }
}

pub(crate) fn evaluation_label(log: &MemoryLog) -> String {
    if log.is_evaluated() {
        format!("evaluated {}", format::timestamp_opt(log.evaluated_at.as_deref()))
    } else {
        "pending".to_owned()
    }
}

#[component]
pub fn WhyLogPage() -> impl IntoView {
    let filters = RwSignal::new(LogFilters::default());
    let pager = RwSignal::new(Pager::default());
    let logs: Load<Page<MemoryLog>> = load_slot();
    let notice = RwSignal::new(None::<String>);
    let evaluating = RwSignal::new(None::<String>);

    let position = Memo::new(move |_| {
        let p = pager.get();
        (p.limit, p.offset)
    });

    let reload = move || {
        let params = filters.get_untracked().to_params(pager.get_untracked());
        spawn_fetch(logs, move || memory_log::list(&params));
    };

    Effect::new(move || {
        filters.track();
        position.track();
        reload();
    });

    Effect::new(move || {
        if let Some(Ok(page)) = logs.get() {
            pager.update(|p| *p = p.with_total(page.total));
        }
    });

    let set_filter = move |apply: fn(&mut LogFilters, String), value: String| {
        filters.update(|f| apply(f, value));
        pager.update(|p| *p = p.reset());
    };

    let on_evaluate = move |log_id: String| {
        if evaluating.get_untracked().is_some() {
            return;
        }
        evaluating.set(Some(log_id.clone()));
        notice.set(None);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::fetch(|| memory_log::evaluate(&log_id)).await;
            match outcome {
                Ok(calc) => notice.set(Some(format!(
                    "{}: reward {}",
                    calc.log_id,
                    format::reward(calc.reward)
                ))),
                Err(e) => notice.set(Some(format!("Evaluation failed: {e}"))),
            }
            evaluating.set(None);
            reload();
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = log_id;
            evaluating.set(None);
        }
    };

    view! {
        <div class="page why-log-page">
            <header class="page__header">
                <h1>"Why Log"</h1>
                <select
                    class="filter"
                    on:change=move |ev| set_filter(|f, v| f.action = v, event_target_value(&ev))
                >
                    <option value="">"any action"</option>
                    {ACTIONS.iter().copied().map(|a| view! { <option value=a>{a}</option> }).collect_view()}
                </select>
                <select
                    class="filter"
                    on:change=move |ev| set_filter(|f, v| f.layer = v, event_target_value(&ev))
                >
                    <option value="">"any layer"</option>
                    {LAYERS.iter().copied().map(|l| view! { <option value=l>{l}</option> }).collect_view()}
                </select>
                <label class="filter">
                    <input
                        type="checkbox"
                        prop:checked=move || filters.get().skip_evaluated
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            filters.update(|f| f.skip_evaluated = checked);
                            pager.update(|p| *p = p.reset());
                        }
                    />
                    " pending only"
                </label>
            </header>
            <Show when=move || notice.get().is_some()>
                <p class="status-line">{move || notice.get().unwrap_or_default()}</p>
            </Show>
            {move || match logs.get() {
                None => view! { <LoadingLine/> }.into_any(),
                Some(Err(error)) => view! { <ErrorLine error=error/> }.into_any(),
                Some(Ok(page)) if page.data.is_empty() => {
                    view! { <EmptyLine text="No logs match these filters."/> }.into_any()
                }
                Some(Ok(page)) => {
                    let rows = page
                        .data
                        .into_iter()
                        .map(|log| {
                            let id = log.id.clone();
                            let busy_id = log.id.clone();
                            let evaluated = log.is_evaluated();
                            view! {
                                <tr>
                                    <td>{format::timestamp(&log.created_at)}</td>
                                    <td>{log.action.clone()}</td>
                                    <td>{log.memory_layer.clone()}</td>
                                    <td title=log.memory_id.clone()>{format::truncate(&log.memory_id, 12)}</td>
                                    <td>{format::truncate(&log.reason, 80)}</td>
                                    <td>{format::reward(log.reward)}</td>
                                    <td>{evaluation_label(&log)}</td>
                                    <td>
                                        <button
                                            class="btn btn--small"
                                            disabled=move || {
                                                evaluated || evaluating.get().as_deref() == Some(busy_id.as_str())
                                            }
                                            on:click=move |_| on_evaluate(id.clone())
                                        >
                                            "Evaluate"
                                        </button>
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view();
                    view! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Created"</th>
                                    <th>"Action"</th>
                                    <th>"Layer"</th>
                                    <th>"Memory"</th>
                                    <th>"Reason"</th>
                                    <th>"Reward"</th>
                                    <th>"Status"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>{rows}</tbody>
                        </table>
                    }
                        .into_any()
                }
            }}
            <PagerControls pager=pager/>
        </div>
    }
}
