//! Training-sample browser with a reward-range filter.

#[cfg(test)]
#[path = "rl_samples_test.rs"]
mod rl_samples_test;

use contracts::Page;
use contracts::rl::{self, SampleListParams, TrainingSample};
use leptos::prelude::*;

use crate::components::pager_controls::PagerControls;
use crate::components::status_line::{EmptyLine, ErrorLine, LoadingLine};
use crate::pages::{Load, load_slot, non_blank, spawn_fetch};
use crate::state::pager::Pager;
use crate::util::format;

/// Raw filter inputs as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SampleFilters {
    pub entity_type: String,
    pub min_reward: String,
    pub max_reward: String,
}

impl SampleFilters {
    /// Query parameters, or a message naming the bad field.
    pub fn to_params(&self, pager: Pager) -> Result<SampleListParams, String> {
        let min_reward = parse_bound("min reward", &self.min_reward)?;
        let max_reward = parse_bound("max reward", &self.max_reward)?;
        if let (Some(lo), Some(hi)) = (min_reward, max_reward) {
            if lo > hi {
                return Err(format!("min reward {lo} is above max reward {hi}"));
            }
        }
        Ok(SampleListParams {
            entity_id: None,
            entity_type: non_blank(&self.entity_type),
            min_reward,
            max_reward,
            limit: Some(pager.limit),
            offset: Some(pager.offset),
        })
    }
}

fn parse_bound(label: &str, raw: &str) -> Result<Option<f64>, String> {
    let Some(text) = non_blank(raw) else {
        return Ok(None);
    };
    match text.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(Some(v)),
        _ => Err(format!("{label} must be a number, got `{text}`")),
    }
}

#[component]
pub fn RlSamplesPage() -> impl IntoView {
    let filters = RwSignal::new(SampleFilters::default());
    let pager = RwSignal::new(Pager::default());
    let samples: Load<Page<TrainingSample>> = load_slot();
    let invalid = RwSignal::new(None::<String>);

    let position = Memo::new(move |_| {
        let p = pager.get();
        (p.limit, p.offset)
    });

    Effect::new(move || {
        position.track();
        match filters.get().to_params(pager.get_untracked()) {
            Ok(params) => {
                invalid.set(None);
                spawn_fetch(samples, move || rl::samples(&params));
            }
            Err(message) => invalid.set(Some(message)),
        }
    });

    Effect::new(move || {
        if let Some(Ok(page)) = samples.get() {
            pager.update(|p| *p = p.with_total(page.total));
        }
    });

    // Draft inputs are applied on submit so a half-typed bound does not fetch.
    let draft = RwSignal::new(SampleFilters::default());
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        filters.set(draft.get_untracked());
        pager.update(|p| *p = p.reset());
    };

    view! {
        <div class="page rl-samples-page">
            <header class="page__header">
                <h1>"RL Samples"</h1>
                <form class="filters" on:submit=on_submit>
                    <input
                        class="filter"
                        placeholder="entity type"
                        prop:value=move || draft.get().entity_type
                        on:input=move |ev| draft.update(|d| d.entity_type = event_target_value(&ev))
                    />
                    <input
                        class="filter filter--number"
                        placeholder="min reward"
                        prop:value=move || draft.get().min_reward
                        on:input=move |ev| draft.update(|d| d.min_reward = event_target_value(&ev))
                    />
                    <input
                        class="filter filter--number"
                        placeholder="max reward"
                        prop:value=move || draft.get().max_reward
                        on:input=move |ev| draft.update(|d| d.max_reward = event_target_value(&ev))
                    />
                    <button class="btn" type="submit">"Apply"</button>
                </form>
            </header>
            <Show when=move || invalid.get().is_some()>
                <p class="status-line status-line--error">{move || invalid.get().unwrap_or_default()}</p>
            </Show>
            {move || match samples.get() {
                None => view! { <LoadingLine/> }.into_any(),
                Some(Err(error)) => view! { <ErrorLine error=error/> }.into_any(),
                Some(Ok(page)) if page.data.is_empty() => {
                    view! { <EmptyLine text="No samples in this range."/> }.into_any()
                }
                Some(Ok(page)) => sample_table(page.data).into_any(),
            }}
            <PagerControls pager=pager/>
        </div>
    }
}

fn sample_table(samples: Vec<TrainingSample>) -> impl IntoView {
    let rows = samples
        .into_iter()
        .map(|s| {
            view! {
                <tr>
                    <td>{format::timestamp(&s.created_at)}</td>
                    <td>{s.entity_type}</td>
                    <td title=s.entity_id.clone()>{format::truncate(&s.entity_id, 12)}</td>
                    <td>{s.action}</td>
                    <td>{format::reward(Some(s.reward))}</td>
                    <td>{if s.done { "yes" } else { "no" }}</td>
                    <td class="data-table__json">{format::truncate(&format::compact_json(&s.state), 60)}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Created"</th>
                    <th>"Entity type"</th>
                    <th>"Entity"</th>
                    <th>"Action"</th>
                    <th>"Reward"</th>
                    <th>"Done"</th>
                    <th>"State"</th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
}
