//! Model checkpoint list with save, load, train, and download actions.
//!
//! DESIGN
//! ======
//! Actions share one output panel: each run replaces it with the pretty JSON
//! response (or the error text) and reloads the list so a fresh checkpoint
//! shows up. Only one action runs at a time.

#[cfg(test)]
#[path = "rl_checkpoints_test.rs"]
mod rl_checkpoints_test;

use contracts::rl::{self, CheckpointListParams, ModelCheckpoint, TrainParams};
use contracts::{ApiRequest, ContractError, Page};
use leptos::prelude::*;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::components::status_line::{EmptyLine, ErrorLine, LoadingLine};
use crate::pages::{Load, load_slot, non_blank, spawn_fetch};
use crate::util::format;

/// Checkpoints requested for the list.
pub const LIST_LIMIT: u32 = 50;

/// Parse the optional metrics box. Blank means "no metrics".
pub fn parse_metrics(raw: &str) -> Result<Option<Value>, String> {
    let Some(text) = non_blank(raw) else {
        return Ok(None);
    };
    match serde_json::from_str::<Value>(&text) {
        Ok(value @ Value::Object(_)) => Ok(Some(value)),
        Ok(_) => Err("metrics must be a JSON object".to_owned()),
        Err(e) => Err(format!("metrics are not valid JSON: {e}")),
    }
}

/// Training form values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrainForm {
    pub days: String,
    pub epochs: String,
    pub save_checkpoint: bool,
}

impl Default for TrainForm {
    fn default() -> Self {
        Self {
            days: "7".to_owned(),
            epochs: "10".to_owned(),
            save_checkpoint: true,
        }
    }
}

impl TrainForm {
    pub fn to_params(&self) -> Result<TrainParams, String> {
        Ok(TrainParams {
            days: parse_count("days", &self.days)?,
            epochs: parse_count("epochs", &self.epochs)?,
            save_checkpoint: Some(self.save_checkpoint),
        })
    }
}

fn parse_count(label: &str, raw: &str) -> Result<Option<u32>, String> {
    let Some(text) = non_blank(raw) else {
        return Ok(None);
    };
    match text.parse::<u32>() {
        Ok(0) | Err(_) => Err(format!("{label} must be a positive whole number")),
        Ok(n) => Ok(Some(n)),
    }
}

pub(crate) fn checkpoint_label(checkpoint: &ModelCheckpoint) -> String {
    format!("{} {}", checkpoint.model_name, checkpoint.version)
}

/// Run one action, writing its pretty-printed response or error to `output`.
fn run_action<R, F>(busy: RwSignal<bool>, output: RwSignal<Option<String>>, reload: F, request: ApiRequest<R>)
where
    R: DeserializeOwned + Serialize + 'static,
    F: Fn() + 'static,
{
    if busy.get_untracked() {
        return;
    }
    busy.set(true);
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let label = format!("{} {}", request.method(), request.path());
        let text = match crate::net::api::execute(request).await {
            Ok(body) => serde_json::to_value(&body)
                .map_or_else(|e| e.to_string(), |v| format::pretty_json(&v)),
            Err(e) => format!("{label} failed: {e}"),
        };
        output.set(Some(text));
        busy.set(false);
        reload();
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (request, reload);
        output.set(Some(crate::net::api::ApiError::Unavailable.to_string()));
        busy.set(false);
    }
}

/// Report a request that could not be built without touching the network.
fn report_invalid(output: RwSignal<Option<String>>, error: &ContractError) {
    output.set(Some(format!("invalid request: {error}")));
}

#[component]
pub fn RlCheckpointsPage() -> impl IntoView {
    let checkpoints: Load<Page<ModelCheckpoint>> = load_slot();
    let busy = RwSignal::new(false);
    let output = RwSignal::new(None::<String>);
    let metrics = RwSignal::new(String::new());
    let train = RwSignal::new(TrainForm::default());

    let reload = move || {
        let params = CheckpointListParams {
            limit: Some(LIST_LIMIT),
            ..CheckpointListParams::default()
        };
        spawn_fetch(checkpoints, move || rl::checkpoints(&params));
    };
    reload();

    let on_save = move |_| {
        let parsed = match parse_metrics(&metrics.get_untracked()) {
            Ok(parsed) => parsed,
            Err(message) => return output.set(Some(message)),
        };
        match rl::save(parsed.as_ref()) {
            Ok(request) => run_action(busy, output, reload, request),
            Err(e) => report_invalid(output, &e),
        }
    };

    let on_load = move |_| match rl::load() {
        Ok(request) => run_action(busy, output, reload, request),
        Err(e) => report_invalid(output, &e),
    };

    let on_train = move |_| {
        let params = match train.get_untracked().to_params() {
            Ok(params) => params,
            Err(message) => return output.set(Some(message)),
        };
        match rl::train(&params) {
            Ok(request) => run_action(busy, output, reload, request),
            Err(e) => report_invalid(output, &e),
        }
    };

    let on_download = move |checkpoint_id: String| match rl::download(&checkpoint_id) {
        Ok(request) => run_action(busy, output, || {}, request),
        Err(e) => report_invalid(output, &e),
    };

    view! {
        <div class="page rl-checkpoints-page">
            <header class="page__header">
                <h1>"RL Checkpoints"</h1>
                <button class="btn" disabled=move || busy.get() on:click=on_load>"Load latest"</button>
            </header>
            <section class="card actions">
                <div class="actions__group">
                    <textarea
                        class="actions__metrics"
                        placeholder="metrics JSON (optional)"
                        prop:value=move || metrics.get()
                        on:input=move |ev| metrics.set(event_target_value(&ev))
                    ></textarea>
                    <button class="btn" disabled=move || busy.get() on:click=on_save>"Save checkpoint"</button>
                </div>
                <div class="actions__group">
                    <label>
                        "days "
                        <input
                            class="filter filter--number"
                            prop:value=move || train.get().days
                            on:input=move |ev| train.update(|t| t.days = event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "epochs "
                        <input
                            class="filter filter--number"
                            prop:value=move || train.get().epochs
                            on:input=move |ev| train.update(|t| t.epochs = event_target_value(&ev))
                        />
                    </label>
                    <label>
                        <input
                            type="checkbox"
                            prop:checked=move || train.get().save_checkpoint
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                train.update(|t| t.save_checkpoint = checked);
                            }
                        />
                        " save checkpoint"
                    </label>
                    <button class="btn" disabled=move || busy.get() on:click=on_train>"Train"</button>
                </div>
            </section>
            <Show when=move || output.get().is_some()>
                <pre class="card__json">{move || output.get().unwrap_or_default()}</pre>
            </Show>
            {move || match checkpoints.get() {
                None => view! { <LoadingLine/> }.into_any(),
                Some(Err(error)) => view! { <ErrorLine error=error/> }.into_any(),
                Some(Ok(page)) if page.data.is_empty() => {
                    view! { <EmptyLine text="No checkpoints saved yet."/> }.into_any()
                }
                Some(Ok(page)) => {
                    let rows = page
                        .data
                        .into_iter()
                        .map(|c| {
                            let id = c.id.clone();
                            view! {
                                <tr>
                                    <td>{checkpoint_label(&c)}</td>
                                    <td>{format::timestamp_opt(c.created_at.as_deref())}</td>
                                    <td class="data-table__json">{format::truncate(&format::compact_json(&c.metrics), 60)}</td>
                                    <td>
                                        <button
                                            class="btn btn--small"
                                            disabled=move || busy.get()
                                            on:click=move |_| on_download(id.clone())
                                        >
                                            "Download"
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
                                    <th>"Checkpoint"</th>
                                    <th>"Created"</th>
                                    <th>"Metrics"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>{rows}</tbody>
                        </table>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
