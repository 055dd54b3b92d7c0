//! Route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its filters and paging in local signals, builds requests
//! through `contracts`, and hands them to [`spawn_fetch`]. Results land in a
//! [`Load`] slot that the view renders as loading, error, or data.

pub mod dashboard;
pub mod rl_checkpoints;
pub mod rl_samples;
pub mod why_log;

use contracts::{ApiRequest, ContractError};
use leptos::prelude::*;
use serde::de::DeserializeOwned;

use crate::net::api::ApiError;

/// `None` while a request is in flight.
pub type Load<T> = RwSignal<Option<Result<T, ApiError>>>;

/// Empty slot.
pub fn load_slot<T: Send + Sync + 'static>() -> Load<T> {
    RwSignal::new(None)
}

/// Clear `slot`, then fill it with the outcome of the request `build` makes.
pub fn spawn_fetch<R, F>(slot: Load<R>, build: F)
where
    R: DeserializeOwned + Send + Sync + 'static,
    F: FnOnce() -> Result<ApiRequest<R>, ContractError> + 'static,
{
    slot.set(None);
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let outcome = crate::net::api::fetch(build).await;
        slot.set(Some(outcome));
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = build;
        slot.set(Some(Err(ApiError::Unavailable)));
    }
}

/// Trimmed input, `None` when blank.
pub fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
