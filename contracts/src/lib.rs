//! Shared REST contract for the Z-Memory backend.
//!
//! This crate owns the endpoint table and wire DTOs used by both `dashboard`
//! and `cli`. It never performs I/O: each transport supplies its own executor,
//! and the [`ApiRequest`] values built here carry everything that executor
//! needs (method, rendered path, query pairs, JSON body) plus the response
//! type the caller expects back.

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

pub mod endpoint;
pub mod memory_log;
pub mod rl;

pub use endpoint::{ApiRequest, ContractError, DaysWindow, Endpoint, Method, Page, query_pairs};

/// Every endpoint the dashboard and CLI can reach, in display order.
pub static ENDPOINTS: &[&Endpoint] = &[
    &memory_log::LIST,
    &memory_log::DETAIL,
    &memory_log::STATS,
    &memory_log::EVALUATE,
    &memory_log::BATCH_EVALUATE,
    &rl::SAMPLES,
    &rl::CHECKPOINTS,
    &rl::STATISTICS,
    &rl::DOWNLOAD,
    &rl::SAVE,
    &rl::LOAD,
    &rl::TRAIN,
    &rl::PIPELINE,
    &rl::HEALTH,
    &rl::REWARD_STATISTICS,
    &rl::EXTRACTOR_STATISTICS,
    &rl::FEEDBACK,
];

/// Look up an endpoint by its dotted name (e.g. `"rl.health"`).
#[must_use]
pub fn find_endpoint(name: &str) -> Option<&'static Endpoint> {
    ENDPOINTS.iter().copied().find(|endpoint| endpoint.name == name)
}
