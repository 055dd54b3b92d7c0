//! Memory-log audit records: why a memory was written, updated or dropped,
//! and the reward assigned to that decision once it has been evaluated.

#[cfg(test)]
#[path = "memory_log_test.rs"]
mod memory_log_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::endpoint::{ApiRequest, ContractError, DaysWindow, Endpoint, Page, null_as_default};

pub static LIST: Endpoint = Endpoint::get("logs.list", "/api/logs/memory");
pub static DETAIL: Endpoint = Endpoint::get("logs.detail", "/api/logs/{log_id}");
pub static STATS: Endpoint = Endpoint::get("logs.stats", "/api/logs/stats");
pub static EVALUATE: Endpoint = Endpoint::post("logs.evaluate", "/api/rl/reward/calculate");
pub static BATCH_EVALUATE: Endpoint = Endpoint::post("logs.batch_evaluate", "/api/rl/reward/evaluate");

/// One audit record of a memory operation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MemoryLog {
    /// Log identifier.
    pub id: String,
    /// Memory the operation touched.
    pub memory_id: String,
    /// Storage layer of the memory (`"profile"` or `"event"`).
    pub memory_layer: String,
    /// Operation name (e.g. `"insert"`, `"update"`).
    pub action: String,
    /// Free-text justification recorded with the operation.
    #[serde(default, deserialize_with = "null_as_default")]
    pub reason: String,
    /// Arbitrary structured context captured at write time.
    #[serde(default)]
    pub metadata: Value,
    /// Reward assigned after evaluation; `None` while pending.
    pub reward: Option<f64>,
    /// Evaluation outcome details.
    #[serde(default)]
    pub outcome: Value,
    /// ISO 8601 timestamp of the evaluation, if evaluated.
    pub evaluated_at: Option<String>,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
}

impl MemoryLog {
    /// Whether a reward has been assigned.
    #[must_use]
    pub fn is_evaluated(&self) -> bool {
        self.reward.is_some()
    }
}

/// Aggregate counters over a look-back window.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LogStats {
    pub total_logs: u64,
    pub evaluated_logs: u64,
    pub pending_logs: u64,
    pub average_reward: f64,
    #[serde(default)]
    pub action_counts: BTreeMap<String, u64>,
}

/// Result of evaluating a single log.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RewardCalculation {
    pub log_id: String,
    pub reward: Option<f64>,
    pub outcome: Option<Value>,
    pub calculated_at: String,
}

/// Filters for [`list`]. Unset fields are not sent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_layer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_evaluated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

/// Body for [`batch_evaluate`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchEvaluateParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_threshold: Option<u32>,
}

#[derive(Serialize)]
struct EvaluateBody<'a> {
    log_id: &'a str,
}

/// `GET /api/logs/memory`
///
/// # Errors
///
/// Returns [`ContractError`] if the filters fail to encode.
pub fn list(params: &LogListParams) -> Result<ApiRequest<Page<MemoryLog>>, ContractError> {
    ApiRequest::new(&LIST, &[])?.with_params(params)
}

/// `GET /api/logs/{log_id}`
///
/// # Errors
///
/// Returns [`ContractError::MissingPathParam`] for an empty `log_id` and
/// [`ContractError::InvalidPathParam`] if it contains `/`, `?`, or `#`.
pub fn detail(log_id: &str) -> Result<ApiRequest<MemoryLog>, ContractError> {
    ApiRequest::new(&DETAIL, &[("log_id", log_id)])
}

/// `GET /api/logs/stats`
///
/// # Errors
///
/// Returns [`ContractError`] if the window fails to encode.
pub fn stats(days: Option<u32>) -> Result<ApiRequest<LogStats>, ContractError> {
    ApiRequest::new(&STATS, &[])?.with_params(&DaysWindow { days })
}

/// `POST /api/rl/reward/calculate` for one log.
///
/// # Errors
///
/// Returns [`ContractError`] if the body fails to encode.
pub fn evaluate(log_id: &str) -> Result<ApiRequest<RewardCalculation>, ContractError> {
    ApiRequest::new(&EVALUATE, &[])?.with_body(&EvaluateBody { log_id })
}

/// `POST /api/rl/reward/evaluate` for every pending log older than the threshold.
///
/// # Errors
///
/// Returns [`ContractError`] if the body fails to encode.
pub fn batch_evaluate(params: &BatchEvaluateParams) -> Result<ApiRequest<Value>, ContractError> {
    ApiRequest::new(&BATCH_EVALUATE, &[])?.with_body(params)
}
