//! Reinforcement-learning artifacts: training samples, model checkpoints,
//! and the trainer/extractor control endpoints.

#[cfg(test)]
#[path = "rl_test.rs"]
mod rl_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::endpoint::{ApiRequest, ContractError, DaysWindow, Endpoint, Page};

pub static SAMPLES: Endpoint = Endpoint::get("rl.samples", "/api/rl/training/samples");
pub static CHECKPOINTS: Endpoint = Endpoint::get("rl.checkpoints", "/api/rl/model/checkpoints");
pub static STATISTICS: Endpoint = Endpoint::get("rl.statistics", "/api/rl/model/statistics");
pub static DOWNLOAD: Endpoint = Endpoint::get(
    "rl.download",
    "/api/rl/model/checkpoint/{checkpoint_id}/download",
);
pub static SAVE: Endpoint = Endpoint::post("rl.save", "/api/rl/model/save");
pub static LOAD: Endpoint = Endpoint::post("rl.load", "/api/rl/model/load");
pub static TRAIN: Endpoint = Endpoint::post("rl.train", "/api/rl/train");
pub static PIPELINE: Endpoint = Endpoint::get("rl.pipeline", "/api/rl/pipeline/run");
pub static HEALTH: Endpoint = Endpoint::get("rl.health", "/api/rl/health");
pub static REWARD_STATISTICS: Endpoint =
    Endpoint::get("rl.reward_statistics", "/api/rl/reward/statistics");
pub static EXTRACTOR_STATISTICS: Endpoint =
    Endpoint::get("rl.extractor_statistics", "/api/rl/extractor/statistics");
pub static FEEDBACK: Endpoint = Endpoint::post("rl.feedback", "/api/rl/extractor/feedback");

/// One `(state, action, reward, next_state)` transition extracted from a log.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrainingSample {
    pub id: String,
    pub log_id: String,
    pub entity_id: String,
    pub entity_type: String,
    #[serde(default)]
    pub state: Value,
    pub action: String,
    pub reward: f64,
    #[serde(default)]
    pub next_state: Value,
    #[serde(default)]
    pub done: bool,
    pub created_at: String,
}

/// Stored snapshot of the policy model.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModelCheckpoint {
    pub id: String,
    pub model_name: String,
    pub version: String,
    #[serde(default)]
    pub model_data: Value,
    #[serde(default)]
    pub metrics: Value,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Current model summary.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModelStats {
    pub model_name: String,
    pub model_version: Option<String>,
    pub samples_count_last_30_days: u64,
    pub average_reward: f64,
    pub checkpoints_count: u64,
    #[serde(default)]
    pub current_weights: Value,
}

/// Response of [`save`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedCheckpoint {
    pub checkpoint_id: String,
    pub message: String,
}

/// Response of [`load`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoadedModel {
    pub message: String,
    #[serde(default)]
    pub model: Option<Value>,
}

/// Response of [`pipeline`]. Either stage is `None` when it did not run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PipelineRun {
    #[serde(default)]
    pub reward_evaluation: Option<Value>,
    #[serde(default)]
    pub training: Option<Value>,
}

/// Response of [`health`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RlHealth {
    pub status: String,
    pub model_loaded: bool,
    pub model_version: String,
}

/// Reward distribution for one action over a window.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RewardStatistics {
    pub action: String,
    pub count: u64,
    pub average_reward: f64,
    pub stddev_reward: f64,
    pub time_window_days: u32,
}

/// State of the RL-guided memory extractor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExtractorStatistics {
    pub enabled: bool,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub model_version: Option<String>,
    #[serde(default)]
    pub action_preferences: Option<Value>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Filters for [`samples`]. Unset fields are not sent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SampleListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_reward: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_reward: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

/// Filters for [`checkpoints`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckpointListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Body for [`train`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub epochs: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_checkpoint: Option<bool>,
}

/// Query for [`pipeline`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub train: Option<bool>,
}

/// Query for [`reward_statistics`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardStatisticsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<u32>,
}

#[derive(Serialize)]
struct SaveBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    metrics: Option<&'a Value>,
}

#[derive(Serialize)]
struct FeedbackBody<'a> {
    memory_id: &'a str,
    actual_outcome: &'a Value,
}

/// `GET /api/rl/training/samples`
///
/// # Errors
///
/// Returns [`ContractError`] if the filters fail to encode.
pub fn samples(params: &SampleListParams) -> Result<ApiRequest<Page<TrainingSample>>, ContractError> {
    ApiRequest::new(&SAMPLES, &[])?.with_params(params)
}

/// `GET /api/rl/model/checkpoints`
///
/// # Errors
///
/// Returns [`ContractError`] if the filters fail to encode.
pub fn checkpoints(
    params: &CheckpointListParams,
) -> Result<ApiRequest<Page<ModelCheckpoint>>, ContractError> {
    ApiRequest::new(&CHECKPOINTS, &[])?.with_params(params)
}

/// `GET /api/rl/model/statistics`
///
/// # Errors
///
/// Returns [`ContractError`] if the window fails to encode.
pub fn statistics(days: Option<u32>) -> Result<ApiRequest<ModelStats>, ContractError> {
    ApiRequest::new(&STATISTICS, &[])?.with_params(&DaysWindow { days })
}

/// `GET /api/rl/model/checkpoint/{checkpoint_id}/download`
///
/// # Errors
///
/// Returns [`ContractError::MissingPathParam`] for an empty `checkpoint_id`
/// and [`ContractError::InvalidPathParam`] if it contains `/`, `?`, or `#`.
pub fn download(checkpoint_id: &str) -> Result<ApiRequest<Value>, ContractError> {
    ApiRequest::new(&DOWNLOAD, &[("checkpoint_id", checkpoint_id)])
}

/// `POST /api/rl/model/save`, optionally tagging the checkpoint with metrics.
///
/// # Errors
///
/// Returns [`ContractError`] if the body fails to encode.
pub fn save(metrics: Option<&Value>) -> Result<ApiRequest<SavedCheckpoint>, ContractError> {
    ApiRequest::new(&SAVE, &[])?.with_body(&SaveBody { metrics })
}

/// `POST /api/rl/model/load`
///
/// # Errors
///
/// Infallible in practice; kept fallible for a uniform call shape.
pub fn load() -> Result<ApiRequest<LoadedModel>, ContractError> {
    ApiRequest::new(&LOAD, &[])
}

/// `POST /api/rl/train`
///
/// # Errors
///
/// Returns [`ContractError`] if the body fails to encode.
pub fn train(params: &TrainParams) -> Result<ApiRequest<Value>, ContractError> {
    ApiRequest::new(&TRAIN, &[])?.with_body(params)
}

/// `GET /api/rl/pipeline/run`: batch reward evaluation followed, unless
/// `train` is `false`, by a training pass.
///
/// # Errors
///
/// Returns [`ContractError`] if the parameters fail to encode.
pub fn pipeline(params: &PipelineParams) -> Result<ApiRequest<PipelineRun>, ContractError> {
    ApiRequest::new(&PIPELINE, &[])?.with_params(params)
}

/// `GET /api/rl/health`
///
/// # Errors
///
/// Infallible in practice; kept fallible for a uniform call shape.
pub fn health() -> Result<ApiRequest<RlHealth>, ContractError> {
    ApiRequest::new(&HEALTH, &[])
}

/// `GET /api/rl/reward/statistics`
///
/// # Errors
///
/// Returns [`ContractError`] if the filters fail to encode.
pub fn reward_statistics(
    params: &RewardStatisticsParams,
) -> Result<ApiRequest<RewardStatistics>, ContractError> {
    ApiRequest::new(&REWARD_STATISTICS, &[])?.with_params(params)
}

/// `GET /api/rl/extractor/statistics`
///
/// # Errors
///
/// Infallible in practice; kept fallible for a uniform call shape.
pub fn extractor_statistics() -> Result<ApiRequest<ExtractorStatistics>, ContractError> {
    ApiRequest::new(&EXTRACTOR_STATISTICS, &[])
}

/// `POST /api/rl/extractor/feedback` reporting what actually happened to a memory.
///
/// # Errors
///
/// Returns [`ContractError`] if the body fails to encode.
pub fn feedback(memory_id: &str, actual_outcome: &Value) -> Result<ApiRequest<Value>, ContractError> {
    ApiRequest::new(&FEEDBACK, &[])?.with_body(&FeedbackBody {
        memory_id,
        actual_outcome,
    })
}
