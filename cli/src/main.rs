use std::fmt::Write as _;

use clap::{Args, Parser, Subcommand};
use contracts::memory_log::{self, BatchEvaluateParams, LogListParams};
use contracts::rl::{
    self, CheckpointListParams, PipelineParams, RewardStatisticsParams, SampleListParams,
    TrainParams,
};
use contracts::{ApiRequest, ContractError, ENDPOINTS, Method};
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{Level, debug};


#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid request: {0}")]
    Contract(#[from] ContractError),
    #[error("server returned HTTP {status}: {body}")]
    Server { status: u16, body: String },
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("invalid JSON: --{0} must be a JSON object")]
    JsonNotObject(&'static str),
}

#[derive(Parser, Debug)]
#[command(name = "zmem", about = "Z-Memory memory-log and RL API CLI")]
struct Cli {
    #[arg(long, env = "ZMEMORY_BASE_URL", default_value = "http://127.0.0.1:8000")]
    base_url: String,

    /// Log requests and responses to stderr.
    #[arg(long, short, env = "ZMEMORY_VERBOSE", default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone)]
struct CliContext {
    base_url: Url,
    client: reqwest::Client,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the RL service answers.
    Ping,
    Logs(LogsCommand),
    Rl(RlCommand),
    /// Print every known endpoint.
    Endpoints,
}

#[derive(Args, Debug)]
struct LogsCommand {
    #[command(subcommand)]
    command: LogsSubcommand,
}

#[derive(Subcommand, Debug)]
enum LogsSubcommand {
    List {
        #[arg(long)]
        memory_id: Option<String>,
        #[arg(long)]
        layer: Option<String>,
        #[arg(long)]
        action: Option<String>,
        #[arg(long, default_value_t = false)]
        skip_evaluated: bool,
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long)]
        offset: Option<u32>,
    },
    Show {
        log_id: String,
    },
    Stats {
        #[arg(long)]
        days: Option<u32>,
    },
    Evaluate {
        log_id: String,
    },
    BatchEvaluate {
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long)]
        days_threshold: Option<u32>,
    },
}

#[derive(Args, Debug)]
struct RlCommand {
    #[command(subcommand)]
    command: RlSubcommand,
}

#[derive(Subcommand, Debug)]
enum RlSubcommand {
    Samples {
        #[arg(long)]
        entity_id: Option<String>,
        #[arg(long)]
        entity_type: Option<String>,
        #[arg(long, allow_negative_numbers = true)]
        min_reward: Option<f64>,
        #[arg(long, allow_negative_numbers = true)]
        max_reward: Option<f64>,
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long)]
        offset: Option<u32>,
    },
    Checkpoints {
        #[arg(long)]
        model_name: Option<String>,
        #[arg(long)]
        version: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    Stats {
        #[arg(long)]
        days: Option<u32>,
    },
    Download {
        checkpoint_id: String,
    },
    Save {
        #[arg(long, help = "Metrics JSON object stored with the checkpoint")]
        metrics: Option<String>,
    },
    Load,
    Train {
        #[arg(long)]
        days: Option<u32>,
        #[arg(long)]
        epochs: Option<u32>,
        #[arg(long)]
        save_checkpoint: Option<bool>,
    },
    /// Batch-evaluate rewards, then train unless `--train false`.
    Pipeline {
        #[arg(long)]
        days: Option<u32>,
        #[arg(long)]
        train: Option<bool>,
    },
    Health,
    RewardStats {
        #[arg(long)]
        action: Option<String>,
        #[arg(long)]
        days: Option<u32>,
    },
    ExtractorStats,
    Feedback {
        memory_id: String,
        #[arg(long, help = "Observed outcome as a JSON object")]
        outcome: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ctx = CliContext {
        base_url: parse_base_url(&cli.base_url)?,
        client: reqwest::Client::new(),
    };

    match cli.command {
        Command::Ping => run_ping(&ctx).await,
        Command::Logs(cmd) => run_logs(&ctx, cmd).await,
        Command::Rl(cmd) => run_rl(&ctx, cmd).await,
        Command::Endpoints => {
            print!("{}", endpoint_table());
            Ok(())
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run_ping(ctx: &CliContext) -> Result<(), CliError> {
    let health = execute(ctx, rl::health()?).await?;
    debug!(status = %health.status, model_loaded = health.model_loaded, "rl health");
    println!("ok");
    Ok(())
}

async fn run_logs(ctx: &CliContext, logs: LogsCommand) -> Result<(), CliError> {
    let request = match logs.command {
        LogsSubcommand::List {
            memory_id,
            layer,
            action,
            skip_evaluated,
            limit,
            offset,
        } => memory_log::list(&LogListParams {
            memory_id,
            memory_layer: layer,
            action,
            skip_evaluated: skip_evaluated.then_some(true),
            limit,
            offset,
        })?
        .untyped(),
        LogsSubcommand::Show { log_id } => memory_log::detail(&log_id)?.untyped(),
        LogsSubcommand::Stats { days } => memory_log::stats(days)?.untyped(),
        LogsSubcommand::Evaluate { log_id } => memory_log::evaluate(&log_id)?.untyped(),
        LogsSubcommand::BatchEvaluate {
            limit,
            days_threshold,
        } => memory_log::batch_evaluate(&BatchEvaluateParams {
            limit,
            days_threshold,
        })?,
    };
    run_and_print(ctx, request).await
}

async fn run_rl(ctx: &CliContext, rl_cmd: RlCommand) -> Result<(), CliError> {
    let request = match rl_cmd.command {
        RlSubcommand::Samples {
            entity_id,
            entity_type,
            min_reward,
            max_reward,
            limit,
            offset,
        } => rl::samples(&SampleListParams {
            entity_id,
            entity_type,
            min_reward,
            max_reward,
            limit,
            offset,
        })?
        .untyped(),
        RlSubcommand::Checkpoints {
            model_name,
            version,
            limit,
        } => rl::checkpoints(&CheckpointListParams {
            model_name,
            version,
            limit,
        })?
        .untyped(),
        RlSubcommand::Stats { days } => rl::statistics(days)?.untyped(),
        RlSubcommand::Download { checkpoint_id } => rl::download(&checkpoint_id)?,
        RlSubcommand::Save { metrics } => {
            let metrics = metrics
                .as_deref()
                .map(|raw| parse_json_object("metrics", raw))
                .transpose()?;
            rl::save(metrics.as_ref())?.untyped()
        }
        RlSubcommand::Load => rl::load()?.untyped(),
        RlSubcommand::Train {
            days,
            epochs,
            save_checkpoint,
        } => rl::train(&TrainParams {
            days,
            epochs,
            save_checkpoint,
        })?,
        RlSubcommand::Pipeline { days, train } => {
            rl::pipeline(&PipelineParams { days, train })?.untyped()
        }
        RlSubcommand::Health => rl::health()?.untyped(),
        RlSubcommand::RewardStats { action, days } => {
            rl::reward_statistics(&RewardStatisticsParams { action, days })?.untyped()
        }
        RlSubcommand::ExtractorStats => rl::extractor_statistics()?.untyped(),
        RlSubcommand::Feedback { memory_id, outcome } => {
            let outcome = parse_json_object("outcome", &outcome)?;
            rl::feedback(&memory_id, &outcome)?
        }
    };
    run_and_print(ctx, request).await
}

async fn run_and_print(ctx: &CliContext, request: ApiRequest<Value>) -> Result<(), CliError> {
    let json = execute(ctx, request).await?;
    print_json(&json)
}

/// Send `request` and decode the response body as `R`.
async fn execute<R: DeserializeOwned>(
    ctx: &CliContext,
    request: ApiRequest<R>,
) -> Result<R, CliError> {
    let url = request_url(&ctx.base_url, request.path());
    let method = match request.method() {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
    };
    debug!(endpoint = request.endpoint().name, %method, %url, "sending request");

    let builder = ctx.client.request(method, &url).query(request.query());
    let builder = if let Some(json) = request.body() {
        builder.json(json)
    } else {
        builder
    };

    let response = builder.send().await?;
    let status = response.status();
    let body = response.text().await?;
    debug!(status = status.as_u16(), bytes = body.len(), "response received");

    if !status.is_success() {
        return Err(CliError::Server {
            status: status.as_u16(),
            body,
        });
    }

    decode_body(&body)
}

/// Empty bodies decode as JSON `null`.
fn decode_body<R: DeserializeOwned>(body: &str) -> Result<R, CliError> {
    if body.trim().is_empty() {
        return Ok(serde_json::from_value(Value::Null)?);
    }
    Ok(serde_json::from_str(body)?)
}

fn parse_base_url(raw: &str) -> Result<Url, CliError> {
    let url = Url::parse(raw).map_err(|e| CliError::InvalidBaseUrl(format!("{raw}: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(CliError::InvalidBaseUrl(format!(
            "{raw}: unsupported scheme `{other}`"
        ))),
    }
}

fn request_url(base_url: &Url, path: &str) -> String {
    format!("{}{}", base_url.as_str().trim_end_matches('/'), path)
}

/// Parse the value of `--{flag}`, which must be a JSON object.
fn parse_json_object(flag: &'static str, raw: &str) -> Result<Value, CliError> {
    match serde_json::from_str::<Value>(raw)? {
        value @ Value::Object(_) => Ok(value),
        _ => Err(CliError::JsonNotObject(flag)),
    }
}

fn endpoint_table() -> String {
    let width = ENDPOINTS.iter().map(|e| e.path.len()).max().unwrap_or(0);
    let mut out = String::new();
    for endpoint in ENDPOINTS {
        let _ = writeln!(
            out,
            "{:<4}  {:<width$}  {}",
            endpoint.method.as_str(),
            endpoint.path,
            endpoint.name
        );
    }
    out
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
