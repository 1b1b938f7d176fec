// 목적:
// - xkcd finder 실행 바이너리를 제공한다.
//
// 설명:
// - `xkcd-finder <config.json> ingest` : 원격 카탈로그 백필을 실행하고 보고서 요약을 JSON으로 출력한다.
// - `xkcd-finder <config.json> search <query> [limit]` : 검색 결과를 JSON으로 출력한다.
// - Ctrl-C 입력 시 적재는 새 ID 배분을 멈추고 진행 중인 아이템만 마무리한다.
//
// 참조:
// - src_rs/api/application.rs

use std::process::ExitCode;

use serde::Serialize;
use tokio::runtime::{Builder, Runtime};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

use xkcd_finder::api::application::Application;
use xkcd_finder::core::config::AppConfigPayload;
use xkcd_finder::core::errors::{CoreError, CoreResult};
use xkcd_finder::core::ingestion_pipeline::{IngestionReport, ItemOutcome};

const USAGE: &str = "사용법: xkcd-finder <config.json> ingest | search <query> [limit]";

enum Command {
    Ingest,
    Search { query: String, limit: Option<usize> },
}

#[derive(Serialize)]
struct IngestSummary<'a> {
    remote_count: i64,
    existing_count: usize,
    saved: usize,
    skipped: Vec<&'a ItemOutcome>,
}

impl<'a> From<&'a IngestionReport> for IngestSummary<'a> {
    fn from(report: &'a IngestionReport) -> Self {
        Self {
            remote_count: report.remote_count,
            existing_count: report.existing_count,
            saved: report.saved_count(),
            skipped: report.skipped().collect(),
        }
    }
}

fn main() -> ExitCode {
    init_tracing();

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let (config_path, command) = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(message) => {
            eprintln!("{}\n{}", message, USAGE);
            return ExitCode::from(2);
        }
    };

    let result = create_runtime().and_then(|runtime| runtime.block_on(run(config_path, command)));
    match result {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(error) => {
            tracing::error!(%error, "실행 실패");
            ExitCode::FAILURE
        }
    }
}

async fn run(config_path: &str, command: Command) -> CoreResult<String> {
    let config = AppConfigPayload::from_path(config_path)?;
    let application = Application::from_config(&config).await?;

    match command {
        Command::Ingest => {
            let cancel = CancellationToken::new();
            let signal_cancel = cancel.clone();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    tracing::warn!("중단 신호 수신: 새 아이템 배분을 멈춥니다");
                    signal_cancel.cancel();
                }
            });

            let report = application.ingest(cancel).await?;
            to_json(&IngestSummary::from(&report))
        }
        Command::Search { query, limit } => {
            let items = application.search(&query, limit).await?;
            to_json(&items)
        }
    }
}

fn parse_args(args: &[String]) -> Result<(&str, Command), String> {
    let config_path = args
        .first()
        .ok_or_else(|| "설정 파일 경로가 필요합니다".to_string())?;

    let command = match args.get(1).map(String::as_str) {
        Some("ingest") => Command::Ingest,
        Some("search") => {
            let query = args
                .get(2)
                .cloned()
                .ok_or_else(|| "검색어가 필요합니다".to_string())?;
            let limit = args
                .get(3)
                .map(|raw| {
                    raw.parse::<usize>()
                        .map_err(|error| format!("limit 파싱 실패: {}", error))
                })
                .transpose()?;
            Command::Search { query, limit }
        }
        Some(other) => return Err(format!("알 수 없는 명령입니다: {}", other)),
        None => return Err("명령이 필요합니다".to_string()),
    };

    Ok((config_path.as_str(), command))
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn create_runtime() -> CoreResult<Runtime> {
    Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|error| CoreError::Runtime(format!("Tokio 런타임 생성 실패: {}", error)))
}

fn to_json<T: Serialize>(value: &T) -> CoreResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|error| CoreError::Serialization(format!("결과 직렬화 실패: {}", error)))
}
