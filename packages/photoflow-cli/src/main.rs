mod handler;
mod storage;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use photoflow_core::{TransformKind, TransformRequest};
use storage::StorageProxyGateway;

/// 画像変換ランナー（1プロセス1変換）
#[derive(Debug, Parser)]
#[command(name = "photoflow", version, about = "Fetch, transform and store a single image")]
struct Args {
    /// ストレージコンテナ（バケット）名
    #[arg(short, long)]
    container: String,

    /// ソースオブジェクトのキー
    #[arg(short, long)]
    key: String,

    /// 変換の種類（grayscale / resize / rotate）
    #[arg(short, long, value_parser = parse_kind)]
    transform: TransformKind,
}

fn parse_kind(s: &str) -> Result<TransformKind, String> {
    TransformKind::from_str(s)
        .ok_or_else(|| format!("unknown transform: {s} (expected grayscale, resize or rotate)"))
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let gateway = match StorageProxyGateway::from_env() {
        Ok(gateway) => gateway,
        Err(msg) => {
            tracing::error!(error = %msg, "storage gateway configuration error");
            eprintln!("configuration error: {msg}");
            return ExitCode::FAILURE;
        }
    };

    let request = TransformRequest {
        container: args.container,
        source_key: args.key,
        kind: args.transform,
    };

    match handler::handle(&gateway, &request) {
        Ok(result) => {
            println!("{result}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            println!("{}", err.to_json());
            ExitCode::FAILURE
        }
    }
}
