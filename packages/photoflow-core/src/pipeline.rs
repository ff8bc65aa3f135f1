use crate::errors::{PipelineError, TransformError};
use crate::format::{CodecFormat, resolve_format};
use crate::storage::StorageGateway;
use crate::transform::{TransformKind, apply_transform};
use crate::validation::{validate_container, validate_key};

/// 変換リクエスト（1回の呼び出しを完全に決定する不変の値オブジェクト）
#[derive(Debug, Clone)]
pub struct TransformRequest {
    pub container: String,
    pub source_key: String,
    pub kind: TransformKind,
}

/// 変換結果と診断属性
#[derive(Debug, Clone)]
pub struct TransformResult {
    pub container: String,
    pub destination_key: String,
    pub codec: CodecFormat,
    pub original_width: u32,
    pub original_height: u32,
    pub output_width: u32,
    pub output_height: u32,
    /// リサイズが不要で入力をそのまま書き込んだか
    pub passthrough: bool,
}

/// 変換パイプラインを1回実行する
///
/// 検証 → 取得 → フォーマット解決 → 変換 → 派生キーへ保存。
/// リトライや部分復旧は行わず、どの段階の失敗でも保存前に中断する。
/// 成功時はちょうど1回の store 呼び出しが行われる。
pub fn run_pipeline(
    gateway: &dyn StorageGateway,
    request: &TransformRequest,
) -> Result<TransformResult, PipelineError> {
    validate_container(&request.container)?;
    validate_key(&request.source_key)?;

    let fetched = gateway.fetch(&request.container, &request.source_key)?;

    let codec = resolve_format(fetched.content_type.as_deref(), &request.source_key)
        .ok_or_else(|| TransformError::UnknownFormat {
            key: request.source_key.clone(),
        })?;

    let outcome = apply_transform(&fetched.bytes, request.kind, &codec)?;

    let destination_key = request.kind.destination_key(&request.source_key);
    gateway.store(
        &request.container,
        &destination_key,
        outcome.bytes,
        Some(&codec.mime_type()),
    )?;

    Ok(TransformResult {
        container: request.container.clone(),
        destination_key,
        codec,
        original_width: outcome.original_width,
        original_height: outcome.original_height,
        output_width: outcome.output_width,
        output_height: outcome.output_height,
        passthrough: outcome.passthrough,
    })
}
