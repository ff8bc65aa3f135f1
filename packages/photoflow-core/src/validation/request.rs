use crate::constants::MAX_KEY_LENGTH;
use crate::errors::PipelineError;

/// コンテナ名を検証する
pub fn validate_container(container: &str) -> Result<(), PipelineError> {
    if container.is_empty() {
        return Err(PipelineError::InvalidRequest(
            "container is empty".to_string(),
        ));
    }
    Ok(())
}

/// オブジェクトキーを検証する
/// パストラバーサル攻撃を防止し、不正な文字を検出する
pub fn validate_key(key: &str) -> Result<(), PipelineError> {
    // 空文字チェック
    if key.is_empty() {
        return Err(PipelineError::InvalidRequest("key is empty".to_string()));
    }

    // 長さチェック
    if key.len() > MAX_KEY_LENGTH {
        return Err(PipelineError::InvalidRequest(format!(
            "key is too long (max {MAX_KEY_LENGTH})"
        )));
    }

    // URLデコード
    let decoded = urlencoding::decode(key)
        .map_err(|_| PipelineError::InvalidRequest("invalid URL encoding".to_string()))?;

    // パストラバーサル防止
    if decoded.contains("..")
        || decoded.starts_with('/')
        || decoded.contains("//")
        || decoded.contains('\\')
    {
        return Err(PipelineError::InvalidRequest(
            "path traversal detected".to_string(),
        ));
    }

    // 許可された文字のみ（英数字、ハイフン、アンダースコア、ドット、スラッシュ）
    if !decoded
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.' || c == '/')
    {
        return Err(PipelineError::InvalidRequest(
            "invalid characters in key".to_string(),
        ));
    }

    Ok(())
}
