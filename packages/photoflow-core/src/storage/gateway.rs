use bytes::Bytes;

use crate::errors::StorageError;

/// ストレージから取得したオブジェクト
///
/// 宣言された Content-Type はストレージのメタデータにあれば付与される。
#[derive(Debug, Clone)]
pub struct FetchedObject {
    pub bytes: Bytes,
    pub content_type: Option<String>,
}

/// ストレージゲートウェイ
///
/// 呼び出し側が構築してパイプラインに注入する（モジュールレベルの
/// シングルトンは持たない）。全操作は同期・ブロッキング。
pub trait StorageGateway {
    /// オブジェクトを取得する
    fn fetch(&self, container: &str, key: &str) -> Result<FetchedObject, StorageError>;

    /// オブジェクトを書き込む（既存オブジェクトは上書き）
    fn store(
        &self,
        container: &str,
        key: &str,
        bytes: Bytes,
        content_type: Option<&str>,
    ) -> Result<(), StorageError>;
}
