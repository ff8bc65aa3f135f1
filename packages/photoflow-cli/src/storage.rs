use bytes::Bytes;
use reqwest::StatusCode;
use reqwest::blocking::Client;

use photoflow_core::{FetchedObject, MAX_INPUT_SIZE, StorageError, StorageGateway};

/// Storage Proxy ゲートウェイ
///
/// Cloudflare Access 経由の Storage Proxy に HTTP リクエストを送信して
/// オブジェクトの取得・保存を行う。1回の呼び出し内で完結するため
/// ブロッキングクライアントを使う。
#[derive(Clone)]
pub struct StorageProxyGateway {
    client: Client,
    base_url: String,
    cf_access_client_id: String,
    cf_access_client_secret: String,
}

impl StorageProxyGateway {
    /// 新しい StorageProxyGateway を作成する
    pub fn new(
        base_url: String,
        cf_access_client_id: String,
        cf_access_client_secret: String,
    ) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            cf_access_client_id,
            cf_access_client_secret,
        }
    }

    /// 環境変数から StorageProxyGateway を作成する
    ///
    /// 必須の環境変数:
    /// - STORAGE_PROXY_URL
    /// - CF_ACCESS_CLIENT_ID
    /// - CF_ACCESS_CLIENT_SECRET
    pub fn from_env() -> Result<Self, String> {
        let base_url = std::env::var("STORAGE_PROXY_URL")
            .map_err(|_| "STORAGE_PROXY_URL is not set".to_string())?;
        let cf_access_client_id = std::env::var("CF_ACCESS_CLIENT_ID")
            .map_err(|_| "CF_ACCESS_CLIENT_ID is not set".to_string())?;
        let cf_access_client_secret = std::env::var("CF_ACCESS_CLIENT_SECRET")
            .map_err(|_| "CF_ACCESS_CLIENT_SECRET is not set".to_string())?;

        Ok(Self::new(
            base_url,
            cf_access_client_id,
            cf_access_client_secret,
        ))
    }

    fn object_url(&self, container: &str, key: &str) -> String {
        format!("{}/{}/{}", self.base_url, container, key)
    }
}

impl StorageGateway for StorageProxyGateway {
    /// コンテナとキーを指定してオブジェクトを取得する
    fn fetch(&self, container: &str, key: &str) -> Result<FetchedObject, StorageError> {
        let url = self.object_url(container, key);

        let response = self
            .client
            .get(&url)
            .header("CF-Access-Client-Id", &self.cf_access_client_id)
            .header("CF-Access-Client-Secret", &self.cf_access_client_secret)
            .send()
            .map_err(|e| StorageError::Internal(e.to_string()))?;

        match response.status() {
            status if status.is_success() => {}
            StatusCode::NOT_FOUND => {
                return Err(StorageError::NotFound {
                    key: key.to_string(),
                });
            }
            StatusCode::FORBIDDEN => {
                tracing::error!(key = %key, "access denied by Storage Proxy");
                return Err(StorageError::AccessDenied);
            }
            status => {
                tracing::error!(key = %key, status = %status, "unexpected response from Storage Proxy");
                return Err(StorageError::Internal(format!(
                    "unexpected status: {status}"
                )));
            }
        }

        // ストレージに保存された Content-Type メタデータ（あれば）
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let data = response
            .bytes()
            .map_err(|e| StorageError::Internal(e.to_string()))?;

        // 読み込み後にもサイズを確認
        let actual_size = data.len() as u64;
        if actual_size > MAX_INPUT_SIZE {
            return Err(StorageError::TooLarge {
                size: actual_size,
                max: MAX_INPUT_SIZE,
            });
        }

        Ok(FetchedObject {
            bytes: data,
            content_type,
        })
    }

    /// オブジェクトを書き込む（既存オブジェクトは上書き）
    fn store(
        &self,
        container: &str,
        key: &str,
        bytes: Bytes,
        content_type: Option<&str>,
    ) -> Result<(), StorageError> {
        let url = self.object_url(container, key);

        let mut request = self
            .client
            .put(&url)
            .header("CF-Access-Client-Id", &self.cf_access_client_id)
            .header("CF-Access-Client-Secret", &self.cf_access_client_secret)
            .body(bytes);

        if let Some(ct) = content_type {
            request = request.header(reqwest::header::CONTENT_TYPE, ct);
        }

        let response = request
            .send()
            .map_err(|e| StorageError::StoreFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(key = %key, status = %status, "Storage Proxy rejected write");
            return Err(StorageError::StoreFailed(format!(
                "unexpected status: {status}"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_gateway_trims_trailing_slash() {
        let gateway = StorageProxyGateway::new(
            "https://storage.example.com/".to_string(),
            "client-id".to_string(),
            "client-secret".to_string(),
        );

        // 末尾のスラッシュが削除される
        assert_eq!(gateway.base_url, "https://storage.example.com");
        assert_eq!(
            gateway.object_url("photos", "a/b.png"),
            "https://storage.example.com/photos/a/b.png"
        );
    }

    #[test]
    fn test_from_env_missing_vars() {
        // 環境変数が設定されていない場合はエラー
        let result = StorageProxyGateway::from_env();
        assert!(result.is_err());
    }
}
