use serde_json::{Value, json};

use photoflow_core::{
    PipelineError, StorageError, StorageGateway, TransformError, TransformRequest, run_pipeline,
};

/// 呼び出し失敗（終了コードと JSON 出力に変換される）
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    NotFound(String),
    TransformFailed(String),
    StorageUnavailable(String),
}

/// 変換を1回実行し、結果の JSON マップを返す
pub fn handle(
    gateway: &dyn StorageGateway,
    request: &TransformRequest,
) -> Result<Value, AppError> {
    tracing::info!(
        container = %request.container,
        key = %request.source_key,
        kind = %request.kind,
        "running transform"
    );

    let result = run_pipeline(gateway, request)?;

    tracing::info!(
        key = %result.destination_key,
        codec = %result.codec,
        passthrough = result.passthrough,
        "transform stored"
    );

    Ok(json!({
        "container": result.container,
        "key": result.destination_key,
        "status": "success",
        "codec": result.codec.identifier(),
        "originalWidth": result.original_width,
        "originalHeight": result.original_height,
        "outputWidth": result.output_width,
        "outputHeight": result.output_height,
        "passthrough": result.passthrough,
    }))
}

impl AppError {
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "BadRequest",
            Self::NotFound(_) => "NotFound",
            Self::TransformFailed(_) => "TransformFailed",
            Self::StorageUnavailable(_) => "StorageUnavailable",
        }
    }

    pub fn to_json(&self) -> Value {
        let message = match self {
            Self::BadRequest(msg)
            | Self::NotFound(msg)
            | Self::TransformFailed(msg)
            | Self::StorageUnavailable(msg) => msg,
        };
        json!({
            "status": "failure",
            "error": message,
            "errorType": self.error_type(),
        })
    }
}

impl From<PipelineError> for AppError {
    fn from(err: PipelineError) -> Self {
        match err {
            PipelineError::InvalidRequest(msg) => {
                tracing::warn!(error = %msg, "invalid request");
                AppError::BadRequest(msg)
            }
            PipelineError::Storage(storage_err) => storage_err.into(),
            PipelineError::Transform(transform_err) => transform_err.into(),
        }
    }
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound { key } => {
                tracing::warn!(key = %key, "object not found");
                AppError::NotFound(format!("object not found: {key}"))
            }
            StorageError::AccessDenied => {
                tracing::error!("access denied by storage (check CF Access credentials)");
                AppError::StorageUnavailable("storage access denied".to_string())
            }
            StorageError::TooLarge { size, max } => {
                tracing::warn!(size = size, max = max, "object too large");
                AppError::BadRequest(format!("object too large ({size} bytes, max {max})"))
            }
            StorageError::StoreFailed(msg) => {
                tracing::error!(error = %msg, "store failed");
                AppError::StorageUnavailable(format!("store failed: {msg}"))
            }
            StorageError::Internal(msg) => {
                tracing::error!(error = %msg, "storage error");
                AppError::StorageUnavailable("storage error".to_string())
            }
        }
    }
}

impl From<TransformError> for AppError {
    fn from(err: TransformError) -> Self {
        match err {
            TransformError::UnknownFormat { key } => {
                tracing::warn!(key = %key, "cannot determine image format");
                AppError::BadRequest(format!("cannot determine image format for key: {key}"))
            }
            TransformError::ResolutionTooLarge { width, height } => {
                tracing::warn!(width = width, height = height, "image resolution too large");
                AppError::BadRequest(format!("image resolution {width}x{height} too large"))
            }
            TransformError::DecodeFailed(msg)
            | TransformError::EncodeFailed(msg)
            | TransformError::ProcessingFailed(msg) => {
                tracing::error!(error = %msg, "image processing failed");
                AppError::TransformFailed(msg)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use photoflow_core::{FetchedObject, TransformKind};
    use std::collections::HashMap;
    use std::io::Cursor;
    use std::sync::Mutex;

    #[derive(Default)]
    struct FakeGateway {
        objects: Mutex<HashMap<String, Bytes>>,
        store_calls: Mutex<u32>,
    }

    impl StorageGateway for FakeGateway {
        fn fetch(&self, _container: &str, key: &str) -> Result<FetchedObject, StorageError> {
            let bytes = self
                .objects
                .lock()
                .unwrap()
                .get(key)
                .cloned()
                .ok_or_else(|| StorageError::NotFound {
                    key: key.to_string(),
                })?;
            Ok(FetchedObject {
                bytes,
                content_type: Some("image/png".to_string()),
            })
        }

        fn store(
            &self,
            _container: &str,
            key: &str,
            bytes: Bytes,
            _content_type: Option<&str>,
        ) -> Result<(), StorageError> {
            *self.store_calls.lock().unwrap() += 1;
            self.objects.lock().unwrap().insert(key.to_string(), bytes);
            Ok(())
        }
    }

    fn png_bytes(width: u32, height: u32) -> Bytes {
        let img = image::DynamicImage::new_rgb8(width, height);
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, image::ImageFormat::Png).unwrap();
        Bytes::from(buf.into_inner())
    }

    fn request(key: &str, kind: TransformKind) -> TransformRequest {
        TransformRequest {
            container: "photos".to_string(),
            source_key: key.to_string(),
            kind,
        }
    }

    #[test]
    fn test_handle_success_response() {
        let gateway = FakeGateway::default();
        gateway
            .objects
            .lock()
            .unwrap()
            .insert("in.png".to_string(), png_bytes(300, 200));

        let value = handle(&gateway, &request("in.png", TransformKind::Rotate)).unwrap();

        assert_eq!(value["status"], "success");
        assert_eq!(value["key"], "rotated/in.png");
        assert_eq!(value["codec"], "png");
        assert_eq!(value["outputWidth"], 200);
        assert_eq!(value["outputHeight"], 300);
        assert_eq!(*gateway.store_calls.lock().unwrap(), 1);
    }

    #[test]
    fn test_handle_not_found_maps_to_json_failure() {
        let gateway = FakeGateway::default();

        let err = handle(&gateway, &request("absent.png", TransformKind::Grayscale)).unwrap_err();
        let value = err.to_json();

        assert_eq!(value["status"], "failure");
        assert_eq!(value["errorType"], "NotFound");
        assert_eq!(*gateway.store_calls.lock().unwrap(), 0);
    }

    #[test]
    fn test_handle_corrupt_image_is_transform_failure() {
        let gateway = FakeGateway::default();
        gateway
            .objects
            .lock()
            .unwrap()
            .insert("bad.png".to_string(), Bytes::from_static(b"garbage"));

        let err = handle(&gateway, &request("bad.png", TransformKind::Resize)).unwrap_err();

        assert_eq!(err.error_type(), "TransformFailed");
        assert_eq!(*gateway.store_calls.lock().unwrap(), 0);
    }
}
