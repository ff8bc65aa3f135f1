use image::ImageFormat;

/// デコード・エンコード両方に使うコーデック識別子
///
/// 出力コーデックは常に入力コーデックと同一（フォーマット変換は行わない）。
/// `Other` は `image/*` のサブタイプや拡張子をそのまま保持する。
/// 実在しないコーデック名の場合はデコード・エンコード時点でエラーになる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecFormat {
    Jpeg,
    Png,
    Gif,
    Bmp,
    WebP,
    Other(String),
}

impl CodecFormat {
    /// 短いコーデック識別子（ログ・診断用）
    pub fn identifier(&self) -> &str {
        match self {
            Self::Jpeg => "jpeg",
            Self::Png => "png",
            Self::Gif => "gif",
            Self::Bmp => "bmp",
            Self::WebP => "webp",
            Self::Other(name) => name,
        }
    }

    /// 保存時に付与する Content-Type
    pub fn mime_type(&self) -> String {
        format!("image/{}", self.identifier())
    }

    /// image クレートのフォーマットへ変換する
    ///
    /// `Other` は拡張子として解決を試み、未知の識別子は `None` を返す。
    pub fn to_image_format(&self) -> Option<ImageFormat> {
        match self {
            Self::Jpeg => Some(ImageFormat::Jpeg),
            Self::Png => Some(ImageFormat::Png),
            Self::Gif => Some(ImageFormat::Gif),
            Self::Bmp => Some(ImageFormat::Bmp),
            Self::WebP => Some(ImageFormat::WebP),
            Self::Other(name) => ImageFormat::from_extension(name),
        }
    }
}

impl std::fmt::Display for CodecFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.identifier())
    }
}

/// 宣言された Content-Type とオブジェクトキーからコーデックを決定する
///
/// 優先順位:
/// 1. 既知の画像 MIME タイプ（`image/jpg` は `jpeg` に正規化）
/// 2. `image/` で始まる未知の MIME タイプ → サブタイプをそのまま採用
/// 3. キーの拡張子（小文字化、`jpg` → `jpeg`）
/// 4. どちらも使えなければ `None`
///
/// Content-Type と拡張子が両方使える場合は常に Content-Type が勝つ。
pub fn resolve_format(content_type: Option<&str>, key: &str) -> Option<CodecFormat> {
    if let Some(ct) = content_type {
        let ct = ct.to_lowercase();
        match ct.as_str() {
            "image/jpeg" | "image/jpg" => return Some(CodecFormat::Jpeg),
            "image/png" => return Some(CodecFormat::Png),
            "image/gif" => return Some(CodecFormat::Gif),
            "image/bmp" => return Some(CodecFormat::Bmp),
            "image/webp" => return Some(CodecFormat::WebP),
            _ => {}
        }
        if let Some(subtype) = ct.strip_prefix("image/") {
            return Some(CodecFormat::Other(subtype.to_string()));
        }
    }

    resolve_from_extension(key)
}

/// キーの拡張子からコーデックを決定する（拡張子がなければ `None`）
fn resolve_from_extension(key: &str) -> Option<CodecFormat> {
    let dot = key.rfind('.')?;
    let ext = &key[dot + 1..];
    if ext.is_empty() {
        return None;
    }

    match ext.to_lowercase().as_str() {
        "jpg" | "jpeg" => Some(CodecFormat::Jpeg),
        "png" => Some(CodecFormat::Png),
        "gif" => Some(CodecFormat::Gif),
        "bmp" => Some(CodecFormat::Bmp),
        "webp" => Some(CodecFormat::WebP),
        other => Some(CodecFormat::Other(other.to_string())),
    }
}
