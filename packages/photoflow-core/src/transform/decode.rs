use std::io::Cursor;

use image::{DynamicImage, ImageReader};

use crate::constants::MAX_PIXELS;
use crate::errors::TransformError;
use crate::format::CodecFormat;

/// 画像バイト列をデコードする
///
/// コーデックはフォーマットリゾルバの決定をそのまま使う（バイト列の
/// スニッフィングはしない）。ピクセルデータを読む前にヘッダの寸法だけを
/// 確認し、ピクセル数が上限を超える画像はデコードせずに弾く
/// （メモリ枯渇防止）。インデックスカラー（パレット）形式は
/// デコーダが RGBA へ正規化する。
pub fn decode_image(data: &[u8], codec: &CodecFormat) -> Result<DynamicImage, TransformError> {
    let format = codec.to_image_format().ok_or_else(|| {
        TransformError::DecodeFailed(format!("no decoder for codec: {codec}"))
    })?;

    // ヘッダのみ読んで寸法を確認（ピクセルデータはまだ読まない）
    let (width, height) = ImageReader::with_format(Cursor::new(data), format)
        .into_dimensions()
        .map_err(|e| TransformError::DecodeFailed(format!("decode failed ({codec}): {e}")))?;

    let total_pixels = width as u64 * height as u64;
    if total_pixels > MAX_PIXELS {
        return Err(TransformError::ResolutionTooLarge { width, height });
    }

    let img = ImageReader::with_format(Cursor::new(data), format)
        .decode()
        .map_err(|e| TransformError::DecodeFailed(format!("decode failed ({codec}): {e}")))?;

    Ok(img)
}
