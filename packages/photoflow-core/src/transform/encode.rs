use std::io::Cursor;

use image::DynamicImage;

use crate::errors::TransformError;
use crate::format::CodecFormat;

/// 画像をエンコードする
///
/// コーデックは入力と同一のものを使う。品質パラメータは調整せず、
/// 各コーデックのデフォルトに任せる。実在しないコーデック識別子や
/// エンコーダ自体のエラーは `EncodeFailed` を返す
/// （image クレートはレイアウト非対応のコーデックには可能な範囲で
/// 変換して渡す。JPEG はアルファ付き入力を RGB にして受け付ける）。
pub fn encode_image(img: &DynamicImage, codec: &CodecFormat) -> Result<Vec<u8>, TransformError> {
    let format = codec.to_image_format().ok_or_else(|| {
        TransformError::EncodeFailed(format!("no encoder for codec: {codec}"))
    })?;

    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, format)
        .map_err(|e| TransformError::EncodeFailed(format!("{codec} encode failed: {e}")))?;

    Ok(buf.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_jpeg() {
        let img = DynamicImage::new_rgb8(10, 10);
        let data = encode_image(&img, &CodecFormat::Jpeg).unwrap();

        assert!(!data.is_empty());
        // JPEG マジックナンバー確認
        assert_eq!(&data[0..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_encode_png() {
        let img = DynamicImage::new_rgb8(10, 10);
        let data = encode_image(&img, &CodecFormat::Png).unwrap();

        assert!(!data.is_empty());
        // PNG マジックナンバー確認
        assert_eq!(&data[0..8], &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]);
    }

    #[test]
    fn test_encode_bmp() {
        let img = DynamicImage::new_rgb8(10, 10);
        let data = encode_image(&img, &CodecFormat::Bmp).unwrap();

        assert!(!data.is_empty());
        assert_eq!(&data[0..2], b"BM");
    }

    #[test]
    fn test_encode_webp() {
        let img = DynamicImage::new_rgb8(10, 10);
        let data = encode_image(&img, &CodecFormat::WebP).unwrap();

        assert!(!data.is_empty());
        // WebP は RIFF コンテナ
        assert_eq!(&data[0..4], b"RIFF");
    }

    #[test]
    fn test_encode_unknown_codec() {
        let img = DynamicImage::new_rgb8(10, 10);
        let result = encode_image(&img, &CodecFormat::Other("notacodec".to_string()));
        assert!(matches!(result, Err(TransformError::EncodeFailed(_))));
    }

    #[test]
    fn test_encode_jpeg_accepts_alpha_input() {
        // JPEG エンコーダはアルファ付き入力を RGB に変換して受け付ける
        let img = DynamicImage::new_rgba8(10, 10);
        let data = encode_image(&img, &CodecFormat::Jpeg).unwrap();

        assert!(!data.is_empty());
        assert_eq!(&data[0..2], &[0xFF, 0xD8]);
    }
}
