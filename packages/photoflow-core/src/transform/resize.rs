use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use image::DynamicImage;

use crate::constants::RESIZE_TARGET_WIDTH;
use crate::errors::TransformError;

/// 幅 800 固定の縮小後の寸法を計算する
///
/// 高さは round(h × 800 / w)。端数は四捨五入
/// （ゼロから遠ざかる丸め、元実装の `Math.round` と同じ）。最小1px。
/// 幅がターゲット以下なら `None`（縮小不要 = パススルー）。拡大はしない。
pub fn resize_dimensions(src_w: u32, src_h: u32) -> Option<(u32, u32)> {
    if src_w <= RESIZE_TARGET_WIDTH {
        return None;
    }

    let new_h =
        (src_h as f64 * RESIZE_TARGET_WIDTH as f64 / src_w as f64).round() as u32;
    Some((RESIZE_TARGET_WIDTH, new_h.max(1)))
}

/// 画像をリサイズする
///
/// fast_image_resize のバイリニア補間を使用。出力は不透明な RGB ラスタ
/// （ソースのアルファは破棄する。意図した単純化であり、リサイズ出力は
/// 透過を持たない）。
pub fn resize_image(
    img: &DynamicImage,
    target_w: u32,
    target_h: u32,
) -> Result<DynamicImage, TransformError> {
    // RGB8 に変換
    let rgb_img = img.to_rgb8();
    let width = rgb_img.width();
    let height = rgb_img.height();

    // fast_image_resize の Image を作成
    let src_image = Image::from_vec_u8(width, height, rgb_img.into_raw(), PixelType::U8x3)
        .map_err(|e| {
            TransformError::ProcessingFailed(format!("failed to create source image: {e}"))
        })?;

    // リサイズ先の Image を作成
    let mut dst_image = Image::new(target_w, target_h, PixelType::U8x3);

    // Resizer を作成してリサイズ実行（バイリニア補間）
    let mut resizer = Resizer::new();
    resizer
        .resize(
            &src_image,
            &mut dst_image,
            &ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Bilinear)),
        )
        .map_err(|e| TransformError::ProcessingFailed(format!("resize failed: {e}")))?;

    // DynamicImage に変換
    let resized_rgb = image::RgbImage::from_raw(target_w, target_h, dst_image.into_vec())
        .ok_or_else(|| {
            TransformError::ProcessingFailed("failed to convert resized image".to_string())
        })?;

    Ok(DynamicImage::ImageRgb8(resized_rgb))
}
