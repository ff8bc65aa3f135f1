use image::{ColorType, DynamicImage};

/// 画像をグレースケールに変換する
///
/// 輝度変換後、ソースと同じチャンネルレイアウトに展開し直す
/// （アルファチャンネルは保持、グレー系ソースはそのまま）。
/// 寸法は変化しない。ガードなしで常に実行する。
pub fn grayscale_image(img: &DynamicImage) -> DynamicImage {
    let gray = img.grayscale();

    match img.color() {
        // すでにグレー系ならレイアウトを維持
        ColorType::L8 | ColorType::L16 | ColorType::La8 | ColorType::La16 => gray,
        color if color.has_alpha() => DynamicImage::ImageRgba8(gray.to_rgba8()),
        _ => DynamicImage::ImageRgb8(gray.to_rgb8()),
    }
}
