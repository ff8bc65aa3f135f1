use image::DynamicImage;

/// 画像を時計回りに90度回転する
///
/// 向きメタデータは参照せず、常に90度回転する。ソースのピクセル (x, y) は
/// 出力の (srcHeight−1−y, x) へ移動する厳密な置換であり、補間は行わない。
/// ピクセルレイアウトは維持される（アルファも保持）。
pub fn rotate_image(img: &DynamicImage) -> DynamicImage {
    img.rotate90()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn numbered_image(width: u32, height: u32) -> DynamicImage {
        let mut img = image::RgbImage::new(width, height);
        for (x, y, px) in img.enumerate_pixels_mut() {
            *px = Rgb([x as u8, y as u8, (x + y) as u8]);
        }
        DynamicImage::ImageRgb8(img)
    }

    #[test]
    fn test_rotate_swaps_dimensions() {
        let img = numbered_image(300, 200);
        let rotated = rotate_image(&img);
        assert_eq!(rotated.width(), 200);
        assert_eq!(rotated.height(), 300);
    }

    #[test]
    fn test_rotate_pixel_mapping() {
        // (x, y) → (h−1−y, x) の置換になっていること
        let img = numbered_image(4, 3);
        let src = img.to_rgb8();
        let rotated = rotate_image(&img).to_rgb8();

        let h = img.height();
        for (x, y, px) in src.enumerate_pixels() {
            assert_eq!(rotated.get_pixel(h - 1 - y, x), px);
        }
    }

    #[test]
    fn test_four_rotations_identity() {
        let img = numbered_image(5, 7);
        let mut current = img.clone();
        for _ in 0..4 {
            current = rotate_image(&current);
        }
        assert_eq!(current.to_rgb8().as_raw(), img.to_rgb8().as_raw());
    }
}
