use bytes::Bytes;

use crate::errors::TransformError;
use crate::format::CodecFormat;
use crate::transform::decode::decode_image;
use crate::transform::encode::encode_image;
use crate::transform::grayscale::grayscale_image;
use crate::transform::kind::TransformKind;
use crate::transform::resize::{resize_dimensions, resize_image};
use crate::transform::rotate::rotate_image;

/// 1回の変換の結果と診断情報
#[derive(Debug, Clone)]
pub struct TransformOutcome {
    pub bytes: Bytes,
    pub original_width: u32,
    pub original_height: u32,
    pub output_width: u32,
    pub output_height: u32,
    /// リサイズが不要で入力バイト列をそのまま返したか
    pub passthrough: bool,
}

/// 選択された変換を実行する
///
/// デコード → 変換 → 同一コーデックでエンコード。リサイズで縮小不要の
/// 場合のみ、再エンコードによる世代劣化を避けるため入力バイト列を
/// そのまま返す（パススルー）。
pub fn apply_transform(
    input: &Bytes,
    kind: TransformKind,
    codec: &CodecFormat,
) -> Result<TransformOutcome, TransformError> {
    let img = decode_image(input, codec)?;
    let (src_w, src_h) = (img.width(), img.height());

    let (output, passthrough) = match kind {
        TransformKind::Grayscale => (grayscale_image(&img), false),
        TransformKind::Rotate => (rotate_image(&img), false),
        TransformKind::Resize => match resize_dimensions(src_w, src_h) {
            Some((dst_w, dst_h)) => (resize_image(&img, dst_w, dst_h)?, false),
            None => {
                // 縮小不要: 入力をバイト単位でそのまま返す
                return Ok(TransformOutcome {
                    bytes: input.clone(),
                    original_width: src_w,
                    original_height: src_h,
                    output_width: src_w,
                    output_height: src_h,
                    passthrough: true,
                });
            }
        },
    };

    let (out_w, out_h) = (output.width(), output.height());
    let encoded = encode_image(&output, codec)?;

    Ok(TransformOutcome {
        bytes: Bytes::from(encoded),
        original_width: src_w,
        original_height: src_h,
        output_width: out_w,
        output_height: out_h,
        passthrough: false,
    })
}
