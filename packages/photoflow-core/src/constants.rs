/// リサイズの固定ターゲット幅（これ以下の幅はパススルー）
pub const RESIZE_TARGET_WIDTH: u32 = 800;

/// 画像の最大ピクセル数（1GP = 実質無制限、極端な攻撃のみ防止）
pub const MAX_PIXELS: u64 = 1_000_000_000;

/// 取得オブジェクトの最大サイズ（50MB）
pub const MAX_INPUT_SIZE: u64 = 50 * 1024 * 1024;

/// オブジェクトキーの最大長
pub const MAX_KEY_LENGTH: usize = 1024;
