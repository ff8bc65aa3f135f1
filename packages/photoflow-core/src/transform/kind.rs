/// 変換の種類
///
/// 1回の呼び出しにつき1つの変換のみ実行する。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformKind {
    Grayscale,
    Resize,
    Rotate,
}

impl TransformKind {
    /// 文字列から TransformKind を作成
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "grayscale" => Some(Self::Grayscale),
            "resize" => Some(Self::Resize),
            "rotate" => Some(Self::Rotate),
            _ => None,
        }
    }

    /// 変換種別ごとの出力キープレフィックス
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Grayscale => "grayscale/",
            Self::Resize => "resized/",
            Self::Rotate => "rotated/",
        }
    }

    /// 出力先キーを導出する（プレフィックス + 元キー）
    ///
    /// 変換種別ごとに名前空間が分かれるため、同一ソースへの並行呼び出しが
    /// 同じ出力キーへ書き込むことはない。
    pub fn destination_key(&self, source_key: &str) -> String {
        format!("{}{}", self.prefix(), source_key)
    }
}

impl std::fmt::Display for TransformKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Grayscale => "grayscale",
            Self::Resize => "resize",
            Self::Rotate => "rotate",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(TransformKind::from_str("grayscale"), Some(TransformKind::Grayscale));
        assert_eq!(TransformKind::from_str("RESIZE"), Some(TransformKind::Resize));
        assert_eq!(TransformKind::from_str("rotate"), Some(TransformKind::Rotate));
        assert_eq!(TransformKind::from_str("blur"), None);
    }

    #[test]
    fn test_destination_key() {
        assert_eq!(
            TransformKind::Grayscale.destination_key("a/b.png"),
            "grayscale/a/b.png"
        );
        assert_eq!(
            TransformKind::Resize.destination_key("a/b.png"),
            "resized/a/b.png"
        );
        assert_eq!(
            TransformKind::Rotate.destination_key("a/b.png"),
            "rotated/a/b.png"
        );
    }
}
