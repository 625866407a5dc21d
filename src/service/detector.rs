use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use log::trace;
use crate::service::traits::i_service::CharsetDetectorTrait;

/// 以 chardetng 為核心的編碼偵測器
pub struct ChardetDetector;

impl ChardetDetector {
    pub fn new() -> Self {
        ChardetDetector
    }
}

impl Default for ChardetDetector {
    fn default() -> Self {
        ChardetDetector::new()
    }
}

impl CharsetDetectorTrait for ChardetDetector {
    fn detect(&self, bytes: &[u8]) -> Option<String> {
        // BOM 是確定的
        if let Some((encoding, _)) = Encoding::for_bom(bytes) {
            trace!("依 BOM 判定編碼：{}", encoding.name());
            return Some(encoding.name().to_string());
        }

        // 結尾的 NUL 填充交給正規化處理；內部仍有 NUL 才視為二進位檔
        let body = trim_trailing_nuls(bytes);
        if body.contains(&0) {
            trace!("內容含 NUL 位元組，無法判定編碼");
            return None;
        }

        let mut detector = EncodingDetector::new();
        detector.feed(body, true);
        let guess = detector.guess(None, true);

        // 猜測結果必須能無錯誤解碼
        if guess
            .decode_without_bom_handling_and_without_replacement(bytes)
            .is_none()
        {
            trace!("猜測編碼 {} 無法乾淨解碼", guess.name());
            return None;
        }

        Some(guess.name().to_string())
    }
}

fn trim_trailing_nuls(bytes: &[u8]) -> &[u8] {
    let end = bytes.iter().rposition(|b| *b != 0).map_or(0, |i| i + 1);
    &bytes[..end]
}
