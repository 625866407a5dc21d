use crate::models::conversion::DirSummary;
use crate::models::diagnostics::Diagnostics;
use crate::models::file::PathPair;
use crate::models::outcome::ConversionOutcome;

// 編碼偵測接口，可替換的外部能力
pub trait CharsetDetectorTrait: Send + Sync {
    /// 偵測原始位元組的編碼
    /// # 參數
    /// - bytes: 檔案完整內容
    /// # 回傳
    /// - 編碼標籤（例如 "GBK"），無法可靠判斷時返回 None
    fn detect(&self, bytes: &[u8]) -> Option<String>;
}

// 單檔轉碼服務接口
pub trait FileServiceTrait: Send + Sync {
    /// 將單一檔案轉換為 UTF-8
    /// # 參數
    /// - pair: 輸入與輸出路徑
    /// - add_bom: 是否在輸出開頭加入 UTF-8 BOM
    /// - log: 本次呼叫的診斷紀錄
    /// # 回傳
    /// - 本次操作的結果代碼
    fn convert_file(&self, pair: &PathPair, add_bom: bool, log: &mut Diagnostics) -> ConversionOutcome;
}

// 目錄轉換服務接口
pub trait DirServiceTrait: Send + Sync {
    /// 遞迴轉換整個目錄樹，輸出結構與輸入一致
    /// # 回傳
    /// - 頂層檢查的結果代碼與統計；子樹內的問題只會出現在診斷紀錄中
    fn convert_dir(&self, pair: &PathPair, add_bom: bool, log: &mut Diagnostics) -> (ConversionOutcome, DirSummary);
}
