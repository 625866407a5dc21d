use std::io;
use crate::models::conversion::{ConversionInput, ConversionOutput};

// Facade 接口，負責依輸入輸出型態分派單檔或目錄轉換
pub trait ConversionFacadeTrait: Send + Sync {
    /// 執行轉換
    /// # 參數
    /// - input: 輸入路徑、輸出路徑與 BOM 選項
    /// # 回傳
    /// - 成功時返回結果代碼與診斷紀錄；參數組合不合法時返回 IO 錯誤
    fn execute_conversion(&self, input: ConversionInput) -> io::Result<ConversionOutput>;
}
