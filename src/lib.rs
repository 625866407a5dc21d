//! 將任意編碼（自動偵測）的文字檔轉換為 UTF-8。
//!
//! 核心流程：路徑檢查 → 編碼偵測 → 解碼與正規化（BOM、結尾 NUL）→ 以 UTF-8 寫出；
//! 目錄模式會把輸入目錄樹鏡像到空的輸出目錄。

pub mod service {
    pub mod config_service;
    pub mod detector;
    pub mod dir;
    pub mod file;
    pub mod verifier;
    pub mod traits {
        pub mod i_service;
    }
}

pub mod config {
    pub mod config;
    pub mod ports;
}

pub mod action {
    pub mod cli;
    pub mod interactive;
}

pub mod facade {
    pub mod conversion_facade;
    pub mod traits {
        pub mod i_conversion;
    }
}

pub mod models {
    pub mod conversion;
    pub mod diagnostics;
    pub mod file;
    pub mod outcome;
}

pub mod utils {
    pub mod utils;
}
