use clap::Parser;
use std::io;
use std::path::Path;

#[derive(Parser, Clone, Debug)]
#[command(
    name = "any2utf8",
    version,
    about = "將任意編碼（自動偵測）的文字檔轉換為 UTF-8",
    long_about = "自動偵測文字檔的編碼並轉換為 UTF-8。\n\
        輸入與輸出可以是檔案或目錄：若輸入為目錄，其下所有檔案（含子目錄）都會被轉換並寫入輸出目錄，目錄結構會一併重建。\n\
        無法辨識的檔案（例如二進位檔或不支援的編碼）會被跳過，警告輸出到 stderr；偵測到的編碼輸出到 stdout。\n\
        程式不會覆寫既有檔案，且輸出目錄必須為空。\n\
        不帶任何參數執行時進入互動模式。",
    after_help = "用法：any2utf8 inputFile outputFile\n  或  any2utf8 inputFile outputDir\n  或  any2utf8 inputDir outputDir",
    arg_required_else_help = true
)]
pub struct Cli {
    pub input: String,
    pub output: String,
    #[arg(long, default_value_t = false)]
    pub add_bom: bool,
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,
    /// 單檔大小上限（位元組）
    #[arg(long)]
    pub max_size: Option<u64>,
    #[arg(long, default_value = "warn", value_parser = ["debug", "info", "warn", "error"])]
    pub log_level: String,
}

pub fn validate_input_path(input: &str) -> io::Result<&Path> {
    let path = Path::new(input);
    if input.trim().is_empty() {
        return Err(io::Error::new(io::ErrorKind::InvalidInput, "輸入路徑不可為空"));
    }
    Ok(path)
}

pub fn validate_max_size(max_size: Option<u64>) -> io::Result<()> {
    if max_size == Some(0) {
        return Err(io::Error::new(io::ErrorKind::InvalidInput, "--max-size 必須大於 0"));
    }
    Ok(())
}
