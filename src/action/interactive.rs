use dialoguer::{Confirm, Input, Select};
use std::io;
use std::path::Path;
use std::process::ExitCode;

use crate::action::cli::report;
use crate::config::ports::{AppConfig, ConfigPort, ConversionPort};
use crate::facade::conversion_facade::ConversionAdapter;
use crate::service::config_service::ConfigService;
use crate::utils::utils::setup_logging;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractiveMode {
    SingleFile,
    Folder,
}

pub fn process_interactive_mode() -> io::Result<ExitCode> {
    setup_logging("warn")?;
    println!("=== any2utf8 互動模式 ===");

    let config_service = ConfigService::new(Box::new(InteractiveConfigAdapter));
    let config = config_service.get_config()?;

    let conversion_port: Box<dyn ConversionPort> = Box::new(ConversionAdapter);
    let output = conversion_port.execute(config)?;
    Ok(report(&output))
}

pub fn get_mode() -> io::Result<InteractiveMode> {
    let selected = Select::new()
        .with_prompt("選擇轉換模式（使用方向鍵選擇，按 Enter 確認）")
        .items(&["轉換單一檔案", "轉換資料夾內所有檔案（含子資料夾）"])
        .default(0)
        .interact()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("轉換模式選擇失敗: {}", e)))?;
    Ok(if selected == 1 { InteractiveMode::Folder } else { InteractiveMode::SingleFile })
}

pub fn get_input_path(mode: InteractiveMode) -> io::Result<String> {
    let prompt = match mode {
        InteractiveMode::SingleFile => "要轉換的檔案",
        InteractiveMode::Folder => "要轉換其內容的資料夾",
    };
    Input::new()
        .with_prompt(prompt)
        .validate_with(move |input: &String| -> Result<(), String> {
            check_input_path(mode, Path::new(input))
        })
        .interact_text()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))
}

pub fn get_output_path(mode: InteractiveMode) -> io::Result<String> {
    let prompt = match mode {
        InteractiveMode::SingleFile => "轉換後的檔名",
        InteractiveMode::Folder => "存放轉換結果的資料夾（必須為空）",
    };
    Input::new()
        .with_prompt(prompt)
        .interact_text()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))
}

pub fn get_add_bom_option() -> io::Result<bool> {
    Confirm::new()
        .with_prompt("是否在輸出檔開頭加入 BOM？")
        .default(false)
        .interact()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("BOM 選項輸入失敗: {}", e)))
}

pub fn check_input_path(mode: InteractiveMode, path: &Path) -> Result<(), String> {
    match mode {
        InteractiveMode::SingleFile if path.is_file() => Ok(()),
        InteractiveMode::Folder if path.is_dir() => Ok(()),
        InteractiveMode::SingleFile => Err(format!("'{}' 不是存在的檔案", path.display())),
        InteractiveMode::Folder => Err(format!("'{}' 不是存在的資料夾", path.display())),
    }
}

// 交互配置適配器
pub struct InteractiveConfigAdapter;

impl ConfigPort for InteractiveConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        let mode = get_mode()?;
        let input = get_input_path(mode)?;
        let output = get_output_path(mode)?;
        let add_bom = get_add_bom_option()?;

        Ok(AppConfig {
            input,
            output,
            add_bom,
            no_progress: false,
            max_file_size: None,
        })
    }
}
