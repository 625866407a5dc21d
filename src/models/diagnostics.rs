use crate::models::outcome::ConversionWarning;

#[cfg(windows)]
const LINE_SEPARATOR: &str = "\r\n";
#[cfg(not(windows))]
const LINE_SEPARATOR: &str = "\n";

/// 單次轉換呼叫的診斷紀錄
///
/// 三條獨立累積的訊息串流（資訊、警告、錯誤）加上警告代碼序列。
/// 只能附加，由呼叫端以 `&mut` 傳入檢查器、轉碼器與目錄走訪器。
#[derive(Debug, Default, Clone)]
pub struct Diagnostics {
    info: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    warning_codes: Vec<ConversionWarning>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Diagnostics::default()
    }

    pub fn info(&mut self, message: impl Into<String>) {
        let message = message.into();
        log::debug!("{}", message);
        self.info.push(message);
    }

    /// 記錄一則警告訊息；`code` 為 `None` 時只寫入文字串流
    pub fn warning(&mut self, code: Option<ConversionWarning>, message: impl Into<String>) {
        let message = message.into();
        log::debug!("Warning: {}", message);
        self.warnings.push(message);
        if let Some(code) = code {
            self.warning_codes.push(code);
        }
    }

    pub fn error(&mut self, message: impl Into<String>) {
        let message = message.into();
        log::debug!("Error: {}", message);
        self.errors.push(message);
    }

    pub fn info_lines(&self) -> &[String] {
        &self.info
    }

    pub fn warning_lines(&self) -> &[String] {
        &self.warnings
    }

    pub fn error_lines(&self) -> &[String] {
        &self.errors
    }

    pub fn warning_codes(&self) -> &[ConversionWarning] {
        &self.warning_codes
    }

    pub fn warning_count(&self) -> usize {
        self.warning_codes.len()
    }

    pub fn count_of(&self, code: ConversionWarning) -> usize {
        self.warning_codes.iter().filter(|c| **c == code).count()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn render_info(&self) -> String {
        render(&self.info, "")
    }

    pub fn render_warnings(&self) -> String {
        render(&self.warnings, "Warning: ")
    }

    pub fn render_errors(&self) -> String {
        render(&self.errors, "Error: ")
    }
}

fn render(lines: &[String], prefix: &str) -> String {
    lines
        .iter()
        .map(|line| format!("{}{}{}", prefix, line, LINE_SEPARATOR))
        .collect()
}
