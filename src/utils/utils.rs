use std::io;
use std::time::Instant;
use indicatif::{ProgressBar, ProgressStyle};

pub fn setup_logging(log_level: &str) -> io::Result<()> {
    let log_level_filter = match log_level {
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Warn,
    };
    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("日誌初始化失敗: {}", e)))
}

/// 目錄轉換時的進度顯示（計數型 spinner）
pub struct ProgressManager {
    pb: ProgressBar,
    no_progress: bool,
    start: Instant,
}

impl ProgressManager {
    pub fn new(no_progress: bool) -> Self {
        let pb = if no_progress {
            ProgressBar::hidden()
        } else {
            let pb = ProgressBar::new_spinner();
            let style = ProgressStyle::default_spinner()
                .template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner());
            pb.set_style(style);
            pb
        };
        ProgressManager {
            pb,
            no_progress,
            start: Instant::now(),
        }
    }

    pub fn update(&self, converted: usize, skipped: usize, current: &str) {
        if self.no_progress {
            return;
        }
        let elapsed = self.start.elapsed().as_secs_f64();
        let done = converted + skipped;
        let speed = if elapsed > 0.0 { done as f64 / elapsed } else { 0.0 };
        self.pb.set_message(format!(
            "已轉換 {} 個檔案，跳過 {} 個，速度：{:.0} 檔案/秒，目前：{}",
            converted, skipped, speed, current
        ));
        self.pb.tick();
    }

    pub fn finish(&self, converted: usize, skipped: usize) {
        if self.no_progress {
            return;
        }
        self.pb.finish_with_message(format!("完成，共轉換 {} 個檔案，跳過 {} 個", converted, skipped));
    }
}

pub fn create_progress_bar(no_progress: bool) -> ProgressManager {
    ProgressManager::new(no_progress)
}
