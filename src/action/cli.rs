use std::io;
use std::process::ExitCode;
use clap::Parser;
use crate::config::config::{Cli, validate_input_path, validate_max_size};
use crate::action::interactive::process_interactive_mode;
use crate::utils::utils::setup_logging;
use crate::config::ports::{AppConfig, ConfigPort, ConversionPort};
use crate::facade::conversion_facade::ConversionAdapter;
use crate::models::conversion::ConversionOutput;
use crate::service::config_service::{ConfigService, DefaultConfigAdapter};

pub fn process_args(args: Vec<String>) -> io::Result<ExitCode> {
    if args.len() == 1 {
        process_interactive_mode()
    } else {
        process_cli_mode()
    }
}

pub fn process_cli_mode() -> io::Result<ExitCode> {
    let cli = Cli::parse();
    setup_logging(&cli.log_level)?;

    // 選擇配置適配器
    let config_port: Box<dyn ConfigPort> = if is_default_config(&cli) {
        log::info!("未提供選項參數，使用預設配置：不加 BOM，無大小上限");
        Box::new(DefaultConfigAdapter::new(cli.input, cli.output))
    } else {
        Box::new(CliConfigAdapter::new(cli))
    };

    let config_service = ConfigService::new(config_port);
    let config = config_service.get_config()?;
    log::info!("開始轉換，輸入：{}，輸出：{}，加入 BOM：{}", config.input, config.output, config.add_bom);

    let conversion_port: Box<dyn ConversionPort> = Box::new(ConversionAdapter);
    let output = conversion_port.execute(config)?;

    Ok(report(&output))
}

/// 只提供 input 和 output 時使用預設配置；`--log-level` 不影響轉換設定
pub fn is_default_config(cli: &Cli) -> bool {
    !cli.add_bom && !cli.no_progress && cli.max_size.is_none()
}

/// 資訊紀錄輸出到 stdout，警告與錯誤輸出到 stderr；結果不是 Ok 時回傳非零結束碼
pub fn report(output: &ConversionOutput) -> ExitCode {
    print!("{}", output.diagnostics.render_info());
    eprint!("{}", output.diagnostics.render_warnings());
    eprint!("{}", output.diagnostics.render_errors());

    if output.outcome.is_ok() {
        println!("{}", summary_line(output));
    } else {
        eprintln!("{}", summary_line(output));
    }
    ExitCode::from(exit_status(output))
}

pub fn exit_status(output: &ConversionOutput) -> u8 {
    if output.outcome.is_ok() { 0 } else { 1 }
}

pub fn summary_line(output: &ConversionOutput) -> String {
    if !output.outcome.is_ok() {
        return format!("Conversion failed: {}.", output.outcome);
    }
    let mut line = String::from("Conversion completed successfully");
    if let Some(summary) = output.summary {
        line.push_str(&format!(
            " ({} converted, {} skipped)",
            summary.files_converted, summary.files_skipped
        ));
    }
    match output.diagnostics.warning_count() {
        0 => line.push('.'),
        1 => line.push_str(" with 1 warning."),
        n => line.push_str(&format!(" with {} warnings.", n)),
    }
    if output.diagnostics.has_errors() {
        line.push_str(" Some files could not be converted, see the errors above.");
    }
    line
}

// CLI 配置適配器
pub struct CliConfigAdapter {
    cli: Cli,
}

impl CliConfigAdapter {
    pub fn new(cli: Cli) -> Self {
        CliConfigAdapter { cli }
    }
}

impl ConfigPort for CliConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        validate_input_path(&self.cli.input)?;
        validate_max_size(self.cli.max_size)?;

        Ok(AppConfig {
            input: self.cli.input.clone(),
            output: self.cli.output.clone(),
            add_bom: self.cli.add_bom,
            no_progress: self.cli.no_progress,
            max_file_size: self.cli.max_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use crate::models::conversion::DirSummary;
    use crate::models::diagnostics::Diagnostics;
    use crate::models::outcome::{ConversionOutcome, ConversionWarning};

    fn output(outcome: ConversionOutcome, diagnostics: Diagnostics, summary: Option<DirSummary>) -> ConversionOutput {
        ConversionOutput {
            outcome,
            diagnostics,
            output_path: PathBuf::from("out"),
            summary,
        }
    }

    #[test]
    fn cli_adapter_maps_flags() {
        let cli = Cli::try_parse_from(["any2utf8", "in", "out", "--add-bom", "--no-progress"]).unwrap();
        let config = CliConfigAdapter::new(cli).get_config().unwrap();
        assert_eq!(config.input, "in");
        assert!(config.add_bom);
        assert!(config.no_progress);
        assert_eq!(config.max_file_size, None);
    }

    #[test]
    fn cli_adapter_rejects_zero_limit() {
        let cli = Cli::try_parse_from(["any2utf8", "in", "out", "--max-size", "0"]).unwrap();
        assert!(CliConfigAdapter::new(cli).get_config().is_err());
    }

    #[test]
    fn summary_reports_warning_count() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.warning(Some(ConversionWarning::EncodingNotDetected), "skipped");
        let summary = DirSummary { files_converted: 3, files_skipped: 1, dirs_created: 0 };

        let line = summary_line(&output(ConversionOutcome::Ok, diagnostics, Some(summary)));
        assert_eq!(line, "Conversion completed successfully (3 converted, 1 skipped) with 1 warning.");
    }

    #[test]
    fn paths_only_use_default_config() {
        let cli = Cli::try_parse_from(["any2utf8", "in", "out", "--log-level", "debug"]).unwrap();
        assert!(is_default_config(&cli));

        let cli = Cli::try_parse_from(["any2utf8", "in", "out", "--add-bom"]).unwrap();
        assert!(!is_default_config(&cli));

        let cli = Cli::try_parse_from(["any2utf8", "in", "out", "--max-size", "10"]).unwrap();
        assert!(!is_default_config(&cli));
    }

    #[test]
    fn summary_points_at_logged_errors() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.error("could not read file a.txt: device went away");
        let summary = DirSummary { files_converted: 1, files_skipped: 1, dirs_created: 0 };

        let line = summary_line(&output(ConversionOutcome::Ok, diagnostics, Some(summary)));
        assert_eq!(
            line,
            "Conversion completed successfully (1 converted, 1 skipped). \
             Some files could not be converted, see the errors above."
        );
    }

    #[test]
    fn failure_exits_non_zero() {
        let failed = output(ConversionOutcome::NonEmptyOutputDir, Diagnostics::new(), None);
        assert_eq!(summary_line(&failed), "Conversion failed: output directory is not empty.");
        assert_eq!(exit_status(&failed), 1);
        assert_eq!(exit_status(&output(ConversionOutcome::Ok, Diagnostics::new(), None)), 0);
        assert_eq!(exit_status(&output(ConversionOutcome::FileIsEmpty, Diagnostics::new(), None)), 1);
    }
}
