use std::path::PathBuf;
use crate::models::diagnostics::Diagnostics;
use crate::models::outcome::ConversionOutcome;

#[derive(Clone, Debug)]
pub struct ConversionInput {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub add_bom: bool,
}

/// 目錄轉換的統計
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DirSummary {
    pub files_converted: usize,
    pub files_skipped: usize,
    pub dirs_created: usize,
}

#[derive(Debug)]
pub struct ConversionOutput {
    pub outcome: ConversionOutcome,
    pub diagnostics: Diagnostics,
    pub output_path: PathBuf,
    pub summary: Option<DirSummary>,
}
