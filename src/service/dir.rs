use std::fs;
use log::info;
use walkdir::WalkDir;
use crate::models::conversion::DirSummary;
use crate::models::diagnostics::Diagnostics;
use crate::models::file::PathPair;
use crate::models::outcome::ConversionOutcome;
use crate::service::file::FileService;
use crate::service::traits::i_service::{DirServiceTrait, FileServiceTrait};
use crate::service::verifier::{verify_dir_pair, verify_disjoint};
use crate::utils::utils::create_progress_bar;

/// 目錄轉換服務，將輸入目錄樹鏡像到空的輸出目錄
///
/// 以 walkdir 的內部堆疊走訪，不依賴呼叫堆疊深度；依檔名排序，
/// 每個項目恰好處理一次。子樹內的失敗只寫入診斷紀錄，不會中斷兄弟項目。
pub struct DirService {
    file_service: Box<dyn FileServiceTrait>,
    no_progress: bool,
}

impl DirService {
    pub fn new(file_service: Box<dyn FileServiceTrait>, no_progress: bool) -> Self {
        DirService {
            file_service,
            no_progress,
        }
    }
}

impl Default for DirService {
    fn default() -> Self {
        DirService::new(Box::new(FileService::new()), true)
    }
}

impl DirServiceTrait for DirService {
    fn convert_dir(&self, pair: &PathPair, add_bom: bool, log: &mut Diagnostics) -> (ConversionOutcome, DirSummary) {
        let mut summary = DirSummary::default();

        let outcome = verify_dir_pair(pair, log);
        if !outcome.is_ok() {
            return (outcome, summary);
        }
        let outcome = verify_disjoint(pair, log);
        if !outcome.is_ok() {
            return (outcome, summary);
        }

        let pm = create_progress_bar(self.no_progress);
        let mut walker = WalkDir::new(&pair.input)
            .min_depth(1)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter();

        while let Some(entry) = walker.next() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e.path().map(|p| p.display().to_string()).unwrap_or_default();
                    log.error(format!("could not read \"{}\": {}", path, e));
                    continue;
                }
            };

            let Some(relative) = pathdiff::diff_paths(entry.path(), &pair.input) else {
                log.error(format!("could not mirror path \"{}\".", entry.path().display()));
                continue;
            };
            let output = pair.output.join(relative);

            if entry.file_type().is_dir() {
                if let Err(e) = fs::create_dir(&output) {
                    log.error(format!(
                        "could not create output directory \"{}\": {}",
                        output.display(),
                        e
                    ));
                    walker.skip_current_dir();
                    continue;
                }
                summary.dirs_created += 1;

                let sub_pair = PathPair::new(entry.path(), &output);
                if !verify_dir_pair(&sub_pair, log).is_ok() {
                    walker.skip_current_dir();
                }
                continue;
            }

            if entry.path_is_symlink() && entry.path().is_dir() {
                log.info(format!(
                    "\"{}\" is a symbolic link to a directory, skipping it.",
                    entry.path().display()
                ));
                continue;
            }

            let file_pair = PathPair::new(entry.path(), output);
            let outcome = self.file_service.convert_file(&file_pair, add_bom, log);
            if outcome.is_ok() && file_pair.output.is_file() {
                summary.files_converted += 1;
            } else {
                summary.files_skipped += 1;
            }
            pm.update(
                summary.files_converted,
                summary.files_skipped,
                &entry.file_name().to_string_lossy(),
            );
        }

        pm.finish(summary.files_converted, summary.files_skipped);
        info!(
            "目錄轉換完成：{} -> {}，轉換 {} 個檔案，跳過 {} 個，建立 {} 個目錄",
            pair.input.display(),
            pair.output.display(),
            summary.files_converted,
            summary.files_skipped,
            summary.dirs_created
        );

        (ConversionOutcome::Ok, summary)
    }
}
