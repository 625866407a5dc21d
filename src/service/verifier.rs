use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use crate::models::diagnostics::Diagnostics;
use crate::models::file::PathPair;
use crate::models::outcome::{ConversionOutcome, ConversionWarning};

/// 檢查單檔轉換的前置條件，不會在檔案系統留下任何檔案
pub fn verify_file_pair(pair: &PathPair, log: &mut Diagnostics) -> ConversionOutcome {
    if !is_readable_file(&pair.input) {
        log.error(format!(
            "input file {} does not exist or is not readable.",
            pair.input.display()
        ));
        return ConversionOutcome::InvalidInputFile;
    }

    // 永不覆寫
    if fs::symlink_metadata(&pair.output).is_ok() {
        log.error(format!("output file {} already exists.", pair.output.display()));
        return ConversionOutcome::OutputFileExists;
    }

    let parent = pair.output_parent();
    if !is_existing_dir(parent) {
        log.error(format!(
            "output directory {} does not exist or is not writeable.",
            parent.display()
        ));
        return ConversionOutcome::InvalidOutputDir;
    }

    // 建立零位元組檔再刪除，確認輸出路徑可建立；可寫與否由建立結果決定
    match OpenOptions::new().write(true).create_new(true).open(&pair.output) {
        Ok(placeholder) => {
            drop(placeholder);
            if let Err(e) = fs::remove_file(&pair.output) {
                log.error(format!(
                    "output file {} could not be removed after the creation check: {}",
                    pair.output.display(),
                    e
                ));
                return ConversionOutcome::InvalidOutputFile;
            }
        }
        Err(e) => {
            let outcome = creation_failure_outcome(e.kind());
            if outcome == ConversionOutcome::InvalidOutputDir {
                log.error(format!(
                    "output directory {} does not exist or is not writeable.",
                    parent.display()
                ));
            } else {
                log.error(format!(
                    "output file {} could not be created: {}",
                    pair.output.display(),
                    e
                ));
            }
            return outcome;
        }
    }

    ConversionOutcome::Ok
}

/// 權限不足代表目錄不可寫，其餘錯誤歸咎於檔名本身
fn creation_failure_outcome(kind: io::ErrorKind) -> ConversionOutcome {
    match kind {
        io::ErrorKind::PermissionDenied => ConversionOutcome::InvalidOutputDir,
        _ => ConversionOutcome::InvalidOutputFile,
    }
}

/// 檢查目錄轉換的前置條件
///
/// 輸入目錄為空只會產生 `EmptyInputDir` 警告，遞迴轉換時這是正常情況。
pub fn verify_dir_pair(pair: &PathPair, log: &mut Diagnostics) -> ConversionOutcome {
    let mut input_entries = match fs::read_dir(&pair.input) {
        Ok(entries) if pair.input.is_dir() => entries,
        _ => {
            log.error(format!(
                "input directory \"{}\" does not exist or is not readable.",
                pair.input.display()
            ));
            return ConversionOutcome::InvalidInputDir;
        }
    };

    if !is_existing_dir(&pair.output) || !can_create_in(&pair.output) {
        log.error(format!(
            "output directory \"{}\" does not exist or is not writeable.",
            pair.output.display()
        ));
        return ConversionOutcome::InvalidOutputDir;
    }

    match fs::read_dir(&pair.output) {
        Ok(mut entries) => {
            if entries.next().is_some() {
                log.error(format!(
                    "output directory \"{}\" is not empty, the output directory MUST be empty.",
                    pair.output.display()
                ));
                return ConversionOutcome::NonEmptyOutputDir;
            }
        }
        Err(_) => {
            log.error(format!(
                "output directory \"{}\" is not readable.",
                pair.output.display()
            ));
            return ConversionOutcome::InvalidOutputDir;
        }
    }

    if input_entries.next().is_none() {
        log.warning(
            Some(ConversionWarning::EmptyInputDir),
            format!("input directory \"{}\" is empty, skipping it.", pair.input.display()),
        );
    }

    ConversionOutcome::Ok
}

/// 輸出目錄不可位於輸入目錄之內，否則走訪會看到自己的輸出
pub fn verify_disjoint(pair: &PathPair, log: &mut Diagnostics) -> ConversionOutcome {
    let (Ok(input), Ok(output)) = (fs::canonicalize(&pair.input), fs::canonicalize(&pair.output)) else {
        // 不存在的路徑交給 verify_dir_pair 回報
        return ConversionOutcome::Ok;
    };

    if output.starts_with(&input) {
        log.error(format!(
            "output directory \"{}\" is inside input directory \"{}\".",
            pair.output.display(),
            pair.input.display()
        ));
        return ConversionOutcome::InvalidOutputDir;
    }

    ConversionOutcome::Ok
}

fn is_readable_file(path: &Path) -> bool {
    path.is_file() && File::open(path).is_ok()
}

fn is_existing_dir(path: &Path) -> bool {
    fs::metadata(path).map(|meta| meta.is_dir()).unwrap_or(false)
}

const WRITE_CHECK_NAME: &str = ".any2utf8-write-check";

/// 實際建立再刪除一個檔案來判斷目錄可寫；同名檔已存在代表可寫，留給空目錄檢查處理
fn can_create_in(dir: &Path) -> bool {
    let path = dir.join(WRITE_CHECK_NAME);
    match OpenOptions::new().write(true).create_new(true).open(&path) {
        Ok(file) => {
            drop(file);
            fs::remove_file(&path).is_ok()
        }
        Err(e) => e.kind() == io::ErrorKind::AlreadyExists,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_input_file_is_invalid() {
        let dir = tempdir().unwrap();
        let pair = PathPair::new(dir.path().join("nope.txt"), dir.path().join("out.txt"));
        let mut log = Diagnostics::new();

        assert_eq!(verify_file_pair(&pair, &mut log), ConversionOutcome::InvalidInputFile);
        assert_eq!(log.error_lines().len(), 1);
    }

    #[test]
    fn directory_as_input_file_is_invalid() {
        let dir = tempdir().unwrap();
        let pair = PathPair::new(dir.path(), dir.path().join("out.txt"));
        let mut log = Diagnostics::new();

        assert_eq!(verify_file_pair(&pair, &mut log), ConversionOutcome::InvalidInputFile);
    }

    #[test]
    fn existing_output_is_refused_and_untouched() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.txt");
        let output = dir.path().join("out.txt");
        fs::write(&input, "hello").unwrap();
        fs::write(&output, "keep me").unwrap();

        let mut log = Diagnostics::new();
        let outcome = verify_file_pair(&PathPair::new(&input, &output), &mut log);

        assert_eq!(outcome, ConversionOutcome::OutputFileExists);
        assert_eq!(fs::read_to_string(&output).unwrap(), "keep me");
    }

    #[test]
    fn missing_output_parent_is_invalid_dir() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.txt");
        fs::write(&input, "hello").unwrap();
        let pair = PathPair::new(&input, dir.path().join("missing").join("out.txt"));
        let mut log = Diagnostics::new();

        assert_eq!(verify_file_pair(&pair, &mut log), ConversionOutcome::InvalidOutputDir);
    }

    #[test]
    fn creation_check_leaves_nothing_behind() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.txt");
        let output = dir.path().join("out.txt");
        fs::write(&input, "hello").unwrap();

        let mut log = Diagnostics::new();
        assert_eq!(verify_file_pair(&PathPair::new(&input, &output), &mut log), ConversionOutcome::Ok);
        assert!(!output.exists());
        assert!(log.error_lines().is_empty());
    }

    #[test]
    fn dir_pair_checks_in_order() {
        let root = tempdir().unwrap();
        let input = root.path().join("in");
        let output = root.path().join("out");
        let mut log = Diagnostics::new();

        assert_eq!(
            verify_dir_pair(&PathPair::new(&input, &output), &mut log),
            ConversionOutcome::InvalidInputDir
        );

        fs::create_dir(&input).unwrap();
        assert_eq!(
            verify_dir_pair(&PathPair::new(&input, &output), &mut log),
            ConversionOutcome::InvalidOutputDir
        );

        fs::create_dir(&output).unwrap();
        fs::write(output.join("stale.txt"), "x").unwrap();
        assert_eq!(
            verify_dir_pair(&PathPair::new(&input, &output), &mut log),
            ConversionOutcome::NonEmptyOutputDir
        );
        assert_eq!(fs::read_to_string(output.join("stale.txt")).unwrap(), "x");
    }

    #[test]
    fn empty_input_dir_only_warns() {
        let root = tempdir().unwrap();
        let input = root.path().join("in");
        let output = root.path().join("out");
        fs::create_dir(&input).unwrap();
        fs::create_dir(&output).unwrap();

        let mut log = Diagnostics::new();
        let outcome = verify_dir_pair(&PathPair::new(&input, &output), &mut log);

        assert_eq!(outcome, ConversionOutcome::Ok);
        assert_eq!(log.warning_codes(), [ConversionWarning::EmptyInputDir]);
        assert!(log.error_lines().is_empty());
    }

    #[test]
    fn nested_output_is_rejected() {
        let root = tempdir().unwrap();
        let output = root.path().join("out");
        fs::create_dir(&output).unwrap();

        let mut log = Diagnostics::new();
        let outcome = verify_disjoint(&PathPair::new(root.path(), &output), &mut log);
        assert_eq!(outcome, ConversionOutcome::InvalidOutputDir);
    }

    #[test]
    fn uncreatable_output_name_is_invalid_file() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.txt");
        fs::write(&input, "hello").unwrap();
        let output = dir.path().join("x".repeat(300));
        let mut log = Diagnostics::new();

        let outcome = verify_file_pair(&PathPair::new(&input, &output), &mut log);

        assert_eq!(outcome, ConversionOutcome::InvalidOutputFile);
        assert_eq!(log.error_lines().len(), 1);
        assert!(!output.exists());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn permission_denied_blames_the_directory() {
        assert_eq!(
            creation_failure_outcome(io::ErrorKind::PermissionDenied),
            ConversionOutcome::InvalidOutputDir
        );
        assert_eq!(
            creation_failure_outcome(io::ErrorKind::InvalidInput),
            ConversionOutcome::InvalidOutputFile
        );
        assert_eq!(
            creation_failure_outcome(io::ErrorKind::Other),
            ConversionOutcome::InvalidOutputFile
        );
    }

    #[test]
    fn dir_write_check_leaves_output_empty() {
        let root = tempdir().unwrap();
        let input = root.path().join("in");
        let output = root.path().join("out");
        fs::create_dir(&input).unwrap();
        fs::write(input.join("a.txt"), "a").unwrap();
        fs::create_dir(&output).unwrap();

        let mut log = Diagnostics::new();
        assert_eq!(verify_dir_pair(&PathPair::new(&input, &output), &mut log), ConversionOutcome::Ok);
        assert!(can_create_in(&output));
        assert_eq!(fs::read_dir(&output).unwrap().count(), 0);
    }
}
