use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;
use encoding_rs::Encoding;
use log::{trace, warn};
use crate::models::diagnostics::Diagnostics;
use crate::models::file::PathPair;
use crate::models::outcome::{ConversionOutcome, ConversionWarning};
use crate::service::detector::ChardetDetector;
use crate::service::traits::i_service::{CharsetDetectorTrait, FileServiceTrait};
use crate::service::verifier::verify_file_pair;

const BOM: char = '\u{FEFF}';
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// 可配置的讀取上限預設為可定址緩衝區的上限
pub const DEFAULT_MAX_FILE_SIZE: u64 = isize::MAX as u64;

/// 單檔轉碼服務：偵測編碼、解碼、正規化後以 UTF-8 寫出
pub struct FileService {
    detector: Box<dyn CharsetDetectorTrait>,
    max_file_size: u64,
}

impl FileService {
    /// 使用預設偵測器建立服務
    pub fn new() -> Self {
        FileService::with_detector(Box::new(ChardetDetector::new()))
    }

    pub fn with_detector(detector: Box<dyn CharsetDetectorTrait>) -> Self {
        FileService {
            detector,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }

    pub fn with_max_file_size(mut self, max_file_size: u64) -> Self {
        self.max_file_size = max_file_size;
        self
    }
}

impl Default for FileService {
    fn default() -> Self {
        FileService::new()
    }
}

enum ReadFailure {
    TooLarge(u64),
    Incomplete { expected: u64, read: usize },
    Io(io::Error),
}

impl FileServiceTrait for FileService {
    fn convert_file(&self, pair: &PathPair, add_bom: bool, log: &mut Diagnostics) -> ConversionOutcome {
        let outcome = verify_file_pair(pair, log);
        if !outcome.is_ok() {
            return outcome;
        }

        let bytes = match read_input(&pair.input, self.max_file_size) {
            Ok(bytes) => bytes,
            Err(failure) => return report_read_failure(failure, pair, log),
        };

        if bytes.is_empty() {
            log.warning(None, format!("file {} is empty, skipping it.", pair.input.display()));
            return ConversionOutcome::FileIsEmpty;
        }

        let Some(label) = self.detector.detect(&bytes) else {
            log.warning(
                Some(ConversionWarning::EncodingNotDetected),
                format!("unable to detect source file encoding, skipping {}", pair.input.display()),
            );
            return ConversionOutcome::Ok;
        };

        let Some(encoding) = resolve_encoding(&label) else {
            log.warning(
                Some(ConversionWarning::EncodingNotSupported),
                format!(
                    "\"{}\" uses an unsupported encoding ({}), skipping.",
                    pair.input.display(),
                    label
                ),
            );
            return ConversionOutcome::Ok;
        };

        log.info(format!(
            "Encoding of file {} appears to be {}.",
            pair.input.display(),
            encoding.name()
        ));

        let (decoded, had_errors) = encoding.decode_without_bom_handling(&bytes);
        if had_errors {
            warn!("檔案 {} 含有無效序列，已以 U+FFFD 取代", pair.input.display());
        }

        let content = normalize(&decoded);
        let file = match OpenOptions::new().write(true).create_new(true).open(&pair.output) {
            Ok(file) => file,
            Err(e) => {
                // 不是我們建立的檔案，不可刪除
                log.error(format!("could not create output file {}: {}", pair.output.display(), e));
                return ConversionOutcome::Ok;
            }
        };
        if !write_or_discard(BufWriter::new(file), &pair.output, content, add_bom, log) {
            return ConversionOutcome::Ok;
        }

        trace!("寫出 {}，{} 位元組", pair.output.display(), content.len());
        ConversionOutcome::Ok
    }
}

/// 去除開頭的 BOM 與結尾所有 NUL 字元
pub fn normalize(text: &str) -> &str {
    let text = text.strip_prefix(BOM).unwrap_or(text);
    text.trim_end_matches('\0')
}

/// 將偵測器給的標籤對應到可解碼的編碼；replacement 編碼無法還原內容，視為不支援
fn resolve_encoding(label: &str) -> Option<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes()).filter(|e| *e != encoding_rs::REPLACEMENT)
}

/// 讀取失敗對應到結果代碼；非預期的 IO 錯誤只跳過該檔案
fn report_read_failure(failure: ReadFailure, pair: &PathPair, log: &mut Diagnostics) -> ConversionOutcome {
    match failure {
        ReadFailure::TooLarge(length) => {
            log.error(format!(
                "file {} is too large ({} bytes).",
                pair.input.display(),
                length
            ));
            ConversionOutcome::FileTooLarge
        }
        ReadFailure::Incomplete { expected, read } => {
            log.error(format!(
                "could not completely read file {} ({} of {} bytes).",
                pair.input.display(),
                read,
                expected
            ));
            ConversionOutcome::IncompleteFileRead
        }
        ReadFailure::Io(e) => {
            log.error(format!("could not read file {}: {}", pair.input.display(), e));
            ConversionOutcome::Ok
        }
    }
}

fn read_input(path: &Path, max_file_size: u64) -> Result<Vec<u8>, ReadFailure> {
    let file = File::open(path).map_err(ReadFailure::Io)?;
    let length = file.metadata().map_err(ReadFailure::Io)?.len();
    read_exact_length(file, length, max_file_size)
}

/// 讀入恰好 `length` 位元組；讀到的比回報的長度少時為不完整讀取
fn read_exact_length<R: Read>(reader: R, length: u64, max_file_size: u64) -> Result<Vec<u8>, ReadFailure> {
    if length > max_file_size {
        return Err(ReadFailure::TooLarge(length));
    }

    let capacity = usize::try_from(length).map_err(|_| ReadFailure::TooLarge(length))?;
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(capacity)
        .map_err(|_| ReadFailure::TooLarge(length))?;

    reader
        .take(length)
        .read_to_end(&mut buffer)
        .map_err(ReadFailure::Io)?;

    if (buffer.len() as u64) < length {
        return Err(ReadFailure::Incomplete {
            expected: length,
            read: buffer.len(),
        });
    }
    Ok(buffer)
}

/// 寫出內容；失敗時刪除寫了一半的輸出並記錄錯誤，回傳是否成功
fn write_or_discard<W: Write>(
    writer: W,
    path: &Path,
    content: &str,
    add_bom: bool,
    log: &mut Diagnostics,
) -> bool {
    match write_content(writer, content, add_bom) {
        Ok(()) => true,
        Err(e) => {
            let _ = fs::remove_file(path);
            log.error(format!("could not write output file {}: {}", path.display(), e));
            false
        }
    }
}

fn write_content<W: Write>(mut writer: W, content: &str, add_bom: bool) -> io::Result<()> {
    if add_bom {
        writer.write_all(UTF8_BOM)?;
    }
    writer.write_all(content.as_bytes())?;
    writer.flush()
}
