use std::fmt;

/// 單一檔案或目錄操作的結果，每次操作恰好產生一個
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConversionOutcome {
    Ok,
    InvalidInputDir,
    InvalidInputFile,
    InvalidOutputDir,
    InvalidOutputFile,
    NonEmptyOutputDir,
    OutputFileExists,
    IncompleteFileRead,
    FileTooLarge,
    FileIsEmpty,
}

impl ConversionOutcome {
    pub fn is_ok(&self) -> bool {
        *self == ConversionOutcome::Ok
    }
}

impl fmt::Display for ConversionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ConversionOutcome::Ok => "ok",
            ConversionOutcome::InvalidInputDir => "invalid input directory",
            ConversionOutcome::InvalidInputFile => "invalid input file",
            ConversionOutcome::InvalidOutputDir => "invalid output directory",
            ConversionOutcome::InvalidOutputFile => "invalid output file",
            ConversionOutcome::NonEmptyOutputDir => "output directory is not empty",
            ConversionOutcome::OutputFileExists => "output file already exists",
            ConversionOutcome::IncompleteFileRead => "incomplete file read",
            ConversionOutcome::FileTooLarge => "file too large",
            ConversionOutcome::FileIsEmpty => "file is empty",
        };
        f.write_str(text)
    }
}

/// 不會中斷批次轉換的警告，只會讓該項目被跳過
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConversionWarning {
    EmptyInputDir,
    EncodingNotDetected,
    EncodingNotSupported,
}

impl fmt::Display for ConversionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ConversionWarning::EmptyInputDir => "empty input directory",
            ConversionWarning::EncodingNotDetected => "encoding not detected",
            ConversionWarning::EncodingNotSupported => "encoding not supported",
        };
        f.write_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_ok_is_ok() {
        assert!(ConversionOutcome::Ok.is_ok());
        assert!(!ConversionOutcome::FileIsEmpty.is_ok());
        assert!(!ConversionOutcome::NonEmptyOutputDir.is_ok());
    }

    #[test]
    fn display_is_human_readable() {
        assert_eq!(ConversionOutcome::OutputFileExists.to_string(), "output file already exists");
        assert_eq!(ConversionWarning::EncodingNotDetected.to_string(), "encoding not detected");
    }
}
