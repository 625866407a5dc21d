use std::path::{Path, PathBuf};

/// 輸入與輸出路徑對
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPair {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl PathPair {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        PathPair {
            input: input.into(),
            output: output.into(),
        }
    }

    /// 輸出檔所在目錄；相對檔名沒有上層目錄時視為目前目錄
    pub fn output_parent(&self) -> &Path {
        match self.output.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_file_name_has_current_dir_parent() {
        let pair = PathPair::new("in.txt", "out.txt");
        assert_eq!(pair.output_parent(), Path::new("."));
    }

    #[test]
    fn nested_output_uses_its_directory() {
        let pair = PathPair::new("in.txt", "some/dir/out.txt");
        assert_eq!(pair.output_parent(), Path::new("some/dir"));
    }
}
