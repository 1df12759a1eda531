//! File-type categories for the report breakdown.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Closed set of file-type categories.
///
/// Unknown or missing extensions fall into [`FileCategory::Other`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum FileCategory {
    Images,
    Videos,
    Audio,
    Documents,
    Spreadsheets,
    Presentations,
    Archives,
    Code,
    Other,
}

impl FileCategory {
    /// Map a file extension (case-insensitive, without the dot) to its
    /// category.
    pub fn from_extension(extension: Option<&str>) -> Self {
        let Some(ext) = extension else {
            return Self::Other;
        };
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" | "png" | "gif" | "bmp" | "webp" | "svg" | "heic" | "tif"
            | "tiff" | "ico" => Self::Images,
            "mp4" | "mov" | "avi" | "mkv" | "wmv" | "flv" | "webm" | "m4v" | "mpeg" => {
                Self::Videos
            }
            "mp3" | "wav" | "flac" | "aac" | "ogg" | "m4a" | "wma" | "opus" => Self::Audio,
            "pdf" | "doc" | "docx" | "txt" | "rtf" | "odt" | "md" | "epub" => Self::Documents,
            "xls" | "xlsx" | "csv" | "ods" | "tsv" => Self::Spreadsheets,
            "ppt" | "pptx" | "odp" | "key" => Self::Presentations,
            "zip" | "rar" | "7z" | "tar" | "gz" | "bz2" | "xz" | "zst" => Self::Archives,
            "rs" | "py" | "js" | "ts" | "java" | "c" | "cpp" | "h" | "hpp" | "go" | "rb"
            | "php" | "swift" | "kt" | "html" | "css" | "json" | "xml" | "yaml" | "yml"
            | "toml" | "sql" | "sh" => Self::Code,
            _ => Self::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_common_extensions() {
        assert_eq!(FileCategory::from_extension(Some("png")), FileCategory::Images);
        assert_eq!(FileCategory::from_extension(Some("mp4")), FileCategory::Videos);
        assert_eq!(FileCategory::from_extension(Some("flac")), FileCategory::Audio);
        assert_eq!(FileCategory::from_extension(Some("pdf")), FileCategory::Documents);
        assert_eq!(FileCategory::from_extension(Some("csv")), FileCategory::Spreadsheets);
        assert_eq!(FileCategory::from_extension(Some("pptx")), FileCategory::Presentations);
        assert_eq!(FileCategory::from_extension(Some("7z")), FileCategory::Archives);
        assert_eq!(FileCategory::from_extension(Some("rs")), FileCategory::Code);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(FileCategory::from_extension(Some("PNG")), FileCategory::Images);
        assert_eq!(FileCategory::from_extension(Some("Mp3")), FileCategory::Audio);
    }

    #[test]
    fn test_unknown_and_missing_fall_through() {
        assert_eq!(FileCategory::from_extension(Some("xyz")), FileCategory::Other);
        assert_eq!(FileCategory::from_extension(None), FileCategory::Other);
    }

    #[test]
    fn test_display_names_are_stable() {
        let names: Vec<String> = FileCategory::iter().map(|c| c.to_string()).collect();
        assert_eq!(names.len(), 9);
        assert!(names.contains(&"Images".to_string()));
        assert!(names.contains(&"Other".to_string()));
    }
}
