use std::fs;
use std::path::Path;

use engine_logging::engine_debug;
use filler_core::WordEntry;

use crate::error::FillError;

/// Reads the whole word bank into memory.
pub fn load_entries(path: &Path) -> Result<Vec<WordEntry>, FillError> {
    let bytes = fs::read(path).map_err(|source| FillError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    engine_debug!("Read {} bytes from {:?}", bytes.len(), path);
    parse_entries(path, &bytes)
}

/// Parses a JSON array of `{word, category}` records; `path` is only used
/// for error context.
pub fn parse_entries(path: &Path, bytes: &[u8]) -> Result<Vec<WordEntry>, FillError> {
    let entries: Vec<WordEntry> =
        serde_json::from_slice(bytes).map_err(|source| FillError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    for (index, entry) in entries.iter().enumerate() {
        let field = if entry.word.is_empty() {
            "word"
        } else if entry.category.is_empty() {
            "category"
        } else {
            continue;
        };
        return Err(FillError::EmptyField {
            path: path.to_path_buf(),
            index,
            field,
        });
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extra_fields_are_ignored() {
        let raw = br#"[{"word":"Mar","category":"Naturaleza","id":7}]"#;
        let entries = parse_entries(Path::new("mem"), raw).unwrap();
        assert_eq!(entries, vec![WordEntry::new("Mar", "Naturaleza")]);
    }

    #[test]
    fn empty_category_is_reported_with_index() {
        let raw = br#"[{"word":"Mar","category":"Naturaleza"},{"word":"Sol","category":""}]"#;
        let err = parse_entries(Path::new("mem"), raw).unwrap_err();
        assert!(matches!(
            err,
            FillError::EmptyField {
                index: 1,
                field: "category",
                ..
            }
        ));
    }
}
