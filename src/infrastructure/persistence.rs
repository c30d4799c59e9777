use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::domain::{LexiqueError, LexiqueResult, WordRecord};

pub struct FileRepository;

impl FileRepository {
    /// Writes `records` as a pretty-printed JSON array (2-space indent,
    /// UTF-8, non-ASCII characters kept as-is).
    pub fn save_records(records: &[WordRecord], path: &Path) -> LexiqueResult<()> {
        let file = File::create(path).map_err(|e| LexiqueError::file_write(path, e))?;
        let mut writer = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, records)
            .map_err(|e| LexiqueError::file_write(path, io::Error::from(e)))?;
        writer.flush().map_err(|e| LexiqueError::file_write(path, e))?;

        info!(path = %path.display(), records = records.len(), "lexicon written");
        Ok(())
    }

    pub fn load_records(path: &Path) -> LexiqueResult<Vec<WordRecord>> {
        let content = fs::read_to_string(path).map_err(|e| LexiqueError::file_access(path, e))?;
        serde_json::from_str::<Vec<WordRecord>>(&content).map_err(|e| LexiqueError::InvalidLexicon {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}
