// ============================================================
// Layer 2 — InfoUseCase
// ============================================================
// Opens every split and reports where its data lives and how
// big it is. Nothing is read beyond HDF5 metadata.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::PathBuf;

use crate::data::store::IndexedSampleStore;
use crate::domain::split::Split;
use crate::infra::files::DatasetFiles;

#[derive(Debug, Clone, Serialize)]
pub struct SplitInfo {
    pub split:          Split,
    pub code:           u8,
    pub file:           PathBuf,
    pub questions_path: String,
    pub answers_path:   Option<String>,
    pub samples:        usize,
    /// [4, 3, H, W]
    pub question_shape: [usize; 4],
}

pub struct InfoUseCase {
    files: DatasetFiles,
}

impl InfoUseCase {
    pub fn new(files: DatasetFiles) -> Self {
        Self { files }
    }

    pub fn execute(&self, splits: &[Split]) -> Result<Vec<SplitInfo>> {
        splits.iter().map(|&split| self.inspect(split)).collect()
    }

    fn inspect(&self, split: Split) -> Result<SplitInfo> {
        let path  = self.files.path_for(split);
        let store = IndexedSampleStore::for_split(split, &path)
            .with_context(|| format!("Cannot open {} split", split))?;
        let config = store.config();

        Ok(SplitInfo {
            split,
            code:           split.code(),
            file:           store.path().to_path_buf(),
            questions_path: config.questions_path.clone(),
            answers_path:   config.answers_path.clone(),
            samples:        store.len(),
            question_shape: store.question_shape(),
        })
    }
}
