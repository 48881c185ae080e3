// ============================================================
// Layer 6 — Dataset File Locations
// ============================================================
// 3D-IQTT is distributed as three files that usually sit in
// one directory:
//
//   <base_dir>/3diqtt-v2-train.h5   → train-labeled, train-unlabeled
//   <base_dir>/3diqtt-v2-test.h5    → test
//   <base_dir>/3diqtt-v2-val.h5     → val
//
// The locations can be kept in a small JSON file so they don't
// have to be repeated on every command line:
//
//   { "base_dir": "~/datasets/3diqtt" }
//
// Every key is optional; missing keys fall back to the defaults
// above.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::domain::split::{SourceFile, Split};
use crate::infra::paths::expand_home;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetFiles {
    pub base_dir:   PathBuf,
    pub train_file: String,
    pub test_file:  String,
    pub val_file:   String,
}

impl Default for DatasetFiles {
    fn default() -> Self {
        Self {
            base_dir:   PathBuf::from("."),
            train_file: "3diqtt-v2-train.h5".to_string(),
            test_file:  "3diqtt-v2-test.h5".to_string(),
            val_file:   "3diqtt-v2-val.h5".to_string(),
        }
    }
}

impl DatasetFiles {
    /// Read file locations from a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = expand_home(path);
        let json = fs::read_to_string(&path)
            .with_context(|| format!("Cannot read config '{}'", path.display()))?;
        let files: Self = serde_json::from_str(&json)
            .with_context(|| format!("Invalid dataset config '{}'", path.display()))?;

        tracing::debug!("Loaded dataset locations from {}: {:?}", path.display(), files);
        Ok(files)
    }

    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    /// Full path of the file holding `split`, with `~` expanded.
    pub fn path_for(&self, split: Split) -> PathBuf {
        let name = match split.source_file() {
            SourceFile::Train => &self.train_file,
            SourceFile::Test  => &self.test_file,
            SourceFile::Val   => &self.val_file,
        };
        expand_home(&self.base_dir).join(name)
    }
}
