// ============================================================
// Layer 3 — Dataset Splits
// ============================================================
// 3D-IQTT ships as three HDF5 files holding four splits:
//
//   Split            file    questions path        answers path
//   ─────────────────────────────────────────────────────────────
//   train-labeled    train   labeled/questions     labeled/answers
//   train-unlabeled  train   unlabeled/questions   -
//   test             test    questions             -
//   val              val     questions             answers
//
// A split is nothing more than a StoreConfig: which datasets
// to read inside the file and whether answers exist.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

// ─── StoreConfig ──────────────────────────────────────────────────────────────
/// Where a store finds its fields inside an HDF5 file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Human readable name, used in logs and preview titles
    pub name: String,

    /// Path of the [N, 4, H, W, 3] question dataset
    pub questions_path: String,

    /// Path of the [N] answer dataset, if the file has labels
    pub answers_path: Option<String>,
}

impl StoreConfig {
    /// An unlabeled layout reading only `questions_path`.
    pub fn new(name: impl Into<String>, questions_path: impl Into<String>) -> Self {
        Self {
            name:           name.into(),
            questions_path: questions_path.into(),
            answers_path:   None,
        }
    }

    pub fn with_answers(mut self, answers_path: impl Into<String>) -> Self {
        self.answers_path = Some(answers_path.into());
        self
    }

    pub fn is_labeled(&self) -> bool {
        self.answers_path.is_some()
    }
}

// ─── Split ────────────────────────────────────────────────────────────────────
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Split {
    TrainLabeled,
    TrainUnlabeled,
    Test,
    Val,
}

/// Which of the three shipped files a split lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFile {
    Train,
    Test,
    Val,
}

impl Split {
    pub const ALL: [Split; 4] = [
        Split::TrainLabeled,
        Split::TrainUnlabeled,
        Split::Test,
        Split::Val,
    ];

    /// Stable numeric identifier of the split.
    pub fn code(self) -> u8 {
        match self {
            Split::TrainLabeled   => 0,
            Split::TrainUnlabeled => 1,
            Split::Test           => 2,
            Split::Val            => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Split::TrainLabeled   => "train-labeled",
            Split::TrainUnlabeled => "train-unlabeled",
            Split::Test           => "test",
            Split::Val            => "val",
        }
    }

    pub fn source_file(self) -> SourceFile {
        match self {
            Split::TrainLabeled | Split::TrainUnlabeled => SourceFile::Train,
            Split::Test => SourceFile::Test,
            Split::Val  => SourceFile::Val,
        }
    }

    /// The field layout this split reads.
    pub fn config(self) -> StoreConfig {
        match self {
            Split::TrainLabeled => StoreConfig::new(self.label(), "labeled/questions")
                .with_answers("labeled/answers"),
            Split::TrainUnlabeled => StoreConfig::new(self.label(), "unlabeled/questions"),
            Split::Test => StoreConfig::new(self.label(), "questions"),
            Split::Val  => StoreConfig::new(self.label(), "questions").with_answers("answers"),
        }
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown split '{0}' (expected train-labeled, train-unlabeled, test or val)")]
pub struct UnknownSplit(pub String);

impl FromStr for Split {
    type Err = UnknownSplit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept the underscore spelling as well
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "train-labeled"   => Ok(Split::TrainLabeled),
            "train-unlabeled" => Ok(Split::TrainUnlabeled),
            "test"            => Ok(Split::Test),
            "val" | "validation" => Ok(Split::Val),
            _ => Err(UnknownSplit(s.to_string())),
        }
    }
}
