// ============================================================
// Layer 2 — ShowUseCase
// ============================================================
// For each requested split:
//
//   Step 1: Open the split's store          (Layer 4 - data)
//   Step 2: Pick an index (given or random)
//   Step 3: Read the sample                 (Layer 4 - data)
//   Step 4: Describe it, optionally write a
//           preview strip                   (Layer 6 - infra)
//
// The reports go back to the CLI, which does the printing.

use anyhow::{bail, Context, Result};
use rand::Rng;
use std::{fs, path::PathBuf};

use crate::data::store::IndexedSampleStore;
use crate::domain::{split::Split, traits::SampleSource};
use crate::infra::{
    files::DatasetFiles,
    preview::{describe, panel_title, render_strip, write_ppm},
};

#[derive(Debug, Clone)]
pub struct ShowConfig {
    pub files:   DatasetFiles,
    pub splits:  Vec<Split>,
    /// Fixed sample index; a random one per split when None
    pub index:   Option<usize>,
    /// Where to write `<split>-<index>.ppm` previews, if anywhere
    pub out_dir: Option<PathBuf>,
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self {
            files:   DatasetFiles::default(),
            splits:  Split::ALL.to_vec(),
            index:   None,
            out_dir: None,
        }
    }
}

/// What was shown for one split.
#[derive(Debug, Clone)]
pub struct ShowReport {
    pub split:   Split,
    pub len:     usize,
    pub index:   usize,
    pub answer:  Option<i64>,
    pub title:   String,
    pub preview: Option<PathBuf>,
}

pub struct ShowUseCase {
    config: ShowConfig,
}

impl ShowUseCase {
    pub fn new(config: ShowConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<Vec<ShowReport>> {
        if let Some(dir) = &self.config.out_dir {
            fs::create_dir_all(dir)
                .with_context(|| format!("Cannot create preview directory '{}'", dir.display()))?;
        }

        self.config
            .splits
            .iter()
            .map(|&split| {
                let path  = self.config.files.path_for(split);
                let store = IndexedSampleStore::for_split(split, &path)
                    .with_context(|| format!("Cannot open {} split", split))?;
                self.show(split, &store)
            })
            .collect()
    }

    /// Show one sample of an already opened source.
    pub fn show(&self, split: Split, source: &dyn SampleSource) -> Result<ShowReport> {
        let len = source.len();
        tracing::info!("=== {}: {} samples", source.name(), len);

        if source.is_empty() {
            bail!("The {} split has no samples", split);
        }

        let index  = self.config.index.unwrap_or_else(|| pick_random_index(len));
        let sample = source
            .sample(index)
            .with_context(|| format!("Cannot read sample {} of {}", index, split))?;
        let title  = describe(source.name(), index, &sample);

        let (height, width) = sample.image_size();
        for j in 0..sample.question.len_of(ndarray::Axis(0)) {
            tracing::debug!("  panel {}: {} ({}x{})", j, panel_title(j), height, width);
        }

        let preview = match &self.config.out_dir {
            Some(dir) => {
                let path = dir.join(format!("{}-{}.ppm", split.label(), index));
                write_ppm(&path, &render_strip(&sample))?;
                Some(path)
            }
            None => None,
        };

        Ok(ShowReport {
            split,
            len,
            index,
            answer: sample.correct_answer(),
            title,
            preview,
        })
    }
}

/// A uniformly random index in 0..len. `len` must be non-zero.
pub fn pick_random_index(len: usize) -> usize {
    rand::thread_rng().gen_range(0..len)
}
