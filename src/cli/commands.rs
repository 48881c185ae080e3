// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands, `show` and `info`, and their
// flags.

use anyhow::Result;
use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::application::show_use_case::ShowConfig;
use crate::domain::split::Split;
use crate::infra::files::DatasetFiles;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show one sample of each split, optionally writing previews
    Show(ShowArgs),

    /// Print the layout and size of each split as JSON
    Info(InfoArgs),
}

/// Where the dataset files live. Shared by both commands.
#[derive(Args, Debug, Clone)]
pub struct FileArgs {
    /// JSON file with base_dir / train_file / test_file / val_file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory holding the three .h5 files (overrides the config)
    #[arg(long)]
    pub base_dir: Option<PathBuf>,
}

impl FileArgs {
    pub fn resolve(&self) -> Result<DatasetFiles> {
        let files = match &self.config {
            Some(path) => DatasetFiles::load(path)?,
            None => DatasetFiles::default(),
        };
        Ok(match &self.base_dir {
            Some(dir) => files.with_base_dir(dir),
            None => files,
        })
    }
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    #[command(flatten)]
    pub files: FileArgs,

    /// Split to show; repeat for several. Defaults to all four
    #[arg(long = "split")]
    pub splits: Vec<Split>,

    /// Sample index to show instead of a random one
    #[arg(long)]
    pub index: Option<usize>,

    /// Write a <split>-<index>.ppm preview strip per split here
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
}

impl ShowArgs {
    pub fn into_config(self) -> Result<ShowConfig> {
        let splits = if self.splits.is_empty() {
            Split::ALL.to_vec()
        } else {
            self.splits
        };
        Ok(ShowConfig {
            files:   self.files.resolve()?,
            splits,
            index:   self.index,
            out_dir: self.out_dir,
        })
    }
}

#[derive(Args, Debug)]
pub struct InfoArgs {
    #[command(flatten)]
    pub files: FileArgs,

    /// Split to describe; repeat for several. Defaults to all four
    #[arg(long = "split")]
    pub splits: Vec<Split>,
}
