// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses arguments with clap and hands the work to Layer 2.
//
//   show: print one sample per split, write preview strips
//   info: print each split's layout and size as JSON

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, InfoArgs, ShowArgs};

use crate::application::{info_use_case::InfoUseCase, show_use_case::ShowUseCase};
use crate::domain::split::Split;

#[derive(Parser, Debug)]
#[command(
    name = "threediqtt",
    version,
    about = "Inspect 3D-IQTT visual reasoning datasets stored as HDF5."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Show(args) => run_show(args),
            Commands::Info(args) => run_info(args),
        }
    }
}

fn run_show(args: ShowArgs) -> Result<()> {
    let reports = ShowUseCase::new(args.into_config()?).execute()?;

    for report in reports {
        println!("=== {} ({} samples)", report.split, report.len);
        println!("{}", report.title);
        if let Some(path) = report.preview {
            println!("Preview written to {}", path.display());
        }
    }
    Ok(())
}

fn run_info(args: InfoArgs) -> Result<()> {
    let splits = if args.splits.is_empty() {
        Split::ALL.to_vec()
    } else {
        args.splits
    };

    let info = InfoUseCase::new(args.files.resolve()?).execute(&splits)?;
    println!("{}", serde_json::to_string_pretty(&info)?);
    Ok(())
}
