// ============================================================
// Layer 6 — Sample Preview
// ============================================================
// A quick way to eyeball a puzzle: the four images are placed
// side by side in one RGB strip
//
//   ┌───────────┬──────────┬──────────┬──────────┐
//   │ reference │ answer 0 │ answer 1 │ answer 2 │
//   └───────────┴──────────┴──────────┴──────────┘
//
// and written as a binary PPM (P6), which every image viewer
// opens and which needs no encoder.

use anyhow::{ensure, Context, Result};
use ndarray::{s, Array3};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::data::layout::to_channels_last;
use crate::domain::sample::Sample;

/// Title for panel `j` of a question strip.
pub fn panel_title(j: usize) -> String {
    if j == 0 {
        "reference img".to_string()
    } else {
        format!("answer {}", j - 1)
    }
}

/// One-line description of a sample, "???" standing in for a missing label.
pub fn describe(split_name: &str, index: usize, sample: &Sample) -> String {
    let answer = sample
        .correct_answer()
        .map(|a| a.to_string())
        .unwrap_or_else(|| "???".to_string());
    format!(
        "Dataset type: {}. Dataset idx: {}. Correct answer: {}",
        split_name, index, answer
    )
}

/// Lay the images of `sample` out left to right as one
/// channels-last image of shape [H, 4 * W, C].
pub fn render_strip(sample: &Sample) -> Array3<u8> {
    let (images, channels, height, width) = sample.question.dim();
    let mut strip = Array3::<u8>::zeros((height, width * images, channels));

    for j in 0..images {
        strip
            .slice_mut(s![.., j * width..(j + 1) * width, ..])
            .assign(&to_channels_last(sample.image(j)));
    }
    strip
}

/// Write an [H, W, 3] image as a binary PPM.
pub fn write_ppm(path: &Path, image: &Array3<u8>) -> Result<()> {
    let (height, width, channels) = image.dim();
    ensure!(channels == 3, "PPM needs 3 channels, image has {}", channels);

    let file = File::create(path)
        .with_context(|| format!("Cannot create '{}'", path.display()))?;
    let mut out = BufWriter::new(file);

    write!(out, "P6\n{} {}\n255\n", width, height)?;
    // iter() walks row by row, pixel by pixel, channel by channel
    let bytes: Vec<u8> = image.iter().copied().collect();
    out.write_all(&bytes)?;
    out.flush()?;

    tracing::debug!("Wrote {}x{} preview to {}", width, height, path.display());
    Ok(())
}
