// ============================================================
// Layer 4 — 3D-IQTT Batcher
// ============================================================
// Implements Burn's Batcher trait to turn a Vec<Sample> into
// tensors on the target device.
//
// How batching works here:
//   Input:  N samples, each question [4, 3, H, W]
//   Output: questions [N, 4, 3, H, W]
//           answers   [N]            (only if every sample is labeled)
//
//   Pixels are flattened in logical order (which the
//   channels-first view already presents), then reshaped:
//   [s1_p1, s1_p2, ..., sN_pK] → [N, 4, 3, H, W]
//
// All samples of a split share one image size, so no padding is
// needed. Mixing image sizes in one batch is a caller bug and
// panics with both shapes in the message.

use burn::{
    data::dataloader::batcher::Batcher,
    prelude::*,
};

use crate::domain::sample::{Sample, COLOR_CHANNELS, IMAGES_PER_QUESTION};

// ─── IqttBatch ────────────────────────────────────────────────────────────────
#[derive(Debug, Clone)]
pub struct IqttBatch<B: Backend> {
    /// Pixel values 0..=255, shape [batch_size, 4, 3, H, W]
    pub questions: Tensor<B, 5, Int>,

    /// Correct candidate per sample, shape [batch_size]
    /// None when any sample in the batch is unlabeled
    pub answers: Option<Tensor<B, 1, Int>>,
}

// ─── IqttBatcher ──────────────────────────────────────────────────────────────
#[derive(Clone, Debug)]
pub struct IqttBatcher<B: Backend> {
    pub device: B::Device,
}

impl<B: Backend> IqttBatcher<B> {
    pub fn new(device: B::Device) -> Self {
        Self { device }
    }
}

impl<B: Backend> Batcher<Sample, IqttBatch<B>> for IqttBatcher<B> {
    fn batch(&self, items: Vec<Sample>) -> IqttBatch<B> {
        let batch_size = items.len();
        let [images, channels, height, width] = items
            .first()
            .map(|s| {
                let (images, channels, height, width) = s.question.dim();
                [images, channels, height, width]
            })
            .unwrap_or([IMAGES_PER_QUESTION, COLOR_CHANNELS, 0, 0]);

        if let Some((i, odd)) = items
            .iter()
            .enumerate()
            .find(|(_, s)| s.question.shape() != [images, channels, height, width])
        {
            panic!(
                "Cannot batch questions of different shapes: item 0 is {:?}, item {} is {:?}",
                [images, channels, height, width],
                i,
                odd.question.shape(),
            );
        }

        let pixels: Vec<i32> = items
            .iter()
            .flat_map(|s| s.question.iter().map(|&p| p as i32))
            .collect();

        let questions = Tensor::<B, 1, Int>::from_ints(pixels.as_slice(), &self.device)
            .reshape([batch_size, images, channels, height, width]);

        // Collecting into Option<Vec<_>> yields None as soon as one
        // sample has no label
        let labels: Option<Vec<i32>> = items
            .iter()
            .map(|s| s.correct_answer().map(|a| a as i32))
            .collect();

        if labels.is_none() && items.iter().any(Sample::is_labeled) {
            tracing::warn!("Batch mixes labeled and unlabeled samples; dropping answers");
        }

        let answers = labels.map(|labels| {
            Tensor::<B, 1, Int>::from_ints(labels.as_slice(), &self.device)
        });

        IqttBatch { questions, answers }
    }
}
