// ============================================================
// Layer 3 — Sample Domain Type
// ============================================================
// A single 3D-IQTT puzzle as handed to a model:
//
//   question: [4, 3, H, W]  u8 pixels, channels first
//             image 0 is the reference, images 1..=3 are
//             the candidates
//   answer:   [1]           index of the correct candidate
//                           (0, 1 or 2), or None when the
//                           split carries no labels
//
// The answer keeps its length-1 axis instead of being a bare
// scalar so batchers can stack it like any other tensor.

use ndarray::{Array1, Array4, ArrayView3, Axis};

/// Images per question: the reference plus three candidates.
pub const IMAGES_PER_QUESTION: usize = 4;

/// Colour channels per image (RGB).
pub const COLOR_CHANNELS: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// Shape [4, 3, H, W]
    pub question: Array4<u8>,

    /// Shape [1] when present. None means the split is unlabeled,
    /// which is not the same thing as a label of 0.
    pub answer: Option<Array1<i64>>,
}

impl Sample {
    pub fn new(question: Array4<u8>, answer: Option<Array1<i64>>) -> Self {
        Self { question, answer }
    }

    /// The correct candidate index, if this sample is labeled.
    pub fn correct_answer(&self) -> Option<i64> {
        self.answer.as_ref().and_then(|a| a.first().copied())
    }

    pub fn is_labeled(&self) -> bool {
        self.answer.is_some()
    }

    /// (height, width) of every image in the question
    pub fn image_size(&self) -> (usize, usize) {
        let (_, _, height, width) = self.question.dim();
        (height, width)
    }

    /// One channels-first image: 0 is the reference, 1..=3 the candidates.
    ///
    /// # Panics
    /// If `index` is not below the number of images in the question.
    pub fn image(&self, index: usize) -> ArrayView3<'_, u8> {
        self.question.index_axis(Axis(0), index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr1;

    #[test]
    fn test_unlabeled_sample_has_no_answer() {
        let sample = Sample::new(Array4::zeros((4, 3, 2, 2)), None);
        assert!(!sample.is_labeled());
        assert_eq!(sample.correct_answer(), None);
    }

    #[test]
    fn test_zero_label_is_still_a_label() {
        let sample = Sample::new(Array4::zeros((4, 3, 2, 2)), Some(arr1(&[0])));
        assert!(sample.is_labeled());
        assert_eq!(sample.correct_answer(), Some(0));
    }

    #[test]
    fn test_image_accessors() {
        let question = Array4::from_shape_fn((4, 3, 5, 7), |(j, _, _, _)| j as u8);
        let sample   = Sample::new(question, None);

        assert_eq!(sample.image_size(), (5, 7));
        assert_eq!(sample.image(2).dim(), (3, 5, 7));
        assert!(sample.image(2).iter().all(|&p| p == 2));
    }

    #[test]
    #[should_panic]
    fn test_image_past_the_last_candidate() {
        let sample = Sample::new(Array4::zeros((4, 3, 2, 2)), None);
        let _ = sample.image(4);
    }
}
