// ============================================================
// Layer 4 — Indexed Sample Store
// ============================================================
// Random access to the samples of one 3D-IQTT split.
//
// Lifecycle:
//
//   IndexedSampleStore::open(path, config)
//       │  expand "~", check the file exists,
//       │  open it ONCE, look up the fields, validate shapes
//       ▼
//   store.get(i)   (any number of times)
//       │  1. read questions[i]          → [4, H, W, 3]
//       │  2. move channels first        → [4, 3, H, W]
//       │  3. read answers[i..i+1]       → [1]  (labeled only)
//       │  4. run the transform, if any
//       ▼
//   drop(store)    closes the HDF5 file
//
// The file stays open for the whole lifetime of the store.
// Opening it per access would be slower, and this store is a
// single-reader object: data loading in parallel needs one store
// per worker, each with its own handle.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use ndarray::{s, Array1, Array4};

use crate::data::layout::to_channels_first;
use crate::domain::{
    sample::{Sample, COLOR_CHANNELS, IMAGES_PER_QUESTION},
    split::{Split, StoreConfig},
    traits::{SampleSource, Transform},
};
use crate::error::StoreError;
use crate::infra::paths::expand_home;

pub struct IndexedSampleStore {
    config: StoreConfig,

    /// Resolved path of the open file
    path: PathBuf,

    /// Owned for the lifetime of the store, closed on drop
    _file: hdf5::File,

    questions: hdf5::Dataset,
    answers:   Option<hdf5::Dataset>,

    /// Leading-axis length of the questions field
    len: usize,

    /// [H, W] of every image
    image_size: [usize; 2],

    transform: Option<Transform>,
}

impl IndexedSampleStore {
    /// Open `path` and locate the fields described by `config`.
    ///
    /// Fails before any indexing can happen if the file is missing,
    /// cannot be opened, lacks a field, or has fields of the wrong
    /// shape or of mismatched lengths.
    pub fn open(path: impl AsRef<Path>, config: StoreConfig) -> Result<Self, StoreError> {
        let path = expand_home(path);
        if !path.is_file() {
            return Err(StoreError::NotFound { path });
        }

        let file = hdf5::File::open(&path)
            .map_err(|source| StoreError::Open { path: path.clone(), source })?;

        let questions = lookup(&file, &config.questions_path)?;
        let shape     = questions.shape();
        if shape.len() != 5
            || shape[1] != IMAGES_PER_QUESTION
            || shape[4] != COLOR_CHANNELS
        {
            return Err(StoreError::BadShape {
                field:    config.questions_path.clone(),
                actual:   shape,
                expected: "[N, 4, H, W, 3]",
            });
        }
        let len        = shape[0];
        let image_size = [shape[2], shape[3]];

        let answers = match &config.answers_path {
            Some(answers_path) => {
                let answers = lookup(&file, answers_path)?;
                let shape   = answers.shape();
                if shape.len() != 1 {
                    return Err(StoreError::BadShape {
                        field:    answers_path.clone(),
                        actual:   shape,
                        expected: "[N]",
                    });
                }
                // Indices must line up 1:1 with the questions
                if shape[0] != len {
                    return Err(StoreError::LengthMismatch {
                        questions: len,
                        answers:   shape[0],
                    });
                }
                Some(answers)
            }
            None => None,
        };

        tracing::info!(
            "Opened {} split from '{}': {} samples of {}x{} ({})",
            config.name,
            path.display(),
            len,
            image_size[0],
            image_size[1],
            if answers.is_some() { "labeled" } else { "unlabeled" },
        );

        Ok(Self {
            config,
            path,
            _file: file,
            questions,
            answers,
            len,
            image_size,
            transform: None,
        })
    }

    /// Open one of the four named splits.
    pub fn for_split(split: Split, path: impl AsRef<Path>) -> Result<Self, StoreError> {
        Self::open(path, split.config())
    }

    /// Apply `transform` to every sample returned by [`get`](Self::get).
    pub fn with_transform<F>(mut self, transform: F) -> Self
    where
        F: Fn(Sample) -> Sample + Send + Sync + 'static,
    {
        self.transform = Some(Box::new(transform));
        self
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Number of samples. Read from the file's metadata at open time.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_labeled(&self) -> bool {
        self.answers.is_some()
    }

    /// Shape of every question returned by `get`, before any transform.
    pub fn question_shape(&self) -> [usize; 4] {
        let [height, width] = self.image_size;
        [IMAGES_PER_QUESTION, COLOR_CHANNELS, height, width]
    }

    /// Read the sample at `index`.
    ///
    /// Nothing is cached: every call goes back to the file. HDF5
    /// read failures are returned as they are, without retrying.
    pub fn get(&self, index: usize) -> Result<Sample, StoreError> {
        if index >= self.len {
            return Err(StoreError::IndexOutOfRange { index, len: self.len });
        }

        let block: Array4<u8> = self.questions.read_slice(s![index, .., .., .., ..])?;
        let question = to_channels_first(block);

        // Reading a one-element range keeps the axis, so the label
        // arrives as [1] rather than as a bare scalar.
        let answer: Option<Array1<i64>> = match &self.answers {
            Some(answers) => Some(answers.read_slice_1d(index..index + 1)?),
            None => None,
        };

        let sample = Sample::new(question, answer);
        tracing::trace!("Read sample {} from {}", index, self.config.name);

        Ok(match &self.transform {
            Some(transform) => transform(sample),
            None => sample,
        })
    }
}

fn lookup(file: &hdf5::File, field: &str) -> Result<hdf5::Dataset, StoreError> {
    file.dataset(field).map_err(|source| StoreError::MissingField {
        field: field.to_string(),
        source,
    })
}

impl SampleSource for IndexedSampleStore {
    fn name(&self) -> &str {
        IndexedSampleStore::name(self)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn sample(&self, index: usize) -> Result<Sample, StoreError> {
        self.get(index)
    }
}

impl fmt::Debug for IndexedSampleStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexedSampleStore")
            .field("name", &self.config.name)
            .field("path", &self.path)
            .field("len", &self.len)
            .field("labeled", &self.is_labeled())
            .field("transform", &self.transform.is_some())
            .finish()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::test_support::{
        pattern_value, write_test_file, write_train_file, write_val_file,
        write_val_file_with_text_answers,
    };
    use tempfile::tempdir;

    #[test]
    fn test_val_scenario() {
        let dir  = tempdir().unwrap();
        let path = write_val_file(dir.path(), &[1, 2], 8, 8);

        let store = IndexedSampleStore::for_split(Split::Val, &path).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.name(), "val");
        assert_eq!(store.question_shape(), [4, 3, 8, 8]);

        let first = store.get(0).unwrap();
        assert_eq!(first.question.shape(), &[4, 3, 8, 8]);
        let answer = first.answer.unwrap();
        assert_eq!(answer.shape(), &[1]);
        assert_eq!(answer[0], 1);

        let second = store.get(1).unwrap();
        assert_eq!(second.correct_answer(), Some(2));

        let err = store.get(2).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
        assert!(matches!(err, StoreError::IndexOutOfRange { index: 2, len: 2 }));
    }

    #[test]
    fn test_pixels_are_moved_channels_first() {
        let dir   = tempdir().unwrap();
        let path  = write_val_file(dir.path(), &[0, 1, 2], 5, 6);
        let store = IndexedSampleStore::for_split(Split::Val, &path).unwrap();

        for n in 0..store.len() {
            let sample = store.get(n).unwrap();
            for ((j, c, y, x), &value) in sample.question.indexed_iter() {
                assert_eq!(value, pattern_value(n, j, y, x, c));
            }
        }
    }

    #[test]
    fn test_repeated_reads_are_identical() {
        let dir   = tempdir().unwrap();
        let path  = write_val_file(dir.path(), &[2, 0], 4, 4);
        let store = IndexedSampleStore::for_split(Split::Val, &path).unwrap();

        for i in 0..store.len() {
            assert_eq!(store.get(i).unwrap(), store.get(i).unwrap());
        }
    }

    #[test]
    fn test_train_file_splits() {
        let dir  = tempdir().unwrap();
        let path = write_train_file(dir.path(), &[0, 2, 1], 5, 4, 4);

        let labeled = IndexedSampleStore::for_split(Split::TrainLabeled, &path).unwrap();
        assert_eq!(labeled.len(), 3);
        assert!(labeled.is_labeled());
        for i in 0..labeled.len() {
            let answer = labeled.get(i).unwrap().answer.unwrap();
            assert_eq!(answer.len(), 1);
            assert!((0..=2).contains(&answer[0]));
        }
        assert_eq!(labeled.get(1).unwrap().correct_answer(), Some(2));

        let unlabeled = IndexedSampleStore::for_split(Split::TrainUnlabeled, &path).unwrap();
        assert_eq!(unlabeled.len(), 5);
        assert!(!unlabeled.is_labeled());
        for i in 0..unlabeled.len() {
            assert!(unlabeled.get(i).unwrap().answer.is_none());
        }
        assert!(unlabeled.get(5).is_err());
    }

    #[test]
    fn test_test_split_is_unlabeled() {
        let dir   = tempdir().unwrap();
        let path  = write_test_file(dir.path(), 3, 4, 4);
        let store = IndexedSampleStore::for_split(Split::Test, &path).unwrap();

        assert_eq!(store.len(), 3);
        assert_eq!(store.get(0).unwrap().answer, None);
    }

    #[test]
    fn test_missing_file_fails_at_open() {
        let dir = tempdir().unwrap();
        let err = IndexedSampleStore::for_split(Split::Val, dir.path().join("absent.h5"))
            .unwrap_err();

        assert!(matches!(err, StoreError::NotFound { .. }));
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_directory_is_not_a_dataset_file() {
        let dir = tempdir().unwrap();
        let err = IndexedSampleStore::for_split(Split::Val, dir.path()).unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[test]
    fn test_read_failure_is_surfaced() {
        let dir  = tempdir().unwrap();
        let path = write_val_file_with_text_answers(dir.path(), 2, 4, 4);

        // the layout is fine, so opening succeeds
        let store = IndexedSampleStore::for_split(Split::Val, &path).unwrap();
        assert_eq!(store.len(), 2);

        // but string labels cannot be converted to integers
        let err = store.get(0).unwrap_err();
        assert!(matches!(err, StoreError::Read(_)));
        assert_eq!(err.kind(), ErrorKind::Io);

        // still a range error past the end, not an I/O error
        assert_eq!(store.get(2).unwrap_err().kind(), ErrorKind::Range);
    }

    #[test]
    fn test_missing_field_is_reported() {
        let dir  = tempdir().unwrap();
        // a test file has no "answers" dataset
        let path = write_test_file(dir.path(), 2, 4, 4);

        let err = IndexedSampleStore::for_split(Split::Val, &path).unwrap_err();
        assert!(matches!(err, StoreError::MissingField { ref field, .. } if field == "answers"));
    }

    #[test]
    fn test_answer_length_must_match() {
        let dir  = tempdir().unwrap();
        let path = dir.path().join("broken.h5");
        {
            let file = hdf5::File::create(&path).unwrap();
            let questions = ndarray::Array5::<u8>::zeros((3, 4, 2, 2, 3));
            file.new_dataset_builder().with_data(&questions).create("questions").unwrap();
            let answers = ndarray::arr1(&[0i64, 1]);
            file.new_dataset_builder().with_data(&answers).create("answers").unwrap();
        }

        let err = IndexedSampleStore::for_split(Split::Val, &path).unwrap_err();
        assert!(matches!(err, StoreError::LengthMismatch { questions: 3, answers: 2 }));
    }

    #[test]
    fn test_question_shape_is_validated() {
        let dir  = tempdir().unwrap();
        let path = dir.path().join("flat.h5");
        {
            let file = hdf5::File::create(&path).unwrap();
            let questions = ndarray::Array3::<u8>::zeros((2, 8, 8));
            file.new_dataset_builder().with_data(&questions).create("questions").unwrap();
        }

        let err = IndexedSampleStore::for_split(Split::Test, &path).unwrap_err();
        assert!(matches!(err, StoreError::BadShape { .. }));
    }

    #[test]
    fn test_transform_result_is_returned() {
        let dir   = tempdir().unwrap();
        let path  = write_val_file(dir.path(), &[1, 2], 4, 4);
        let store = IndexedSampleStore::for_split(Split::Val, &path)
            .unwrap()
            .with_transform(|mut sample| {
                sample.question.fill(7);
                sample.answer = None;
                sample
            });

        let sample = store.get(0).unwrap();
        assert!(sample.question.iter().all(|&p| p == 7));
        assert!(sample.answer.is_none());
        // range checks happen before the transform
        assert!(store.get(2).is_err());
    }

    #[test]
    fn test_custom_config() {
        let dir    = tempdir().unwrap();
        let path   = write_train_file(dir.path(), &[1], 2, 4, 4);
        let config = StoreConfig::new("just-unlabeled", "unlabeled/questions");

        let store = IndexedSampleStore::open(&path, config).unwrap();
        assert_eq!(store.name(), "just-unlabeled");
        assert_eq!(SampleSource::len(&store), 2);
        assert!(store.sample(0).unwrap().answer.is_none());
    }
}
