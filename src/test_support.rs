// Synthetic 3D-IQTT files for unit tests.
//
// Pixel (n, j, y, x, c) holds (n + j + y + x + c) % 256, so any
// test can recompute what a given pixel should contain.

use std::path::{Path, PathBuf};

use hdf5::types::VarLenUnicode;
use ndarray::{arr1, Array1, Array5};

pub(crate) fn pattern_value(n: usize, j: usize, y: usize, x: usize, c: usize) -> u8 {
    ((n + j + y + x + c) % 256) as u8
}

pub(crate) fn pattern_questions(count: usize, height: usize, width: usize) -> Array5<u8> {
    Array5::from_shape_fn((count, 4, height, width, 3), |(n, j, y, x, c)| {
        pattern_value(n, j, y, x, c)
    })
}

/// Validation layout: root-level `questions` and `answers`.
pub(crate) fn write_val_file(dir: &Path, answers: &[i64], height: usize, width: usize) -> PathBuf {
    let path = dir.join("3diqtt-v2-val.h5");
    let file = hdf5::File::create(&path).unwrap();

    let questions = pattern_questions(answers.len(), height, width);
    file.new_dataset_builder().with_data(&questions).create("questions").unwrap();
    file.new_dataset_builder().with_data(&arr1(answers)).create("answers").unwrap();

    path
}

/// Test layout: root-level `questions` only.
pub(crate) fn write_test_file(dir: &Path, count: usize, height: usize, width: usize) -> PathBuf {
    let path = dir.join("3diqtt-v2-test.h5");
    let file = hdf5::File::create(&path).unwrap();

    let questions = pattern_questions(count, height, width);
    file.new_dataset_builder().with_data(&questions).create("questions").unwrap();

    path
}

/// Training layout: `labeled/{questions,answers}` and `unlabeled/questions`.
pub(crate) fn write_train_file(
    dir:             &Path,
    labeled_answers: &[i64],
    unlabeled_count: usize,
    height:          usize,
    width:           usize,
) -> PathBuf {
    let path = dir.join("3diqtt-v2-train.h5");
    let file = hdf5::File::create(&path).unwrap();

    let labeled = file.create_group("labeled").unwrap();
    let questions = pattern_questions(labeled_answers.len(), height, width);
    labeled.new_dataset_builder().with_data(&questions).create("questions").unwrap();
    labeled.new_dataset_builder().with_data(&arr1(labeled_answers)).create("answers").unwrap();

    let unlabeled = file.create_group("unlabeled").unwrap();
    let questions = pattern_questions(unlabeled_count, height, width);
    unlabeled.new_dataset_builder().with_data(&questions).create("questions").unwrap();

    path
}

/// Validation layout whose `answers` are strings, so every answer
/// read fails inside HDF5's type conversion.
pub(crate) fn write_val_file_with_text_answers(
    dir:    &Path,
    count:  usize,
    height: usize,
    width:  usize,
) -> PathBuf {
    let path = dir.join("3diqtt-v2-val.h5");
    let file = hdf5::File::create(&path).unwrap();

    let questions = pattern_questions(count, height, width);
    file.new_dataset_builder().with_data(&questions).create("questions").unwrap();

    let label: VarLenUnicode = "one".parse().unwrap();
    let answers = Array1::from_elem(count, label);
    file.new_dataset_builder().with_data(&answers).create("answers").unwrap();

    path
}
