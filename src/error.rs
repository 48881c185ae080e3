// ============================================================
// Store Errors
// ============================================================
// Every way opening or reading a 3D-IQTT file can fail.
//
// The variants fall into three families (see ErrorKind):
//
//   Configuration → the file or its layout is unusable; raised
//                   while constructing a store, so no partially
//                   built store ever exists
//   Range         → an index outside [0, len)
//   Io            → the HDF5 library failed while reading; the
//                   original hdf5::Error is kept as the source
//
// Nothing here is retried or downgraded. Callers decide.

use std::path::PathBuf;

/// Coarse classification of a [`StoreError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Range,
    Io,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("dataset file '{}' does not exist or is not a file", path.display())]
    NotFound { path: PathBuf },

    #[error("cannot open HDF5 file '{}'", path.display())]
    Open {
        path:   PathBuf,
        #[source]
        source: hdf5::Error,
    },

    #[error("field '{field}' is missing from the HDF5 file")]
    MissingField {
        field:  String,
        #[source]
        source: hdf5::Error,
    },

    #[error("field '{field}' has shape {actual:?}, expected {expected}")]
    BadShape {
        field:    String,
        actual:   Vec<usize>,
        expected: &'static str,
    },

    #[error("answers hold {answers} entries but questions hold {questions}")]
    LengthMismatch { questions: usize, answers: usize },

    #[error("index {index} is out of range for a store of {len} samples")]
    IndexOutOfRange { index: usize, len: usize },

    #[error(transparent)]
    Read(#[from] hdf5::Error),
}

impl StoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            StoreError::NotFound { .. }
            | StoreError::Open { .. }
            | StoreError::MissingField { .. }
            | StoreError::BadShape { .. }
            | StoreError::LengthMismatch { .. } => ErrorKind::Configuration,
            StoreError::IndexOutOfRange { .. } => ErrorKind::Range,
            StoreError::Read(_) => ErrorKind::Io,
        }
    }
}
