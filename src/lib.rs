//! Loads 3D-IQTT puzzles (a reference image, three candidates and an
//! optional label) from HDF5 files into channels-first samples that
//! Burn's data pipeline can consume.
//!
//! ```no_run
//! use threediqtt::{IndexedSampleStore, Split};
//!
//! let store  = IndexedSampleStore::for_split(Split::Val, "~/data/3diqtt-v2-val.h5")?;
//! let sample = store.get(0)?;
//! assert_eq!(sample.question.shape()[..2], [4, 3]);
//! # Ok::<(), threediqtt::StoreError>(())
//! ```

pub mod application;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod infra;

#[cfg(test)]
pub(crate) mod test_support;

pub use data::{
    batcher::{IqttBatch, IqttBatcher},
    store::IndexedSampleStore,
};
pub use domain::{
    sample::Sample,
    split::{Split, StoreConfig},
    traits::{SampleSource, Transform},
};
pub use error::{ErrorKind, StoreError};
