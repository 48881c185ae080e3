// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between an HDF5 file on disk and a batch of
// tensors on a Burn device.
//
// The pipeline flows in this order:
//
//   3diqtt-v2-*.h5
//       │
//       ▼
//   IndexedSampleStore → opens the file, reads one sample per index
//       │
//       ▼
//   layout             → channels-last → channels-first (no copy)
//       │
//       ▼
//   Dataset impl       → Burn's Dataset trait over the store
//       │
//       ▼
//   IqttBatcher        → stacks samples into tensor batches
//
// Reference: Burn Book §4 (Datasets and Dataloaders)

/// Random access to one split of an HDF5 file
pub mod store;

/// Axis reordering between the on-disk and tensor layouts
pub mod layout;

/// Implements Burn's Dataset trait for the store
pub mod dataset;

/// Implements Burn's Batcher trait to create tensor batches
pub mod batcher;
