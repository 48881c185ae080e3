// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust types describing a 3D-IQTT puzzle and the four
// dataset splits that ship with it.
//
// Rules for this layer:
//   - NO Burn types and NO HDF5 calls
//   - Only structs, enums and traits
//
// The data layer (Layer 4) fills these types from disk.

/// One puzzle: a reference image, three candidates, maybe a label
pub mod sample;

/// The four dataset splits and the HDF5 paths each one reads
pub mod split;

/// Core abstractions shared by the data and application layers
pub mod traits;
