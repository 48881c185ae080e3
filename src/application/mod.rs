// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Workflows built on top of the data layer. No printing here
// (that's Layer 1) and no HDF5 calls (that's Layer 4).

// Show a sample of each split, optionally writing previews
pub mod show_use_case;

// Summarise the splits found on disk
pub mod info_use_case;
