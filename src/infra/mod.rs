// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting helpers that don't belong to one layer:
//
//   paths.rs   "~" expansion for user supplied paths
//
//   files.rs   where the three dataset files live; loaded
//                from an optional JSON config
//
//   preview.rs renders a sample as a side-by-side strip
//                and writes it as a PPM image

/// Home directory expansion
pub mod paths;

/// Dataset file locations (JSON config)
pub mod files;

/// Sample preview strips
pub mod preview;
