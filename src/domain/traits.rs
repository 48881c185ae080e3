// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The application layer (previews, summaries) talks to
// SampleSource rather than to the HDF5-backed store, so it can
// be driven by anything that hands out samples by index.

use crate::domain::sample::Sample;
use crate::error::StoreError;

/// A user supplied function applied to every sample on access.
///
/// Runs synchronously in the caller's thread. Whatever it returns
/// is handed back to the caller unchanged.
pub type Transform = Box<dyn Fn(Sample) -> Sample + Send + Sync>;

// ─── SampleSource ─────────────────────────────────────────────────────────────
/// Random access to a fixed, indexable collection of samples.
pub trait SampleSource {
    /// Identifying label, e.g. "train-labeled"
    fn name(&self) -> &str;

    /// Number of samples; valid indices are 0..len()
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read the sample at `index`, failing with a range error
    /// when `index >= len()`.
    fn sample(&self, index: usize) -> Result<Sample, StoreError>;
}
